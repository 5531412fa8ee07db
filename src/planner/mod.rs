pub mod assemble;
pub mod constants;
pub mod energy;
pub mod impact;
pub mod scoring;
pub mod shopping;
pub mod timing;

pub use assemble::generate_plan;
pub use constants::*;
pub use energy::{basal_metabolic_rate, daily_calorie_target, macro_ratios, macro_split, nutrition_target};
pub use impact::{build_insights, build_recommendations, environmental_impact, urgency_for, use_by_info};
pub use scoring::{rank_catalog, score_food, select_meals, MealSelection, ScoredFood};
pub use shopping::{cost_per_kg, resolve_shopping, ShoppingSummary};
pub use timing::{format_clock, generate_meal_timing, parse_clock};
