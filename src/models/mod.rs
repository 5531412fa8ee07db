mod food;
mod plan;
mod profile;

pub use food::FoodItem;
pub use plan::{
    CalculatedSection, EnvironmentalImpact, MacroRatios, MacroSplit, MealBreakdown, MealSlot,
    NutritionTarget, PlanResponse, Recommendation, ScheduledMeal, SelectedMealItem, ShoppingLine,
    Urgency, UseByInfo, WasteReduction,
};
pub use profile::{ActivityLevel, BodyType, Gender, Goal, Profile};
