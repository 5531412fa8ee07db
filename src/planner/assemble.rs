use chrono::{Local, Utc};

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::models::{CalculatedSection, PlanResponse, Profile, WasteReduction};
use crate::planner::constants::{WEEKLY_SAVINGS_MULT, YEARLY_SAVINGS_MULT};
use crate::planner::energy::nutrition_target;
use crate::planner::impact::{build_insights, build_recommendations, environmental_impact};
use crate::planner::scoring::select_meals;
use crate::planner::shopping::resolve_shopping;
use crate::planner::timing::generate_meal_timing;

const BMR_EXPLANATION: &str = "Based on the Mifflin-St Jeor equation";

/// Run the full pipeline for one profile against an immutable catalog.
///
/// Profile and clock validation run first so client errors surface before
/// any selection work; everything downstream is deterministic given the
/// catalog, the profile, and today's date.
pub fn generate_plan(catalog: &FoodCatalog, profile: &Profile) -> Result<PlanResponse> {
    profile.validate()?;
    let meal_timing = generate_meal_timing(&profile.wake, &profile.sleep)?;

    let target = nutrition_target(profile);
    let selection = select_meals(catalog, target.calories, profile.goal);

    let today = Local::now().date_naive();
    let shopping = resolve_shopping(catalog, &selection.selected, today);

    let impact = environmental_impact(shopping.total_waste_kg);
    let insights = build_insights(
        profile.goal,
        shopping.total_waste_kg,
        shopping.total_savings,
        &impact,
    );
    let recommendations = build_recommendations(profile.goal, shopping.total_waste_kg);

    Ok(PlanResponse {
        status: "success",
        timestamp: Utc::now().to_rfc3339(),
        user_data: profile.clone(),
        calculated: CalculatedSection {
            daily_calories: target.calories,
            daily_macros: target.macros,
            bmr_explanation: BMR_EXPLANATION,
        },
        waste_reduction: WasteReduction {
            total_waste_kg: format!("{:.2}", shopping.total_waste_kg),
            total_savings: format!("{:.2}", shopping.total_savings),
            weekly_savings: format!("{:.2}", shopping.total_savings * WEEKLY_SAVINGS_MULT),
            yearly_savings: format!("{:.2}", shopping.total_savings * YEARLY_SAVINGS_MULT),
            total_cost: format!("{:.2}", shopping.total_cost),
        },
        environmental_impact: impact,
        shopping_list: shopping.lines,
        meal_timing,
        meal_breakdown: selection.breakdown,
        ai_insights: insights,
        recommendations,
    })
}
