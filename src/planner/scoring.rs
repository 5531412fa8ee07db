use crate::catalog::FoodCatalog;
use crate::models::{FoodItem, Goal, MealBreakdown, MealSlot, SelectedMealItem};
use crate::planner::constants::*;

/// A catalog item with its desirability score for this request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredFood<'a> {
    pub food: &'a FoodItem,
    pub score: f64,
}

/// Everything the selector produces: the flat selection plus the per-slot
/// breakdown (same items, grouped).
#[derive(Debug, Clone)]
pub struct MealSelection {
    pub selected: Vec<SelectedMealItem>,
    pub breakdown: MealBreakdown,
}

/// Desirability score for one food under one goal. Higher is better.
///
/// Pure in (food, goal): identical catalogs always rank identically.
pub fn score_food(food: &FoodItem, goal: Goal) -> f64 {
    let mut score = 0.0;

    // Protein density matters when gaining; calorie lightness when losing.
    match goal {
        Goal::WeightGain => score += (food.protein / food.calories) * PROTEIN_DENSITY_WEIGHT,
        Goal::WeightLoss => score += CAL_LIGHTNESS_BASE - food.calories / CAL_LIGHTNESS_DIVISOR,
        Goal::Maintenance => {}
    }

    if food.has_category("Grains") || food.has_category("Vegetables") {
        score += PLANT_STAPLE_BONUS;
    }

    score += (food.shelf_life_days as f64 / SHELF_LIFE_DIVISOR).min(SHELF_LIFE_SCORE_CAP);
    score += (1.0 - food.waste_factor) * LOW_WASTE_WEIGHT;

    score
}

/// Score and rank the whole catalog, best first.
///
/// The sort is stable, so equal scores keep catalog order.
pub fn rank_catalog<'a>(catalog: &'a FoodCatalog, goal: Goal) -> Vec<ScoredFood<'a>> {
    let mut ranked: Vec<ScoredFood<'a>> = catalog
        .items()
        .iter()
        .map(|food| ScoredFood {
            food,
            score: score_food(food, goal),
        })
        .collect();

    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// Size a food's portions for one meal: at most MAX_PORTIONS, and no more
/// than MEAL_CALORIE_SHARE of the meal's calories.
fn portions_for(food: &FoodItem, calories_per_meal: f64) -> u32 {
    let by_share = (calories_per_meal * MEAL_CALORIE_SHARE / food.calories).floor();
    by_share.min(MAX_PORTIONS) as u32
}

fn meal_item(food: &FoodItem, portions: u32, slot: MealSlot) -> SelectedMealItem {
    let p = portions as f64;
    SelectedMealItem {
        food: food.food.clone(),
        portions,
        grams: portions * PORTION_GRAMS,
        calories: food.calories * p,
        protein: food.protein * p,
        carbs: food.carbs * p,
        fat: food.fat * p,
        shelf_life_days: food.shelf_life_days,
        storage: food.storage.clone(),
        category: food.category.clone(),
        color: food.color.clone(),
        meal_time: slot.as_str(),
    }
}

/// Pick the top foods for each meal slot from the global ranking.
///
/// Each slot filters the ranked list to foods that suit it and takes the
/// first TOP_FOODS_PER_SLOT, with no re-scoring per slot. Zero-portion foods
/// are kept as lines; the shopping floor still buys a minimum amount.
pub fn select_meals(catalog: &FoodCatalog, calorie_target: u32, goal: Goal) -> MealSelection {
    let ranked = rank_catalog(catalog, goal);
    let calories_per_meal = (calorie_target as f64 / PORTION_MEAL_COUNT as f64).round();

    let mut selected = Vec::new();
    let mut breakdown = MealBreakdown::default();

    for slot in MealSlot::ALL {
        let items: Vec<SelectedMealItem> = ranked
            .iter()
            .filter(|s| s.food.suits_slot(slot.as_str()))
            .take(TOP_FOODS_PER_SLOT)
            .map(|s| meal_item(s.food, portions_for(s.food, calories_per_meal), slot))
            .collect();

        selected.extend(items.iter().cloned());
        *breakdown.slot_mut(slot) = items;
    }

    MealSelection {
        selected,
        breakdown,
    }
}
