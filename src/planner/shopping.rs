use chrono::NaiveDate;

use crate::catalog::FoodCatalog;
use crate::models::{SelectedMealItem, ShoppingLine};
use crate::planner::constants::*;
use crate::planner::impact::use_by_info;

/// Shopping lines plus the aggregate waste/cost figures.
#[derive(Debug, Clone)]
pub struct ShoppingSummary {
    pub lines: Vec<ShoppingLine>,
    pub total_waste_kg: f64,
    pub total_savings: f64,
    pub total_cost: f64,
}

/// Rough $/kg for a food: first matching tier wins, checked in order.
pub fn cost_per_kg(category: &[String]) -> f64 {
    if category.iter().any(|c| c == "Premium") {
        PREMIUM_COST_PER_KG
    } else if category.iter().any(|c| c == "Organic") {
        ORGANIC_COST_PER_KG
    } else {
        BASELINE_COST_PER_KG
    }
}

/// Convert selected meal items into purchasable quantities.
///
/// Waste factor and pack size come from the catalog index; the planned
/// amount is floored at MIN_PURCHASE_GRAMS, padded by the waste factor, then
/// rounded up to whole packs. The difference between the pack-rounded and
/// padded amounts is what a typical shopper over-buys.
pub fn resolve_shopping(
    catalog: &FoodCatalog,
    selected: &[SelectedMealItem],
    today: NaiveDate,
) -> ShoppingSummary {
    let mut lines = Vec::with_capacity(selected.len());
    let mut total_waste_kg = 0.0;
    let mut total_savings = 0.0;
    let mut total_cost = 0.0;

    for item in selected {
        let (waste_factor, pack) = match catalog.get(&item.food) {
            Some(food) => (food.waste_factor, food.typical_pack),
            // Items are catalog-sourced, so this is defensive only.
            None => (DEFAULT_WASTE_FACTOR, DEFAULT_PACK_GRAMS),
        };

        let ai_amount = item.grams.max(MIN_PURCHASE_GRAMS);
        let adjusted = (ai_amount as f64 * (1.0 + waste_factor)).round() as u32;
        let typical = (adjusted as f64 / pack).ceil() * pack;
        let waste_grams = typical - adjusted as f64;

        let tier = cost_per_kg(&item.category);
        let cost = adjusted as f64 / 1000.0 * tier;

        let use_by = use_by_info(item.shelf_life_days, today);

        total_waste_kg += waste_grams / 1000.0;
        total_savings += waste_grams / 1000.0 * tier;
        total_cost += cost;

        lines.push(ShoppingLine {
            food: item.food.clone(),
            buy_ai: adjusted,
            buy_typical: typical,
            saved_grams: waste_grams,
            shelf_life_days: item.shelf_life_days,
            use_by: use_by.date,
            formatted_date: use_by.formatted,
            urgency: use_by.urgency,
            urgency_color: use_by.urgency_color,
            urgency_icon: use_by.urgency_icon,
            storage: item.storage.clone(),
            category: item.category.clone(),
            color: item.color.clone(),
            cost: format!("{cost:.2}"),
            meal_time: item.meal_time,
        });
    }

    ShoppingSummary {
        lines,
        total_waste_kg,
        total_savings,
        total_cost,
    }
}
