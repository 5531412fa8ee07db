use crate::models::{FoodItem, PlanResponse};

/// Display a generated plan in a formatted terminal layout.
pub fn display_plan(plan: &PlanResponse) {
    println!();
    println!("=== Daily Nutrition Plan ===");
    println!();
    println!(
        "Calories: {} kcal | Protein {}g / Carbs {}g / Fat {}g",
        plan.calculated.daily_calories,
        plan.calculated.daily_macros.protein,
        plan.calculated.daily_macros.carbs,
        plan.calculated.daily_macros.fat,
    );
    println!("({})", plan.calculated.bmr_explanation);

    println!();
    println!("--- Meal Schedule ---");
    let max_meal_len = plan
        .meal_timing
        .iter()
        .map(|m| m.meal.len())
        .max()
        .unwrap_or(10);
    for meal in &plan.meal_timing {
        println!(
            "  {:<width$}  {}  {}  ({})",
            meal.meal,
            meal.time,
            meal.focus,
            meal.timing_note,
            width = max_meal_len
        );
    }

    println!();
    println!("--- Shopping List ---");
    let max_name_len = plan
        .shopping_list
        .iter()
        .map(|l| l.food.len())
        .max()
        .unwrap_or(10);
    for (i, line) in plan.shopping_list.iter().enumerate() {
        println!(
            "{:>3}. {:<width$} - buy {:>5}g (typical {:>6}g, saves {:>4}g) | use by {} [{}] | ${}",
            i + 1,
            line.food,
            line.buy_ai,
            line.buy_typical,
            line.saved_grams,
            line.use_by,
            line.urgency.as_str(),
            line.cost,
            width = max_name_len
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Total cost: ${}", plan.waste_reduction.total_cost);
    println!(
        "Waste prevented: {} kg (${}/week, ${}/year)",
        plan.waste_reduction.total_waste_kg,
        plan.waste_reduction.weekly_savings,
        plan.waste_reduction.yearly_savings,
    );
    println!(
        "Environmental: {} kg CO2, {} L water, {} m2 land",
        plan.environmental_impact.co2_saved,
        plan.environmental_impact.water_saved,
        plan.environmental_impact.land_saved,
    );

    println!();
    println!("--- Insights ---");
    for insight in &plan.ai_insights {
        println!("  - {insight}");
    }

    for rec in &plan.recommendations {
        println!();
        println!("{}: {}", rec.title, rec.description);
        for tip in &rec.tips {
            println!("  * {tip}");
        }
    }
    println!();
}

/// Display a simple list of catalog foods with their details.
pub fn display_catalog(foods: &[FoodItem], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {} - {} cal, P:{} C:{} F:{} | shelf {}d, waste {:.0}%, pack {}g | {}",
            food.food,
            food.calories,
            food.protein,
            food.carbs,
            food.fat,
            food.shelf_life_days,
            food.waste_factor * 100.0,
            food.typical_pack,
            food.meal_time.join("/"),
        );
    }

    println!();
}
