use assert_float_eq::assert_float_absolute_eq;

use savory_balance_rs::catalog::load_catalog;
use savory_balance_rs::models::{ActivityLevel, BodyType, Gender, Goal, Profile};
use savory_balance_rs::planner::{
    daily_calorie_target, generate_plan, macro_split, rank_catalog, TIMING_MEAL_COUNT,
};

fn shipped_catalog() -> savory_balance_rs::FoodCatalog {
    load_catalog(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/data/food_catalog.json"
    ))
    .expect("shipped catalog must load")
}

fn sample_profile() -> Profile {
    Profile {
        age: 28,
        gender: Gender::Female,
        weight: 68.0,
        height: 170.0,
        activity: ActivityLevel::ModeratelyActive,
        goal: Goal::Maintenance,
        wake: "07:00".to_string(),
        sleep: "23:00".to_string(),
        body_type: BodyType::Ectomorph,
    }
}

#[test]
fn test_shipped_catalog_loads_and_validates() {
    let catalog = shipped_catalog();
    assert!(catalog.len() >= 20);
    assert!(catalog.get("chicken breast").is_some());
}

#[test]
fn test_calorie_reference_values() {
    let mut profile = sample_profile();
    profile.age = 25;
    profile.weight = 70.0;
    profile.height = 175.0;
    profile.activity = ActivityLevel::Sedentary;

    profile.gender = Gender::Male;
    assert_eq!(daily_calorie_target(&profile), 2153);

    profile.gender = Gender::Female;
    assert_eq!(daily_calorie_target(&profile), 1809);
}

#[test]
fn test_macro_grams_match_ratios() {
    let split = macro_split(1809, Goal::Maintenance, BodyType::Ectomorph);
    assert_eq!(split.protein, (1809.0_f64 * 0.25 / 4.0).round() as u32);
    assert_eq!(split.carbs, (1809.0_f64 * 0.50 / 4.0).round() as u32);
    assert_eq!(split.fat, (1809.0_f64 * 0.25 / 9.0).round() as u32);

    let kcal = (split.protein * 4 + split.carbs * 4 + split.fat * 9) as f64;
    assert_float_absolute_eq!(kcal, 1809.0, 3.0);
}

#[test]
fn test_ranking_is_deterministic_over_shipped_catalog() {
    let catalog = shipped_catalog();
    for goal in [Goal::WeightLoss, Goal::Maintenance, Goal::WeightGain] {
        let a: Vec<&str> = rank_catalog(&catalog, goal)
            .iter()
            .map(|s| s.food.food.as_str())
            .collect();
        let b: Vec<&str> = rank_catalog(&catalog, goal)
            .iter()
            .map(|s| s.food.food.as_str())
            .collect();
        assert_eq!(a, b);
    }
}

#[test]
fn test_end_to_end_plan() {
    let catalog = shipped_catalog();
    let plan = generate_plan(&catalog, &sample_profile()).unwrap();

    assert_eq!(plan.status, "success");
    assert!(plan.calculated.daily_calories > 0);
    assert!(!plan.shopping_list.is_empty());
    assert_eq!(plan.meal_timing.len(), TIMING_MEAL_COUNT);

    // Each slot takes the top three suitable foods from this catalog.
    assert_eq!(plan.meal_breakdown.breakfast.len(), 3);
    assert_eq!(plan.meal_breakdown.lunch.len(), 3);
    assert_eq!(plan.meal_breakdown.dinner.len(), 3);
    assert_eq!(plan.meal_breakdown.snack.len(), 3);
    assert_eq!(plan.shopping_list.len(), 12);
}

#[test]
fn test_shopping_lines_honor_pack_sizes() {
    let catalog = shipped_catalog();
    let plan = generate_plan(&catalog, &sample_profile()).unwrap();

    for line in &plan.shopping_list {
        let pack = catalog
            .get(&line.food)
            .expect("shopping lines come from the catalog")
            .typical_pack;

        assert!(line.buy_typical >= line.buy_ai as f64, "{}", line.food);
        assert!(line.saved_grams >= 0.0, "{}", line.food);
        let packs = line.buy_typical / pack;
        assert_float_absolute_eq!(packs, packs.round(), 1e-9);
    }
}

#[test]
fn test_plan_is_deterministic_apart_from_timestamp() {
    let catalog = shipped_catalog();
    let a = generate_plan(&catalog, &sample_profile()).unwrap();
    let b = generate_plan(&catalog, &sample_profile()).unwrap();

    let foods_a: Vec<&str> = a.shopping_list.iter().map(|l| l.food.as_str()).collect();
    let foods_b: Vec<&str> = b.shopping_list.iter().map(|l| l.food.as_str()).collect();
    assert_eq!(foods_a, foods_b);
    assert_eq!(a.waste_reduction.total_waste_kg, b.waste_reduction.total_waste_kg);
    assert_eq!(a.calculated.daily_calories, b.calculated.daily_calories);
}

#[test]
fn test_goal_shifts_selection_toward_protein() {
    let catalog = shipped_catalog();
    let ranked = rank_catalog(&catalog, Goal::WeightGain);

    // Chicken breast (31g protein / 165 kcal) must outrank ground beef
    // under weight gain: higher protein density, lower waste.
    let pos = |name: &str| {
        ranked
            .iter()
            .position(|s| s.food.food == name)
            .expect(name)
    };
    assert!(pos("Chicken Breast") < pos("Ground Beef"));
}
