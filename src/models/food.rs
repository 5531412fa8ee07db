use serde::{Deserialize, Serialize};

/// A catalog entry with nutritional and logistical attributes.
///
/// Nutritional values are per 100 g reference portion. `typical_pack` is the
/// retail unit size in grams; `waste_factor` is the expected fraction lost to
/// spoilage or trim before consumption.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItem {
    pub food: String,

    pub calories: f64,

    pub protein: f64,

    pub carbs: f64,

    pub fat: f64,

    pub category: Vec<String>,

    pub meal_time: Vec<String>,

    pub shelf_life_days: u32,

    pub storage: String,

    /// UI hint, passed through opaquely.
    pub color: String,

    pub waste_factor: f64,

    pub typical_pack: f64,
}

impl FoodItem {
    /// Canonical key for lookups (lowercase name).
    pub fn key(&self) -> String {
        self.food.to_lowercase()
    }

    /// Basic validation: finite non-negative values, waste factor in [0, 1],
    /// and a positive pack size (quantity rounding is undefined otherwise).
    pub fn is_valid(&self) -> bool {
        let nutrients = [self.calories, self.protein, self.carbs, self.fat];
        nutrients.iter().all(|v| v.is_finite() && *v >= 0.0)
            && (0.0..=1.0).contains(&self.waste_factor)
            && self.typical_pack.is_finite()
            && self.typical_pack > 0.0
    }

    /// Whether any category tag matches (case-sensitive, as tagged).
    pub fn has_category(&self, tag: &str) -> bool {
        self.category.iter().any(|c| c == tag)
    }

    /// Whether this food suits a meal slot, either directly or via "all".
    pub fn suits_slot(&self, slot: &str) -> bool {
        self.meal_time.iter().any(|m| m == slot || m == "all")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> FoodItem {
        FoodItem {
            food: "Brown Rice".to_string(),
            calories: 111.0,
            protein: 2.6,
            carbs: 23.0,
            fat: 0.9,
            category: vec!["Grains".to_string()],
            meal_time: vec!["lunch".to_string(), "dinner".to_string()],
            shelf_life_days: 180,
            storage: "Pantry".to_string(),
            color: "#D2B48C".to_string(),
            waste_factor: 0.02,
            typical_pack: 1000.0,
        }
    }

    #[test]
    fn test_is_valid() {
        assert!(sample_food().is_valid());

        let mut no_pack = sample_food();
        no_pack.typical_pack = 0.0;
        assert!(!no_pack.is_valid());

        let mut bad_waste = sample_food();
        bad_waste.waste_factor = 1.5;
        assert!(!bad_waste.is_valid());

        let mut negative = sample_food();
        negative.protein = -1.0;
        assert!(!negative.is_valid());
    }

    #[test]
    fn test_suits_slot() {
        let food = sample_food();
        assert!(food.suits_slot("lunch"));
        assert!(food.suits_slot("dinner"));
        assert!(!food.suits_slot("breakfast"));

        let mut anytime = sample_food();
        anytime.meal_time = vec!["all".to_string()];
        assert!(anytime.suits_slot("breakfast"));
        assert!(anytime.suits_slot("snack"));
    }

    #[test]
    fn test_has_category() {
        let food = sample_food();
        assert!(food.has_category("Grains"));
        assert!(!food.has_category("grains"));
        assert!(!food.has_category("Premium"));
    }

    #[test]
    fn test_key_lowercases() {
        assert_eq!(sample_food().key(), "brown rice");
    }
}
