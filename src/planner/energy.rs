use crate::models::{BodyType, Gender, Goal, MacroRatios, MacroSplit, NutritionTarget, Profile};

/// Basal metabolic rate via Mifflin-St Jeor.
///
/// `10*weight + 6.25*height - 5*age`, plus 5 for male or minus 161
/// otherwise. The formula is binary; enum parsing already folded any other
/// gender input into Female.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Daily calorie target: BMR scaled by the activity multiplier, rounded.
pub fn daily_calorie_target(profile: &Profile) -> u32 {
    (basal_metabolic_rate(profile) * profile.activity.multiplier()).round() as u32
}

/// Macro ratios by goal and body type (protein/carbs/fat fractions).
///
/// Exhaustive over both enums; the maintenance/ectomorph row doubles as the
/// documented fallback because unknown inputs parse to those variants.
pub fn macro_ratios(goal: Goal, body_type: BodyType) -> MacroRatios {
    let (protein, carbs, fat) = match (goal, body_type) {
        (Goal::WeightLoss, BodyType::Ectomorph) => (0.30, 0.40, 0.30),
        (Goal::WeightLoss, BodyType::Mesomorph) => (0.35, 0.35, 0.30),
        (Goal::WeightLoss, BodyType::Endomorph) => (0.40, 0.30, 0.30),
        (Goal::Maintenance, BodyType::Ectomorph) => (0.25, 0.50, 0.25),
        (Goal::Maintenance, BodyType::Mesomorph) => (0.30, 0.40, 0.30),
        (Goal::Maintenance, BodyType::Endomorph) => (0.35, 0.35, 0.30),
        (Goal::WeightGain, BodyType::Ectomorph) => (0.25, 0.55, 0.20),
        (Goal::WeightGain, BodyType::Mesomorph) => (0.30, 0.50, 0.20),
        (Goal::WeightGain, BodyType::Endomorph) => (0.35, 0.45, 0.20),
    };
    MacroRatios {
        protein,
        carbs,
        fat,
    }
}

/// Convert a calorie target into macro grams.
///
/// Protein and carbs at 4 kcal/g, fat at 9 kcal/g, each rounded to the
/// nearest gram independently.
pub fn macro_split(calories: u32, goal: Goal, body_type: BodyType) -> MacroSplit {
    let ratios = macro_ratios(goal, body_type);
    let calories = calories as f64;

    MacroSplit {
        protein: (calories * ratios.protein / 4.0).round() as u32,
        carbs: (calories * ratios.carbs / 4.0).round() as u32,
        fat: (calories * ratios.fat / 9.0).round() as u32,
        ratios,
    }
}

/// Full nutrition target for a profile.
pub fn nutrition_target(profile: &Profile) -> NutritionTarget {
    let calories = daily_calorie_target(profile);
    NutritionTarget {
        calories,
        macros: macro_split(calories, profile.goal, profile.body_type),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ActivityLevel;

    fn profile(gender: Gender, activity: ActivityLevel) -> Profile {
        Profile {
            age: 25,
            gender,
            weight: 70.0,
            height: 175.0,
            activity,
            goal: Goal::Maintenance,
            wake: "07:00".to_string(),
            sleep: "23:00".to_string(),
            body_type: BodyType::Ectomorph,
        }
    }

    #[test]
    fn test_bmr_male_reference() {
        let p = profile(Gender::Male, ActivityLevel::Sedentary);
        // 10*70 + 6.25*175 - 5*25 + 5
        assert!((basal_metabolic_rate(&p) - 1793.75).abs() < 1e-9);
        assert_eq!(daily_calorie_target(&p), 2153);
    }

    #[test]
    fn test_bmr_female_reference() {
        let p = profile(Gender::Female, ActivityLevel::Sedentary);
        // 700 + 1093.75 - 125 - 161
        assert!((basal_metabolic_rate(&p) - 1507.75).abs() < 1e-9);
        assert_eq!(daily_calorie_target(&p), 1809);
    }

    #[test]
    fn test_maintenance_ectomorph_ratios() {
        let r = macro_ratios(Goal::Maintenance, BodyType::Ectomorph);
        assert_eq!(r.protein, 0.25);
        assert_eq!(r.carbs, 0.50);
        assert_eq!(r.fat, 0.25);
    }

    #[test]
    fn test_macro_split_reference() {
        let split = macro_split(2000, Goal::Maintenance, BodyType::Ectomorph);
        assert_eq!(split.protein, 125); // 2000*0.25/4
        assert_eq!(split.carbs, 250); // 2000*0.50/4
        assert_eq!(split.fat, 56); // 2000*0.25/9 = 55.6
    }

    #[test]
    fn test_macro_grams_sum_near_calories() {
        for calories in [1200, 1809, 2153, 2500, 3400] {
            for goal in [Goal::WeightLoss, Goal::Maintenance, Goal::WeightGain] {
                for body in [BodyType::Ectomorph, BodyType::Mesomorph, BodyType::Endomorph] {
                    let split = macro_split(calories, goal, body);
                    let kcal =
                        (split.protein * 4 + split.carbs * 4) as f64 + split.fat as f64 * 9.0;
                    // Worst case of three independent roundings:
                    // 0.5g*4 + 0.5g*4 + 0.5g*9.
                    assert!(
                        (kcal - calories as f64).abs() <= 8.5,
                        "{goal:?}/{body:?} at {calories}: {kcal}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_target_positive_for_valid_profiles() {
        for activity in [
            ActivityLevel::Sedentary,
            ActivityLevel::LightlyActive,
            ActivityLevel::ModeratelyActive,
            ActivityLevel::VeryActive,
            ActivityLevel::ExtraActive,
        ] {
            let target = nutrition_target(&profile(Gender::Female, activity));
            assert!(target.calories > 0);
        }
    }
}
