use chrono::{Days, NaiveDate};

use crate::models::{EnvironmentalImpact, Goal, Recommendation, Urgency, UseByInfo};
use crate::planner::constants::*;

/// Classify remaining shelf life, most urgent tier first.
pub fn urgency_for(shelf_life_days: u32) -> Urgency {
    if shelf_life_days <= URGENCY_HIGH_MAX_DAYS {
        Urgency::High
    } else if shelf_life_days <= URGENCY_MEDIUM_MAX_DAYS {
        Urgency::Medium
    } else {
        Urgency::Low
    }
}

fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "#EF4444",
        Urgency::Medium => "#F59E0B",
        Urgency::Low => "#10B981",
    }
}

fn urgency_icon(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::High => "\u{1F534}",   // red circle
        Urgency::Medium => "\u{1F7E1}", // yellow circle
        Urgency::Low => "\u{1F7E2}",    // green circle
    }
}

/// Use-by date and urgency tier for a shelf life, relative to `today`.
pub fn use_by_info(shelf_life_days: u32, today: NaiveDate) -> UseByInfo {
    let use_by = today
        .checked_add_days(Days::new(shelf_life_days as u64))
        .unwrap_or(today);
    let urgency = urgency_for(shelf_life_days);

    UseByInfo {
        date: use_by.format("%Y-%m-%d").to_string(),
        formatted: use_by.format("%a, %b %-d").to_string(),
        urgency,
        urgency_color: urgency_color(urgency),
        urgency_icon: urgency_icon(urgency),
        days_remaining: shelf_life_days,
    }
}

/// Linear environmental equivalents for avoided waste.
pub fn environmental_impact(waste_kg: f64) -> EnvironmentalImpact {
    EnvironmentalImpact {
        co2_saved: format!("{:.2}", waste_kg * CO2_KG_PER_KG_FOOD),
        water_saved: format!("{:.0}", waste_kg * WATER_L_PER_KG_FOOD),
        land_saved: format!("{:.2}", waste_kg * LAND_M2_PER_KG_FOOD),
        equivalent_trees: (waste_kg * TREES_PER_KG_FOOD).round() as i64,
    }
}

/// Build the insight strings from the aggregate totals.
///
/// Threshold and goal branches are fixed; the text is presentational.
pub fn build_insights(
    goal: Goal,
    waste_kg: f64,
    savings: f64,
    impact: &EnvironmentalImpact,
) -> Vec<String> {
    let mut insights = Vec::new();

    if waste_kg > WASTE_CALLOUT_THRESHOLD_KG {
        insights.push(format!(
            "Buying to plan prevents {waste_kg:.2} kg of food waste weekly"
        ));
        insights.push(format!(
            "That is ${savings:.2} saved weekly (${:.0} yearly)",
            savings * INSIGHT_YEARLY_WEEKS
        ));
    }

    insights.push(format!(
        "Environmental impact: {} kg CO2 and {} L of water saved weekly",
        impact.co2_saved, impact.water_saved
    ));

    match goal {
        Goal::WeightLoss => insights.push(
            "For weight loss: favor high-protein, high-fiber foods to stay full longer"
                .to_string(),
        ),
        Goal::WeightGain => insights.push(
            "For muscle gain: time protein intake around workouts for better absorption"
                .to_string(),
        ),
        Goal::Maintenance => {}
    }

    insights.push("Shop with exact quantities to avoid impulse buys and waste".to_string());
    insights
}

/// Build the recommendation cards for a goal and waste level.
pub fn build_recommendations(goal: Goal, waste_kg: f64) -> Vec<Recommendation> {
    let mut recs = vec![
        Recommendation {
            title: "Storage Optimization".to_string(),
            description: "Store perishables properly to extend shelf life".to_string(),
            tips: vec![
                "Use airtight containers".to_string(),
                "Keep veggies in crisper drawers".to_string(),
                "Freeze meats in portions".to_string(),
            ],
        },
        Recommendation {
            title: "Meal Prep Strategy".to_string(),
            description: "Based on your waste reduction potential".to_string(),
            tips: if waste_kg > BULK_PREP_THRESHOLD_KG {
                vec![
                    "Prep 3 days at a time".to_string(),
                    "Cook grains in bulk".to_string(),
                    "Portion proteins before freezing".to_string(),
                ]
            } else {
                vec![
                    "Daily fresh prep".to_string(),
                    "Cook as needed".to_string(),
                    "Use leftovers creatively".to_string(),
                ]
            },
        },
    ];

    if goal == Goal::WeightLoss {
        recs.push(Recommendation {
            title: "Weight Loss Focus".to_string(),
            description: "Nutrition strategies for sustainable weight loss".to_string(),
            tips: vec![
                "Drink water before meals".to_string(),
                "High-volume, low-calorie veggies".to_string(),
                "Mindful eating practices".to_string(),
            ],
        });
    }

    recs
}
