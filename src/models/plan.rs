use serde::Serialize;

use crate::models::Profile;

/// Macro ratios as fractions of the calorie target.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Daily macro targets in grams, plus the ratios that produced them.
///
/// Protein and carbs convert at 4 kcal/g, fat at 9 kcal/g, each rounded
/// independently (rounding error is not redistributed).
#[derive(Debug, Clone, Serialize)]
pub struct MacroSplit {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
    pub ratios: MacroRatios,
}

/// Daily calorie target and macro split derived from a profile.
#[derive(Debug, Clone)]
pub struct NutritionTarget {
    pub calories: u32,
    pub macros: MacroSplit,
}

/// The four meal slots foods are selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    /// Selection order is fixed.
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
            MealSlot::Snack => "snack",
        }
    }
}

/// One food chosen for one meal slot, with portion-scaled nutrition.
///
/// A zero-portion item is still a real line: the shopping resolver's
/// purchase floor gives it a nonzero quantity.
#[derive(Debug, Clone, Serialize)]
pub struct SelectedMealItem {
    pub food: String,
    pub portions: u32,
    pub grams: u32,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub shelf_life_days: u32,
    pub storage: String,
    pub category: Vec<String>,
    pub color: String,
    pub meal_time: &'static str,
}

/// Selected items grouped by slot, in selection order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MealBreakdown {
    pub breakfast: Vec<SelectedMealItem>,
    pub lunch: Vec<SelectedMealItem>,
    pub dinner: Vec<SelectedMealItem>,
    pub snack: Vec<SelectedMealItem>,
}

impl MealBreakdown {
    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<SelectedMealItem> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snack,
        }
    }
}

/// Remaining-shelf-life tiers, most urgent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Medium => "medium",
            Urgency::Low => "low",
        }
    }
}

/// Use-by date with its urgency tier and display hints.
#[derive(Debug, Clone, Serialize)]
pub struct UseByInfo {
    pub date: String,
    pub formatted: String,
    pub urgency: Urgency,
    pub urgency_color: &'static str,
    pub urgency_icon: &'static str,
    pub days_remaining: u32,
}

/// One purchasable line of the shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct ShoppingLine {
    pub food: String,
    /// Grams to buy after the waste-factor adjustment.
    pub buy_ai: u32,
    /// Grams a typical shopper buys: `buy_ai` rounded up to whole packs.
    pub buy_typical: f64,
    pub saved_grams: f64,
    pub shelf_life_days: u32,
    pub use_by: String,
    pub formatted_date: String,
    pub urgency: Urgency,
    pub urgency_color: &'static str,
    pub urgency_icon: &'static str,
    pub storage: String,
    pub category: Vec<String>,
    pub color: String,
    pub cost: String,
    pub meal_time: &'static str,
}

/// Aggregate waste figures, serialized as 2-decimal strings.
#[derive(Debug, Clone, Serialize)]
pub struct WasteReduction {
    pub total_waste_kg: String,
    pub total_savings: String,
    pub weekly_savings: String,
    pub yearly_savings: String,
    pub total_cost: String,
}

/// Linear environmental-equivalent figures for avoided waste.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentalImpact {
    pub co2_saved: String,
    pub water_saved: String,
    pub land_saved: String,
    pub equivalent_trees: i64,
}

/// One entry of the meal schedule.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledMeal {
    pub meal: &'static str,
    pub time: String,
    pub focus: &'static str,
    pub timing_note: &'static str,
}

/// A titled recommendation card with actionable tips.
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub tips: Vec<String>,
}

/// Calorie target, macro split, and the formula note shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct CalculatedSection {
    pub daily_calories: u32,
    pub daily_macros: MacroSplit,
    pub bmr_explanation: &'static str,
}

/// The complete plan returned for one request.
#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub user_data: Profile,
    pub calculated: CalculatedSection,
    pub waste_reduction: WasteReduction,
    pub environmental_impact: EnvironmentalImpact,
    pub shopping_list: Vec<ShoppingLine>,
    pub meal_timing: Vec<ScheduledMeal>,
    pub meal_breakdown: MealBreakdown,
    pub ai_insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}
