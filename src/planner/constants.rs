//! Fixed heuristic weights and lookup tables for the planning pipeline.

/// Portion denominator: the calorie target is split across this many meals
/// when sizing portions. Deliberately independent of the four selection
/// slots and of TIMING_MEAL_COUNT; unifying them changes observed portion
/// sizes (flagged to product as a likely latent inconsistency).
pub const PORTION_MEAL_COUNT: u32 = 5;

/// Number of scheduled meals. Fixed at the length of MEAL_NAMES/MEAL_FOCUS,
/// so the tables are exhaustive by construction.
pub const TIMING_MEAL_COUNT: usize = 5;

/// Foods taken per meal slot from the global ranking.
pub const TOP_FOODS_PER_SLOT: usize = 3;

/// Maximum portions of a single food per meal.
pub const MAX_PORTIONS: f64 = 2.0;

/// Share of a meal's calories one food may cover when sizing portions.
pub const MEAL_CALORIE_SHARE: f64 = 0.6;

/// Grams in one reference portion.
pub const PORTION_GRAMS: u32 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring weights
// ─────────────────────────────────────────────────────────────────────────────

/// Weight on protein density (protein per calorie) for weight gain.
pub const PROTEIN_DENSITY_WEIGHT: f64 = 100.0;

/// Calorie-lightness score for weight loss: BASE − calories / DIVISOR.
pub const CAL_LIGHTNESS_BASE: f64 = 100.0;
pub const CAL_LIGHTNESS_DIVISOR: f64 = 10.0;

/// Flat bonus for grains and vegetables (fiber / complex carbs).
pub const PLANT_STAPLE_BONUS: f64 = 30.0;

/// Shelf-life score: days / DIVISOR, capped.
pub const SHELF_LIFE_DIVISOR: f64 = 10.0;
pub const SHELF_LIFE_SCORE_CAP: f64 = 20.0;

/// Weight on (1 − waste_factor).
pub const LOW_WASTE_WEIGHT: f64 = 50.0;

// ─────────────────────────────────────────────────────────────────────────────
// Shopping
// ─────────────────────────────────────────────────────────────────────────────

/// Minimum purchase amount in grams, applied before the waste adjustment.
pub const MIN_PURCHASE_GRAMS: u32 = 50;

/// Waste factor assumed for foods missing from the catalog.
pub const DEFAULT_WASTE_FACTOR: f64 = 0.2;

/// Pack size assumed for foods missing from the catalog: sold loose,
/// so rounding up adds no waste.
pub const DEFAULT_PACK_GRAMS: f64 = 1.0;

/// Rough $/kg cost tiers, first matching category tag wins.
pub const PREMIUM_COST_PER_KG: f64 = 25.0;
pub const ORGANIC_COST_PER_KG: f64 = 15.0;
pub const BASELINE_COST_PER_KG: f64 = 8.0;

/// Savings projections from one day's figure.
pub const WEEKLY_SAVINGS_MULT: f64 = 7.0;
pub const YEARLY_SAVINGS_MULT: f64 = 365.0;

// ─────────────────────────────────────────────────────────────────────────────
// Use-by urgency (inclusive day thresholds, high checked first)
// ─────────────────────────────────────────────────────────────────────────────

pub const URGENCY_HIGH_MAX_DAYS: u32 = 3;
pub const URGENCY_MEDIUM_MAX_DAYS: u32 = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Environmental equivalents per kg of avoided food waste
// ─────────────────────────────────────────────────────────────────────────────

pub const CO2_KG_PER_KG_FOOD: f64 = 2.5;
pub const WATER_L_PER_KG_FOOD: f64 = 1000.0;
pub const LAND_M2_PER_KG_FOOD: f64 = 2.5;
pub const TREES_PER_KG_FOOD: f64 = 0.5;

// ─────────────────────────────────────────────────────────────────────────────
// Meal timing
// ─────────────────────────────────────────────────────────────────────────────

/// Minutes between waking and the start of the eating window, and reserved
/// before sleep.
pub const WAKE_BUFFER_MINUTES: u32 = 60;

/// Meal names, in schedule order. Length must equal TIMING_MEAL_COUNT.
pub const MEAL_NAMES: [&str; TIMING_MEAL_COUNT] = [
    "Breakfast",
    "Morning Snack",
    "Lunch",
    "Afternoon Snack",
    "Dinner",
];

/// Focus text per scheduled meal, parallel to MEAL_NAMES.
pub const MEAL_FOCUS: [&str; TIMING_MEAL_COUNT] = [
    "Protein + Complex Carbs",
    "Fruits/Nuts",
    "Balanced Meal",
    "Protein Shake/Yogurt",
    "Light Protein + Veggies",
];

// ─────────────────────────────────────────────────────────────────────────────
// Insight thresholds
// ─────────────────────────────────────────────────────────────────────────────

/// Weekly waste (kg) above which the savings callouts fire.
pub const WASTE_CALLOUT_THRESHOLD_KG: f64 = 1.0;

/// Weekly waste (kg) above which bulk meal prep is recommended.
pub const BULK_PREP_THRESHOLD_KG: f64 = 0.5;

/// Weeks per year, used by the yearly figure inside the savings insight.
pub const INSIGHT_YEARLY_WEEKS: f64 = 52.0;
