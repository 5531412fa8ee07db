use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Gender as used by the BMR formula.
///
/// The formula is binary; any input other than "male" resolves to the female
/// constant, matching observed behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    Male,
    Female,
}

impl From<String> for Gender {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

/// Activity level keyed to the TDEE multiplier table.
///
/// Clients speak a three-term vocabulary (sedentary / moderately_active /
/// active); the table itself has five levels. Only the three external terms
/// map specially, everything else falls back to ModeratelyActive. The
/// LightlyActive and ExtraActive rows are kept so the table stays complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// TDEE multiplier for this level.
    pub fn multiplier(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => ActivityLevel::Sedentary,
            "moderately_active" => ActivityLevel::ModeratelyActive,
            "active" => ActivityLevel::VeryActive,
            _ => ActivityLevel::ModeratelyActive,
        }
    }
}

/// Nutrition goal. Unknown values resolve to Maintenance, which carries no
/// goal-specific score bonus or messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Goal {
    WeightLoss,
    Maintenance,
    WeightGain,
}

impl From<String> for Goal {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "weight_loss" => Goal::WeightLoss,
            "weight_gain" => Goal::WeightGain,
            _ => Goal::Maintenance,
        }
    }
}

/// Body type used by the macro-ratio table. Optional in the profile;
/// defaults to Ectomorph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum BodyType {
    #[default]
    Ectomorph,
    Mesomorph,
    Endomorph,
}

impl From<String> for BodyType {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "mesomorph" => BodyType::Mesomorph,
            "endomorph" => BodyType::Endomorph,
            _ => BodyType::Ectomorph,
        }
    }
}

/// Per-request user profile.
///
/// Wake and sleep are same-day 24-hour "HH:MM" clock strings; sleep must be
/// later than wake (no overnight wrap).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub age: u32,
    pub gender: Gender,
    pub weight: f64,
    pub height: f64,
    pub activity: ActivityLevel,
    pub goal: Goal,
    pub wake: String,
    pub sleep: String,
    #[serde(default)]
    pub body_type: BodyType,
}

impl Profile {
    /// Validate numeric ranges. Enum fields cannot be invalid (unknown
    /// strings already resolved to fallbacks); clock strings are checked by
    /// the timing generator.
    pub fn validate(&self) -> Result<()> {
        if !(15..=100).contains(&self.age) {
            return Err(PlanError::InvalidProfile(format!(
                "age must be between 15 and 100, got {}",
                self.age
            )));
        }
        if !self.weight.is_finite() || !(20.0..=400.0).contains(&self.weight) {
            return Err(PlanError::InvalidProfile(format!(
                "weight must be between 20 and 400 kg, got {}",
                self.weight
            )));
        }
        if !self.height.is_finite() || !(100.0..=250.0).contains(&self.height) {
            return Err(PlanError::InvalidProfile(format!(
                "height must be between 100 and 250 cm, got {}",
                self.height
            )));
        }
        Ok(())
    }
}
