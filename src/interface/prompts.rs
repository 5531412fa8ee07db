use dialoguer::{Input, Select};

use crate::error::{PlanError, Result};
use crate::models::{ActivityLevel, BodyType, Gender, Goal, Profile};

fn prompt_number<T: std::str::FromStr>(prompt: &str, default: &str, label: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .parse()
        .map_err(|_| PlanError::InvalidProfile(format!("Invalid {label}")))
}

fn prompt_choice(prompt: &str, options: &[&str], default: usize) -> Result<String> {
    let selection = Select::new()
        .with_prompt(prompt)
        .items(options)
        .default(default)
        .interact()?;

    Ok(options[selection].to_string())
}

fn prompt_clock(prompt: &str, default: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Collect a full profile interactively.
///
/// Defaults mirror the documented sample profile; enum answers go through
/// the same fallback parsing the HTTP boundary uses.
pub fn collect_profile() -> Result<Profile> {
    let age: u32 = prompt_number("Age (years)", "28", "age")?;
    let gender = prompt_choice("Gender", &["female", "male"], 0)?;
    let weight: f64 = prompt_number("Weight (kg)", "68", "weight")?;
    let height: f64 = prompt_number("Height (cm)", "170", "height")?;
    let activity = prompt_choice(
        "Activity level",
        &["sedentary", "moderately_active", "active"],
        1,
    )?;
    let goal = prompt_choice(
        "Goal",
        &["weight_loss", "maintenance", "weight_gain"],
        1,
    )?;
    let body_type = prompt_choice(
        "Body type",
        &["ectomorph", "mesomorph", "endomorph"],
        0,
    )?;
    let wake = prompt_clock("Wake time (HH:MM)", "07:00")?;
    let sleep = prompt_clock("Sleep time (HH:MM)", "23:00")?;

    Ok(Profile {
        age,
        gender: Gender::from(gender),
        weight,
        height,
        activity: ActivityLevel::from(activity),
        goal: Goal::from(goal),
        wake,
        sleep,
        body_type: BodyType::from(body_type),
    })
}
