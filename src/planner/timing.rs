use crate::error::{PlanError, Result};
use crate::models::ScheduledMeal;
use crate::planner::constants::*;

/// Parse a strict 24-hour "HH:MM" string to minutes since midnight.
pub fn parse_clock(s: &str) -> Result<u32> {
    let invalid = || PlanError::InvalidTime(s.to_string());

    let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;

    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as zero-padded "HH:MM".
pub fn format_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Spread TIMING_MEAL_COUNT meals evenly across the eating window.
///
/// The window opens one hour after waking and closes one hour before sleep.
/// Wake and sleep are same-day clock times; an overnight sleep time (or a
/// window too short to space the meals) is rejected rather than silently
/// producing nonsense.
pub fn generate_meal_timing(wake: &str, sleep: &str) -> Result<Vec<ScheduledMeal>> {
    let wake_minutes = parse_clock(wake)?;
    let sleep_minutes = parse_clock(sleep)?;

    let window = sleep_minutes as i64 - wake_minutes as i64 - WAKE_BUFFER_MINUTES as i64;
    let interval = window / (TIMING_MEAL_COUNT as i64 + 1);
    if interval < 1 {
        return Err(PlanError::InvalidProfile(format!(
            "eating window between {wake} and {sleep} is too short to schedule meals"
        )));
    }

    let meals = (0..TIMING_MEAL_COUNT)
        .map(|i| {
            let minutes =
                wake_minutes as i64 + WAKE_BUFFER_MINUTES as i64 + interval * (i as i64 + 1);
            ScheduledMeal {
                meal: MEAL_NAMES[i],
                time: format_clock(minutes as u32),
                focus: MEAL_FOCUS[i],
                timing_note: if i == 0 {
                    "Within 1 hour of waking"
                } else if i == TIMING_MEAL_COUNT - 1 {
                    "3 hours before sleep"
                } else {
                    "Optimal spacing"
                },
            }
        })
        .collect();

    Ok(meals)
}
