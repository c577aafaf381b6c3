//! Load and save the weekly schedule JSON file.
//! The file is the application's source of truth for opening hours; it is
//! validated fail-fast on load so the engine never sees malformed times.

use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::utils::path::expand_tilde;
use std::fs;

pub fn load_schedule(path: &str) -> AppResult<WeeklySchedule> {
    let file = expand_tilde(path);
    if !file.exists() {
        return Err(AppError::ScheduleLoad(format!(
            "schedule file not found: {} (run `praxishours init` first)",
            file.display()
        )));
    }

    let content = fs::read_to_string(&file)?;
    let schedule: WeeklySchedule = serde_json::from_str(&content)?;
    schedule.validate()?;
    Ok(schedule)
}

pub fn save_schedule(path: &str, schedule: &WeeklySchedule) -> AppResult<()> {
    schedule.validate()?;

    let file = expand_tilde(path);
    if let Some(parent) = file.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(schedule)?;
    fs::write(&file, json)?;
    Ok(())
}
