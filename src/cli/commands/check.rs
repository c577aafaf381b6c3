use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::models::weekday::Weekday;
use crate::ui::messages;
use crate::utils::formatting::pad_right;
use crate::utils::path::expand_tilde;
use std::fs;

/// Handle the `check` command: validate the schedule file day by day.
///
/// Unlike `load_schedule`, this does not stop at the first problem; every
/// broken day is reported before the command fails.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let path = expand_tilde(&cfg.schedule_file);
    if !path.exists() {
        return Err(AppError::ScheduleLoad(format!(
            "schedule file not found: {} (run `praxishours init` first)",
            path.display()
        )));
    }

    let content = fs::read_to_string(&path)?;
    let schedule: WeeklySchedule = serde_json::from_str(&content)?;

    let mut problems = 0;
    for day in Weekday::MONDAY_FIRST {
        match schedule.day(day).validate() {
            Ok(()) => {}
            Err(e) => {
                messages::error(format!("{} {}", pad_right(day.wd_as_str(), 9), e));
                problems += 1;
            }
        }
    }

    if problems == 0 {
        messages::success(format!("Schedule OK: {}", path.display()));
        Ok(())
    } else {
        Err(AppError::InvalidSchedule(format!(
            "{} day(s) with problems in {}",
            problems,
            path.display()
        )))
    }
}
