use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::summary::format_day_hours;
use crate::errors::{AppError, AppResult};
use crate::models::day_hours::DayHours;
use crate::models::weekday::Weekday;
use crate::schedule::store::{load_schedule, save_schedule};
use crate::ui::messages;

/// Handle the `set` command: replace one day's hours and save the schedule.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        day,
        open,
        close,
        closed,
    } = cmd
    {
        let weekday =
            Weekday::wd_from_str(day).ok_or_else(|| AppError::InvalidDay(day.clone()))?;

        let hours = if *closed {
            DayHours::closed_all_day()
        } else {
            match (open, close) {
                // Validation happens in the constructor, before anything is written.
                (Some(o), Some(c)) => DayHours::open_at(o, c)?,
                _ => {
                    return Err(AppError::InvalidSchedule(
                        "both --open and --close are required unless --closed is given".to_string(),
                    ));
                }
            }
        };

        let mut schedule = load_schedule(&cfg.schedule_file)?;
        *schedule.day_mut(weekday) = hours;
        save_schedule(&cfg.schedule_file, &schedule)?;

        messages::success(format!(
            "Updated {}: {}",
            weekday.display_name(),
            format_day_hours(schedule.day(weekday))?
        ));
    }
    Ok(())
}
