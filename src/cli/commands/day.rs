use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::summary::{format_day_hours, format_day_hours_24};
use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::schedule::store::load_schedule;
use crate::utils::formatting::bold;

/// Handle the `day` command: one day's hours, verbatim from the schedule.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day { day } = cmd {
        let weekday =
            Weekday::wd_from_str(day).ok_or_else(|| AppError::InvalidDay(day.clone()))?;
        let schedule = load_schedule(&cfg.schedule_file)?;
        let hours = schedule.day(weekday);

        let text = if cfg.time_format == "24h" {
            format_day_hours_24(hours)
        } else {
            format_day_hours(hours)?
        };

        println!("{}: {}", bold(weekday.display_name()), text);
    }
    Ok(())
}
