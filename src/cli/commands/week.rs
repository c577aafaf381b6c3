use crate::cli::commands::resolve_weekday;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::summary::{format_day_hours_24, week_hours};
use crate::errors::AppResult;
use crate::schedule::store::load_schedule;
use crate::utils::colors::colorize_hours;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

/// Handle the `week` command: seven-row table, current day marked.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Week { date } = cmd {
        let schedule = load_schedule(&cfg.schedule_file)?;
        let today = resolve_weekday(date)?;
        let use_24h = cfg.time_format == "24h";

        let rows = week_hours(&schedule, today)?;

        let mut table = Table::new(vec![Column::new("Day", 10), Column::new("Hours", 20)]);
        for row in rows {
            let hours = if use_24h {
                format_day_hours_24(schedule.day(row.day))
            } else {
                row.hours
            };
            let day_cell = if row.is_today {
                bold(row.day.display_name())
            } else {
                row.day.display_name().to_string()
            };
            let hours_cell = if row.is_today {
                format!("{} ◂ today", colorize_hours(&hours))
            } else {
                colorize_hours(&hours)
            };
            table.add_row(vec![day_cell, hours_cell]);
        }

        println!("{}", table.render());
    }
    Ok(())
}
