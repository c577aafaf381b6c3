use crate::cli::commands::resolve_weekday;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::engine::next_opening::next_opening;
use crate::errors::AppResult;
use crate::schedule::store::load_schedule;
use crate::ui::messages;

/// Handle the `next` command: first upcoming day with open hours.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Next { date } = cmd {
        let schedule = load_schedule(&cfg.schedule_file)?;
        let today = resolve_weekday(date)?;

        match next_opening(&schedule, today)? {
            Some(next) => println!("Opens {} at {}", next.day_label, next.time),
            None => messages::warning("The practice does not open on any other day this week"),
        }
    }
    Ok(())
}
