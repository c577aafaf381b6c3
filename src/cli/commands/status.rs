use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Engine;
use crate::errors::{AppError, AppResult};
use crate::models::status::OpenState;
use crate::schedule::store::load_schedule;
use crate::utils::date;
use crate::utils::time::parse_time;
use ansi_term::Colour;
use chrono::NaiveDateTime;

/// Handle the `status` command: compute the status banner for one instant.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { date, at, json } = cmd {
        let schedule = load_schedule(&cfg.schedule_file)?;
        let now = resolve_instant(date, at)?;
        let status = Engine::today_status(&schedule, now)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&status)?);
            return Ok(());
        }

        let colour = colour_for_state(&status.state);
        let banner = colour.bold().paint(status.display_text.as_str());
        if cfg.show_icons {
            println!("{} {}", status.icon, banner);
        } else {
            println!("{}", banner);
        }
    }
    Ok(())
}

fn colour_for_state(state: &OpenState) -> Colour {
    match state {
        OpenState::Open => Colour::Green,
        OpenState::OpensLater => Colour::Yellow,
        OpenState::Closed => Colour::Red,
    }
}

/// Pin the clock from `--date`/`--at`, falling back to the wall clock. The
/// engine itself never reads the system time.
fn resolve_instant(date: &Option<String>, at: &Option<String>) -> AppResult<NaiveDateTime> {
    let current = date::now();

    let day = match date {
        Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
        None => current.date(),
    };

    let time = match at {
        Some(s) => parse_time(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?,
        None => current.time(),
    };

    Ok(NaiveDateTime::new(day, time))
}
