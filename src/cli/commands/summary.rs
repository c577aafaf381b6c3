use crate::config::Config;
use crate::core::engine::summary::hours_summary;
use crate::errors::AppResult;
use crate::schedule::store::load_schedule;
use crate::ui::messages;

/// Handle the `summary` command: compact one-line weekly hours.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let schedule = load_schedule(&cfg.schedule_file)?;
    let summary = hours_summary(&schedule)?;

    if summary.is_empty() {
        messages::warning("No opening hours configured — closed all week");
    } else {
        println!("{}", summary);
    }
    Ok(())
}
