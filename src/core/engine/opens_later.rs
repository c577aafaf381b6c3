use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::models::weekday::Weekday;
use crate::utils::time::{minutes_since_midnight, parse_time, to_12_hour};
use chrono::{Datelike, NaiveDateTime};

/// 12-hour opening time when today has hours but has not opened yet.
/// None once the opening time has passed, including while open, and on
/// closed days.
pub fn opens_later(schedule: &WeeklySchedule, now: NaiveDateTime) -> AppResult<Option<String>> {
    let today = schedule.day(Weekday::from_chrono(now.weekday()));
    if today.closed {
        return Ok(None);
    }

    let open =
        parse_time(&today.open).ok_or_else(|| AppError::InvalidTime(today.open.clone()))?;

    if minutes_since_midnight(now.time()) < minutes_since_midnight(open) {
        Ok(Some(to_12_hour(&today.open)?))
    } else {
        Ok(None)
    }
}
