use crate::errors::{AppError, AppResult};
use crate::models::schedule::WeeklySchedule;
use crate::models::weekday::Weekday;
use crate::utils::time::{minutes_since_midnight, parse_time};
use chrono::{Datelike, NaiveDateTime};

/// True iff the practice is open at `now`. The opening boundary is
/// inclusive, the closing boundary exclusive: open at 09:00 sharp,
/// closed at 17:00 sharp for a 09:00-17:00 day.
pub fn is_open_now(schedule: &WeeklySchedule, now: NaiveDateTime) -> AppResult<bool> {
    let today = schedule.day(Weekday::from_chrono(now.weekday()));
    if today.closed {
        return Ok(false);
    }

    let open =
        parse_time(&today.open).ok_or_else(|| AppError::InvalidTime(today.open.clone()))?;
    let close =
        parse_time(&today.close).ok_or_else(|| AppError::InvalidTime(today.close.clone()))?;

    let current = minutes_since_midnight(now.time());
    Ok(minutes_since_midnight(open) <= current && current < minutes_since_midnight(close))
}
