pub mod check;
pub mod config;
pub mod day;
pub mod init;
pub mod next;
pub mod set;
pub mod status;
pub mod summary;
pub mod week;

use crate::errors::{AppError, AppResult};
use crate::models::weekday::Weekday;
use crate::utils::date;

/// Day of week of an optional `--date` argument, falling back to today.
pub(crate) fn resolve_weekday(arg: &Option<String>) -> AppResult<Weekday> {
    match arg {
        Some(s) => date::parse_date(s)
            .map(date::weekday_of)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(date::weekday_of(date::today())),
    }
}
