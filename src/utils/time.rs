//! Time utilities: parsing HH:MM, 12/24-hour conversion, minute arithmetic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Strict HH:MM check: two digits each, 00-23 hours, 00-59 minutes.
pub fn is_valid_time_format(t: &str) -> bool {
    let re = regex::Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").unwrap();
    re.is_match(t)
}

pub fn minutes_since_midnight(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Convert a 24-hour "HH:MM" string to 12-hour form.
///
/// "13:05" -> "1:05 PM", "00:00" -> "12:00 AM", "12:00" -> "12:00 PM".
pub fn to_12_hour(t: &str) -> AppResult<String> {
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    let (hour, meridiem) = match parsed.hour() {
        0 => (12, "AM"),
        h @ 1..=11 => (h, "AM"),
        12 => (12, "PM"),
        h => (h - 12, "PM"),
    };
    Ok(format!("{}:{:02} {}", hour, parsed.minute(), meridiem))
}

/// Convert a 12-hour "H:MM AM/PM" string back to 24-hour "HH:MM".
pub fn to_24_hour(t: &str) -> AppResult<String> {
    let normalized = t.trim().to_uppercase();
    NaiveTime::parse_from_str(&normalized, "%I:%M %p")
        .map(|p| p.format("%H:%M").to_string())
        .map_err(|_| AppError::InvalidTime(t.to_string()))
}

/// Normalize any accepted time string (24-hour or 12-hour) to canonical
/// 12-hour form. Idempotent: feeding the output back in returns it unchanged.
pub fn format_time_12_hour(t: &str) -> AppResult<String> {
    let trimmed = t.trim();
    if is_valid_time_format(trimmed) {
        return to_12_hour(trimmed);
    }
    let collapsed = trimmed.split_whitespace().collect::<Vec<_>>().join(" ");
    to_12_hour(&to_24_hour(&collapsed)?)
}
