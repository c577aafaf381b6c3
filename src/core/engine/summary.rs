//! Week-level views: per-day formatting, the seven-row week listing, and the
//! grouped one-line summary.

use crate::errors::AppResult;
use crate::models::day_hours::DayHours;
use crate::models::schedule::WeeklySchedule;
use crate::models::weekday::Weekday;
use crate::utils::time::to_12_hour;

/// "Closed", or "9:00 AM - 5:00 PM".
pub fn format_day_hours(hours: &DayHours) -> AppResult<String> {
    if hours.closed {
        return Ok("Closed".to_string());
    }
    Ok(format!(
        "{} - {}",
        to_12_hour(&hours.open)?,
        to_12_hour(&hours.close)?
    ))
}

/// 24-hour variant for users who configure `time_format: 24h`.
pub fn format_day_hours_24(hours: &DayHours) -> String {
    if hours.closed {
        "Closed".to_string()
    } else {
        format!("{} - {}", hours.open, hours.close)
    }
}

pub struct WeekRow {
    pub day: Weekday,
    pub hours: String,
    pub is_today: bool,
}

/// Seven rows in Monday-first order, the current day flagged.
pub fn week_hours(schedule: &WeeklySchedule, today: Weekday) -> AppResult<Vec<WeekRow>> {
    Weekday::MONDAY_FIRST
        .iter()
        .map(|&day| {
            Ok(WeekRow {
                day,
                hours: format_day_hours(schedule.day(day))?,
                is_today: day == today,
            })
        })
        .collect()
}

/// Groups consecutive Monday-first days sharing identical hours into ranges,
/// e.g. "Mon-Fri 9:00 AM - 5:00 PM, Sat 9:00 AM - 12:00 PM". Closed groups
/// are omitted; a week that never opens yields an empty string.
pub fn hours_summary(schedule: &WeeklySchedule) -> AppResult<String> {
    let mut groups: Vec<(Weekday, Weekday, String)> = Vec::new();

    for day in Weekday::MONDAY_FIRST {
        let hours = format_day_hours(schedule.day(day))?;
        match groups.last_mut() {
            Some((_, last, text)) if *text == hours => *last = day,
            _ => groups.push((day, day, hours)),
        }
    }

    let parts: Vec<String> = groups
        .into_iter()
        .filter(|(_, _, text)| text != "Closed")
        .map(|(first, last, text)| {
            if first == last {
                format!("{} {}", first.abbrev(), text)
            } else {
                format!("{}-{} {}", first.abbrev(), last.abbrev(), text)
            }
        })
        .collect();

    Ok(parts.join(", "))
}
