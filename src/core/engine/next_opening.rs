use crate::errors::AppResult;
use crate::models::schedule::WeeklySchedule;
use crate::models::status::NextOpening;
use crate::models::weekday::Weekday;
use crate::utils::time::to_12_hour;

/// First day with open hours among the six days strictly after `today`,
/// scanned in calendar order with wrap-around at week end. None when no
/// other day of the week opens.
pub fn next_opening(schedule: &WeeklySchedule, today: Weekday) -> AppResult<Option<NextOpening>> {
    let mut day = today;
    for offset in 1..=6 {
        day = day.succ();
        let hours = schedule.day(day);
        if hours.closed {
            continue;
        }
        let day_label = if offset == 1 {
            "tomorrow".to_string()
        } else {
            day.abbrev().to_string()
        };
        return Ok(Some(NextOpening {
            day_label,
            time: to_12_hour(&hours.open)?,
        }));
    }
    Ok(None)
}
