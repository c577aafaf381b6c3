use crate::core::engine::{next_opening, open_now, opens_later};
use crate::errors::AppResult;
use crate::models::day_hours::DayHours;
use crate::models::schedule::WeeklySchedule;
use crate::models::status::{OpenState, TodayStatus};
use crate::models::weekday::Weekday;
use crate::utils::time::to_12_hour;
use chrono::{Datelike, NaiveDateTime};

pub struct Engine;

impl Engine {
    /// Full status for the instant `now`.
    ///
    /// The branch order is deliberate: a day that has not opened yet must be
    /// reported as opens-later and never fall through to the past-closing
    /// branch.
    pub fn today_status(schedule: &WeeklySchedule, now: NaiveDateTime) -> AppResult<TodayStatus> {
        let today = Weekday::from_chrono(now.weekday());
        let hours = schedule.day(today);

        if hours.closed {
            return Self::closed_status(schedule, today);
        }

        if let Some(time) = opens_later::opens_later(schedule, now)? {
            return Ok(TodayStatus::new(
                OpenState::OpensLater,
                format!("Opens at {}", time),
            ));
        }

        if open_now::is_open_now(schedule, now)? {
            let text = format!(
                "{} - {}",
                to_12_hour(&hours.open)?,
                to_12_hour(&hours.close)?
            );
            return Ok(TodayStatus::new(OpenState::Open, text));
        }

        // Past closing: same banner as a closed day.
        Self::closed_status(schedule, today)
    }

    fn closed_status(schedule: &WeeklySchedule, today: Weekday) -> AppResult<TodayStatus> {
        let text = match next_opening::next_opening(schedule, today)? {
            Some(next) => format!("Closed • Opens {} at {}", next.day_label, next.time),
            None => "Closed".to_string(),
        };
        Ok(TodayStatus::new(OpenState::Closed, text))
    }
}

/// Today's hours, resolved from the day of week of `now`.
pub fn today_hours(schedule: &WeeklySchedule, now: NaiveDateTime) -> &DayHours {
    schedule.day(Weekday::from_chrono(now.weekday()))
}

pub fn is_open_today(schedule: &WeeklySchedule, now: NaiveDateTime) -> bool {
    today_hours(schedule, now).is_open_day()
}
