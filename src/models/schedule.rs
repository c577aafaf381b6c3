use crate::errors::{AppError, AppResult};
use crate::models::day_hours::DayHours;
use crate::models::weekday::Weekday;
use serde::{Deserialize, Serialize};

/// One week of opening hours. All seven days are always present; there is no
/// notion of a partial schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeeklySchedule {
    pub monday: DayHours,
    pub tuesday: DayHours,
    pub wednesday: DayHours,
    pub thursday: DayHours,
    pub friday: DayHours,
    pub saturday: DayHours,
    pub sunday: DayHours,
}

fn weekday_hours() -> DayHours {
    DayHours {
        open: "09:00".to_string(),
        close: "17:00".to_string(),
        closed: false,
    }
}

/// Monday-Friday 09:00-17:00, weekend closed.
impl Default for WeeklySchedule {
    fn default() -> Self {
        Self {
            monday: weekday_hours(),
            tuesday: weekday_hours(),
            wednesday: weekday_hours(),
            thursday: weekday_hours(),
            friday: weekday_hours(),
            saturday: DayHours::closed_all_day(),
            sunday: DayHours::closed_all_day(),
        }
    }
}

impl WeeklySchedule {
    pub fn day(&self, day: Weekday) -> &DayHours {
        match day {
            Weekday::Monday => &self.monday,
            Weekday::Tuesday => &self.tuesday,
            Weekday::Wednesday => &self.wednesday,
            Weekday::Thursday => &self.thursday,
            Weekday::Friday => &self.friday,
            Weekday::Saturday => &self.saturday,
            Weekday::Sunday => &self.sunday,
        }
    }

    pub fn day_mut(&mut self, day: Weekday) -> &mut DayHours {
        match day {
            Weekday::Monday => &mut self.monday,
            Weekday::Tuesday => &mut self.tuesday,
            Weekday::Wednesday => &mut self.wednesday,
            Weekday::Thursday => &mut self.thursday,
            Weekday::Friday => &mut self.friday,
            Weekday::Saturday => &mut self.saturday,
            Weekday::Sunday => &mut self.sunday,
        }
    }

    /// Fail-fast validation of all seven days, with the day name in the error.
    pub fn validate(&self) -> AppResult<()> {
        for day in Weekday::MONDAY_FIRST {
            self.day(day).validate().map_err(|e| {
                AppError::InvalidSchedule(format!("{}: {}", day.wd_as_str(), e))
            })?;
        }
        Ok(())
    }

    pub fn is_open_on(&self, day: Weekday) -> bool {
        self.day(day).is_open_day()
    }
}
