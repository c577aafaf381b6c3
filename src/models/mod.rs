pub mod day_hours;
pub mod schedule;
pub mod status;
pub mod weekday;
