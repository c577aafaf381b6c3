use crate::models::weekday::Weekday;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn weekday_of(date: NaiveDate) -> Weekday {
    Weekday::from_chrono(date.weekday())
}
