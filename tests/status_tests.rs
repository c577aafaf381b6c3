use chrono::{NaiveDate, NaiveDateTime};
use praxishours::core::engine::next_opening::next_opening;
use praxishours::core::engine::open_now::is_open_now;
use praxishours::core::engine::opens_later::opens_later;
use praxishours::core::logic::{Engine, is_open_today, today_hours};
use praxishours::models::day_hours::DayHours;
use praxishours::models::schedule::WeeklySchedule;
use praxishours::models::status::OpenState;
use praxishours::models::weekday::Weekday;

/// 2025-09-01 is a Monday; the first week of September 2025 is used as a
/// fixed calendar throughout these tests.
fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 9, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn closed_week() -> WeeklySchedule {
    WeeklySchedule {
        monday: DayHours::closed_all_day(),
        tuesday: DayHours::closed_all_day(),
        wednesday: DayHours::closed_all_day(),
        thursday: DayHours::closed_all_day(),
        friday: DayHours::closed_all_day(),
        saturday: DayHours::closed_all_day(),
        sunday: DayHours::closed_all_day(),
    }
}

#[test]
fn test_open_during_hours_on_monday() {
    let schedule = WeeklySchedule::default();
    let status = Engine::today_status(&schedule, at(1, 10, 0)).unwrap();

    assert_eq!(status.state, OpenState::Open);
    assert_eq!(status.display_text, "9:00 AM - 5:00 PM");
    assert_eq!(status.icon, "🟢");
}

#[test]
fn test_opens_later_before_opening_time() {
    let schedule = WeeklySchedule::default();
    let status = Engine::today_status(&schedule, at(1, 7, 30)).unwrap();

    assert_eq!(status.state, OpenState::OpensLater);
    assert_eq!(status.display_text, "Opens at 9:00 AM");
    assert_eq!(status.icon, "🟡");
}

#[test]
fn test_opening_boundary_is_inclusive() {
    let schedule = WeeklySchedule::default();
    assert!(is_open_now(&schedule, at(1, 9, 0)).unwrap());
    assert_eq!(
        Engine::today_status(&schedule, at(1, 9, 0)).unwrap().state,
        OpenState::Open
    );
}

#[test]
fn test_closing_boundary_is_exclusive() {
    let schedule = WeeklySchedule::default();
    assert!(!is_open_now(&schedule, at(1, 17, 0)).unwrap());

    // Monday 17:00: closed, and the next opening is Tuesday.
    let status = Engine::today_status(&schedule, at(1, 17, 0)).unwrap();
    assert_eq!(status.state, OpenState::Closed);
    assert_eq!(status.display_text, "Closed • Opens tomorrow at 9:00 AM");
}

#[test]
fn test_saturday_noon_points_to_monday() {
    let schedule = WeeklySchedule::default();
    let status = Engine::today_status(&schedule, at(6, 12, 0)).unwrap();

    assert_eq!(status.state, OpenState::Closed);
    // Sunday is closed too, so the next opening is Monday, two days ahead.
    assert_eq!(status.display_text, "Closed • Opens Mon at 9:00 AM");
    assert_eq!(status.icon, "🔴");
}

#[test]
fn test_sunday_points_to_tomorrow() {
    let schedule = WeeklySchedule::default();
    let status = Engine::today_status(&schedule, at(7, 12, 0)).unwrap();

    assert_eq!(status.display_text, "Closed • Opens tomorrow at 9:00 AM");
}

#[test]
fn test_all_closed_week_has_plain_banner() {
    let schedule = closed_week();
    let status = Engine::today_status(&schedule, at(3, 12, 0)).unwrap();

    assert_eq!(status.state, OpenState::Closed);
    assert_eq!(status.display_text, "Closed");
    assert!(next_opening(&schedule, Weekday::Wednesday).unwrap().is_none());
}

#[test]
fn test_single_open_day_past_closing() {
    // Only Wednesday opens; the scan covers the six days strictly after
    // today, so past closing on Wednesday no next opening is found.
    let mut schedule = closed_week();
    schedule.wednesday = DayHours::open_at("08:00", "13:00").unwrap();

    let status = Engine::today_status(&schedule, at(3, 20, 0)).unwrap();
    assert_eq!(status.state, OpenState::Closed);
    assert_eq!(status.display_text, "Closed");
}

#[test]
fn test_opens_later_helper() {
    let schedule = WeeklySchedule::default();

    assert_eq!(
        opens_later(&schedule, at(1, 7, 30)).unwrap(),
        Some("9:00 AM".to_string())
    );
    // While open and after closing the opening time has passed.
    assert_eq!(opens_later(&schedule, at(1, 10, 0)).unwrap(), None);
    assert_eq!(opens_later(&schedule, at(1, 18, 0)).unwrap(), None);
    // Closed days never open later.
    assert_eq!(opens_later(&schedule, at(6, 7, 30)).unwrap(), None);
}

#[test]
fn test_next_opening_labels() {
    let schedule = WeeklySchedule::default();

    // Friday -> weekend closed -> Monday, three days ahead.
    let next = next_opening(&schedule, Weekday::Friday).unwrap().unwrap();
    assert_eq!(next.day_label, "Mon");
    assert_eq!(next.time, "9:00 AM");

    // Sunday -> Monday is exactly one day ahead.
    let next = next_opening(&schedule, Weekday::Sunday).unwrap().unwrap();
    assert_eq!(next.day_label, "tomorrow");
}

#[test]
fn test_status_is_idempotent_at_fixed_instant() {
    let schedule = WeeklySchedule::default();
    let first = Engine::today_status(&schedule, at(2, 11, 15)).unwrap();
    let second = Engine::today_status(&schedule, at(2, 11, 15)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_today_hours_resolution() {
    let schedule = WeeklySchedule::default();

    assert_eq!(today_hours(&schedule, at(1, 12, 0)), &schedule.monday);
    assert_eq!(today_hours(&schedule, at(6, 12, 0)), &schedule.saturday);

    assert!(is_open_today(&schedule, at(1, 12, 0)));
    assert!(!is_open_today(&schedule, at(7, 12, 0)));
}
