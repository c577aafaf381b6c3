use praxishours::utils::time::{
    format_time_12_hour, is_valid_time_format, minutes_since_midnight, parse_time, to_12_hour,
    to_24_hour,
};

#[test]
fn test_to_12_hour_basics() {
    assert_eq!(to_12_hour("00:00").unwrap(), "12:00 AM");
    assert_eq!(to_12_hour("13:05").unwrap(), "1:05 PM");
    assert_eq!(to_12_hour("12:00").unwrap(), "12:00 PM");
    assert_eq!(to_12_hour("09:00").unwrap(), "9:00 AM");
    assert_eq!(to_12_hour("23:59").unwrap(), "11:59 PM");
}

#[test]
fn test_to_24_hour_basics() {
    assert_eq!(to_24_hour("1:05 PM").unwrap(), "13:05");
    assert_eq!(to_24_hour("12:00 AM").unwrap(), "00:00");
    assert_eq!(to_24_hour("12:00 PM").unwrap(), "12:00");
    assert_eq!(to_24_hour("9:00 am").unwrap(), "09:00");
}

#[test]
fn test_round_trip_24_to_12_to_24() {
    for t in [
        "00:00", "00:59", "01:00", "09:30", "11:59", "12:00", "12:01", "13:05", "17:00", "23:59",
    ] {
        let twelve = to_12_hour(t).unwrap();
        assert_eq!(to_24_hour(&twelve).unwrap(), t, "round trip failed for {}", t);
    }
}

#[test]
fn test_format_time_12_hour_idempotent() {
    for input in ["09:00", "9:00 AM", "9:00 am", " 9:00   AM ", "13:05"] {
        let once = format_time_12_hour(input).unwrap();
        let twice = format_time_12_hour(&once).unwrap();
        assert_eq!(once, twice, "not idempotent for {}", input);
    }
}

#[test]
fn test_format_time_12_hour_normalizes() {
    assert_eq!(format_time_12_hour("9:00 am").unwrap(), "9:00 AM");
    assert_eq!(format_time_12_hour("09:00").unwrap(), "9:00 AM");
    assert_eq!(format_time_12_hour(" 1:05   pm ").unwrap(), "1:05 PM");
}

#[test]
fn test_is_valid_time_format() {
    for valid in ["00:00", "09:30", "12:00", "23:59"] {
        assert!(is_valid_time_format(valid), "{} should be valid", valid);
    }
    for invalid in ["24:00", "9:00", "12:60", "12:5", "1200", "", "ab:cd", "09:00 AM"] {
        assert!(!is_valid_time_format(invalid), "{} should be invalid", invalid);
    }
}

#[test]
fn test_malformed_times_are_rejected() {
    assert!(to_12_hour("25:00").is_err());
    assert!(to_12_hour("").is_err());
    assert!(to_24_hour("13:05").is_err());
    assert!(format_time_12_hour("nonsense").is_err());
}

#[test]
fn test_minutes_since_midnight() {
    assert_eq!(minutes_since_midnight(parse_time("00:00").unwrap()), 0);
    assert_eq!(minutes_since_midnight(parse_time("10:30").unwrap()), 630);
    assert_eq!(minutes_since_midnight(parse_time("23:59").unwrap()), 1439);
}
