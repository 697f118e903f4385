use crate::timestamp;

use chrono::{Datelike, Timelike};

#[test]
fn given_rfc3339_with_offset_when_parse_then_converted_to_utc() {
    let parsed = timestamp::parse("2025-09-10T07:30:00+02:00").unwrap();
    assert_eq!(parsed.hour(), 5);
    assert_eq!(parsed.minute(), 30);
}

#[test]
fn given_naive_iso_with_fraction_when_parse_then_taken_as_utc() {
    let parsed = timestamp::parse("2025-09-10T05:30:00.123456").unwrap();
    assert_eq!(parsed.year(), 2025);
    assert_eq!(parsed.hour(), 5);
}

#[test]
fn given_naive_iso_without_fraction_when_parse_then_ok() {
    assert!(timestamp::parse("2025-09-10T05:30:00").is_some());
}

#[test]
fn given_space_separated_timestamp_when_parse_then_ok() {
    assert!(timestamp::parse("2025-09-10 05:30:00").is_some());
}

#[test]
fn given_garbage_when_parse_then_none() {
    assert!(timestamp::parse("yesterday").is_none());
    assert!(timestamp::parse("").is_none());
}
