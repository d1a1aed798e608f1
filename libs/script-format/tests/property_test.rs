//! Property-based tests using QuickCheck

use chrono::{Datelike, NaiveDate};
use ncpdp_format::{format_date, parse_date, DecodeError, TemporalError};
use quickcheck::{QuickCheck, TestResult};

mod test_support;

/// Property: every real calendar date in 4-digit years survives format then parse
#[test]
fn prop_valid_dates_round_trip() {
    fn prop(year: u16, month: u8, day: u8) -> TestResult {
        let year = 1000 + i32::from(year % 9000);
        let Some(date) = NaiveDate::from_ymd_opt(year, u32::from(month % 13), u32::from(day % 32))
        else {
            return TestResult::discard();
        };
        let parsed = parse_date(&format_date(date));
        TestResult::from_bool(parsed == Ok(date) && date.year() == year)
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(u16, u8, u8) -> TestResult);
}

/// Property: parsing arbitrary text never panics, and anything accepted is canonical
#[test]
fn prop_accepted_tokens_are_canonical() {
    fn prop(token: String) -> bool {
        match parse_date(&token) {
            Ok(date) => format_date(date) == token.trim(),
            Err(TemporalError::MalformedDate(value)) => value == token,
            Err(TemporalError::MalformedTimestamp(_)) => false,
        }
    }

    QuickCheck::new()
        .tests(1000)
        .quickcheck(prop as fn(String) -> bool);
}

/// Property: impossible days are rejected wherever they appear in a message
#[test]
fn prop_impossible_birth_dates_are_rejected() {
    let cases = [
        "2023-02-29",
        "2024-02-30",
        "2024-04-31",
        "2024-00-10",
        "2024-01-00",
        "2024-01-32",
        "0000-00-00",
    ];

    for token in cases {
        let raw = test_support::newrx_with_birth_date(token);
        assert!(
            matches!(
                ncpdp_format::decode_message(&raw),
                Err(DecodeError::MalformedDate { ref value, .. }) if value == token
            ),
            "{token} should be rejected"
        );
    }
}
