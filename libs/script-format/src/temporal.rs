//! Date and timestamp tokens
//!
//! SCRIPT `<Date>` elements carry `YYYY-MM-DD`; `<DateTime>` and the header
//! timestamps carry RFC 3339 with an explicit offset.

use chrono::{DateTime, FixedOffset, NaiveDate, SecondsFormat};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemporalError {
    #[error("malformed date {0:?}: expected YYYY-MM-DD")]
    MalformedDate(String),

    #[error("malformed timestamp {0:?}: expected an RFC 3339 timestamp")]
    MalformedTimestamp(String),
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// Surrounding whitespace is ignored. Anything else (five-digit years, missing
/// padding, impossible days) is rejected.
pub fn parse_date(token: &str) -> Result<NaiveDate, TemporalError> {
    let s = token.trim();
    let malformed = || TemporalError::MalformedDate(token.to_string());

    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(idx, b)| match idx {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(malformed());
    }

    let year: i32 = s[0..4].parse().map_err(|_| malformed())?;
    let month: u32 = s[5..7].parse().map_err(|_| malformed())?;
    let day: u32 = s[8..10].parse().map_err(|_| malformed())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(malformed)
}

/// Parse an RFC 3339 timestamp, keeping its offset.
pub fn parse_timestamp(token: &str) -> Result<DateTime<FixedOffset>, TemporalError> {
    DateTime::parse_from_rfc3339(token.trim())
        .map_err(|_| TemporalError::MalformedTimestamp(token.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Render a timestamp in RFC 3339, `Z` for UTC, fractional seconds only when set.
pub fn format_timestamp(instant: &DateTime<FixedOffset>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
