//! Coded values and shared choice types
//!
//! These are reused across every transaction. No validation - just data
//! representation.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Code / qualifier / description triple
///
/// Used for transaction results (`Status`, `Error`), diagnoses and drug codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coded {
    pub code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A concept identified by free text and/or a qualified code
///
/// Units of measure, routes, dose forms and allergy reactions all share this
/// shape; every part is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CodedConcept {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl CodedConcept {
    /// Concept carrying only a code, e.g. an NCIt unit of measure.
    pub fn from_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Self::default()
        }
    }
}

/// Either a calendar date or a full timestamp
///
/// SCRIPT date fields (`WrittenDate`, `LastFillDate`, `EffectiveDate`,
/// `ObservationDate`, ...) carry exactly one of a `<Date>` or a `<DateTime>`
/// child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrDateTime {
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
}

impl DateOrDateTime {
    /// The calendar date, in the timestamp's own offset for `DateTime`.
    pub fn date(&self) -> NaiveDate {
        match self {
            DateOrDateTime::Date(date) => *date,
            DateOrDateTime::DateTime(instant) => instant.date_naive(),
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            DateOrDateTime::Date(date) => Some(*date),
            DateOrDateTime::DateTime(_) => None,
        }
    }

    pub fn as_date_time(&self) -> Option<&DateTime<FixedOffset>> {
        match self {
            DateOrDateTime::Date(_) => None,
            DateOrDateTime::DateTime(instant) => Some(instant),
        }
    }
}

impl From<NaiveDate> for DateOrDateTime {
    fn from(date: NaiveDate) -> Self {
        DateOrDateTime::Date(date)
    }
}

impl From<DateTime<FixedOffset>> for DateOrDateTime {
    fn from(instant: DateTime<FixedOffset>) -> Self {
        DateOrDateTime::DateTime(instant)
    }
}
