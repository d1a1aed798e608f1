//! NCPDP terminology and LOINC reference tables
//!
//! Both tables ship with a bundled default dataset that is parsed once, on
//! first use, and shared for the rest of the process. Callers with their own
//! extracts pass a reader instead.
//!
//! ```rust
//! let terms = ncpdp_terminology::load_terminology(None).unwrap();
//! assert_eq!(terms.find_term_by_code("C48672"), "Schedule I Substance");
//! ```

#![forbid(unsafe_code)]

mod error;
mod loinc;
mod terminology;

use once_cell::sync::Lazy;
use std::io::Read;
use std::sync::Arc;
use tracing::debug;

pub use error::{LoadError, Result};
pub use loinc::{Loinc, LoincTable, LOINC_FIELDS};
pub use terminology::{Terminology, TerminologyTable, TERMINOLOGY_FIELDS};

/// Rows in the bundled terminology dataset.
pub const DEFAULT_TERMINOLOGY_ROWS: usize = 44;

/// Rows in the bundled LOINC dataset.
pub const DEFAULT_LOINC_ROWS: usize = 15;

static DEFAULT_TERMINOLOGY: Lazy<std::result::Result<Arc<TerminologyTable>, String>> =
    Lazy::new(|| {
        let table =
            TerminologyTable::from_reader(&include_bytes!("../data/ncpdp_terminology.tsv")[..]);
        debug!(rows = table.as_ref().map_or(0, |t| t.len()), "Loaded bundled terminology");
        table.map(Arc::new).map_err(|err| err.to_string())
    });

static DEFAULT_LOINC: Lazy<std::result::Result<Arc<LoincTable>, String>> = Lazy::new(|| {
    let table = LoincTable::from_reader(&include_bytes!("../data/loinc.csv")[..]);
    debug!(rows = table.as_ref().map_or(0, |t| t.len()), "Loaded bundled LOINC table");
    table.map(Arc::new).map_err(|err| err.to_string())
});

/// Load the terminology table from `source`, or the bundled dataset when
/// `source` is `None`.
pub fn load_terminology(source: Option<&mut dyn Read>) -> Result<Arc<TerminologyTable>> {
    match source {
        Some(reader) => TerminologyTable::from_reader(reader).map(Arc::new),
        None => default_terminology(),
    }
}

/// Load the LOINC table from `source`, or the bundled dataset when `source`
/// is `None`.
pub fn load_loinc(source: Option<&mut dyn Read>) -> Result<Arc<LoincTable>> {
    match source {
        Some(reader) => LoincTable::from_reader(reader).map(Arc::new),
        None => default_loinc(),
    }
}

pub fn default_terminology() -> Result<Arc<TerminologyTable>> {
    shared(&DEFAULT_TERMINOLOGY, "terminology")
}

pub fn default_loinc() -> Result<Arc<LoincTable>> {
    shared(&DEFAULT_LOINC, "LOINC")
}

fn shared<T>(
    dataset: &'static std::result::Result<Arc<T>, String>,
    name: &'static str,
) -> Result<Arc<T>> {
    dataset
        .as_ref()
        .map(Arc::clone)
        .map_err(|reason| LoadError::DefaultDataset {
            name,
            reason: reason.clone(),
        })
}
