//! NCPDP terminology table
//!
//! One row per NCIt concept in an NCPDP subset (quantity units, strength
//! units, strength forms, DEA schedules). The source is tab-delimited with
//! exactly seven columns and no header row.

use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::debug;

use crate::error::{LoadError, Result};

pub const TERMINOLOGY_FIELDS: usize = 7;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terminology {
    pub ncit_subset_code: String,
    pub subset_preferred_term: String,
    pub ncit_code: String,
    pub preferred_term: String,
    pub synonym: String,
    pub ncit_preferred_term: String,
    pub ncit_definition: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerminologyTable {
    rows: Vec<Terminology>,
}

impl TerminologyTable {
    pub fn new(rows: Vec<Terminology>) -> Self {
        Self { rows }
    }

    /// Parse a tab-delimited terminology source.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .flexible(true)
            .from_reader(reader);

        let mut rows: Vec<Terminology> = Vec::new();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record)? {
            if record.len() != TERMINOLOGY_FIELDS {
                return Err(LoadError::SchemaMismatch {
                    line: record.position().map_or(rows.len() as u64 + 1, |p| p.line()),
                    expected: TERMINOLOGY_FIELDS,
                    found: record.len(),
                });
            }
            rows.push(record.deserialize(None)?);
        }

        if rows.is_empty() {
            return Err(LoadError::EmptyInput);
        }
        Ok(Self { rows })
    }

    /// Preferred term for an NCIt code, or `""` when nothing matches.
    ///
    /// Codes shared by several subsets resolve to the first row in source
    /// order.
    pub fn find_term_by_code(&self, code: &str) -> &str {
        if self.rows.is_empty() {
            debug!(code, "no terminology data loaded");
            return "";
        }
        self.find_by_code(code)
            .map_or("", |row| row.preferred_term.as_str())
    }

    pub fn find_by_code(&self, code: &str) -> Option<&Terminology> {
        self.rows.iter().find(|row| row.ncit_code == code)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Terminology> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Terminology] {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a TerminologyTable {
    type Item = &'a Terminology;
    type IntoIter = std::slice::Iter<'a, Terminology>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = "C89510\tQuantity Unit of Measure Terminology\tC48542\tTablet\tTAB\tTablet Dosing Unit\tA dosing unit.\n\
C89510\tQuantity Unit of Measure Terminology\tC28254\tMilliliter\tmL\tMilliliter\tA unit of volume.\n\
C89508\tStrength Unit of Measure Terminology\tC28254\tmL\tMilliliter\tMilliliter\tA unit of volume.\n";

    fn table() -> TerminologyTable {
        TerminologyTable::from_reader(ROWS.as_bytes()).unwrap()
    }

    #[test]
    fn parses_rows_in_source_order() {
        let table = table();
        assert_eq!(table.len(), 3);
        let first = table.iter().next().unwrap();
        assert_eq!(first.ncit_subset_code, "C89510");
        assert_eq!(first.ncit_code, "C48542");
        assert_eq!(first.synonym, "TAB");
        assert_eq!(first.ncit_definition, "A dosing unit.");
    }

    #[test]
    fn first_match_wins_on_duplicate_codes() {
        assert_eq!(table().find_term_by_code("C28254"), "Milliliter");
    }

    #[test]
    fn miss_is_empty_string() {
        assert_eq!(table().find_term_by_code("C486232"), "");
        assert!(table().find_by_code("C486232").is_none());
    }

    #[test]
    fn empty_table_finds_nothing() {
        let table = TerminologyTable::default();
        assert!(table.is_empty());
        assert_eq!(table.find_term_by_code("C48672"), "");
    }

    #[test]
    fn short_row_is_schema_mismatch() {
        let source = "C89510\tQuantity\tC48542\tTablet\tTAB\tTablet Dosing Unit\n";
        match TerminologyTable::from_reader(source.as_bytes()) {
            Err(LoadError::SchemaMismatch {
                line,
                expected,
                found,
            }) => {
                assert_eq!(line, 1);
                assert_eq!(expected, 7);
                assert_eq!(found, 6);
            }
            other => panic!("expected schema mismatch, got {other:?}"),
        }
    }

    #[test]
    fn mismatch_reports_offending_line() {
        let source = format!("{ROWS}C89510\tonly three\tfields\n");
        assert!(matches!(
            TerminologyTable::from_reader(source.as_bytes()),
            Err(LoadError::SchemaMismatch { line: 4, found: 3, .. })
        ));
    }

    #[test]
    fn zero_bytes_is_empty_input() {
        assert!(matches!(
            TerminologyTable::from_reader(&b""[..]),
            Err(LoadError::EmptyInput)
        ));
    }

    #[test]
    fn base64_noise_is_schema_mismatch() {
        assert!(matches!(
            TerminologyTable::from_reader(&b"aGVsbG8="[..]),
            Err(LoadError::SchemaMismatch { found: 1, .. })
        ));
    }
}
