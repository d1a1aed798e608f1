//! LOINC reference table
//!
//! Comma-separated with a header row; columns are matched by header name, so
//! column order in the source does not matter. Rows shorter than the header
//! load with the missing trailing fields empty. Rows longer than the header
//! are rejected.

use serde::{Deserialize, Serialize};
use std::io::Read;
use tracing::warn;

use crate::error::{LoadError, Result};

pub const LOINC_FIELDS: usize = 45;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Loinc {
    #[serde(rename = "LOINC_NUM")]
    pub loinc_num: String,
    #[serde(rename = "COMPONENT")]
    pub component: String,
    #[serde(rename = "PROPERTY")]
    pub property: String,
    #[serde(rename = "TIME_ASPCT")]
    pub time_aspect: String,
    #[serde(rename = "SYSTEM")]
    pub system: String,
    #[serde(rename = "SCALE_TYP")]
    pub scale_type: String,
    #[serde(rename = "METHOD_TYP")]
    pub method_type: String,
    #[serde(rename = "CLASS")]
    pub loinc_class: String,
    #[serde(rename = "VersionLastChanged")]
    pub version_last_changed: String,
    #[serde(rename = "CHNG_TYPE")]
    pub change_type: String,
    #[serde(rename = "DefinitionDescription")]
    pub definition_description: String,
    #[serde(rename = "STATUS")]
    pub status: String,
    #[serde(rename = "CONSUMER_NAME")]
    pub consumer_name: String,
    #[serde(rename = "CLASSTYPE")]
    pub class_type: String,
    #[serde(rename = "FORMULA")]
    pub formula: String,
    #[serde(rename = "EXMPL_ANSWERS")]
    pub example_answers: String,
    #[serde(rename = "SURVEY_QUEST_TEXT")]
    pub survey_question_text: String,
    #[serde(rename = "SURVEY_QUEST_SRC")]
    pub survey_question_source: String,
    #[serde(rename = "UNITSREQUIRED")]
    pub units_required: String,
    #[serde(rename = "SUBMITTED_UNITS")]
    pub submitted_units: String,
    #[serde(rename = "RELATEDNAMES2")]
    pub related_names_2: String,
    #[serde(rename = "SHORTNAME")]
    pub short_name: String,
    #[serde(rename = "ORDER_OBS")]
    pub order_obs: String,
    #[serde(rename = "CDISC_COMMON_TESTS")]
    pub cdisc_common_tests: String,
    #[serde(rename = "HL7_FIELD_SUBFIELD_ID")]
    pub hl7_field_subfield_id: String,
    #[serde(rename = "EXTERNAL_COPYRIGHT_NOTICE")]
    pub external_copyright_notice: String,
    #[serde(rename = "EXAMPLE_UNITS")]
    pub example_units: String,
    #[serde(rename = "LONG_COMMON_NAME")]
    pub long_common_name: String,
    #[serde(rename = "UnitsAndRange")]
    pub units_and_range: String,
    #[serde(rename = "EXAMPLE_UCUM_UNITS")]
    pub example_ucum_units: String,
    #[serde(rename = "EXAMPLE_SI_UCUM_UNITS")]
    pub example_si_ucum_units: String,
    #[serde(rename = "STATUS_REASON")]
    pub status_reason: String,
    #[serde(rename = "STATUS_TEXT")]
    pub status_text: String,
    #[serde(rename = "CHANGE_REASON_PUBLIC")]
    pub change_reason_public: String,
    #[serde(rename = "COMMON_TEST_RANK")]
    pub common_test_rank: String,
    #[serde(rename = "COMMON_ORDER_RANK")]
    pub common_order_rank: String,
    #[serde(rename = "COMMON_SI_TEST_RANK")]
    pub common_si_test_rank: String,
    #[serde(rename = "HL7_ATTACHMENT_STRUCTURE")]
    pub hl7_attachment_structure: String,
    #[serde(rename = "EXTERNAL_COPYRIGHT_LINK")]
    pub external_copyright_link: String,
    #[serde(rename = "PanelType")]
    pub panel_type: String,
    #[serde(rename = "AskAtOrderEntry")]
    pub ask_at_order_entry: String,
    #[serde(rename = "AssociatedObservations")]
    pub associated_observations: String,
    #[serde(rename = "VersionFirstReleased")]
    pub version_first_released: String,
    #[serde(rename = "ValidHL7AttachmentRequest")]
    pub valid_hl7_attachment_request: String,
    #[serde(rename = "DisplayName")]
    pub display_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoincTable {
    rows: Vec<Loinc>,
}

impl LoincTable {
    pub fn new(rows: Vec<Loinc>) -> Self {
        Self { rows }
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers = reader.headers()?.clone();
        if headers.is_empty() {
            return Err(LoadError::EmptyInput);
        }

        let mut rows: Vec<Loinc> = Vec::new();
        let mut record = csv::StringRecord::new();
        while reader.read_record(&mut record)? {
            if record.len() > headers.len() {
                return Err(LoadError::SchemaMismatch {
                    line: record.position().map_or(rows.len() as u64 + 2, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            while record.len() < headers.len() {
                record.push_field("");
            }
            rows.push(record.deserialize(Some(&headers))?);
        }

        if rows.is_empty() {
            warn!(columns = headers.len(), "LOINC source has a header but no rows");
        }
        Ok(Self { rows })
    }

    pub fn find_by_loinc_num(&self, loinc_num: &str) -> Option<&Loinc> {
        self.rows.iter().find(|row| row.loinc_num == loinc_num)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Loinc> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[Loinc] {
        &self.rows
    }
}

impl<'a> IntoIterator for &'a LoincTable {
    type Item = &'a Loinc;
    type IntoIter = std::slice::Iter<'a, Loinc>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_match_by_header_name() {
        let source = "COMPONENT,LOINC_NUM,CLASS\nHeart rate,8867-4,HRTRATE.ATOM\n";
        let table = LoincTable::from_reader(source.as_bytes()).unwrap();
        let row = table.find_by_loinc_num("8867-4").unwrap();
        assert_eq!(row.component, "Heart rate");
        assert_eq!(row.loinc_class, "HRTRATE.ATOM");
        assert_eq!(row.long_common_name, "");
    }

    #[test]
    fn short_rows_fill_with_empty_fields() {
        let source = "LOINC_NUM,COMPONENT,PROPERTY,SYSTEM\n8302-2,Body height\n";
        let table = LoincTable::from_reader(source.as_bytes()).unwrap();
        let row = table.iter().next().unwrap();
        assert_eq!(row.loinc_num, "8302-2");
        assert_eq!(row.component, "Body height");
        assert_eq!(row.property, "");
        assert_eq!(row.system, "");
    }

    #[test]
    fn long_rows_are_schema_mismatch() {
        let source = "LOINC_NUM,COMPONENT\n8302-2,Body height\n8867-4,Heart rate,Frq\n";
        assert!(matches!(
            LoincTable::from_reader(source.as_bytes()),
            Err(LoadError::SchemaMismatch {
                line: 3,
                expected: 2,
                found: 3
            })
        ));
    }

    #[test]
    fn quoted_fields_keep_embedded_commas() {
        let source = "LOINC_NUM,LONG_COMMON_NAME\n\"2339-0\",\"Glucose [Mass/volume], Blood\"\n";
        let table = LoincTable::from_reader(source.as_bytes()).unwrap();
        assert_eq!(
            table.find_by_loinc_num("2339-0").unwrap().long_common_name,
            "Glucose [Mass/volume], Blood"
        );
    }

    #[test]
    fn header_only_source_is_an_empty_table() {
        // a lone token reads as a one-column header
        let table = LoincTable::from_reader(&b"aGVsbG8="[..]).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn zero_bytes_is_empty_input() {
        assert!(matches!(
            LoincTable::from_reader(&b""[..]),
            Err(LoadError::EmptyInput)
        ));
    }

    #[test]
    fn lookup_miss_is_none() {
        let source = "LOINC_NUM\n8302-2\n";
        let table = LoincTable::from_reader(source.as_bytes()).unwrap();
        assert!(table.find_by_loinc_num("0000-0").is_none());
    }
}
