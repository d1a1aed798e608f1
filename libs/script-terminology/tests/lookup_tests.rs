mod test_support;

use ncpdp_terminology::{
    load_loinc, load_terminology, LoadError, TerminologyTable, DEFAULT_LOINC_ROWS,
    DEFAULT_TERMINOLOGY_ROWS, LOINC_FIELDS,
};
use std::io::Read;
use test_support::open_fixture;

#[test]
fn default_terminology_has_known_row_count() {
    let table = load_terminology(None).unwrap();
    assert_eq!(table.len(), DEFAULT_TERMINOLOGY_ROWS);
}

#[test]
fn default_terminology_resolves_dea_schedules() {
    let table = load_terminology(None).unwrap();
    assert_eq!(table.find_term_by_code("C48672"), "Schedule I Substance");
    assert_eq!(table.find_term_by_code("C48675"), "Schedule II Substance");
    assert_eq!(table.find_term_by_code("C48679"), "Schedule V Substance");
}

#[test]
fn default_terminology_resolves_quantity_units() {
    let table = load_terminology(None).unwrap();
    assert_eq!(table.find_term_by_code("C48542"), "Tablet");
    // also listed under the strength subset as "mL"; quantity comes first
    assert_eq!(table.find_term_by_code("C28254"), "Milliliter");

    let row = table.find_by_code("C48480").unwrap();
    assert_eq!(row.subset_preferred_term, "Quantity Unit of Measure Terminology");
    assert_eq!(row.synonym, "CAP");
}

#[test]
fn unknown_code_is_empty_string() {
    let table = load_terminology(None).unwrap();
    assert_eq!(table.find_term_by_code("C486232"), "");
    assert_eq!(table.find_term_by_code(""), "");
}

#[test]
fn empty_table_is_empty_string() {
    assert_eq!(TerminologyTable::default().find_term_by_code("C48672"), "");
}

#[test]
fn supplied_terminology_replaces_default() {
    let mut file = open_fixture("terminology-subset.tsv");
    let table = load_terminology(Some(&mut file)).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.find_term_by_code("C48675"), "Schedule II Substance");
    assert_eq!(table.find_term_by_code("C48672"), "");
}

#[test]
fn six_field_row_is_schema_mismatch() {
    let mut file = open_fixture("terminology-six-fields.tsv");
    match load_terminology(Some(&mut file)) {
        Err(LoadError::SchemaMismatch {
            line,
            expected,
            found,
        }) => assert_eq!((line, expected, found), (2, 7, 6)),
        other => panic!("expected schema mismatch, got {other:?}"),
    }
}

#[test]
fn zero_bytes_is_empty_input() {
    let mut empty = std::io::empty();
    assert!(matches!(
        load_terminology(Some(&mut empty)),
        Err(LoadError::EmptyInput)
    ));

    let mut empty = std::io::empty();
    assert!(matches!(load_loinc(Some(&mut empty)), Err(LoadError::EmptyInput)));
}

#[test]
fn default_loinc_has_known_row_count() {
    let table = load_loinc(None).unwrap();
    assert_eq!(table.len(), DEFAULT_LOINC_ROWS);
}

#[test]
fn default_loinc_carries_vital_signs() {
    let table = load_loinc(None).unwrap();

    let weight = table.find_by_loinc_num("29463-7").unwrap();
    assert_eq!(weight.component, "Body weight");
    assert_eq!(weight.property, "Mass");
    assert_eq!(weight.example_ucum_units, "[lb_av];kg");

    let systolic = table.find_by_loinc_num("8480-6").unwrap();
    assert_eq!(systolic.long_common_name, "Systolic blood pressure");
    assert_eq!(systolic.scale_type, "Qn");
}

#[test]
fn default_loinc_header_names_every_column() {
    let mut header = String::new();
    let mut file = std::fs::File::open(
        std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/loinc.csv"),
    )
    .unwrap();
    file.read_to_string(&mut header).unwrap();
    let first_line = header.lines().next().unwrap();
    assert_eq!(first_line.split(',').count(), LOINC_FIELDS);
}

#[test]
fn ragged_loinc_rows_load_with_empty_tail() {
    let mut file = open_fixture("loinc-ragged.csv");
    let table = load_loinc(Some(&mut file)).unwrap();
    assert_eq!(table.len(), 3);

    let temperature = table.find_by_loinc_num("8310-5").unwrap();
    assert_eq!(temperature.system, "^Patient");
    assert_eq!(temperature.scale_type, "");
    assert_eq!(temperature.long_common_name, "");

    let breaths = table.find_by_loinc_num("9279-1").unwrap();
    assert_eq!(breaths.example_ucum_units, "/min");
}

#[test]
fn loinc_rows_serialize_with_source_column_names() {
    let table = load_loinc(None).unwrap();
    let row = table.find_by_loinc_num("8867-4").unwrap();
    let json = serde_json::to_value(row).unwrap();
    assert_eq!(json["LOINC_NUM"], "8867-4");
    assert_eq!(json["COMPONENT"], "Heart rate");
}
