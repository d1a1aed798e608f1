//! Medication blocks
//!
//! `Medication` is shared by `MedicationPrescribed`, `MedicationDispensed` and
//! `MedicationResponse`. Quantities are `Decimal` so the transmitted text
//! (`30`, `2.5`, `30.000`) survives decoding unchanged.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::common::{Coded, CodedConcept, DateOrDateTime};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub drug_description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_coded: Option<DrugCoded>,

    pub quantity: Quantity,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_supply: Option<Decimal>,

    pub written_date: DateOrDateTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fill_date: Option<DateOrDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub substitutions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_refills: Option<u32>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnosis: Vec<Diagnosis>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    pub sig: Sig,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_fill_indicator: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prior_authorization_status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescriber_checked_rems: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub office_of_pharmacy_affairs_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_medication_date: Option<OtherMedicationDate>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacy_requested_refills: Option<u32>,
}

impl Medication {
    /// DEA schedule code (an NCIt code such as `C48672`), when the drug is controlled.
    pub fn dea_schedule_code(&self) -> Option<&str> {
        self.drug_coded
            .as_ref()
            .and_then(|coded| coded.dea_schedule.as_ref())
            .map(|schedule| schedule.code.as_str())
    }

    /// Unit of measure code of the dispensed quantity.
    pub fn quantity_unit_code(&self) -> Option<&str> {
        self.quantity.quantity_unit_of_measure.code.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DrugCoded {
    /// NDC, RxNorm or other product code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_code: Option<Coded>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength: Option<Strength>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_db_code: Option<Coded>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dea_schedule: Option<DeaSchedule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Strength {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_form: Option<CodedConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_unit_of_measure: Option<CodedConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeaSchedule {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub value: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_list_qualifier: Option<String>,

    pub quantity_unit_of_measure: CodedConcept,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnosis {
    pub clinical_information_qualifier: String,

    pub primary: Coded,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<Coded>,
}

/// Directions for use
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sig {
    pub sig_text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_system: Option<SigCodeSystem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub instruction: Option<Instruction>,
}

impl Sig {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            sig_text: text.into(),
            code_system: None,
            instruction: None,
        }
    }
}

/// Versions of the vocabularies used by a structured sig
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SigCodeSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snomed_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fmt_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Instruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_administration: Option<DoseAdministration>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub timing_and_duration: Vec<TimingAndDuration>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DoseAdministration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_delivery_method: Option<CodedConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<Dosage>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_of_administration: Option<CodedConcept>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dosage {
    pub dose_quantity: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dose_unit_of_measure: Option<CodedConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimingAndDuration {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<Frequency>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub administration_timing: Option<AdministrationTiming>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frequency {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_numeric_value: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_units: Option<CodedConcept>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdministrationTiming {
    pub administration_timing_event: CodedConcept,
}

/// Additional medication date (e.g. expiration, start of therapy)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherMedicationDate {
    pub other_medication_date: DateOrDateTime,

    pub other_medication_date_qualifier: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use std::str::FromStr;

    fn medication() -> Medication {
        Medication {
            drug_description: "Oxycodone 5 MG Oral Tablet".to_string(),
            drug_coded: Some(DrugCoded {
                dea_schedule: Some(DeaSchedule {
                    code: "C48675".to_string(),
                }),
                ..DrugCoded::default()
            }),
            quantity: Quantity {
                value: Decimal::from_str("30.0").unwrap(),
                code_list_qualifier: Some("38".to_string()),
                quantity_unit_of_measure: CodedConcept::from_code("C48542"),
            },
            days_supply: None,
            written_date: DateOrDateTime::Date(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
            last_fill_date: None,
            substitutions: Some(0),
            number_of_refills: None,
            diagnosis: Vec::new(),
            note: None,
            sig: Sig::text("Take 1 tablet by mouth every 6 hours as needed"),
            rx_fill_indicator: None,
            prior_authorization_status: None,
            prescriber_checked_rems: None,
            office_of_pharmacy_affairs_id: None,
            other_medication_date: None,
            pharmacy_requested_refills: None,
        }
    }

    #[test]
    fn accessors_reach_nested_codes() {
        let med = medication();
        assert_eq!(med.dea_schedule_code(), Some("C48675"));
        assert_eq!(med.quantity_unit_code(), Some("C48542"));
    }

    #[test]
    fn zero_counts_are_emitted_and_absent_ones_are_not() {
        let value = serde_json::to_value(medication()).unwrap();
        assert_eq!(value["substitutions"], json!(0));
        assert!(value.get("number_of_refills").is_none());
        assert!(value.get("diagnosis").is_none());
        assert_eq!(value["quantity"]["value"], json!("30.0"));
        assert_eq!(value["written_date"], json!({ "date": "2024-01-15" }));
    }
}
