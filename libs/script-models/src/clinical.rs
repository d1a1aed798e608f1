//! Clinical context sent alongside a prescription

use serde::{Deserialize, Serialize};

use crate::common::{CodedConcept, DateOrDateTime};

/// Vital signs and other measurements
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Observation {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measurement: Vec<Measurement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// LOINC code of the vital sign
    pub vital_sign: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub loinc_version: Option<String>,

    pub value: String,

    /// UCUM unit
    pub unit_of_measure: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ucum_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_date: Option<DateOrDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllergyOrAdverseEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_known_allergies: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allergies: Vec<Allergy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Allergy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_of_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<DateOrDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub adverse_event: Option<CodedConcept>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub drug_product_coded: Option<CodedConcept>,
}
