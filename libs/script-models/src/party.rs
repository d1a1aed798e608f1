//! Parties to a transaction
//!
//! Patients, pharmacies, prescribers and the payers behind them. The same
//! building blocks (`Name`, `Address`, `CommunicationNumbers`) are shared by all
//! parties.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub human_patient: HumanPatient,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanPatient {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identification: Option<PatientIdentification>,

    pub name: Name,

    /// Administrative gender code (M, F, U)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    pub date_of_birth: DateOfBirth,

    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_numbers: Option<CommunicationNumbers>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_name_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PatientIdentification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medical_record_identification_number_ehr: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_security: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateOfBirth {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Name {
    pub last_name: String,

    pub first_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "address_line_1")]
    pub address_line1: String,

    #[serde(rename = "address_line_2", skip_serializing_if = "Option::is_none")]
    pub address_line2: Option<String>,

    pub city: String,

    pub state_province: String,

    pub postal_code: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Contact channels; every channel is optional
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommunicationNumbers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_telephone: Option<Telephone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub electronic_mail: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<Telephone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_telephone: Option<Telephone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_telephone: Option<Telephone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_telephone: Option<Telephone>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Telephone {
    pub number: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// `SupportsSMS` Y/N flag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supports_sms: Option<bool>,
}

impl Telephone {
    pub fn new(number: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            extension: None,
            supports_sms: None,
        }
    }
}

/// Provider identifiers (pharmacies, prescribers)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProviderIdentification {
    #[serde(rename = "ncpdpid", skip_serializing_if = "Option::is_none")]
    pub ncpdp_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub npi: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dea_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_license_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pharmacy {
    pub identification: ProviderIdentification,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pharmacist: Option<Pharmacist>,

    pub business_name: String,

    pub address: Address,

    pub communication_numbers: CommunicationNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmacist {
    pub name: Name,
}

/// Prescriber (and, under another element name, supervisor)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prescriber {
    pub non_veterinarian: NonVeterinarian,
}

/// Supervising prescriber; same content as [`Prescriber`]
pub type Supervisor = Prescriber;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonVeterinarian {
    pub identification: ProviderIdentification,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_location: Option<PracticeLocation>,

    pub name: Name,

    pub address: Address,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescriber_agent: Option<PrescriberAgent>,

    pub communication_numbers: CommunicationNumbers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeLocation {
    pub business_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriberAgent {
    pub name: Name,
}

/// Long-term care or other facility where the patient resides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub identification: PayerIdentification,

    pub facility_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub communication_numbers: Option<CommunicationNumbers>,
}

/// Payer / processor identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PayerIdentification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_identification_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub iin_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mutually_defined: Option<String>,
}

/// Pharmacy benefit coverage for the patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenefitsCoordination {
    pub payer_identification: PayerIdentification,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<Name>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pbm_member_id: Option<String>,
}
