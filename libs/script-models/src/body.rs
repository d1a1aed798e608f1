//! Transaction bodies
//!
//! A SCRIPT `<Body>` carries exactly one transaction element. `Body` is the
//! union of the supported transactions; it serializes as a single-key object
//! named after the transaction (`{"new_rx": {...}}`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::clinical::{AllergyOrAdverseEvent, Observation};
use crate::common::Coded;
use crate::medication::Medication;
use crate::party::{BenefitsCoordination, Facility, Patient, Pharmacy, Prescriber, Supervisor};

/// The one transaction carried by a message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Body {
    NewRx(Box<NewRx>),
    /// Generic acknowledgement
    Status(Coded),
    Verify(Verify),
    RxRenewalRequest(Box<RxRenewalRequest>),
    RxRenewalResponse(Box<RxRenewalResponse>),
    CancelRx(Box<CancelRx>),
    /// Generic rejection
    Error(Coded),
}

impl Body {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Body::NewRx(_) => TransactionKind::NewRx,
            Body::Status(_) => TransactionKind::Status,
            Body::Verify(_) => TransactionKind::Verify,
            Body::RxRenewalRequest(_) => TransactionKind::RxRenewalRequest,
            Body::RxRenewalResponse(_) => TransactionKind::RxRenewalResponse,
            Body::CancelRx(_) => TransactionKind::CancelRx,
            Body::Error(_) => TransactionKind::Error,
        }
    }

    /// Patient of the transaction, for the kinds that carry one.
    pub fn patient(&self) -> Option<&Patient> {
        match self {
            Body::NewRx(tx) => Some(&tx.patient),
            Body::RxRenewalRequest(tx) => Some(&tx.patient),
            Body::RxRenewalResponse(tx) => Some(&tx.patient),
            Body::CancelRx(tx) => Some(&tx.patient),
            Body::Status(_) | Body::Verify(_) | Body::Error(_) => None,
        }
    }
}

/// Discriminant of [`Body`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    NewRx,
    Status,
    Verify,
    RxRenewalRequest,
    RxRenewalResponse,
    CancelRx,
    Error,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 7] = [
        TransactionKind::NewRx,
        TransactionKind::Status,
        TransactionKind::Verify,
        TransactionKind::RxRenewalRequest,
        TransactionKind::RxRenewalResponse,
        TransactionKind::CancelRx,
        TransactionKind::Error,
    ];

    /// Element name used for this transaction inside `<Body>`.
    pub fn element_name(&self) -> &'static str {
        match self {
            TransactionKind::NewRx => "NewRx",
            TransactionKind::Status => "Status",
            TransactionKind::Verify => "Verify",
            TransactionKind::RxRenewalRequest => "RxRenewalRequest",
            TransactionKind::RxRenewalResponse => "RxRenewalResponse",
            TransactionKind::CancelRx => "CancelRx",
            TransactionKind::Error => "Error",
        }
    }

    pub fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.element_name() == name)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_name())
    }
}

/// New prescription sent from prescriber to pharmacy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRx {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy_or_adverse_event: Option<AllergyOrAdverseEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub benefits_coordination: Option<BenefitsCoordination>,

    pub patient: Patient,

    pub pharmacy: Pharmacy,

    pub prescriber: Prescriber,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<Observation>,

    pub medication_prescribed: Medication,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Verify {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_status: Option<Coded>,
}

/// Pharmacy asking the prescriber to renew a prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RxRenewalRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_reference_number: Option<String>,

    pub patient: Patient,

    pub pharmacy: Pharmacy,

    pub prescriber: Prescriber,

    pub medication_dispensed: Medication,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub medication_prescribed: Option<Medication>,
}

/// Prescriber's answer to an [`RxRenewalRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RxRenewalResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_reference_number: Option<String>,

    pub response: RenewalResponse,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergy_or_adverse_event: Option<AllergyOrAdverseEvent>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub facility: Option<Facility>,

    pub patient: Patient,

    pub pharmacy: Pharmacy,

    pub prescriber: Prescriber,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor: Option<Supervisor>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<Observation>,

    pub medication_response: Medication,
}

/// Outcome of a renewal request; exactly one per response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalResponse {
    Approved(Reason),
    Replace {},
    ApprovedWithChanges {},
    Denied(Reason),
}

impl RenewalResponse {
    pub fn element_name(&self) -> &'static str {
        match self {
            RenewalResponse::Approved(_) => "Approved",
            RenewalResponse::Replace {} => "Replace",
            RenewalResponse::ApprovedWithChanges {} => "ApprovedWithChanges",
            RenewalResponse::Denied(_) => "Denied",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Reason {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub denial_reason: Option<String>,
}

/// Prescriber cancelling a previously sent prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelRx {
    pub patient: Patient,

    pub pharmacy: Pharmacy,

    pub prescriber: Prescriber,

    pub medication_prescribed: Medication,
}
