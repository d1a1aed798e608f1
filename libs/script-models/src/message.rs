//! SCRIPT message envelope
//!
//! `Message` is the root of every transaction. Its version attributes are kept
//! exactly as received: an attribute that was not sent stays `None`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::body::{Body, TransactionKind};

/// One SCRIPT transaction message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datatypes_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub structures_version: Option<String>,

    /// External code list version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecl_version: Option<String>,

    pub header: Header,

    pub body: Body,
}

impl Message {
    /// Which transaction the body carries.
    pub fn transaction_kind(&self) -> TransactionKind {
        self.body.kind()
    }
}

/// Routing and security envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub to: QualifierRef,

    pub from: QualifierRef,

    pub message_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub relates_to_message_id: Option<String>,

    pub sent_time: DateTime<FixedOffset>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Security>,

    pub sender_software: SenderSoftware,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox: Option<Mailbox>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_message: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rx_reference_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescriber_order_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub digital_signature: Option<DigitalSignature>,
}

/// A routing address and the scheme it belongs to (`<To Qualifier="P">`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifierRef {
    pub value: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qualifier: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Security {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender: Option<TertiaryIdentification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver: Option<TertiaryIdentification>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub username_token: Option<UsernameToken>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TertiaryIdentification {
    pub tertiary_identification: String,
}

/// WS-Security style credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsernameToken {
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<Password>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Password {
    pub value: String,

    /// `Type` attribute, e.g. `PasswordDigest`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub password_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderSoftware {
    pub sender_software_developer: String,
    pub sender_software_product: String,
    pub sender_software_version_release: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Mailbox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgement_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalSignature {
    /// `Version` attribute
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    pub digital_signature_indicator: bool,
}
