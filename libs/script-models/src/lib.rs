//! NCPDP SCRIPT data models
//!
//! This crate provides strongly-typed Rust structures for one SCRIPT transaction
//! message: the `Message` envelope, its routing `Header`, and a `Body` that carries
//! exactly one transaction.
//!
//! # Module Organization
//!
//! - `message`: envelope, header and security blocks
//! - `body`: the transaction union and the per-transaction payloads
//! - `party`: patients, pharmacies, prescribers, facilities and payers
//! - `medication`: prescribed/dispensed medication, quantities and sigs
//! - `clinical`: observations and allergies
//! - `common`: coded values and the date-or-datetime choice shared by the above
//!
//! # Design Philosophy
//!
//! - **Explicit optionality**: absent elements are `None`, present-but-empty
//!   elements are `Some(String::new())`
//! - **Required is required**: elements the schema mandates are plain fields
//! - **One transaction**: `Body` is an enum, so a message cannot carry zero or two
//!   transactions
//! - **Interchange ready**: every type serializes to JSON with snake_case names,
//!   omitting absent fields
//!
//! # Example
//!
//! ```rust
//! use ncpdp_models::{Body, Coded, TransactionKind};
//!
//! let body = Body::Status(Coded {
//!     code: "010".to_string(),
//!     qualifier: None,
//!     description: Some("Successful".to_string()),
//! });
//!
//! assert_eq!(body.kind(), TransactionKind::Status);
//! assert_eq!(
//!     serde_json::to_value(&body).unwrap(),
//!     serde_json::json!({ "status": { "code": "010", "description": "Successful" } })
//! );
//! ```

pub mod body;
pub mod clinical;
pub mod common;
pub mod medication;
pub mod message;
pub mod party;

// Re-export commonly used types
pub use body::*;
pub use clinical::*;
pub use common::*;
pub use medication::*;
pub use message::*;
pub use party::*;
