//! JSON interchange rendering
//!
//! The interchange document is the serde form of [`Message`]: snake_case
//! keys in schema order, absent fields omitted, present empty fields kept.

use ncpdp_models::Message;
use serde_json::Value;

use crate::error::EncodeError;

pub fn to_json(message: &Message) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(message)?)
}

pub fn to_json_pretty(message: &Message) -> Result<String, EncodeError> {
    Ok(serde_json::to_string_pretty(message)?)
}

pub fn to_json_value(message: &Message) -> Result<Value, EncodeError> {
    Ok(serde_json::to_value(message)?)
}

/// Read an interchange document back into a [`Message`].
pub fn from_json(input: &[u8]) -> Result<Message, EncodeError> {
    Ok(serde_json::from_slice(input)?)
}
