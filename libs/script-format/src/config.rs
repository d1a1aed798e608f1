//! Decoder configuration

use serde::{Deserialize, Serialize};

/// How the raw bytes handed to a decoder are wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportEncoding {
    /// XML when the payload starts with `<`, base64 otherwise.
    #[default]
    Auto,
    /// Plain SCRIPT XML.
    Xml,
    /// SCRIPT XML wrapped in standard base64.
    Base64,
}

/// Options for [`crate::Decoder`] and [`crate::decode_message_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub transport: TransportEncoding,

    /// Reject sources larger than this many bytes (before transport decoding).
    pub max_input_bytes: Option<usize>,
}

impl DecoderConfig {
    pub fn with_transport(mut self, transport: TransportEncoding) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_max_input_bytes(mut self, limit: usize) -> Self {
        self.max_input_bytes = Some(limit);
        self
    }
}
