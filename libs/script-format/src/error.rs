//! Error types for SCRIPT decoding and encoding

use thiserror::Error;

use crate::temporal::TemporalError;

/// Why a byte source could not be turned into a `Message`.
///
/// Cloneable so a memoized decode can hand out the same failure on every call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty input: no SCRIPT message found")]
    EmptyInput,

    #[error("input exceeds the configured limit of {limit} bytes")]
    InputTooLarge { limit: usize },

    #[error("malformed transport encoding: {0}")]
    MalformedEncoding(String),

    #[error("malformed structure at {path}: {reason}")]
    MalformedStructure { path: String, reason: String },

    #[error("malformed date at {path}: {value:?} is not a YYYY-MM-DD calendar date")]
    MalformedDate { path: String, value: String },

    #[error("malformed timestamp at {path}: {value:?} is not an RFC 3339 timestamp")]
    MalformedTimestamp { path: String, value: String },

    #[error("failed to read message source: {0}")]
    Io(String),
}

impl DecodeError {
    pub(crate) fn structure(path: impl Into<String>, reason: impl Into<String>) -> Self {
        DecodeError::MalformedStructure {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Attach the element path to a date adapter failure.
    pub(crate) fn temporal(path: impl Into<String>, err: TemporalError) -> Self {
        let path = path.into();
        match err {
            TemporalError::MalformedDate(value) => DecodeError::MalformedDate { path, value },
            TemporalError::MalformedTimestamp(value) => {
                DecodeError::MalformedTimestamp { path, value }
            }
        }
    }

    /// Element path the failure was detected at, when there is one.
    pub fn path(&self) -> Option<&str> {
        match self {
            DecodeError::MalformedStructure { path, .. }
            | DecodeError::MalformedDate { path, .. }
            | DecodeError::MalformedTimestamp { path, .. } => Some(path),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DecodeError {
    fn from(err: std::io::Error) -> Self {
        DecodeError::Io(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML write error: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Failure of a combined decode-then-render operation.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
