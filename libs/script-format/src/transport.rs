//! Transport envelope unwrapping
//!
//! Messages arrive either as raw XML or as base64 text holding the XML. The
//! envelope is removed here, before any structural parsing.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::TransportEncoding;
use crate::error::{DecodeError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Strip the transport envelope and return the XML text.
pub(crate) fn unwrap_payload(raw: &[u8], encoding: TransportEncoding) -> Result<String> {
    let trimmed = strip_bom(raw).trim_ascii();
    if trimmed.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    let decoded;
    let payload = match encoding {
        TransportEncoding::Xml => trimmed,
        TransportEncoding::Base64 => {
            decoded = decode_base64(trimmed)?;
            decoded.as_slice()
        }
        TransportEncoding::Auto if trimmed.starts_with(b"<") => trimmed,
        TransportEncoding::Auto => {
            decoded = decode_base64(trimmed)?;
            decoded.as_slice()
        }
    };

    let payload = strip_bom(payload).trim_ascii();
    if payload.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    std::str::from_utf8(payload)
        .map(str::to_string)
        .map_err(|e| DecodeError::MalformedEncoding(format!("payload is not UTF-8: {e}")))
}

fn decode_base64(text: &[u8]) -> Result<Vec<u8>> {
    // Line-wrapped base64 is common on message queues
    let compact: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();

    STANDARD
        .decode(compact)
        .map_err(|e| DecodeError::MalformedEncoding(format!("invalid base64 payload: {e}")))
}

fn strip_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
}
