//! NCPDP SCRIPT codec
//!
//! Turns SCRIPT XML (plain, or wrapped in base64 for transport) into the
//! typed model from `ncpdp-models`, and back:
//! - `Decoder` / `decode_message`: bytes to [`Message`], with element paths on
//!   every failure.
//! - `encode`: [`Message`] to indented SCRIPT XML.
//! - `to_json` and friends: the JSON interchange form handed to downstream
//!   consumers.
//!
//! ```rust
//! use ncpdp_format::{decode_message, to_json_value};
//!
//! let xml = br#"<Message>
//!   <Header>
//!     <To Qualifier="P">7701630</To>
//!     <From Qualifier="C">1234567</From>
//!     <MessageID>abc-1</MessageID>
//!     <SentTime>2024-01-15T10:30:00Z</SentTime>
//!     <SenderSoftware>
//!       <SenderSoftwareDeveloper>Acme</SenderSoftwareDeveloper>
//!       <SenderSoftwareProduct>Rx</SenderSoftwareProduct>
//!       <SenderSoftwareVersionRelease>1</SenderSoftwareVersionRelease>
//!     </SenderSoftware>
//!   </Header>
//!   <Body><Status><Code>010</Code></Status></Body>
//! </Message>"#;
//!
//! let message = decode_message(xml).unwrap();
//! let json = to_json_value(&message).unwrap();
//! assert_eq!(json["body"]["status"]["code"], "010");
//! ```

mod config;
mod decode;
mod decoder;
mod element;
mod encode;
mod error;
mod interchange;
mod temporal;
mod transport;

pub use config::{DecoderConfig, TransportEncoding};
pub use decoder::{decode_message, decode_message_with, Decoder};
pub use encode::{encode, SCRIPT_NS};
pub use error::{CodecError, DecodeError, EncodeError, Result};
pub use interchange::{from_json, to_json, to_json_pretty, to_json_value};
pub use temporal::{format_date, format_timestamp, parse_date, parse_timestamp, TemporalError};

pub use ncpdp_models::Message;
