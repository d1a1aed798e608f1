#![allow(dead_code)]

use ncpdp_format::{decode_message, Message};
use std::fs;
use std::path::PathBuf;

/// Fixtures that decode cleanly, one per supported transaction.
pub const SAMPLES: &[&str] = &[
    "sample-newrx.xml",
    "sample-renewal-request.xml",
    "sample-renewal-response.xml",
    "sample-cancelrx.xml",
    "sample-status.xml",
    "sample-error.xml",
    "sample-verify.xml",
];

pub fn test_data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
}

pub fn fixture(name: &str) -> Vec<u8> {
    let path = test_data_dir().join(name);
    fs::read(&path).unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

pub fn decode_fixture(name: &str) -> Message {
    decode_message(&fixture(name)).unwrap_or_else(|e| panic!("Failed to decode {}: {}", name, e))
}

/// A complete message around the given `<Body>` content.
pub fn message_with_body(body: &str) -> String {
    format!(
        r#"<Message>
  <Header>
    <To Qualifier="P">7701630</To>
    <From Qualifier="C">1234567890</From>
    <MessageID>TEST-1</MessageID>
    <SentTime>2024-01-15T10:30:00Z</SentTime>
    <SenderSoftware>
      <SenderSoftwareDeveloper>Test</SenderSoftwareDeveloper>
      <SenderSoftwareProduct>Test</SenderSoftwareProduct>
      <SenderSoftwareVersionRelease>1</SenderSoftwareVersionRelease>
    </SenderSoftware>
  </Header>
  <Body>{body}</Body>
</Message>"#
    )
}

/// The NewRx fixture with its date of birth replaced by `token`.
pub fn newrx_with_birth_date(token: &str) -> Vec<u8> {
    let xml = String::from_utf8(fixture("sample-newrx.xml")).expect("fixture is UTF-8");
    xml.replace("<Date>2004-06-21</Date>", &format!("<Date>{token}</Date>"))
        .into_bytes()
}
