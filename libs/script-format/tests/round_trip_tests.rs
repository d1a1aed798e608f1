use ncpdp_format::{decode_message, encode, from_json, to_json, to_json_pretty, to_json_value};
use ncpdp_models::{Body, Security};
use serde_json::json;

mod test_support;

#[test]
fn encode_then_decode_reproduces_every_sample() {
    for name in test_support::SAMPLES {
        let message = test_support::decode_fixture(name);
        let xml = encode(&message).unwrap();
        let again = decode_message(xml.as_bytes())
            .unwrap_or_else(|e| panic!("{name}: re-encoded XML failed to decode: {e}\n{xml}"));

        assert_eq!(again, message, "{name}");
        assert_eq!(
            to_json_value(&again).unwrap(),
            to_json_value(&message).unwrap(),
            "{name}"
        );
    }
}

#[test]
fn interchange_reads_back_into_the_same_message() {
    for name in test_support::SAMPLES {
        let message = test_support::decode_fixture(name);
        let json = to_json(&message).unwrap();
        assert_eq!(from_json(&json).unwrap(), message, "{name}");

        let pretty = to_json_pretty(&message).unwrap();
        assert_eq!(from_json(pretty.as_bytes()).unwrap(), message, "{name}");
    }
}

#[test]
fn interchange_omits_absent_and_keeps_present_fields() {
    let message = test_support::decode_fixture("sample-newrx.xml");
    let value = to_json_value(&message).unwrap();

    let header = &value["header"];
    assert_eq!(header["to"], json!({ "value": "7701630", "qualifier": "P" }));
    assert!(header.get("relates_to_message_id").is_none());
    assert!(header.get("rx_reference_number").is_none());
    assert_eq!(header["test_message"], json!(true));

    let rx = &value["body"]["new_rx"];
    let med = &rx["medication_prescribed"];
    assert_eq!(med["quantity"]["value"], json!("30.000"));
    assert_eq!(med["written_date"], json!({ "date": "2019-01-01" }));
    assert_eq!(med["substitutions"], json!(0));
    assert!(med.get("last_fill_date").is_none());

    let patient = &rx["patient"]["human_patient"];
    assert_eq!(patient["date_of_birth"], json!({ "date": "2004-06-21" }));
    assert_eq!(patient["address"]["address_line_1"], json!("27732 West Alameda Potholeladen Street"));
    assert_eq!(
        patient["communication_numbers"]["primary_telephone"]["supports_sms"],
        json!(true)
    );
    assert_eq!(
        rx["pharmacy"]["identification"]["ncpdpid"],
        json!("2455142")
    );
}

#[test]
fn interchange_keys_follow_schema_order() {
    let message = test_support::decode_fixture("sample-status.xml");
    let value = to_json_value(&message).unwrap();
    let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        ["transport_version", "structures_version", "header", "body"]
    );
}

#[test]
fn present_empty_values_survive_both_formats() {
    let message = test_support::decode_fixture("sample-renewal-request.xml");
    let xml = encode(&message).unwrap();
    assert!(xml.contains("<Note/>"));

    let decoded = decode_message(xml.as_bytes()).unwrap();
    let Body::RxRenewalRequest(req) = &decoded.body else {
        panic!("expected RxRenewalRequest");
    };
    assert_eq!(req.medication_dispensed.note.as_deref(), Some(""));

    let value = to_json_value(&message).unwrap();
    assert_eq!(
        value["body"]["rx_renewal_request"]["medication_dispensed"]["note"],
        json!("")
    );
}

#[test]
fn encoded_timestamps_keep_their_offset() {
    let message = test_support::decode_fixture("sample-renewal-response.xml");
    let xml = encode(&message).unwrap();
    assert!(xml.contains("<SentTime>2024-01-15T10:30:00-05:00</SentTime>"));
    assert!(xml.contains("<DateTime>2024-01-15T10:00:00-05:00</DateTime>"));
    assert!(xml.contains("<Approved>"));
}

#[test]
fn absent_security_stays_absent() {
    let xml = test_support::message_with_body("<Status><Code>010</Code></Status>");
    let message = decode_message(xml.as_bytes()).unwrap();
    assert_eq!(message.header.security, None);

    let value = to_json_value(&message).unwrap();
    assert!(value["header"].get("security").is_none());

    let encoded = encode(&message).unwrap();
    assert!(!encoded.contains("Security"));
    assert_eq!(decode_message(encoded.as_bytes()).unwrap(), message);
}

#[test]
fn empty_security_block_is_kept() {
    let xml = test_support::message_with_body("<Status><Code>010</Code></Status>")
        .replace("</SentTime>", "</SentTime>\n    <Security/>");
    let message = decode_message(xml.as_bytes()).unwrap();
    assert_eq!(message.header.security, Some(Security::default()));
    assert_eq!(to_json_value(&message).unwrap()["header"]["security"], json!({}));

    let encoded = encode(&message).unwrap();
    assert!(encoded.contains("<Security/>"));
    assert_eq!(decode_message(encoded.as_bytes()).unwrap(), message);
}

#[test]
fn carriage_returns_in_text_survive_reencoding() {
    let xml = test_support::message_with_body(
        "<Status><Code>010</Code><Description>line1&#13;&#10;line2</Description></Status>",
    );
    let message = decode_message(xml.as_bytes()).unwrap();
    let Body::Status(status) = &message.body else {
        panic!("expected Status");
    };
    assert_eq!(status.description.as_deref(), Some("line1\r\nline2"));

    let encoded = encode(&message).unwrap();
    assert_eq!(decode_message(encoded.as_bytes()).unwrap(), message);
}

#[test]
fn attribute_whitespace_survives_reencoding() {
    let xml = test_support::message_with_body("<Status><Code>010</Code></Status>")
        .replace(r#"Qualifier="P""#, r#"Qualifier="P&#9;Q&#10;R&#13;S""#);
    let message = decode_message(xml.as_bytes()).unwrap();
    assert_eq!(message.header.to.qualifier.as_deref(), Some("P\tQ\nR\rS"));

    let encoded = encode(&message).unwrap();
    assert_eq!(decode_message(encoded.as_bytes()).unwrap(), message);
}
