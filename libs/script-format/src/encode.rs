//! Model to SCRIPT XML
//!
//! Elements are written in schema order; absent optional fields produce no
//! element, present-but-empty strings produce an empty element.

use ncpdp_models::*;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use rust_decimal::Decimal;
use std::borrow::Cow;
use std::io::Cursor;

use crate::error::EncodeError;
use crate::temporal::{format_date, format_timestamp};

pub const SCRIPT_NS: &str = "http://www.ncpdp.org/schema/SCRIPT";

type Written = Result<(), EncodeError>;

/// Render a message as an indented SCRIPT XML document.
pub fn encode(message: &Message) -> Result<String, EncodeError> {
    let mut w = XmlWriter::new();
    w.declaration()?;
    message.write_element(&mut w, "Message")?;
    w.into_string()
}

pub(crate) trait ToElement {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written;
}

pub(crate) struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn declaration(&mut self) -> Written {
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    fn into_string(self) -> Result<String, EncodeError> {
        let bytes = self.writer.into_inner().into_inner();
        Ok(String::from_utf8(bytes)?)
    }

    /// Element with attributes whose content is written by `body`.
    fn complex_with<F>(&mut self, name: &str, attrs: &[(&str, &str)], body: F) -> Written
    where
        F: FnOnce(&mut Self) -> Written,
    {
        self.writer.write_event(Event::Start(start_tag(name, attrs)))?;
        body(self)?;
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn complex<F>(&mut self, name: &str, body: F) -> Written
    where
        F: FnOnce(&mut Self) -> Written,
    {
        self.complex_with(name, &[], body)
    }

    fn text_with(&mut self, name: &str, attrs: &[(&str, &str)], value: &str) -> Written {
        let start = start_tag(name, attrs);
        if value.is_empty() {
            self.writer.write_event(Event::Empty(start))?;
        } else {
            self.writer.write_event(Event::Start(start))?;
            self.writer
                .write_event(Event::Text(BytesText::from_escaped(escape_text(value))))?;
            self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        }
        Ok(())
    }

    fn empty(&mut self, name: &str) -> Written {
        self.writer.write_event(Event::Empty(BytesStart::new(name)))?;
        Ok(())
    }

    fn text(&mut self, name: &str, value: &str) -> Written {
        self.text_with(name, &[], value)
    }

    fn opt_text(&mut self, name: &str, value: &Option<String>) -> Written {
        match value {
            Some(value) => self.text(name, value),
            None => Ok(()),
        }
    }

    fn element<T: ToElement>(&mut self, name: &str, value: &T) -> Written {
        value.write_element(self, name)
    }

    fn opt_element<T: ToElement>(&mut self, name: &str, value: &Option<T>) -> Written {
        match value {
            Some(value) => value.write_element(self, name),
            None => Ok(()),
        }
    }

    fn list<T: ToElement>(&mut self, name: &str, values: &[T]) -> Written {
        for value in values {
            value.write_element(self, name)?;
        }
        Ok(())
    }

    fn decimal(&mut self, name: &str, value: &Decimal) -> Written {
        self.text(name, &value.to_string())
    }

    fn opt_decimal(&mut self, name: &str, value: &Option<Decimal>) -> Written {
        match value {
            Some(value) => self.decimal(name, value),
            None => Ok(()),
        }
    }

    fn opt_count(&mut self, name: &str, value: Option<u32>) -> Written {
        match value {
            Some(value) => self.text(name, &value.to_string()),
            None => Ok(()),
        }
    }

    fn flag(&mut self, name: &str, value: bool) -> Written {
        self.text(name, if value { "true" } else { "false" })
    }

    fn opt_flag(&mut self, name: &str, value: Option<bool>) -> Written {
        match value {
            Some(value) => self.flag(name, value),
            None => Ok(()),
        }
    }
}

fn start_tag<'n>(name: &'n str, attrs: &[(&str, &str)]) -> BytesStart<'n> {
    let mut start = BytesStart::new(name);
    for (key, value) in attrs {
        let value = escape_attribute(value);
        start.push_attribute((key.as_bytes(), value.as_bytes()));
    }
    start
}

/// Markup escaping plus a character reference for CR, which a reader would
/// otherwise fold into LF.
fn escape_text(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if escaped.contains('\r') {
        Cow::Owned(escaped.replace('\r', "&#13;"))
    } else {
        escaped
    }
}

/// Attribute values also lose TAB and LF to normalization unless written as
/// character references.
fn escape_attribute(value: &str) -> Cow<'_, str> {
    let escaped = escape(value);
    if escaped.contains(&['\t', '\n', '\r'][..]) {
        Cow::Owned(
            escaped
                .replace('\t', "&#9;")
                .replace('\n', "&#10;")
                .replace('\r', "&#13;"),
        )
    } else {
        escaped
    }
}

/// Attributes that are present, in order.
fn present<'v>(attrs: &[(&'static str, &'v Option<String>)]) -> Vec<(&'static str, &'v str)> {
    attrs
        .iter()
        .filter_map(|(name, value)| value.as_deref().map(|v| (*name, v)))
        .collect()
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

impl ToElement for Message {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        let mut attrs = vec![("xmlns", SCRIPT_NS)];
        attrs.extend(present(&[
            ("DatatypesVersion", &self.datatypes_version),
            ("TransportVersion", &self.transport_version),
            ("TransactionDomain", &self.transaction_domain),
            ("TransactionVersion", &self.transaction_version),
            ("StructuresVersion", &self.structures_version),
            ("ECLVersion", &self.ecl_version),
        ]));
        w.complex_with(name, &attrs, |w| {
            w.element("Header", &self.header)?;
            w.element("Body", &self.body)
        })
    }
}

impl ToElement for Header {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("To", &self.to)?;
            w.element("From", &self.from)?;
            w.text("MessageID", &self.message_id)?;
            w.opt_text("RelatesToMessageID", &self.relates_to_message_id)?;
            w.text("SentTime", &format_timestamp(&self.sent_time))?;
            w.opt_element("Security", &self.security)?;
            w.element("SenderSoftware", &self.sender_software)?;
            w.opt_element("Mailbox", &self.mailbox)?;
            w.opt_flag("TestMessage", self.test_message)?;
            w.opt_text("RxReferenceNumber", &self.rx_reference_number)?;
            w.opt_text("PrescriberOrderNumber", &self.prescriber_order_number)?;
            w.opt_element("DigitalSignature", &self.digital_signature)
        })
    }
}

impl ToElement for QualifierRef {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.text_with(name, &present(&[("Qualifier", &self.qualifier)]), &self.value)
    }
}

impl ToElement for Security {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("Sender", &self.sender)?;
            w.opt_element("Receiver", &self.receiver)?;
            w.opt_element("UsernameToken", &self.username_token)
        })
    }
}

impl ToElement for TertiaryIdentification {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("TertiaryIdentification", &self.tertiary_identification)
        })
    }
}

impl ToElement for UsernameToken {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("Username", &self.username)?;
            w.opt_element("Password", &self.password)?;
            w.opt_text("Nonce", &self.nonce)?;
            match &self.created {
                Some(created) => w.text("Created", &format_timestamp(created)),
                None => Ok(()),
            }
        })
    }
}

impl ToElement for Password {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.text_with(name, &present(&[("Type", &self.password_type)]), &self.value)
    }
}

impl ToElement for SenderSoftware {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("SenderSoftwareDeveloper", &self.sender_software_developer)?;
            w.text("SenderSoftwareProduct", &self.sender_software_product)?;
            w.text(
                "SenderSoftwareVersionRelease",
                &self.sender_software_version_release,
            )
        })
    }
}

impl ToElement for Mailbox {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("DeliveredID", &self.delivered_id)?;
            w.opt_text("AcknowledgementID", &self.acknowledgement_id)
        })
    }
}

impl ToElement for DigitalSignature {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex_with(name, &present(&[("Version", &self.version)]), |w| {
            w.flag("DigitalSignatureIndicator", self.digital_signature_indicator)
        })
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

impl ToElement for Body {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        let tx = self.kind().element_name();
        w.complex(name, |w| match self {
            Body::NewRx(inner) => w.element(tx, &**inner),
            Body::Status(inner) => w.element(tx, inner),
            Body::Verify(inner) => w.element(tx, inner),
            Body::RxRenewalRequest(inner) => w.element(tx, &**inner),
            Body::RxRenewalResponse(inner) => w.element(tx, &**inner),
            Body::CancelRx(inner) => w.element(tx, &**inner),
            Body::Error(inner) => w.element(tx, inner),
        })
    }
}

impl ToElement for NewRx {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("AllergyOrAdverseEvent", &self.allergy_or_adverse_event)?;
            w.opt_element("BenefitsCoordination", &self.benefits_coordination)?;
            w.element("Patient", &self.patient)?;
            w.element("Pharmacy", &self.pharmacy)?;
            w.element("Prescriber", &self.prescriber)?;
            w.opt_element("Observation", &self.observation)?;
            w.element("MedicationPrescribed", &self.medication_prescribed)
        })
    }
}

impl ToElement for Verify {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.opt_element("VerifyStatus", &self.verify_status))
    }
}

impl ToElement for RxRenewalRequest {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("RequestReferenceNumber", &self.request_reference_number)?;
            w.element("Patient", &self.patient)?;
            w.element("Pharmacy", &self.pharmacy)?;
            w.element("Prescriber", &self.prescriber)?;
            w.element("MedicationDispensed", &self.medication_dispensed)?;
            w.opt_element("MedicationPrescribed", &self.medication_prescribed)
        })
    }
}

impl ToElement for RxRenewalResponse {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("RequestReferenceNumber", &self.request_reference_number)?;
            w.element("Response", &self.response)?;
            w.opt_element("AllergyOrAdverseEvent", &self.allergy_or_adverse_event)?;
            w.opt_element("Facility", &self.facility)?;
            w.element("Patient", &self.patient)?;
            w.element("Pharmacy", &self.pharmacy)?;
            w.element("Prescriber", &self.prescriber)?;
            w.opt_element("Supervisor", &self.supervisor)?;
            w.opt_element("Observation", &self.observation)?;
            w.element("MedicationResponse", &self.medication_response)
        })
    }
}

impl ToElement for RenewalResponse {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        let choice = self.element_name();
        w.complex(name, |w| match self {
            RenewalResponse::Approved(reason) | RenewalResponse::Denied(reason) => {
                w.element(choice, reason)
            }
            RenewalResponse::Replace {} | RenewalResponse::ApprovedWithChanges {} => {
                w.empty(choice)
            }
        })
    }
}

impl ToElement for Reason {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("ReasonCode", &self.reason_code)?;
            w.opt_text("ReferenceNumber", &self.reference_number)?;
            w.opt_text("DenialReason", &self.denial_reason)
        })
    }
}

impl ToElement for CancelRx {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("Patient", &self.patient)?;
            w.element("Pharmacy", &self.pharmacy)?;
            w.element("Prescriber", &self.prescriber)?;
            w.element("MedicationPrescribed", &self.medication_prescribed)
        })
    }
}

// ---------------------------------------------------------------------------
// Shared values
// ---------------------------------------------------------------------------

impl ToElement for Coded {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("Code", &self.code)?;
            w.opt_text("Qualifier", &self.qualifier)?;
            w.opt_text("Description", &self.description)
        })
    }
}

impl ToElement for CodedConcept {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("Text", &self.text)?;
            w.opt_text("Qualifier", &self.qualifier)?;
            w.opt_text("Code", &self.code)
        })
    }
}

impl ToElement for DateOrDateTime {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| match self {
            DateOrDateTime::Date(date) => w.text("Date", &format_date(*date)),
            DateOrDateTime::DateTime(instant) => w.text("DateTime", &format_timestamp(instant)),
        })
    }
}

// ---------------------------------------------------------------------------
// Parties
// ---------------------------------------------------------------------------

impl ToElement for Patient {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.element("HumanPatient", &self.human_patient))
    }
}

impl ToElement for HumanPatient {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("Identification", &self.identification)?;
            w.element("Name", &self.name)?;
            w.opt_text("Gender", &self.gender)?;
            w.element("DateOfBirth", &self.date_of_birth)?;
            w.element("Address", &self.address)?;
            w.opt_element("CommunicationNumbers", &self.communication_numbers)?;
            w.opt_text("LanguageNameCode", &self.language_name_code)
        })
    }
}

impl ToElement for PatientIdentification {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text(
                "MedicalRecordIdentificationNumberEHR",
                &self.medical_record_identification_number_ehr,
            )?;
            w.opt_text("SocialSecurity", &self.social_security)
        })
    }
}

impl ToElement for DateOfBirth {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.text("Date", &format_date(self.date)))
    }
}

impl ToElement for Name {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("LastName", &self.last_name)?;
            w.text("FirstName", &self.first_name)?;
            w.opt_text("MiddleName", &self.middle_name)?;
            w.opt_text("Suffix", &self.suffix)?;
            w.opt_text("Prefix", &self.prefix)
        })
    }
}

impl ToElement for Address {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("AddressLine1", &self.address_line1)?;
            w.opt_text("AddressLine2", &self.address_line2)?;
            w.text("City", &self.city)?;
            w.text("StateProvince", &self.state_province)?;
            w.text("PostalCode", &self.postal_code)?;
            w.opt_text("CountryCode", &self.country_code)
        })
    }
}

impl ToElement for CommunicationNumbers {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("PrimaryTelephone", &self.primary_telephone)?;
            w.opt_text("ElectronicMail", &self.electronic_mail)?;
            w.opt_element("Fax", &self.fax)?;
            w.opt_element("HomeTelephone", &self.home_telephone)?;
            w.opt_element("WorkTelephone", &self.work_telephone)?;
            w.opt_element("OtherTelephone", &self.other_telephone)
        })
    }
}

impl ToElement for Telephone {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("Number", &self.number)?;
            w.opt_text("Extension", &self.extension)?;
            // SCRIPT spells this flag Y/N
            match self.supports_sms {
                Some(sms) => w.text("SupportsSMS", if sms { "Y" } else { "N" }),
                None => Ok(()),
            }
        })
    }
}

impl ToElement for ProviderIdentification {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("NCPDPID", &self.ncpdp_id)?;
            w.opt_text("NPI", &self.npi)?;
            w.opt_text("DEANumber", &self.dea_number)?;
            w.opt_text("StateLicenseNumber", &self.state_license_number)
        })
    }
}

impl ToElement for Pharmacy {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("Identification", &self.identification)?;
            w.opt_element("Pharmacist", &self.pharmacist)?;
            w.text("BusinessName", &self.business_name)?;
            w.element("Address", &self.address)?;
            w.element("CommunicationNumbers", &self.communication_numbers)
        })
    }
}

impl ToElement for Pharmacist {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.element("Name", &self.name))
    }
}

impl ToElement for Prescriber {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.element("NonVeterinarian", &self.non_veterinarian))
    }
}

impl ToElement for NonVeterinarian {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("Identification", &self.identification)?;
            w.opt_text("Specialty", &self.specialty)?;
            w.opt_element("PracticeLocation", &self.practice_location)?;
            w.element("Name", &self.name)?;
            w.element("Address", &self.address)?;
            w.opt_element("PrescriberAgent", &self.prescriber_agent)?;
            w.element("CommunicationNumbers", &self.communication_numbers)
        })
    }
}

impl ToElement for PracticeLocation {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.text("BusinessName", &self.business_name))
    }
}

impl ToElement for PrescriberAgent {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.element("Name", &self.name))
    }
}

impl ToElement for Facility {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("Identification", &self.identification)?;
            w.text("FacilityName", &self.facility_name)?;
            w.opt_element("Address", &self.address)?;
            w.opt_element("CommunicationNumbers", &self.communication_numbers)
        })
    }
}

impl ToElement for PayerIdentification {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("PayerID", &self.payer_id)?;
            w.opt_text(
                "ProcessorIdentificationNumber",
                &self.processor_identification_number,
            )?;
            w.opt_text("IINNumber", &self.iin_number)?;
            w.opt_text("MutuallyDefined", &self.mutually_defined)
        })
    }
}

impl ToElement for BenefitsCoordination {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("PayerIdentification", &self.payer_identification)?;
            w.opt_text("PayerName", &self.payer_name)?;
            w.opt_text("CardholderID", &self.cardholder_id)?;
            w.opt_element("CardHolderName", &self.card_holder_name)?;
            w.opt_text("GroupID", &self.group_id)?;
            w.opt_text("GroupName", &self.group_name)?;
            w.opt_text("PBMMemberID", &self.pbm_member_id)
        })
    }
}

// ---------------------------------------------------------------------------
// Medication
// ---------------------------------------------------------------------------

impl ToElement for Medication {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("DrugDescription", &self.drug_description)?;
            w.opt_element("DrugCoded", &self.drug_coded)?;
            w.element("Quantity", &self.quantity)?;
            w.opt_decimal("DaysSupply", &self.days_supply)?;
            w.element("WrittenDate", &self.written_date)?;
            w.opt_element("LastFillDate", &self.last_fill_date)?;
            w.opt_count("Substitutions", self.substitutions)?;
            w.opt_count("NumberOfRefills", self.number_of_refills)?;
            w.list("Diagnosis", &self.diagnosis)?;
            w.opt_text("Note", &self.note)?;
            w.element("Sig", &self.sig)?;
            w.opt_text("RxFillIndicator", &self.rx_fill_indicator)?;
            w.opt_text("PriorAuthorizationStatus", &self.prior_authorization_status)?;
            w.opt_text("PrescriberCheckedREMS", &self.prescriber_checked_rems)?;
            w.opt_text(
                "OfficeOfPharmacyAffairsID",
                &self.office_of_pharmacy_affairs_id,
            )?;
            w.opt_element("OtherMedicationDate", &self.other_medication_date)?;
            w.opt_count("PharmacyRequestedRefills", self.pharmacy_requested_refills)
        })
    }
}

impl ToElement for DrugCoded {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("ProductCode", &self.product_code)?;
            w.opt_element("Strength", &self.strength)?;
            w.opt_element("DrugDBCode", &self.drug_db_code)?;
            w.opt_element("DEASchedule", &self.dea_schedule)
        })
    }
}

impl ToElement for Strength {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("StrengthValue", &self.strength_value)?;
            w.opt_element("StrengthForm", &self.strength_form)?;
            w.opt_element("StrengthUnitOfMeasure", &self.strength_unit_of_measure)
        })
    }
}

impl ToElement for DeaSchedule {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.text("Code", &self.code))
    }
}

impl ToElement for Quantity {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.decimal("Value", &self.value)?;
            w.opt_text("CodeListQualifier", &self.code_list_qualifier)?;
            w.element("QuantityUnitOfMeasure", &self.quantity_unit_of_measure)
        })
    }
}

impl ToElement for Diagnosis {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text(
                "ClinicalInformationQualifier",
                &self.clinical_information_qualifier,
            )?;
            w.element("Primary", &self.primary)?;
            w.opt_element("Secondary", &self.secondary)
        })
    }
}

impl ToElement for Sig {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("SigText", &self.sig_text)?;
            w.opt_element("CodeSystem", &self.code_system)?;
            w.opt_element("Instruction", &self.instruction)
        })
    }
}

impl ToElement for SigCodeSystem {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("SNOMEDVersion", &self.snomed_version)?;
            w.opt_text("FMTVersion", &self.fmt_version)
        })
    }
}

impl ToElement for Instruction {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("DoseAdministration", &self.dose_administration)?;
            w.list("TimingAndDuration", &self.timing_and_duration)
        })
    }
}

impl ToElement for DoseAdministration {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("DoseDeliveryMethod", &self.dose_delivery_method)?;
            w.opt_element("Dosage", &self.dosage)?;
            w.opt_element("RouteOfAdministration", &self.route_of_administration)
        })
    }
}

impl ToElement for Dosage {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.decimal("DoseQuantity", &self.dose_quantity)?;
            w.opt_element("DoseUnitOfMeasure", &self.dose_unit_of_measure)
        })
    }
}

impl ToElement for TimingAndDuration {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_element("Frequency", &self.frequency)?;
            w.opt_element("AdministrationTiming", &self.administration_timing)
        })
    }
}

impl ToElement for Frequency {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_count("FrequencyNumericValue", self.frequency_numeric_value)?;
            w.opt_element("FrequencyUnits", &self.frequency_units)
        })
    }
}

impl ToElement for AdministrationTiming {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("AdministrationTimingEvent", &self.administration_timing_event)
        })
    }
}

impl ToElement for OtherMedicationDate {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.element("OtherMedicationDate", &self.other_medication_date)?;
            w.text(
                "OtherMedicationDateQualifier",
                &self.other_medication_date_qualifier,
            )
        })
    }
}

// ---------------------------------------------------------------------------
// Clinical
// ---------------------------------------------------------------------------

impl ToElement for Observation {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| w.list("Measurement", &self.measurement))
    }
}

impl ToElement for Measurement {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.text("VitalSign", &self.vital_sign)?;
            w.opt_text("LOINCVersion", &self.loinc_version)?;
            w.text("Value", &self.value)?;
            w.text("UnitOfMeasure", &self.unit_of_measure)?;
            w.opt_text("UCUMVersion", &self.ucum_version)?;
            w.opt_element("ObservationDate", &self.observation_date)
        })
    }
}

impl ToElement for AllergyOrAdverseEvent {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("NoKnownAllergies", &self.no_known_allergies)?;
            w.list("Allergies", &self.allergies)
        })
    }
}

impl ToElement for Allergy {
    fn write_element(&self, w: &mut XmlWriter, name: &str) -> Written {
        w.complex(name, |w| {
            w.opt_text("SourceOfInformation", &self.source_of_information)?;
            w.opt_element("EffectiveDate", &self.effective_date)?;
            w.opt_element("AdverseEvent", &self.adverse_event)?;
            w.opt_element("DrugProductCoded", &self.drug_product_coded)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn status_message() -> Message {
        Message {
            datatypes_version: None,
            transport_version: Some("20170715".to_string()),
            transaction_domain: None,
            transaction_version: None,
            structures_version: None,
            ecl_version: None,
            header: Header {
                to: QualifierRef {
                    value: "7701630".to_string(),
                    qualifier: Some("P".to_string()),
                },
                from: QualifierRef {
                    value: "1234567".to_string(),
                    qualifier: None,
                },
                message_id: "msg-1".to_string(),
                relates_to_message_id: None,
                sent_time: DateTime::parse_from_rfc3339("2024-01-15T10:30:00Z").unwrap(),
                security: None,
                sender_software: SenderSoftware {
                    sender_software_developer: "Acme".to_string(),
                    sender_software_product: "Scripts & Co".to_string(),
                    sender_software_version_release: "1.0".to_string(),
                },
                mailbox: None,
                test_message: Some(false),
                rx_reference_number: None,
                prescriber_order_number: Some(String::new()),
                digital_signature: None,
            },
            body: Body::Status(Coded {
                code: "010".to_string(),
                qualifier: None,
                description: None,
            }),
        }
    }

    #[test]
    fn root_carries_namespace_and_present_attributes_only() {
        let xml = encode(&status_message()).unwrap();
        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(
            r#"<Message xmlns="http://www.ncpdp.org/schema/SCRIPT" TransportVersion="20170715">"#
        ));
        assert!(!xml.contains("DatatypesVersion"));
    }

    #[test]
    fn leaf_values_are_escaped_and_empty_values_self_close() {
        let xml = encode(&status_message()).unwrap();
        assert!(xml.contains("<SenderSoftwareProduct>Scripts &amp; Co</SenderSoftwareProduct>"));
        assert!(xml.contains("<PrescriberOrderNumber/>"));
        assert!(xml.contains("<TestMessage>false</TestMessage>"));
        assert!(xml.contains(r#"<To Qualifier="P">7701630</To>"#));
        assert!(xml.contains("<From>1234567</From>"));
        assert!(xml.contains("<SentTime>2024-01-15T10:30:00Z</SentTime>"));
        assert!(!xml.contains("RelatesToMessageID"));
    }

    #[test]
    fn line_breaks_are_written_as_character_references() {
        let mut message = status_message();
        message.header.to.qualifier = Some("P\tQ\n".to_string());
        message.header.sender_software.sender_software_product = "a\r\nb".to_string();
        let xml = encode(&message).unwrap();
        assert!(xml.contains(r#"<To Qualifier="P&#9;Q&#10;">7701630</To>"#));
        assert!(xml.contains("<SenderSoftwareProduct>a&#13;\nb</SenderSoftwareProduct>"));
    }

    #[test]
    fn body_wraps_transaction_element() {
        let xml = encode(&status_message()).unwrap();
        let body = xml.find("<Body>").unwrap();
        let status = xml.find("<Status>").unwrap();
        let code = xml.find("<Code>010</Code>").unwrap();
        assert!(body < status && status < code);
    }
}
