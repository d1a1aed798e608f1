//! SCRIPT XML to model
//!
//! One `FromElement` impl per model type. Element names follow the SCRIPT
//! schema; attributes are only read where the schema defines them (version
//! attributes on `Message`, `Qualifier` on routing references, `Type` on
//! passwords, `Version` on digital signatures).

use ncpdp_models::*;
use roxmltree::Document;

use crate::element::{Element, FromElement};
use crate::error::{DecodeError, Result};

/// Parse SCRIPT XML text into a [`Message`].
pub(crate) fn parse_message(text: &str) -> Result<Message> {
    if !text.contains('<') {
        return Err(DecodeError::EmptyInput);
    }

    let doc = Document::parse(text).map_err(|e| DecodeError::structure("Message", e.to_string()))?;
    let root = Element::root(doc.root_element());
    if root.name() != "Message" {
        return Err(DecodeError::structure(
            root.path(),
            "root element must be Message",
        ));
    }

    root.decode()
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

impl FromElement for Message {
    const CHILDREN: &'static [&'static str] = &["Header", "Body"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Message {
            datatypes_version: el.attribute("DatatypesVersion"),
            transport_version: el.attribute("TransportVersion"),
            transaction_domain: el.attribute("TransactionDomain"),
            transaction_version: el.attribute("TransactionVersion"),
            structures_version: el.attribute("StructuresVersion"),
            ecl_version: el.attribute("ECLVersion"),
            header: el.req("Header")?,
            body: el.req("Body")?,
        })
    }
}

impl FromElement for Header {
    const CHILDREN: &'static [&'static str] = &[
        "To",
        "From",
        "MessageID",
        "RelatesToMessageID",
        "SentTime",
        "Security",
        "SenderSoftware",
        "Mailbox",
        "TestMessage",
        "RxReferenceNumber",
        "PrescriberOrderNumber",
        "DigitalSignature",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Header {
            to: el.req("To")?,
            from: el.req("From")?,
            message_id: el.req_text("MessageID")?,
            relates_to_message_id: el.opt_text("RelatesToMessageID")?,
            sent_time: el.req_timestamp("SentTime")?,
            security: el.opt("Security")?,
            sender_software: el.req("SenderSoftware")?,
            mailbox: el.opt("Mailbox")?,
            test_message: el.opt_flag("TestMessage")?,
            rx_reference_number: el.opt_text("RxReferenceNumber")?,
            prescriber_order_number: el.opt_text("PrescriberOrderNumber")?,
            digital_signature: el.opt("DigitalSignature")?,
        })
    }
}

impl FromElement for QualifierRef {
    const CHILDREN: &'static [&'static str] = &[];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(QualifierRef {
            value: el.text(),
            qualifier: el.attribute("Qualifier"),
        })
    }
}

impl FromElement for Security {
    const CHILDREN: &'static [&'static str] = &["Sender", "Receiver", "UsernameToken"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Security {
            sender: el.opt("Sender")?,
            receiver: el.opt("Receiver")?,
            username_token: el.opt("UsernameToken")?,
        })
    }
}

impl FromElement for TertiaryIdentification {
    const CHILDREN: &'static [&'static str] = &["TertiaryIdentification"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(TertiaryIdentification {
            tertiary_identification: el.req_text("TertiaryIdentification")?,
        })
    }
}

impl FromElement for UsernameToken {
    const CHILDREN: &'static [&'static str] = &["Username", "Password", "Nonce", "Created"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(UsernameToken {
            username: el.req_text("Username")?,
            password: el.opt("Password")?,
            nonce: el.opt_text("Nonce")?,
            created: el.opt_timestamp("Created")?,
        })
    }
}

impl FromElement for Password {
    const CHILDREN: &'static [&'static str] = &[];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Password {
            value: el.text(),
            password_type: el.attribute("Type"),
        })
    }
}

impl FromElement for SenderSoftware {
    const CHILDREN: &'static [&'static str] = &[
        "SenderSoftwareDeveloper",
        "SenderSoftwareProduct",
        "SenderSoftwareVersionRelease",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(SenderSoftware {
            sender_software_developer: el.req_text("SenderSoftwareDeveloper")?,
            sender_software_product: el.req_text("SenderSoftwareProduct")?,
            sender_software_version_release: el.req_text("SenderSoftwareVersionRelease")?,
        })
    }
}

impl FromElement for Mailbox {
    const CHILDREN: &'static [&'static str] = &["DeliveredID", "AcknowledgementID"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Mailbox {
            delivered_id: el.opt_text("DeliveredID")?,
            acknowledgement_id: el.opt_text("AcknowledgementID")?,
        })
    }
}

impl FromElement for DigitalSignature {
    const CHILDREN: &'static [&'static str] = &["DigitalSignatureIndicator"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(DigitalSignature {
            version: el.attribute("Version"),
            digital_signature_indicator: el.req_flag("DigitalSignatureIndicator")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Transactions
// ---------------------------------------------------------------------------

impl FromElement for Body {
    const CHILDREN: &'static [&'static str] = &[
        "NewRx",
        "Status",
        "Verify",
        "RxRenewalRequest",
        "RxRenewalResponse",
        "CancelRx",
        "Error",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        let mut transactions = el.element_children().into_iter();
        let Some(tx) = transactions.next() else {
            return Err(DecodeError::structure(el.path(), "no transaction element"));
        };
        if let Some(extra) = transactions.next() {
            return Err(DecodeError::structure(
                el.path(),
                format!(
                    "body carries more than one transaction ({} and {})",
                    tx.name(),
                    extra.name()
                ),
            ));
        }

        let Some(kind) = TransactionKind::from_element_name(tx.name()) else {
            return Err(DecodeError::structure(
                tx.path(),
                format!("unsupported transaction {}", tx.name()),
            ));
        };

        Ok(match kind {
            TransactionKind::NewRx => Body::NewRx(Box::new(tx.decode()?)),
            TransactionKind::Status => Body::Status(tx.decode()?),
            TransactionKind::Verify => Body::Verify(tx.decode()?),
            TransactionKind::RxRenewalRequest => Body::RxRenewalRequest(Box::new(tx.decode()?)),
            TransactionKind::RxRenewalResponse => {
                Body::RxRenewalResponse(Box::new(tx.decode()?))
            }
            TransactionKind::CancelRx => Body::CancelRx(Box::new(tx.decode()?)),
            TransactionKind::Error => Body::Error(tx.decode()?),
        })
    }
}

impl FromElement for NewRx {
    const CHILDREN: &'static [&'static str] = &[
        "AllergyOrAdverseEvent",
        "BenefitsCoordination",
        "Patient",
        "Pharmacy",
        "Prescriber",
        "Observation",
        "MedicationPrescribed",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(NewRx {
            allergy_or_adverse_event: el.opt("AllergyOrAdverseEvent")?,
            benefits_coordination: el.opt("BenefitsCoordination")?,
            patient: el.req("Patient")?,
            pharmacy: el.req("Pharmacy")?,
            prescriber: el.req("Prescriber")?,
            observation: el.opt("Observation")?,
            medication_prescribed: el.req("MedicationPrescribed")?,
        })
    }
}

impl FromElement for Verify {
    const CHILDREN: &'static [&'static str] = &["VerifyStatus"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Verify {
            verify_status: el.opt("VerifyStatus")?,
        })
    }
}

impl FromElement for RxRenewalRequest {
    const CHILDREN: &'static [&'static str] = &[
        "RequestReferenceNumber",
        "Patient",
        "Pharmacy",
        "Prescriber",
        "MedicationDispensed",
        "MedicationPrescribed",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(RxRenewalRequest {
            request_reference_number: el.opt_text("RequestReferenceNumber")?,
            patient: el.req("Patient")?,
            pharmacy: el.req("Pharmacy")?,
            prescriber: el.req("Prescriber")?,
            medication_dispensed: el.req("MedicationDispensed")?,
            medication_prescribed: el.opt("MedicationPrescribed")?,
        })
    }
}

impl FromElement for RxRenewalResponse {
    const CHILDREN: &'static [&'static str] = &[
        "RequestReferenceNumber",
        "Response",
        "AllergyOrAdverseEvent",
        "Facility",
        "Patient",
        "Pharmacy",
        "Prescriber",
        "Supervisor",
        "Observation",
        "MedicationResponse",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(RxRenewalResponse {
            request_reference_number: el.opt_text("RequestReferenceNumber")?,
            response: el.req("Response")?,
            allergy_or_adverse_event: el.opt("AllergyOrAdverseEvent")?,
            facility: el.opt("Facility")?,
            patient: el.req("Patient")?,
            pharmacy: el.req("Pharmacy")?,
            prescriber: el.req("Prescriber")?,
            supervisor: el.opt("Supervisor")?,
            observation: el.opt("Observation")?,
            medication_response: el.req("MedicationResponse")?,
        })
    }
}

impl FromElement for RenewalResponse {
    const CHILDREN: &'static [&'static str] =
        &["Approved", "Replace", "ApprovedWithChanges", "Denied"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        let mut found = Vec::with_capacity(1);
        if let Some(reason) = el.opt("Approved")? {
            found.push(RenewalResponse::Approved(reason));
        }
        if el.child("Replace")?.is_some() {
            found.push(RenewalResponse::Replace {});
        }
        if el.child("ApprovedWithChanges")?.is_some() {
            found.push(RenewalResponse::ApprovedWithChanges {});
        }
        if let Some(reason) = el.opt("Denied")? {
            found.push(RenewalResponse::Denied(reason));
        }

        match found.len() {
            1 => Ok(found.remove(0)),
            0 => Err(DecodeError::structure(el.path(), "no response choice")),
            n => Err(DecodeError::structure(
                el.path(),
                format!("expected one response choice, found {n}"),
            )),
        }
    }
}

impl FromElement for Reason {
    const CHILDREN: &'static [&'static str] = &["ReasonCode", "ReferenceNumber", "DenialReason"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Reason {
            reason_code: el.opt_text("ReasonCode")?,
            reference_number: el.opt_text("ReferenceNumber")?,
            denial_reason: el.opt_text("DenialReason")?,
        })
    }
}

impl FromElement for CancelRx {
    const CHILDREN: &'static [&'static str] =
        &["Patient", "Pharmacy", "Prescriber", "MedicationPrescribed"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(CancelRx {
            patient: el.req("Patient")?,
            pharmacy: el.req("Pharmacy")?,
            prescriber: el.req("Prescriber")?,
            medication_prescribed: el.req("MedicationPrescribed")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Shared values
// ---------------------------------------------------------------------------

impl FromElement for Coded {
    const CHILDREN: &'static [&'static str] = &["Code", "Qualifier", "Description"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Coded {
            code: el.req_text("Code")?,
            qualifier: el.opt_text("Qualifier")?,
            description: el.opt_text("Description")?,
        })
    }
}

impl FromElement for CodedConcept {
    const CHILDREN: &'static [&'static str] = &["Text", "Qualifier", "Code"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(CodedConcept {
            text: el.opt_text("Text")?,
            qualifier: el.opt_text("Qualifier")?,
            code: el.opt_text("Code")?,
        })
    }
}

impl FromElement for DateOrDateTime {
    const CHILDREN: &'static [&'static str] = &["Date", "DateTime"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        match (el.child("Date")?, el.child("DateTime")?) {
            (Some(date), None) => Ok(DateOrDateTime::Date(date.date()?)),
            (None, Some(instant)) => Ok(DateOrDateTime::DateTime(instant.timestamp()?)),
            (None, None) => Err(DecodeError::structure(
                el.path(),
                "expected a Date or DateTime child",
            )),
            (Some(_), Some(_)) => Err(DecodeError::structure(
                el.path(),
                "Date and DateTime are mutually exclusive",
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Parties
// ---------------------------------------------------------------------------

impl FromElement for Patient {
    const CHILDREN: &'static [&'static str] = &["HumanPatient"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Patient {
            human_patient: el.req("HumanPatient")?,
        })
    }
}

impl FromElement for HumanPatient {
    const CHILDREN: &'static [&'static str] = &[
        "Identification",
        "Name",
        "Gender",
        "DateOfBirth",
        "Address",
        "CommunicationNumbers",
        "LanguageNameCode",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(HumanPatient {
            identification: el.opt("Identification")?,
            name: el.req("Name")?,
            gender: el.opt_text("Gender")?,
            date_of_birth: el.req("DateOfBirth")?,
            address: el.req("Address")?,
            communication_numbers: el.opt("CommunicationNumbers")?,
            language_name_code: el.opt_text("LanguageNameCode")?,
        })
    }
}

impl FromElement for PatientIdentification {
    const CHILDREN: &'static [&'static str] =
        &["MedicalRecordIdentificationNumberEHR", "SocialSecurity"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(PatientIdentification {
            medical_record_identification_number_ehr: el
                .opt_text("MedicalRecordIdentificationNumberEHR")?,
            social_security: el.opt_text("SocialSecurity")?,
        })
    }
}

impl FromElement for DateOfBirth {
    const CHILDREN: &'static [&'static str] = &["Date"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(DateOfBirth {
            date: el.required("Date")?.date()?,
        })
    }
}

impl FromElement for Name {
    const CHILDREN: &'static [&'static str] =
        &["LastName", "FirstName", "MiddleName", "Suffix", "Prefix"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Name {
            last_name: el.req_text("LastName")?,
            first_name: el.req_text("FirstName")?,
            middle_name: el.opt_text("MiddleName")?,
            suffix: el.opt_text("Suffix")?,
            prefix: el.opt_text("Prefix")?,
        })
    }
}

impl FromElement for Address {
    const CHILDREN: &'static [&'static str] = &[
        "AddressLine1",
        "AddressLine2",
        "City",
        "StateProvince",
        "PostalCode",
        "CountryCode",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Address {
            address_line1: el.req_text("AddressLine1")?,
            address_line2: el.opt_text("AddressLine2")?,
            city: el.req_text("City")?,
            state_province: el.req_text("StateProvince")?,
            postal_code: el.req_text("PostalCode")?,
            country_code: el.opt_text("CountryCode")?,
        })
    }
}

impl FromElement for CommunicationNumbers {
    const CHILDREN: &'static [&'static str] = &[
        "PrimaryTelephone",
        "ElectronicMail",
        "Fax",
        "HomeTelephone",
        "WorkTelephone",
        "OtherTelephone",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(CommunicationNumbers {
            primary_telephone: el.opt("PrimaryTelephone")?,
            electronic_mail: el.opt_text("ElectronicMail")?,
            fax: el.opt("Fax")?,
            home_telephone: el.opt("HomeTelephone")?,
            work_telephone: el.opt("WorkTelephone")?,
            other_telephone: el.opt("OtherTelephone")?,
        })
    }
}

impl FromElement for Telephone {
    const CHILDREN: &'static [&'static str] = &["Number", "Extension", "SupportsSMS"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Telephone {
            number: el.req_text("Number")?,
            extension: el.opt_text("Extension")?,
            supports_sms: el.opt_flag("SupportsSMS")?,
        })
    }
}

impl FromElement for ProviderIdentification {
    const CHILDREN: &'static [&'static str] =
        &["NCPDPID", "NPI", "DEANumber", "StateLicenseNumber"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(ProviderIdentification {
            ncpdp_id: el.opt_text("NCPDPID")?,
            npi: el.opt_text("NPI")?,
            dea_number: el.opt_text("DEANumber")?,
            state_license_number: el.opt_text("StateLicenseNumber")?,
        })
    }
}

impl FromElement for Pharmacy {
    const CHILDREN: &'static [&'static str] = &[
        "Identification",
        "Pharmacist",
        "BusinessName",
        "Address",
        "CommunicationNumbers",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Pharmacy {
            identification: el.req("Identification")?,
            pharmacist: el.opt("Pharmacist")?,
            business_name: el.req_text("BusinessName")?,
            address: el.req("Address")?,
            communication_numbers: el.req("CommunicationNumbers")?,
        })
    }
}

impl FromElement for Pharmacist {
    const CHILDREN: &'static [&'static str] = &["Name"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Pharmacist {
            name: el.req("Name")?,
        })
    }
}

impl FromElement for Prescriber {
    const CHILDREN: &'static [&'static str] = &["NonVeterinarian"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Prescriber {
            non_veterinarian: el.req("NonVeterinarian")?,
        })
    }
}

impl FromElement for NonVeterinarian {
    const CHILDREN: &'static [&'static str] = &[
        "Identification",
        "Specialty",
        "PracticeLocation",
        "Name",
        "Address",
        "PrescriberAgent",
        "CommunicationNumbers",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(NonVeterinarian {
            identification: el.req("Identification")?,
            specialty: el.opt_text("Specialty")?,
            practice_location: el.opt("PracticeLocation")?,
            name: el.req("Name")?,
            address: el.req("Address")?,
            prescriber_agent: el.opt("PrescriberAgent")?,
            communication_numbers: el.req("CommunicationNumbers")?,
        })
    }
}

impl FromElement for PracticeLocation {
    const CHILDREN: &'static [&'static str] = &["BusinessName"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(PracticeLocation {
            business_name: el.req_text("BusinessName")?,
        })
    }
}

impl FromElement for PrescriberAgent {
    const CHILDREN: &'static [&'static str] = &["Name"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(PrescriberAgent {
            name: el.req("Name")?,
        })
    }
}

impl FromElement for Facility {
    const CHILDREN: &'static [&'static str] = &[
        "Identification",
        "FacilityName",
        "Address",
        "CommunicationNumbers",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Facility {
            identification: el.req("Identification")?,
            facility_name: el.req_text("FacilityName")?,
            address: el.opt("Address")?,
            communication_numbers: el.opt("CommunicationNumbers")?,
        })
    }
}

impl FromElement for PayerIdentification {
    const CHILDREN: &'static [&'static str] = &[
        "PayerID",
        "ProcessorIdentificationNumber",
        "IINNumber",
        "MutuallyDefined",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(PayerIdentification {
            payer_id: el.opt_text("PayerID")?,
            processor_identification_number: el.opt_text("ProcessorIdentificationNumber")?,
            iin_number: el.opt_text("IINNumber")?,
            mutually_defined: el.opt_text("MutuallyDefined")?,
        })
    }
}

impl FromElement for BenefitsCoordination {
    const CHILDREN: &'static [&'static str] = &[
        "PayerIdentification",
        "PayerName",
        "CardholderID",
        "CardHolderName",
        "GroupID",
        "GroupName",
        "PBMMemberID",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(BenefitsCoordination {
            payer_identification: el.req("PayerIdentification")?,
            payer_name: el.opt_text("PayerName")?,
            cardholder_id: el.opt_text("CardholderID")?,
            card_holder_name: el.opt("CardHolderName")?,
            group_id: el.opt_text("GroupID")?,
            group_name: el.opt_text("GroupName")?,
            pbm_member_id: el.opt_text("PBMMemberID")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Medication
// ---------------------------------------------------------------------------

impl FromElement for Medication {
    const CHILDREN: &'static [&'static str] = &[
        "DrugDescription",
        "DrugCoded",
        "Quantity",
        "DaysSupply",
        "WrittenDate",
        "LastFillDate",
        "Substitutions",
        "NumberOfRefills",
        "Diagnosis",
        "Note",
        "Sig",
        "RxFillIndicator",
        "PriorAuthorizationStatus",
        "PrescriberCheckedREMS",
        "OfficeOfPharmacyAffairsID",
        "OtherMedicationDate",
        "PharmacyRequestedRefills",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Medication {
            drug_description: el.req_text("DrugDescription")?,
            drug_coded: el.opt("DrugCoded")?,
            quantity: el.req("Quantity")?,
            days_supply: el.opt_decimal("DaysSupply")?,
            written_date: el.req("WrittenDate")?,
            last_fill_date: el.opt("LastFillDate")?,
            substitutions: el.opt_count("Substitutions")?,
            number_of_refills: el.opt_count("NumberOfRefills")?,
            diagnosis: el.list("Diagnosis")?,
            note: el.opt_text("Note")?,
            sig: el.req("Sig")?,
            rx_fill_indicator: el.opt_text("RxFillIndicator")?,
            prior_authorization_status: el.opt_text("PriorAuthorizationStatus")?,
            prescriber_checked_rems: el.opt_text("PrescriberCheckedREMS")?,
            office_of_pharmacy_affairs_id: el.opt_text("OfficeOfPharmacyAffairsID")?,
            other_medication_date: el.opt("OtherMedicationDate")?,
            pharmacy_requested_refills: el.opt_count("PharmacyRequestedRefills")?,
        })
    }
}

impl FromElement for DrugCoded {
    const CHILDREN: &'static [&'static str] =
        &["ProductCode", "Strength", "DrugDBCode", "DEASchedule"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(DrugCoded {
            product_code: el.opt("ProductCode")?,
            strength: el.opt("Strength")?,
            drug_db_code: el.opt("DrugDBCode")?,
            dea_schedule: el.opt("DEASchedule")?,
        })
    }
}

impl FromElement for Strength {
    const CHILDREN: &'static [&'static str] =
        &["StrengthValue", "StrengthForm", "StrengthUnitOfMeasure"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Strength {
            strength_value: el.opt_text("StrengthValue")?,
            strength_form: el.opt("StrengthForm")?,
            strength_unit_of_measure: el.opt("StrengthUnitOfMeasure")?,
        })
    }
}

impl FromElement for DeaSchedule {
    const CHILDREN: &'static [&'static str] = &["Code"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(DeaSchedule {
            code: el.req_text("Code")?,
        })
    }
}

impl FromElement for Quantity {
    const CHILDREN: &'static [&'static str] =
        &["Value", "CodeListQualifier", "QuantityUnitOfMeasure"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Quantity {
            value: el.req_decimal("Value")?,
            code_list_qualifier: el.opt_text("CodeListQualifier")?,
            quantity_unit_of_measure: el.req("QuantityUnitOfMeasure")?,
        })
    }
}

impl FromElement for Diagnosis {
    const CHILDREN: &'static [&'static str] =
        &["ClinicalInformationQualifier", "Primary", "Secondary"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Diagnosis {
            clinical_information_qualifier: el.req_text("ClinicalInformationQualifier")?,
            primary: el.req("Primary")?,
            secondary: el.opt("Secondary")?,
        })
    }
}

impl FromElement for Sig {
    const CHILDREN: &'static [&'static str] = &["SigText", "CodeSystem", "Instruction"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Sig {
            sig_text: el.req_text("SigText")?,
            code_system: el.opt("CodeSystem")?,
            instruction: el.opt("Instruction")?,
        })
    }
}

impl FromElement for SigCodeSystem {
    const CHILDREN: &'static [&'static str] = &["SNOMEDVersion", "FMTVersion"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(SigCodeSystem {
            snomed_version: el.opt_text("SNOMEDVersion")?,
            fmt_version: el.opt_text("FMTVersion")?,
        })
    }
}

impl FromElement for Instruction {
    const CHILDREN: &'static [&'static str] = &["DoseAdministration", "TimingAndDuration"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Instruction {
            dose_administration: el.opt("DoseAdministration")?,
            timing_and_duration: el.list("TimingAndDuration")?,
        })
    }
}

impl FromElement for DoseAdministration {
    const CHILDREN: &'static [&'static str] =
        &["DoseDeliveryMethod", "Dosage", "RouteOfAdministration"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(DoseAdministration {
            dose_delivery_method: el.opt("DoseDeliveryMethod")?,
            dosage: el.opt("Dosage")?,
            route_of_administration: el.opt("RouteOfAdministration")?,
        })
    }
}

impl FromElement for Dosage {
    const CHILDREN: &'static [&'static str] = &["DoseQuantity", "DoseUnitOfMeasure"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Dosage {
            dose_quantity: el.req_decimal("DoseQuantity")?,
            dose_unit_of_measure: el.opt("DoseUnitOfMeasure")?,
        })
    }
}

impl FromElement for TimingAndDuration {
    const CHILDREN: &'static [&'static str] = &["Frequency", "AdministrationTiming"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(TimingAndDuration {
            frequency: el.opt("Frequency")?,
            administration_timing: el.opt("AdministrationTiming")?,
        })
    }
}

impl FromElement for Frequency {
    const CHILDREN: &'static [&'static str] = &["FrequencyNumericValue", "FrequencyUnits"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Frequency {
            frequency_numeric_value: el.opt_count("FrequencyNumericValue")?,
            frequency_units: el.opt("FrequencyUnits")?,
        })
    }
}

impl FromElement for AdministrationTiming {
    const CHILDREN: &'static [&'static str] = &["AdministrationTimingEvent"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(AdministrationTiming {
            administration_timing_event: el.req("AdministrationTimingEvent")?,
        })
    }
}

impl FromElement for OtherMedicationDate {
    const CHILDREN: &'static [&'static str] =
        &["OtherMedicationDate", "OtherMedicationDateQualifier"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(OtherMedicationDate {
            other_medication_date: el.req("OtherMedicationDate")?,
            other_medication_date_qualifier: el.req_text("OtherMedicationDateQualifier")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Clinical
// ---------------------------------------------------------------------------

impl FromElement for Observation {
    const CHILDREN: &'static [&'static str] = &["Measurement"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Observation {
            measurement: el.list("Measurement")?,
        })
    }
}

impl FromElement for Measurement {
    const CHILDREN: &'static [&'static str] = &[
        "VitalSign",
        "LOINCVersion",
        "Value",
        "UnitOfMeasure",
        "UCUMVersion",
        "ObservationDate",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Measurement {
            vital_sign: el.req_text("VitalSign")?,
            loinc_version: el.opt_text("LOINCVersion")?,
            value: el.req_text("Value")?,
            unit_of_measure: el.req_text("UnitOfMeasure")?,
            ucum_version: el.opt_text("UCUMVersion")?,
            observation_date: el.opt("ObservationDate")?,
        })
    }
}

impl FromElement for AllergyOrAdverseEvent {
    const CHILDREN: &'static [&'static str] = &["NoKnownAllergies", "Allergies"];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(AllergyOrAdverseEvent {
            no_known_allergies: el.opt_text("NoKnownAllergies")?,
            allergies: el.list("Allergies")?,
        })
    }
}

impl FromElement for Allergy {
    const CHILDREN: &'static [&'static str] = &[
        "SourceOfInformation",
        "EffectiveDate",
        "AdverseEvent",
        "DrugProductCoded",
    ];

    fn from_element(el: &Element<'_, '_>) -> Result<Self> {
        Ok(Allergy {
            source_of_information: el.opt_text("SourceOfInformation")?,
            effective_date: el.opt("EffectiveDate")?,
            adverse_event: el.opt("AdverseEvent")?,
            drug_product_coded: el.opt("DrugProductCoded")?,
        })
    }
}
