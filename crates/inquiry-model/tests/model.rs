//! Tests for the inquiry form data model.

use std::str::FromStr;

use inquiry_model::{
    ContactField, FormField, FormSnapshot, InquiryId, InquiryPayload, ModelError,
    SubmissionStatus,
};

#[test]
fn contact_field_names_round_trip() {
    for field in ContactField::ALL {
        let parsed = ContactField::from_str(field.name()).expect("known name");
        assert_eq!(parsed, *field);
        assert_eq!(field.to_string(), field.name());
    }
}

#[test]
fn contact_field_rejects_unknown_name() {
    let err = ContactField::from_str("phoneNumber").unwrap_err();
    assert!(matches!(err, ModelError::UnknownField(name) if name == "phoneNumber"));
}

#[test]
fn empty_snapshot_covers_every_field() {
    let snapshot: FormSnapshot<ContactField> = FormSnapshot::empty();
    assert!(snapshot.is_empty());
    for field in ContactField::ALL {
        assert_eq!(snapshot.value(*field), "");
    }
}

#[test]
fn set_replaces_a_single_value() {
    let mut snapshot = FormSnapshot::empty();
    snapshot.set(ContactField::Email, "jane@x.com");
    assert_eq!(snapshot.value(ContactField::Email), "jane@x.com");
    assert_eq!(snapshot.value(ContactField::UserName), "");
    assert!(!snapshot.is_empty());
}

#[test]
fn reset_returns_to_the_mount_state() {
    let mut snapshot = FormSnapshot::empty();
    snapshot.set(ContactField::Subject, "Hi");
    snapshot.set(ContactField::Details, "Hello");
    snapshot.reset();
    assert_eq!(snapshot, FormSnapshot::empty());
}

#[test]
fn inquiry_id_rejects_blank_values() {
    assert!(InquiryId::new("abc123").is_ok());
    assert!(matches!(
        InquiryId::new("   "),
        Err(ModelError::InvalidInquiryId(_))
    ));
}

#[test]
fn payload_serializes_flat_with_camel_case_keys() {
    let mut snapshot = FormSnapshot::empty();
    snapshot.set(ContactField::UserName, "Jane Doe");
    snapshot.set(ContactField::Email, "jane@x.com");
    snapshot.set(ContactField::Subject, "Hi");
    snapshot.set(ContactField::Details, "Hello");

    let id = InquiryId::new("inq-1").expect("id");
    let payload = InquiryPayload::from_snapshot(id, &snapshot);
    let json = serde_json::to_value(&payload).expect("serialize");

    assert_eq!(
        json,
        serde_json::json!({
            "id": "inq-1",
            "userName": "Jane Doe",
            "email": "jane@x.com",
            "subject": "Hi",
            "details": "Hello",
        })
    );
}

#[test]
fn payload_captures_values_at_construction() {
    let mut snapshot = FormSnapshot::empty();
    snapshot.set(ContactField::Details, "first");
    let id = InquiryId::new("inq-2").expect("id");
    let payload = InquiryPayload::from_snapshot(id, &snapshot);

    snapshot.set(ContactField::Details, "second");
    assert_eq!(payload.value(ContactField::Details), "first");
}

#[test]
fn status_accessors() {
    assert_eq!(SubmissionStatus::Idle.label(), "Idle");
    assert!(SubmissionStatus::Submitting.is_submitting());
    assert!(SubmissionStatus::Success.is_success());

    let failed = SubmissionStatus::Failed("down".to_string());
    assert_eq!(failed.label(), "Failed");
    assert_eq!(failed.failure_message(), Some("down"));
    assert_eq!(SubmissionStatus::Idle.failure_message(), None);
}
