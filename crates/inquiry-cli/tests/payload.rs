//! Wire-shape tests for the HTTP capability's request body.

use inquiry_cli::http::wrap_payload;
use inquiry_model::{ContactField, FormSnapshot, InquiryId, InquiryPayload};

#[test]
fn body_nests_the_payload_under_user_data() {
    let mut snapshot = FormSnapshot::empty();
    snapshot.set(ContactField::UserName, "Jane Doe");
    snapshot.set(ContactField::Email, "jane@x.com");
    snapshot.set(ContactField::Subject, "Hi");
    snapshot.set(ContactField::Details, "Hello");

    let id = InquiryId::new("inq-1").expect("id");
    let body = wrap_payload(&InquiryPayload::from_snapshot(id, &snapshot));

    assert_eq!(
        body,
        serde_json::json!({
            "userData": {
                "id": "inq-1",
                "userName": "Jane Doe",
                "email": "jane@x.com",
                "subject": "Hi",
                "details": "Hello",
            }
        })
    );
}

#[test]
fn body_always_carries_every_field() {
    // An untouched form still serializes all keys, empty strings included.
    let snapshot: FormSnapshot<ContactField> = FormSnapshot::empty();
    let id = InquiryId::new("inq-2").expect("id");
    let body = wrap_payload(&InquiryPayload::from_snapshot(id, &snapshot));

    let user_data = body.get("userData").expect("userData");
    for key in ["userName", "email", "subject", "details"] {
        assert_eq!(user_data.get(key).and_then(|v| v.as_str()), Some(""));
    }
}
