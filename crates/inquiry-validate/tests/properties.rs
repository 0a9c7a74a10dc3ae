//! Property tests for evaluation purity and aggregate validity.

use inquiry_model::{ContactField, FormSnapshot};
use inquiry_validate::{contact_rules, evaluate};
use proptest::prelude::*;

fn arbitrary_snapshot() -> impl Strategy<Value = FormSnapshot<ContactField>> {
    (".{0,120}", ".{0,120}", ".{0,40}", ".{0,120}").prop_map(
        |(name, email, subject, details)| {
            let mut snapshot = FormSnapshot::empty();
            snapshot.set(ContactField::UserName, name);
            snapshot.set(ContactField::Email, email);
            snapshot.set(ContactField::Subject, subject);
            snapshot.set(ContactField::Details, details);
            snapshot
        },
    )
}

proptest! {
    #[test]
    fn evaluate_is_idempotent(snapshot in arbitrary_snapshot()) {
        let rules = contact_rules();
        let first = evaluate(&rules, &snapshot);
        let second = evaluate(&rules, &snapshot);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn evaluate_never_panics(snapshot in arbitrary_snapshot()) {
        let rules = contact_rules();
        let _ = evaluate(&rules, &snapshot);
    }

    #[test]
    fn empty_value_always_fails_the_non_empty_gate_first(
        email in ".{0,120}",
        details in ".{1,80}",
    ) {
        let rules = contact_rules();
        let mut snapshot = FormSnapshot::empty();
        snapshot.set(ContactField::Email, email);
        snapshot.set(ContactField::Details, details);
        // userName left empty: its first failing message is the blank
        // non-empty gate, regardless of the other fields.
        let report = evaluate(&rules, &snapshot);
        prop_assert_eq!(report.first_message(ContactField::UserName), Some(""));
        prop_assert!(!report.is_valid());
    }

    #[test]
    fn satisfying_every_rule_yields_aggregate_validity(
        name in "[A-Za-z]{9,40}",
        local in "[a-z0-9]{1,16}",
        domain in "[a-z0-9]{1,16}",
        tld in "[a-z]{2,8}",
        details in "[A-Za-z0-9 ]{1,99}",
    ) {
        let rules = contact_rules();
        let mut snapshot = FormSnapshot::empty();
        snapshot.set(ContactField::UserName, name);
        snapshot.set(ContactField::Email, format!("{local}@{domain}.{tld}"));
        snapshot.set(ContactField::Details, details);
        let report = evaluate(&rules, &snapshot);
        prop_assert!(report.is_valid());
    }
}
