//! Rule chains for the contact inquiry form.
//!
//! Each required field starts with a non-empty check whose message is the
//! empty string: the check gates submission but surfaces no text of its own.
//! Only the second, field-specific rule carries a visible message.

use inquiry_model::ContactField;

use crate::rule::{Rule, RuleSet};

/// Message for an email value that does not look like an address.
pub const EMAIL_MESSAGE: &str = "Needs to be a valid email.";

/// Message for a name too short to hold a first and last name.
pub const USER_NAME_MESSAGE: &str = "Needs to be First and Last Name.";

/// Message for details exceeding the length cap.
pub const DETAILS_MESSAGE: &str = "100 characters only";

/// Loose email shape: something, an `@`, something, a dot, something.
const EMAIL_PATTERN: &str = r"\S+@\S+\.\S+";

fn non_empty(value: &str) -> bool {
    !value.is_empty()
}

fn looks_like_email(value: &str) -> bool {
    regex::Regex::new(EMAIL_PATTERN)
        .map(|pattern| pattern.is_match(value))
        .unwrap_or(false)
}

fn holds_full_name(value: &str) -> bool {
    value.chars().count() > 8
}

fn within_details_cap(value: &str) -> bool {
    value.chars().count() < 100
}

/// The contact form's rule set.
///
/// `subject` carries no rules and is always valid.
pub fn contact_rules() -> RuleSet<ContactField> {
    RuleSet::new()
        .with_rules(
            ContactField::Email,
            vec![
                Rule::new(non_empty, ""),
                Rule::new(looks_like_email, EMAIL_MESSAGE),
            ],
        )
        .with_rules(
            ContactField::UserName,
            vec![
                Rule::new(non_empty, ""),
                Rule::new(holds_full_name, USER_NAME_MESSAGE),
            ],
        )
        .with_rules(
            ContactField::Details,
            vec![
                Rule::new(non_empty, ""),
                Rule::new(within_details_cap, DETAILS_MESSAGE),
            ],
        )
}
