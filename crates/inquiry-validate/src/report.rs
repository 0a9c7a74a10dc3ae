//! Per-field validation findings.

use std::collections::BTreeMap;

use serde::Serialize;

use inquiry_model::FormField;

/// Failing-rule messages per field, in rule declaration order.
///
/// A report is recomputed from scratch on every snapshot change; it carries
/// no state of its own. Every field the rule set knows about has an entry,
/// possibly empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorReport<F: FormField> {
    failures: BTreeMap<F, Vec<String>>,
}

impl<F: FormField> ErrorReport<F> {
    pub(crate) fn from_failures(failures: BTreeMap<F, Vec<String>>) -> Self {
        Self { failures }
    }

    /// All failing messages for `field`, in rule order.
    pub fn messages(&self, field: F) -> &[String] {
        self.failures.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The only message a form surfaces per field: the first failing one.
    pub fn first_message(&self, field: F) -> Option<&str> {
        self.messages(field).first().map(String::as_str)
    }

    /// Aggregate validity: every field's failing list is empty.
    pub fn is_valid(&self) -> bool {
        self.failures.values().all(Vec::is_empty)
    }

    /// Fields with at least one failing rule.
    pub fn invalid_fields(&self) -> Vec<F> {
        self.failures
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| *field)
            .collect()
    }

    /// Iterate all entries, including fields with no failures.
    pub fn iter(&self) -> impl Iterator<Item = (F, &[String])> {
        self.failures
            .iter()
            .map(|(field, messages)| (*field, messages.as_slice()))
    }
}
