//! Current form contents, one value per field.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::field::FormField;

/// The form's contents at one point in time.
///
/// A snapshot always carries an entry for every field of the form; a missing
/// key reads as the empty string, never a fault. Edits replace a single
/// value, a successful submission resets the whole snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot<F: FormField> {
    values: BTreeMap<F, String>,
}

impl<F: FormField> FormSnapshot<F> {
    /// Snapshot with every field empty. This is the mount state and the
    /// post-success reset state.
    pub fn empty() -> Self {
        let values = F::ALL
            .iter()
            .map(|field| (*field, String::new()))
            .collect();
        Self { values }
    }

    /// Current value of `field`. Absent fields read as empty.
    pub fn value(&self, field: F) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Replace the value of a single field.
    pub fn set(&mut self, field: F, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Reset every field to the empty string.
    pub fn reset(&mut self) {
        *self = Self::empty();
    }

    /// True when every field is empty.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// The full field-to-value map, in field declaration order.
    pub fn values(&self) -> &BTreeMap<F, String> {
        &self.values
    }
}

impl<F: FormField> Default for FormSnapshot<F> {
    fn default() -> Self {
        Self::empty()
    }
}
