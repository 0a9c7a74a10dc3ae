//! The inquiry payload handed to the external submit capability.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::error::ModelError;
use crate::field::FormField;
use crate::snapshot::FormSnapshot;

/// Opaque unique identifier of one inquiry.
///
/// Generation is an external concern; the model only requires the id to be
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct InquiryId(String);

impl InquiryId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ModelError::InvalidInquiryId(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A valid form snapshot plus a fresh id, ready for the write endpoint.
///
/// Serializes flat: the id next to one key per field, e.g.
/// `{"id": "...", "userName": "...", "email": "...", ...}`. The payload is
/// captured at the moment a submit is accepted and is not retained after the
/// attempt settles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload<F: FormField> {
    pub id: InquiryId,
    #[serde(flatten)]
    pub fields: BTreeMap<F, String>,
}

impl<F: FormField> InquiryPayload<F> {
    /// Capture the snapshot's current values under a fresh id.
    pub fn from_snapshot(id: InquiryId, snapshot: &FormSnapshot<F>) -> Self {
        Self {
            id,
            fields: snapshot.values().clone(),
        }
    }

    /// Value of `field` as captured at submit time.
    pub fn value(&self, field: F) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }
}
