//! The external submit capability boundary.

use inquiry_model::{FormField, InquiryPayload};

use crate::error::SubmitError;

/// Acknowledgement returned by the write endpoint on success.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ack {
    /// Identifier assigned by the remote endpoint, when it returns one.
    pub remote_id: Option<String>,
}

/// The opaque remote write endpoint.
///
/// Transport details (wire format, auth, endpoint) live behind this trait;
/// the controller only consumes the success/failure signal. Implementations
/// are invoked at most once per accepted submit attempt.
pub trait SubmitCapability<F: FormField> {
    fn submit(&self, payload: &InquiryPayload<F>) -> Result<Ack, SubmitError>;
}
