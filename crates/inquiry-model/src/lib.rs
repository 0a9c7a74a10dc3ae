//! Data model for the inquiry form core.
//!
//! This crate defines the leaf types shared by the validation engine and the
//! submission controller: form fields, form snapshots, submission status, and
//! the inquiry payload handed to the external submit capability. It carries
//! no logic beyond invariant checks on construction.

pub mod error;
pub mod field;
pub mod inquiry;
pub mod snapshot;
pub mod status;

pub use error::{ModelError, Result};
pub use field::{ContactField, FormField};
pub use inquiry::{InquiryId, InquiryPayload};
pub use snapshot::FormSnapshot;
pub use status::SubmissionStatus;
