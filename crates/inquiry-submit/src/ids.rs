//! Inquiry identifier generation.

use inquiry_model::InquiryId;
use uuid::Uuid;

/// Source of unique inquiry identifiers.
///
/// Collision behavior and algorithm are the implementation's concern; the
/// controller only needs one fresh opaque id per accepted submit.
pub trait IdSource {
    fn next_id(&self) -> InquiryId;
}

/// Random v4 UUID identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSource;

impl IdSource for UuidIdSource {
    fn next_id(&self) -> InquiryId {
        InquiryId::new(Uuid::new_v4().to_string()).expect("uuid renders non-empty")
    }
}
