use thiserror::Error;

/// Failure reported by a submit capability.
///
/// The raw cause is logged but never shown to the user; the controller maps
/// every variant to one fixed user-facing message.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint was reached but refused the inquiry.
    #[error("endpoint rejected the inquiry: {0}")]
    Rejected(String),
    /// The endpoint could not be reached.
    #[error("transport failure: {0}")]
    Transport(String),
}
