//! Submission status of the form.

use serde::Serialize;

/// Where the form stands with respect to its single-submission workflow.
///
/// `Submitting` is the transient in-flight state between an accepted submit
/// and the settlement of the external call; it exists to block a second
/// submission while the first one is outstanding. Edits never change the
/// status, only submit attempts and their settlement do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum SubmissionStatus {
    /// No submit attempt has settled yet.
    #[default]
    Idle,
    /// A submit attempt is outstanding.
    Submitting,
    /// The last submit attempt was acknowledged.
    Success,
    /// The last submit attempt failed; carries the user-facing message.
    Failed(String),
}

impl SubmissionStatus {
    /// True while a submit attempt is outstanding.
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    /// True once a submit attempt has been acknowledged.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Success => "Success",
            Self::Failed(_) => "Failed",
        }
    }

    /// The user-facing failure message, when in the failed state.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
