//! Submission workflow for inquiry forms.
//!
//! The [`SubmissionController`] owns the form snapshot and the submission
//! status, and funnels all mutation through named transitions: `edit`,
//! `begin_submit`, `settle`. The network transport stays external behind the
//! [`SubmitCapability`] trait; id generation behind [`IdSource`].
//!
//! The controller is single-threaded and event-driven. A submit attempt
//! splits into two events at its only suspension point: `begin_submit`
//! captures the payload and enters the in-flight state, `settle` delivers the
//! capability's outcome. Re-entrant submits while in flight are ignored, so
//! the capability is invoked at most once per accepted attempt.

pub mod capability;
pub mod controller;
pub mod error;
pub mod ids;

pub use capability::{Ack, SubmitCapability};
pub use controller::{SUBMIT_FAILED_MESSAGE, SubmissionController, SubmitAttempt};
pub use error::SubmitError;
pub use ids::{IdSource, UuidIdSource};
