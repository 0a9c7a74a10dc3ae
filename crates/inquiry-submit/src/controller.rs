//! The submission state machine.

use tracing::{debug, info, trace, warn};

use inquiry_model::{FormField, FormSnapshot, InquiryPayload, SubmissionStatus};
use inquiry_validate::{ErrorReport, RuleSet, evaluate};

use crate::capability::{Ack, SubmitCapability};
use crate::error::SubmitError;
use crate::ids::IdSource;

/// Fixed user-facing message for a failed submission. The underlying cause is
/// logged, never displayed.
pub const SUBMIT_FAILED_MESSAGE: &str =
    "There was an error submitting the form. Please try again later.";

/// Outcome of one submit transition.
#[derive(Debug)]
pub enum SubmitAttempt<F: FormField> {
    /// Validation passed; the payload was captured and the form is now in
    /// flight. The caller must deliver the capability's outcome via
    /// [`SubmissionController::settle`].
    Accepted(InquiryPayload<F>),
    /// Aggregate validity is false. No state change, no network call; the
    /// per-field messages in the report already describe the problem.
    Invalid(ErrorReport<F>),
    /// A previous submit has not settled yet; the attempt was ignored.
    InFlight,
}

/// Owns the form snapshot and submission status; all mutation goes through
/// the named transitions below.
///
/// Edits are accepted in any state, including while a submit is in flight;
/// an in-flight attempt keeps the payload captured when it was accepted, so
/// later edits only affect a later attempt. A successful settlement resets
/// the snapshot, a failed one preserves it for retry.
#[derive(Debug)]
pub struct SubmissionController<F: FormField> {
    rules: RuleSet<F>,
    snapshot: FormSnapshot<F>,
    status: SubmissionStatus,
}

impl<F: FormField> SubmissionController<F> {
    /// Controller at mount: every field empty, status idle.
    pub fn new(rules: RuleSet<F>) -> Self {
        Self {
            rules,
            snapshot: FormSnapshot::empty(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn snapshot(&self) -> &FormSnapshot<F> {
        &self.snapshot
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Current findings for the current snapshot. Recomputed on demand.
    pub fn error_report(&self) -> ErrorReport<F> {
        evaluate(&self.rules, &self.snapshot)
    }

    /// Aggregate validity of the current snapshot.
    pub fn is_valid(&self) -> bool {
        self.error_report().is_valid()
    }

    /// Replace one field's value. Valid in any state; never touches the
    /// submission status, so a prior success or failure banner persists
    /// across edits.
    pub fn edit(&mut self, field: F, value: impl Into<String>) {
        let value = value.into();
        trace!(field = %field, len = value.len(), "edit");
        self.snapshot.set(field, value);
    }

    /// Attempt a submission.
    ///
    /// Gates on the double-submission guard first, then on aggregate
    /// validity. On acceptance the controller enters the in-flight state and
    /// hands back the payload, captured with a fresh id at this moment.
    pub fn begin_submit(&mut self, ids: &impl IdSource) -> SubmitAttempt<F> {
        if self.status.is_submitting() {
            debug!("submit ignored: an attempt is already in flight");
            return SubmitAttempt::InFlight;
        }
        let report = self.error_report();
        if !report.is_valid() {
            debug!(invalid = ?report.invalid_fields(), "submit blocked by validation");
            return SubmitAttempt::Invalid(report);
        }
        let payload = InquiryPayload::from_snapshot(ids.next_id(), &self.snapshot);
        self.status = SubmissionStatus::Submitting;
        info!(id = %payload.id, "inquiry in flight");
        SubmitAttempt::Accepted(payload)
    }

    /// Deliver the outcome of the in-flight attempt.
    ///
    /// Success resets the snapshot to all-empty; failure keeps the user's
    /// input and surfaces the fixed failure message. Settlement without an
    /// in-flight attempt is ignored.
    pub fn settle(&mut self, outcome: Result<Ack, SubmitError>) {
        if !self.status.is_submitting() {
            warn!(status = self.status.label(), "settle ignored: no attempt in flight");
            return;
        }
        match outcome {
            Ok(ack) => {
                info!(remote_id = ?ack.remote_id, "inquiry submitted");
                self.status = SubmissionStatus::Success;
                self.snapshot.reset();
            }
            Err(error) => {
                warn!(%error, "inquiry submission failed");
                self.status = SubmissionStatus::Failed(SUBMIT_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Run one full attempt synchronously: begin, invoke the capability,
    /// settle. Returns whether the capability was invoked.
    pub fn submit_with(
        &mut self,
        capability: &impl SubmitCapability<F>,
        ids: &impl IdSource,
    ) -> bool {
        match self.begin_submit(ids) {
            SubmitAttempt::Accepted(payload) => {
                let outcome = capability.submit(&payload);
                self.settle(outcome);
                true
            }
            SubmitAttempt::Invalid(_) | SubmitAttempt::InFlight => false,
        }
    }
}
