//! Contact form state and submission flow.
//!
//! A [`ContactForm`] is owned by whichever view hosts it. Submission moves it
//! through a small state machine:
//!
//! ```text
//! Idle --begin_submit--> Submitting --settle--> Idle
//!   ^        |
//!   +--------+ validation failure (fields kept)
//! ```
//!
//! While submitting, the fields are locked and further submit attempts are
//! rejected, so one interaction settles exactly once. A successful settlement
//! clears the fields; any failure keeps them for another try.

mod flow;
mod mailto;

pub use flow::{
    CancelHandle, CancelSignal, PendingError, cancel_pair, hand_off, submit, wait_pending,
};
pub use mailto::{build_mailto, mail_body, mailto_uri};

use crate::model::{ContactSubmission, FormField};
use crate::notify::Notification;
use crate::validation::{ContactError, validate_submission};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

/// Why a submit attempt never reached the pending state.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    InFlight,

    #[error(transparent)]
    Invalid(#[from] ContactError),
}

impl SubmitRejected {
    /// Notification to show; a press on a disabled submit control shows nothing.
    pub fn notification(&self) -> Option<Notification> {
        match self {
            SubmitRejected::InFlight => None,
            SubmitRejected::Invalid(e) => Some(Notification::error(e.to_string())),
        }
    }
}

/// How a submission that passed validation ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    HandoffFailed(String),
    TimedOut,
    Cancelled,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }

    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Sent => Notification::success("Message sent successfully!"),
            SubmitOutcome::HandoffFailed(_) => {
                Notification::error("Failed to send message. Please try again.")
            }
            SubmitOutcome::TimedOut => {
                Notification::error("Submission timed out. Please try again.")
            }
            SubmitOutcome::Cancelled => Notification::error("Submission cancelled"),
        }
    }
}

impl From<PendingError> for SubmitOutcome {
    fn from(err: PendingError) -> Self {
        match err {
            PendingError::TimedOut => SubmitOutcome::TimedOut,
            PendingError::Cancelled => SubmitOutcome::Cancelled,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    submission: ContactSubmission,
    focus: FormField,
    phase: SubmitPhase,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_submission(submission: ContactSubmission) -> Self {
        Self {
            submission,
            ..Self::default()
        }
    }

    pub fn submission(&self) -> &ContactSubmission {
        &self.submission
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        self.phase == SubmitPhase::Idle
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Replace a field. Ignored while a submission is in flight.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self.submission.field_mut(field) = value.into();
        true
    }

    pub fn push_char(&mut self, c: char) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.submission.field_mut(self.focus).push(c);
        true
    }

    pub fn pop_char(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.submission.field_mut(self.focus).pop();
        true
    }

    /// Validate and enter `Submitting`. On rejection the form is unchanged.
    pub fn begin_submit(&mut self) -> Result<(), SubmitRejected> {
        if self.is_submitting() {
            return Err(SubmitRejected::InFlight);
        }
        validate_submission(&self.submission)?;
        self.phase = SubmitPhase::Submitting;
        tracing::debug!("contact submission started");
        Ok(())
    }

    /// Conclude the in-flight submission.
    ///
    /// Returns the one notification for this settlement, or `None` when
    /// nothing was in flight.
    pub fn settle(&mut self, outcome: &SubmitOutcome) -> Option<Notification> {
        if !self.is_submitting() {
            return None;
        }
        self.phase = SubmitPhase::Idle;
        if outcome.is_success() {
            self.submission = ContactSubmission::default();
            self.focus = FormField::Name;
        }
        tracing::info!(outcome = ?outcome, "contact submission settled");
        Some(outcome.notification())
    }
}
