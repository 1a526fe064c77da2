use super::{ContactForm, SubmitOutcome, SubmitRejected, build_mailto};
use crate::config::ContactSettings;
use crate::notify::Notifier;
use crate::platform::{LinkOpener, open_external};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::oneshot;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingError {
    #[error("submission timed out")]
    TimedOut,

    #[error("submission cancelled")]
    Cancelled,
}

/// Cancels the pending wait it was paired with.
#[derive(Debug)]
pub struct CancelHandle(oneshot::Sender<()>);

impl CancelHandle {
    pub fn cancel(self) {
        let _ = self.0.send(());
    }
}

/// Receiving side of a [`CancelHandle`]. Dropping the handle does not cancel.
#[derive(Debug)]
pub struct CancelSignal(oneshot::Receiver<()>);

impl CancelSignal {
    /// A signal that never fires.
    pub fn never() -> Self {
        let (_tx, rx) = oneshot::channel();
        Self(rx)
    }

    async fn cancelled(self) {
        if self.0.await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

pub fn cancel_pair() -> (CancelHandle, CancelSignal) {
    let (tx, rx) = oneshot::channel();
    (CancelHandle(tx), CancelSignal(rx))
}

/// The pending operation between validation and the mail handoff.
///
/// Resolves after `delay`, unless `timeout` elapses or `cancel` fires first.
pub async fn wait_pending(
    delay: Duration,
    timeout: Duration,
    cancel: CancelSignal,
) -> Result<(), PendingError> {
    let pending = async {
        tokio::select! {
            _ = tokio::time::sleep(delay) => Ok(()),
            _ = cancel.cancelled() => Err(PendingError::Cancelled),
        }
    };

    match tokio::time::timeout(timeout, pending).await {
        Ok(result) => result,
        Err(_) => Err(PendingError::TimedOut),
    }
}

/// Hand the form's current submission to the system mail handler.
pub fn hand_off(
    form: &ContactForm,
    recipient: &str,
    default_subject: &str,
    opener: &dyn LinkOpener,
) -> SubmitOutcome {
    let uri = build_mailto(recipient, form.submission(), default_subject);
    match open_external(opener, &uri) {
        Ok(()) => SubmitOutcome::Sent,
        Err(e) => {
            tracing::warn!(error = %e, "mail handoff failed");
            SubmitOutcome::HandoffFailed(e.to_string())
        }
    }
}

/// Run one submission end to end: validate, wait, hand off, settle.
///
/// Every path emits exactly one notification, except a press while a
/// submission is already in flight, which is ignored.
pub async fn submit(
    form: &mut ContactForm,
    recipient: &str,
    settings: &ContactSettings,
    opener: &dyn LinkOpener,
    notifier: &dyn Notifier,
    cancel: CancelSignal,
) -> Result<SubmitOutcome, SubmitRejected> {
    if let Err(rejected) = form.begin_submit() {
        if let Some(notification) = rejected.notification() {
            notifier.notify(notification);
        }
        return Err(rejected);
    }

    let outcome = match wait_pending(settings.pending_delay(), settings.timeout(), cancel).await {
        Ok(()) => hand_off(form, recipient, &settings.default_subject, opener),
        Err(e) => e.into(),
    };

    if let Some(notification) = form.settle(&outcome) {
        notifier.notify(notification);
    }
    Ok(outcome)
}
