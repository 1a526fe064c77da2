use crate::contact::{ContactForm, SubmitOutcome, cancel_pair, submit};
use crate::error::Result as FolioResult;
use crate::model::ContactSubmission;
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::platform::{LinkOpener, SystemOpener};
use anyhow::{Context, Result};
use std::io::{self, Read};

use super::CommandContext;
use super::utils::ConsoleNotifier;

/// Parameters for the contact command
pub struct ContactParams {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub dry_run: bool,
}

/// Prints the handoff URI instead of launching a mail client.
struct PrintOpener;

impl LinkOpener for PrintOpener {
    fn open(&self, url: &str) -> FolioResult<()> {
        tracing::info!("dry run, mail client not opened");
        println!("{}", url);
        Ok(())
    }
}

/// Reports a dry run's success without claiming anything was sent.
struct DryRunNotifier;

impl Notifier for DryRunNotifier {
    fn notify(&self, notification: Notification) {
        let notification = match notification.kind {
            NotificationKind::Success => {
                Notification::success("Dry run: mailto link printed, nothing was sent")
            }
            NotificationKind::Error => notification,
        };
        ConsoleNotifier.notify(notification);
    }
}

pub fn handle_contact(ctx: &CommandContext, params: ContactParams) -> Result<()> {
    let store = ctx.load_store()?;
    let recipient = store.profile().email.clone();

    let message = if params.message == "-" {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read message from stdin")?;
        content.trim_end().to_string()
    } else {
        params.message
    };

    let mut form = ContactForm::with_submission(ContactSubmission::new(
        params.name,
        params.email,
        params.subject,
        message,
    ));

    let opener: &dyn LinkOpener = if params.dry_run {
        &PrintOpener
    } else {
        &SystemOpener
    };
    let notifier: &dyn Notifier = if params.dry_run {
        &DryRunNotifier
    } else {
        &ConsoleNotifier
    };

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(async {
        let (cancel, signal) = cancel_pair();
        let ctrl_c = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });

        let result = submit(
            &mut form,
            &recipient,
            &ctx.config.contact,
            opener,
            notifier,
            signal,
        )
        .await;
        ctrl_c.abort();
        result
    });

    // The notifier has already told the user why; keep the exit status honest.
    match result {
        Ok(SubmitOutcome::Sent) => Ok(()),
        Ok(outcome) => {
            tracing::debug!(outcome = ?outcome, "contact command failed");
            anyhow::bail!("Message not sent")
        }
        Err(rejected) => {
            tracing::debug!(reason = %rejected, "contact command rejected");
            anyhow::bail!("Message not sent")
        }
    }
}
