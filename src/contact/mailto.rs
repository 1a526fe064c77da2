//! `mailto:` URIs for handing a submission to the visitor's mail client.

use crate::model::ContactSubmission;

/// Body layout understood by whoever reads the mail.
pub fn mail_body(submission: &ContactSubmission) -> String {
    format!(
        "Name: {}\nEmail: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    )
}

/// `mailto:` URI with percent-encoded `subject` and `body` parameters.
pub fn mailto_uri(recipient: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

pub fn build_mailto(
    recipient: &str,
    submission: &ContactSubmission,
    default_subject: &str,
) -> String {
    mailto_uri(
        recipient,
        submission.subject_or(default_subject),
        &mail_body(submission),
    )
}
