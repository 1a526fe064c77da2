//! Input validation for contact submissions.

use crate::model::ContactSubmission;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// `local@domain.tld` shape only; says nothing about deliverability.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// A rejected contact submission. The display text is shown to the visitor.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please enter your name")]
    NameRequired,

    #[error("Please enter your email")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a message")]
    MessageRequired,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validates a submission. The first failing rule wins.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), ContactError> {
    if submission.name.trim().is_empty() {
        return Err(ContactError::NameRequired);
    }
    if submission.email.trim().is_empty() {
        return Err(ContactError::EmailRequired);
    }
    if !is_valid_email(&submission.email) {
        return Err(ContactError::InvalidEmail);
    }
    if submission.message.trim().is_empty() {
        return Err(ContactError::MessageRequired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission::new(name, email, "", message)
    }

    #[test]
    fn test_valid_submission() {
        assert!(validate_submission(&submission("Jane Doe", "jane@example.com", "Hello")).is_ok());
    }

    #[test]
    fn test_blank_fields() {
        assert_eq!(
            validate_submission(&submission("  ", "jane@example.com", "Hello")),
            Err(ContactError::NameRequired)
        );
        assert_eq!(
            validate_submission(&submission("Jane", " \t", "Hello")),
            Err(ContactError::EmailRequired)
        );
        assert_eq!(
            validate_submission(&submission("Jane", "jane@example.com", "\n")),
            Err(ContactError::MessageRequired)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(
            validate_submission(&submission("", "", "")),
            Err(ContactError::NameRequired)
        );
        assert_eq!(
            validate_submission(&submission("Jane", "nope", "")),
            Err(ContactError::InvalidEmail)
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("first.last+tag@mail.example.co.uk"));

        assert!(!is_valid_email("jane.example.com"));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("jane@exa mple.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("jane@@example.com"));
        assert!(!is_valid_email(" jane@example.com"));
    }

    #[test]
    fn test_untrimmed_email_is_invalid() {
        assert_eq!(
            validate_submission(&submission("Jane", "jane@example.com ", "Hello")),
            Err(ContactError::InvalidEmail)
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactError::NameRequired.to_string(), "Please enter your name");
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }
}
