use serde::{Deserialize, Serialize};
use std::fmt;

/// One in-progress contact form entry.
///
/// Lives only as long as the form session that owns it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Subject => "Subject",
            FormField::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.field(*f).is_empty())
    }

    /// Subject to send, falling back to `default` when left empty.
    pub fn subject_or<'a>(&'a self, default: &'a str) -> &'a str {
        if self.subject.is_empty() {
            default
        } else {
            &self.subject
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_cycle() {
        let mut field = FormField::Name;
        for _ in 0..4 {
            field = field.next();
        }
        assert_eq!(field, FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn test_subject_fallback() {
        let mut submission = ContactSubmission::new("a", "b", "", "c");
        assert_eq!(submission.subject_or("Default"), "Default");
        submission.subject = "Hi".to_string();
        assert_eq!(submission.subject_or("Default"), "Hi");
        // Only an empty subject falls back; whitespace is sent as typed
        submission.subject = "  ".to_string();
        assert_eq!(submission.subject_or("Default"), "  ");
    }

    #[test]
    fn test_field_mut_edits_in_place() {
        let mut submission = ContactSubmission::default();
        assert!(submission.is_empty());
        submission.field_mut(FormField::Message).push_str("hello");
        assert_eq!(submission.field(FormField::Message), "hello");
        assert!(!submission.is_empty());
    }
}
