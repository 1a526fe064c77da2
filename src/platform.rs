//! Seams to the operating environment: clipboard and URL handlers.
//!
//! The rest of the crate talks to [`Clipboard`] and [`LinkOpener`] so tests
//! can substitute recording fakes for the system implementations.

use crate::error::{FolioError, Result};
use crate::notify::{Notification, Notifier};

/// Schemes the viewer is willing to hand to the system.
pub const ALLOWED_SCHEMES: [&str; 3] = ["http", "https", "mailto"];

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

pub trait LinkOpener {
    /// Hand `url` to the system's default handler.
    fn open(&self, url: &str) -> Result<()>;
}

/// System clipboard through `arboard`, connected on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| FolioError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| FolioError::Clipboard(e.to_string())),
            None => Err(FolioError::Clipboard("Clipboard not available".to_string())),
        }
    }
}

/// Opens URLs with the platform handler in a detached process.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<()> {
        open::that_detached(url).map_err(|e| FolioError::Open(format!("{}: {}", url, e)))
    }
}

/// Copy `text` to the clipboard, reporting the outcome with exactly one notification.
pub fn copy_to_clipboard(
    clipboard: &mut dyn Clipboard,
    notifier: &dyn Notifier,
    text: &str,
) -> bool {
    match clipboard.set_text(text) {
        Ok(()) => {
            notifier.notify(Notification::success("Copied to clipboard!"));
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "clipboard write failed");
            notifier.notify(Notification::error("Failed to copy to clipboard"));
            false
        }
    }
}

/// Check that `url` parses and uses an allowed scheme.
pub fn check_link(url: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(url).map_err(|e| FolioError::Open(format!("{}: {}", url, e)))?;
    if !ALLOWED_SCHEMES.contains(&parsed.scheme()) {
        return Err(FolioError::Open(format!(
            "{}: unsupported scheme '{}'",
            url,
            parsed.scheme()
        )));
    }
    Ok(parsed)
}

/// Open an external link after checking its scheme.
pub fn open_external(opener: &dyn LinkOpener, url: &str) -> Result<()> {
    check_link(url)?;
    tracing::debug!(url = %url, "opening external link");
    opener.open(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{NotificationKind, NotificationLog};
    use std::cell::RefCell;

    struct FakeClipboard {
        fail: bool,
        contents: Option<String>,
    }

    impl Clipboard for FakeClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(FolioError::Clipboard("no display".to_string()));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_copy_success_notifies_once() {
        let log = NotificationLog::new();
        let mut clipboard = FakeClipboard {
            fail: false,
            contents: None,
        };
        assert!(copy_to_clipboard(&mut clipboard, &log, "a@b.c"));
        assert_eq!(clipboard.contents.as_deref(), Some("a@b.c"));
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, NotificationKind::Success);
    }

    #[test]
    fn test_copy_failure_notifies_once() {
        let log = NotificationLog::new();
        let mut clipboard = FakeClipboard {
            fail: true,
            contents: None,
        };
        assert!(!copy_to_clipboard(&mut clipboard, &log, "a@b.c"));
        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, NotificationKind::Error);
        assert_eq!(entries[0].message, "Failed to copy to clipboard");
    }

    #[test]
    fn test_open_external_rejects_other_schemes() {
        let opener = RecordingOpener::default();
        assert!(open_external(&opener, "file:///etc/passwd").is_err());
        assert!(open_external(&opener, "not a url").is_err());
        assert!(opener.opened.borrow().is_empty());

        open_external(&opener, "https://github.com/example").unwrap();
        open_external(&opener, "mailto:a@b.c").unwrap();
        assert_eq!(opener.opened.borrow().len(), 2);
    }
}
