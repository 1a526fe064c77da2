use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use folio::{
    config::ContactSettings,
    error::{FolioError, Result},
    model::FormField,
    notify::NotificationKind,
    platform::{Clipboard, LinkOpener},
    sections::Section,
    storage::{ContentStore, SAMPLE_CONTENT},
    tui::{
        app::{App, InputMode},
        handle_key,
    },
};
use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

type Log = Rc<RefCell<Vec<String>>>;

struct FakeClipboard {
    fail: bool,
    copied: Log,
}

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::Clipboard("no display".to_string()));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

struct FakeOpener {
    fail: bool,
    opened: Log,
}

impl LinkOpener for FakeOpener {
    fn open(&self, url: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::Open("no handler".to_string()));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct Harness {
    app: App,
    copied: Log,
    opened: Log,
}

fn harness_with(settings: ContactSettings, clipboard_fails: bool, opener_fails: bool) -> Harness {
    let store = ContentStore::from_json(SAMPLE_CONTENT).unwrap();
    let copied = Log::default();
    let opened = Log::default();
    let app = App::with_platform(
        store,
        settings,
        tokio::runtime::Handle::current(),
        Box::new(FakeClipboard {
            fail: clipboard_fails,
            copied: copied.clone(),
        }),
        Box::new(FakeOpener {
            fail: opener_fails,
            opened: opened.clone(),
        }),
    );
    Harness {
        app,
        copied,
        opened,
    }
}

fn fast_settings() -> ContactSettings {
    ContactSettings {
        pending_delay_ms: 5,
        timeout_ms: 2000,
        ..ContactSettings::default()
    }
}

fn harness() -> Harness {
    harness_with(fast_settings(), false, false)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn toasts(app: &App) -> Vec<(NotificationKind, String)> {
    app.toasts
        .borrow()
        .visible()
        .iter()
        .map(|t| (t.notification.kind, t.notification.message.clone()))
        .collect()
}

fn fill_form(app: &mut App) {
    app.contact.set_field(FormField::Name, "Jane Doe");
    app.contact.set_field(FormField::Email, "jane@example.com");
    app.contact.set_field(FormField::Message, "Hello");
}

async fn settle(app: &mut App) {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(10)).await;
        app.tick(Instant::now());
        if !app.is_submitting() {
            return;
        }
    }
    panic!("submission never settled");
}

// =============================================================================
// Navigation
// =============================================================================

#[tokio::test]
async fn test_navigate_known_and_unknown() {
    let mut h = harness();
    assert_eq!(h.app.section, Section::Hero);

    assert!(h.app.navigate("projects"));
    assert_eq!(h.app.section, Section::Projects);

    assert!(!h.app.navigate("pricing"));
    assert_eq!(h.app.section, Section::Projects);
    assert!(toasts(&h.app).is_empty());
}

#[tokio::test]
async fn test_section_cycling_wraps() {
    let mut h = harness();
    h.app.prev_section();
    assert_eq!(h.app.section, Section::Contact);
    h.app.next_section();
    assert_eq!(h.app.section, Section::Hero);

    for expected in [Section::About, Section::Experience, Section::Projects] {
        handle_key(&mut h.app, key(KeyCode::Tab)).unwrap();
        assert_eq!(h.app.section, expected);
    }
}

#[tokio::test]
async fn test_number_keys_jump_to_sections() {
    let mut h = harness();
    handle_key(&mut h.app, key(KeyCode::Char('5'))).unwrap();
    assert_eq!(h.app.section, Section::Contact);
    handle_key(&mut h.app, key(KeyCode::Char('3'))).unwrap();
    assert_eq!(h.app.section, Section::Experience);
}

#[tokio::test]
async fn test_list_selection_wraps() {
    let mut h = harness();
    h.app.navigate("experience");
    h.app.next();
    assert_eq!(h.app.experience.selected, 1);
    h.app.next();
    assert_eq!(h.app.experience.selected, 0);
    h.app.previous();
    assert_eq!(h.app.experience.selected, 1);
}

#[tokio::test]
async fn test_project_expand_toggle() {
    let mut h = harness();
    h.app.navigate("projects");
    handle_key(&mut h.app, key(KeyCode::Down)).unwrap();
    handle_key(&mut h.app, key(KeyCode::Enter)).unwrap();
    assert_eq!(h.app.projects.expanded, Some(1));
    handle_key(&mut h.app, key(KeyCode::Enter)).unwrap();
    assert_eq!(h.app.projects.expanded, None);
}

#[tokio::test]
async fn test_quit_key() {
    let mut h = harness();
    assert!(handle_key(&mut h.app, key(KeyCode::Char('q'))).unwrap());
}

// =============================================================================
// Clipboard and links
// =============================================================================

#[tokio::test]
async fn test_copy_email_success() {
    let mut h = harness();
    assert!(h.app.copy_email());
    assert_eq!(*h.copied.borrow(), vec!["alex@example.com".to_string()]);
    assert_eq!(
        toasts(&h.app),
        vec![(NotificationKind::Success, "Copied to clipboard!".to_string())]
    );
}

#[tokio::test]
async fn test_copy_email_failure() {
    let mut h = harness_with(fast_settings(), true, false);
    assert!(!h.app.copy_email());
    assert!(h.copied.borrow().is_empty());
    assert_eq!(
        toasts(&h.app),
        vec![(
            NotificationKind::Error,
            "Failed to copy to clipboard".to_string()
        )]
    );
}

#[tokio::test]
async fn test_open_project_links() {
    let mut h = harness();
    h.app.navigate("projects");

    // proj-1 only has a repository
    assert!(h.app.open_selected_project(false));
    assert!(!h.app.open_selected_project(true));
    assert_eq!(h.opened.borrow().len(), 1);
    assert_eq!(
        toasts(&h.app),
        vec![(NotificationKind::Error, "No demo link".to_string())]
    );
}

#[tokio::test]
async fn test_open_link_failure_toast() {
    let mut h = harness_with(fast_settings(), false, true);
    assert!(!h.app.open_mail_client());
    assert_eq!(
        toasts(&h.app),
        vec![(NotificationKind::Error, "Failed to open link".to_string())]
    );
}

#[tokio::test]
async fn test_toasts_expire() {
    let mut h = harness();
    h.app.copy_email();
    h.app.tick(Instant::now() + Duration::from_secs(2));
    assert_eq!(toasts(&h.app).len(), 1);
    h.app.tick(Instant::now() + Duration::from_secs(4));
    assert!(toasts(&h.app).is_empty());
}

// =============================================================================
// Contact form
// =============================================================================

#[tokio::test]
async fn test_typing_into_form() {
    let mut h = harness();
    handle_key(&mut h.app, key(KeyCode::Char('i'))).unwrap();
    assert_eq!(h.app.input_mode, InputMode::ContactForm);
    assert_eq!(h.app.section, Section::Contact);

    for c in "Jo".chars() {
        handle_key(&mut h.app, key(KeyCode::Char(c))).unwrap();
    }
    handle_key(&mut h.app, key(KeyCode::Backspace)).unwrap();
    handle_key(&mut h.app, key(KeyCode::Tab)).unwrap();
    handle_key(&mut h.app, key(KeyCode::Char('q'))).unwrap();

    assert_eq!(h.app.contact.submission().name, "J");
    assert_eq!(h.app.contact.submission().email, "q");

    handle_key(&mut h.app, key(KeyCode::Esc)).unwrap();
    assert_eq!(h.app.input_mode, InputMode::Normal);
}

#[tokio::test]
async fn test_invalid_submit_never_starts() {
    let mut h = harness();
    h.app.enter_contact_form();
    assert!(!h.app.submit_contact());
    assert!(!h.app.is_submitting());
    assert_eq!(
        toasts(&h.app),
        vec![(NotificationKind::Error, "Please enter your name".to_string())]
    );
}

#[tokio::test]
async fn test_submit_settles_with_mailto() {
    let mut h = harness();
    h.app.enter_contact_form();
    fill_form(&mut h.app);

    assert!(h.app.submit_contact());
    assert!(h.app.is_submitting());
    assert!(h.app.contact.is_submitting());

    settle(&mut h.app).await;

    let opened = h.opened.borrow();
    assert_eq!(opened.len(), 1);
    assert!(opened[0].starts_with("mailto:alex@example.com?subject=Portfolio%20Contact&body="));
    assert!(h.app.contact.submission().is_empty());
    assert_eq!(
        toasts(&h.app),
        vec![(
            NotificationKind::Success,
            "Message sent successfully!".to_string()
        )]
    );
}

#[tokio::test]
async fn test_second_submit_ignored_while_pending() {
    let mut h = harness();
    fill_form(&mut h.app);

    assert!(h.app.submit_contact());
    assert!(!h.app.submit_contact());
    assert!(!h.app.contact.push_char('x'));

    settle(&mut h.app).await;
    assert_eq!(h.opened.borrow().len(), 1);
    assert_eq!(toasts(&h.app).len(), 1);
}

#[tokio::test]
async fn test_cancel_keeps_fields() {
    let settings = ContactSettings {
        pending_delay_ms: 60_000,
        timeout_ms: 120_000,
        ..ContactSettings::default()
    };
    let mut h = harness_with(settings, false, false);
    h.app.enter_contact_form();
    fill_form(&mut h.app);

    assert!(h.app.submit_contact());
    handle_key(&mut h.app, key(KeyCode::Esc)).unwrap();
    // Esc cancelled the send rather than leaving the form
    assert_eq!(h.app.input_mode, InputMode::ContactForm);
    assert!(!h.app.cancel_submission());

    settle(&mut h.app).await;

    assert!(h.opened.borrow().is_empty());
    assert_eq!(h.app.contact.submission().name, "Jane Doe");
    assert!(h.app.contact.can_submit());
    assert_eq!(
        toasts(&h.app),
        vec![(NotificationKind::Error, "Submission cancelled".to_string())]
    );
}

#[tokio::test]
async fn test_handoff_failure_keeps_fields() {
    let mut h = harness_with(fast_settings(), false, true);
    fill_form(&mut h.app);
    h.app.submit_contact();
    settle(&mut h.app).await;

    assert_eq!(h.app.contact.submission().email, "jane@example.com");
    assert_eq!(
        toasts(&h.app),
        vec![(
            NotificationKind::Error,
            "Failed to send message. Please try again.".to_string()
        )]
    );
}
