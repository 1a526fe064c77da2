use super::{handlers, ui};
use crate::{
    config::{ContactSettings, FolioConfig},
    contact::{self, CancelHandle, ContactForm, PendingError, SubmitOutcome},
    error::Result,
    notify::{Notification, Notifier, ToastQueue},
    platform::{self, Clipboard, LinkOpener, SystemClipboard, SystemOpener},
    sections::Section,
    storage::ContentStore,
};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use std::{
    cell::RefCell,
    io,
    time::{Duration, Instant},
};
use tokio::{runtime::Handle, sync::oneshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    ContactForm,
}

/// Selection state for a list-style section.
#[derive(Debug, Default)]
pub struct ListView {
    pub selected: usize,
    pub list_state: ListState,
}

impl ListView {
    pub fn new(count: usize) -> Self {
        let mut list_state = ListState::default();
        if count > 0 {
            list_state.select(Some(0));
        }
        Self {
            selected: 0,
            list_state,
        }
    }

    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn previous(&mut self, count: usize) {
        if count > 0 {
            self.selected = if self.selected == 0 {
                count - 1
            } else {
                self.selected - 1
            };
            self.list_state.select(Some(self.selected));
        }
    }
}

/// State owned by the projects gallery.
#[derive(Debug, Default)]
pub struct ProjectsView {
    pub list: ListView,
    /// Project whose details are expanded
    pub expanded: Option<usize>,
}

impl ProjectsView {
    pub fn toggle_expanded(&mut self) {
        let selected = self.list.selected;
        self.expanded = if self.expanded == Some(selected) {
            None
        } else {
            Some(selected)
        };
    }
}

/// The pending wait of an in-flight contact submission.
struct PendingSubmission {
    result: oneshot::Receiver<std::result::Result<(), PendingError>>,
    cancel: Option<CancelHandle>,
}

pub struct App {
    pub store: ContentStore,
    pub settings: ContactSettings,
    pub section: Section,
    pub input_mode: InputMode,
    pub about_scroll: u16,
    pub experience: ListView,
    pub projects: ProjectsView,
    pub contact: ContactForm,
    pub toasts: RefCell<ToastQueue>,
    pub show_help: bool,
    runtime: Handle,
    pending: Option<PendingSubmission>,
    clipboard: Box<dyn Clipboard>,
    opener: Box<dyn LinkOpener>,
}

impl App {
    pub fn new(store: ContentStore, settings: ContactSettings, runtime: Handle) -> Self {
        Self::with_platform(
            store,
            settings,
            runtime,
            Box::new(SystemClipboard::new()),
            Box::new(SystemOpener),
        )
    }

    pub fn with_platform(
        store: ContentStore,
        settings: ContactSettings,
        runtime: Handle,
        clipboard: Box<dyn Clipboard>,
        opener: Box<dyn LinkOpener>,
    ) -> Self {
        let experience = ListView::new(store.experience().len());
        let projects = ProjectsView {
            list: ListView::new(store.projects().len()),
            expanded: None,
        };
        Self {
            store,
            settings,
            section: Section::default(),
            input_mode: InputMode::Normal,
            about_scroll: 0,
            experience,
            projects,
            contact: ContactForm::new(),
            toasts: RefCell::new(ToastQueue::new()),
            show_help: false,
            runtime,
            pending: None,
            clipboard,
            opener,
        }
    }

    pub fn notify(&self, notification: Notification) {
        self.toasts.notify(notification);
    }

    /// Jump to the section with anchor `id`. Unknown ids are ignored.
    pub fn navigate(&mut self, id: &str) -> bool {
        match Section::from_id(id) {
            Some(section) => {
                self.section = section;
                self.about_scroll = 0;
                true
            }
            None => {
                tracing::debug!(id = %id, "ignoring navigation to unknown section");
                false
            }
        }
    }

    pub fn next_section(&mut self) {
        let id = self.section.next().id();
        self.navigate(id);
    }

    pub fn prev_section(&mut self) {
        let id = self.section.prev().id();
        self.navigate(id);
    }

    pub fn next(&mut self) {
        match self.section {
            Section::Experience => self.experience.next(self.store.experience().len()),
            Section::Projects => self.projects.list.next(self.store.projects().len()),
            Section::About => self.about_scroll = self.about_scroll.saturating_add(1),
            _ => {}
        }
    }

    pub fn previous(&mut self) {
        match self.section {
            Section::Experience => self.experience.previous(self.store.experience().len()),
            Section::Projects => self.projects.list.previous(self.store.projects().len()),
            Section::About => self.about_scroll = self.about_scroll.saturating_sub(1),
            _ => {}
        }
    }

    pub fn copy_email(&mut self) -> bool {
        let email = self.store.profile().email.clone();
        platform::copy_to_clipboard(self.clipboard.as_mut(), &self.toasts, &email)
    }

    fn open_link(&self, url: &str) -> bool {
        match platform::open_external(self.opener.as_ref(), url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to open link");
                self.notify(Notification::error("Failed to open link"));
                false
            }
        }
    }

    /// Open the selected project's repository, or its demo when `demo` is set.
    pub fn open_selected_project(&mut self, demo: bool) -> bool {
        let Some(project) = self.store.projects().get(self.projects.list.selected) else {
            return false;
        };
        let (kind, link) = if demo {
            ("demo", project.demo.clone())
        } else {
            ("repository", project.github.clone())
        };
        match link {
            Some(url) => self.open_link(&url),
            None => {
                self.notify(Notification::error(format!("No {} link", kind)));
                false
            }
        }
    }

    /// Start a message in the visitor's mail client with no form.
    pub fn open_mail_client(&mut self) -> bool {
        let url = format!("mailto:{}", self.store.profile().email);
        self.open_link(&url)
    }

    pub fn enter_contact_form(&mut self) {
        self.section = Section::Contact;
        self.input_mode = InputMode::ContactForm;
    }

    pub fn leave_contact_form(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    /// Validate the form and start the pending wait.
    pub fn submit_contact(&mut self) -> bool {
        if let Err(rejected) = self.contact.begin_submit() {
            if let Some(notification) = rejected.notification() {
                self.notify(notification);
            }
            return false;
        }

        let (cancel, signal) = contact::cancel_pair();
        let (tx, rx) = oneshot::channel();
        let delay = self.settings.pending_delay();
        let timeout = self.settings.timeout();
        self.runtime.spawn(async move {
            let result = contact::wait_pending(delay, timeout, signal).await;
            let _ = tx.send(result);
        });
        self.pending = Some(PendingSubmission {
            result: rx,
            cancel: Some(cancel),
        });
        true
    }

    /// Cancel the in-flight submission; it settles on the next tick.
    pub fn cancel_submission(&mut self) -> bool {
        match self.pending.as_mut().and_then(|p| p.cancel.take()) {
            Some(cancel) => {
                cancel.cancel();
                true
            }
            None => false,
        }
    }

    /// Expire toasts and settle a finished submission.
    pub fn tick(&mut self, now: Instant) {
        self.toasts.borrow_mut().prune(now);

        let Some(pending) = self.pending.as_mut() else {
            return;
        };
        let result = match pending.result.try_recv() {
            Ok(result) => result,
            Err(oneshot::error::TryRecvError::Empty) => return,
            Err(oneshot::error::TryRecvError::Closed) => Err(PendingError::Cancelled),
        };
        self.pending = None;

        let outcome = match result {
            Ok(()) => contact::hand_off(
                &self.contact,
                &self.store.profile().email,
                &self.settings.default_subject,
                self.opener.as_ref(),
            ),
            Err(e) => SubmitOutcome::from(e),
        };
        if let Some(notification) = self.contact.settle(&outcome) {
            self.notify(notification);
        }
    }
}

pub fn run_tui(config: FolioConfig, store: ContentStore) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, config.contact.clone(), runtime.handle().clone());
    let res = run_app(&mut terminal, &mut app, config.tui.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick_rate: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handlers::handle_key(app, key)? {
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now());
    }
}
