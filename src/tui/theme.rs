//! Central theme configuration for the TUI.
//!
//! All colors and styles are defined here to maintain consistency.

use ratatui::style::{Color, Modifier, Style};

use crate::model::ProjectStatus;
use crate::notify::NotificationKind;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // General UI
    pub border: Color,
    pub border_focused: Color,
    pub selection_indicator: Color,

    // Text
    pub text: Color,
    pub text_muted: Color,
    pub text_highlight: Color,
    pub accent: Color,

    // Project status badges
    pub status_open_source: Color,
    pub status_production: Color,
    pub status_client: Color,
    pub status_other: Color,

    // Tags
    pub technology: Color,
    pub achievement: Color,

    // Toasts
    pub toast_success: Color,
    pub toast_error: Color,
    pub toast_text: Color,

    // Contact form
    pub field_focused: Color,
    pub field_idle: Color,
    pub cursor: Color,

    // Footer/Mode colors
    pub mode_normal: (Color, Color), // (bg, fg)
    pub mode_form: (Color, Color),
    pub mode_sending: (Color, Color),

    // Help popup
    pub help_key: Color,
    pub help_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Monokai base with the web palette for badges and toasts
        Self {
            border: Color::Rgb(117, 113, 94),
            border_focused: Color::Rgb(166, 226, 46),
            selection_indicator: Color::Rgb(166, 226, 46),

            text: Color::Rgb(248, 248, 242),
            text_muted: Color::Rgb(117, 113, 94),
            text_highlight: Color::Rgb(248, 248, 242),
            accent: Color::Rgb(102, 217, 239),

            status_open_source: Color::Rgb(16, 185, 129),
            status_production: Color::Rgb(59, 130, 246),
            status_client: Color::Rgb(139, 92, 246),
            status_other: Color::Rgb(107, 114, 128),

            technology: Color::Rgb(174, 129, 255),
            achievement: Color::Rgb(166, 226, 46),

            toast_success: Color::Rgb(16, 185, 129),
            toast_error: Color::Rgb(239, 68, 68),
            toast_text: Color::Rgb(255, 255, 255),

            field_focused: Color::Rgb(230, 219, 116),
            field_idle: Color::Rgb(117, 113, 94),
            cursor: Color::Rgb(248, 248, 242),

            mode_normal: (Color::Rgb(166, 226, 46), Color::Black),
            mode_form: (Color::Rgb(230, 219, 116), Color::Black),
            mode_sending: (Color::Rgb(253, 151, 31), Color::Black),

            help_key: Color::Rgb(102, 217, 239),
            help_border: Color::Rgb(102, 217, 239),
        }
    }
}

impl Theme {
    /// Badge color; unknown statuses get the neutral treatment
    pub fn status_color(&self, status: &ProjectStatus) -> Color {
        match status {
            ProjectStatus::OpenSource => self.status_open_source,
            ProjectStatus::Production => self.status_production,
            ProjectStatus::ClientProject => self.status_client,
            ProjectStatus::Other(_) => self.status_other,
        }
    }

    pub fn status_badge_style(&self, status: &ProjectStatus) -> Style {
        Style::default()
            .bg(self.status_color(status))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast_style(&self, kind: NotificationKind) -> Style {
        let bg = match kind {
            NotificationKind::Success => self.toast_success,
            NotificationKind::Error => self.toast_error,
        };
        Style::default()
            .bg(bg)
            .fg(self.toast_text)
            .add_modifier(Modifier::BOLD)
    }

    pub fn toast_icon(kind: NotificationKind) -> &'static str {
        match kind {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
        }
    }

    /// Style for selected items
    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.text_highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn field_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.field_focused
        } else {
            self.field_idle
        })
    }

    /// Border style for blocks
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }
}

/// Global theme instance
static THEME: std::sync::OnceLock<Theme> = std::sync::OnceLock::new();

/// Get the current theme
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
