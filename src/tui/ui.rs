use super::app::{App, InputMode};
use super::theme::{Theme, theme};
use super::{ui_utils, ui_views};
use crate::sections::Section;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};

pub fn draw(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Section tabs
            Constraint::Min(0),    // Current section
            Constraint::Length(1), // Footer (keybindings only)
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    match app.section {
        Section::Hero => ui_views::draw_hero(f, &app.store, chunks[1]),
        Section::About => ui_views::draw_about(f, &app.store, app.about_scroll, chunks[1]),
        Section::Experience => {
            ui_views::draw_experience(f, &app.store, &mut app.experience, chunks[1])
        }
        Section::Projects => ui_views::draw_projects(f, &app.store, &mut app.projects, chunks[1]),
        Section::Contact => ui_views::draw_contact(
            f,
            &app.store,
            &app.contact,
            app.input_mode == InputMode::ContactForm,
            chunks[1],
        ),
    }

    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help_popup(f);
    }

    draw_toasts(f, app);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, s)| Line::from(format!("{} {}", i + 1, s.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.section.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(t.border_style(false))
                .title(Span::styled(
                    format!(" {} ", app.store.profile().name),
                    Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
                )),
        )
        .style(Style::default().fg(t.text_muted))
        .highlight_style(
            Style::default()
                .fg(t.border_focused)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(tabs, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let t = theme();
    let mode_indicator = match (app.input_mode, app.is_submitting()) {
        (_, true) => Span::styled(
            " SENDING ",
            Style::default().bg(t.mode_sending.0).fg(t.mode_sending.1),
        ),
        (InputMode::Normal, false) => Span::styled(
            " NORMAL ",
            Style::default().bg(t.mode_normal.0).fg(t.mode_normal.1),
        ),
        (InputMode::ContactForm, false) => Span::styled(
            " FORM ",
            Style::default().bg(t.mode_form.0).fg(t.mode_form.1),
        ),
    };

    let help_text = match app.input_mode {
        InputMode::Normal => match app.section {
            Section::Projects => {
                " ←→:section  ↑↓:select  Enter:details  o:code  O:demo  y:copy-email  ?:help  q:quit "
            }
            Section::Contact => " ←→:section  Enter/i:write  y:copy-email  m:mail  ?:help  q:quit ",
            _ => " ←→:section  ↑↓:scroll  i:contact  y:copy-email  ?:help  q:quit ",
        },
        InputMode::ContactForm if app.is_submitting() => " Esc:cancel ",
        InputMode::ContactForm => " Tab:next field  Enter/Ctrl+S:send  Esc:back ",
    };

    let footer = Paragraph::new(Line::from(vec![
        mode_indicator,
        Span::styled(help_text, Style::default().fg(t.text_muted)),
    ]));
    f.render_widget(footer, area);
}

fn draw_toasts(f: &mut Frame, app: &App) {
    let t = theme();
    let area = f.area();
    let toasts = app.toasts.borrow();
    for (i, toast) in toasts.visible().iter().rev().enumerate() {
        let Some(rect) = ui_utils::toast_rect(area, i as u16, 44) else {
            break;
        };
        let kind = toast.notification.kind;
        let style = t.toast_style(kind);
        let text = Paragraph::new(Line::from(format!(
            " {} {}",
            Theme::toast_icon(kind),
            toast.notification.message
        )))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(style),
        );
        f.render_widget(Clear, rect);
        f.render_widget(text, rect);
    }
}

fn draw_help_popup(f: &mut Frame) {
    let area = ui_utils::centered_rect(60, 70, f.area());
    let t = theme();
    let key_style = Style::default().fg(t.help_key);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Navigation",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("←/→ Tab  ", key_style),
            Span::raw("Previous/next section"),
        ]),
        Line::from(vec![
            Span::styled("1-5      ", key_style),
            Span::raw("Jump to section"),
        ]),
        Line::from(vec![
            Span::styled("↑/↓      ", key_style),
            Span::raw("Select entry / scroll"),
        ]),
        Line::from(vec![
            Span::styled("Enter    ", key_style),
            Span::raw("Expand project / open contact form"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Actions",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("o / O    ", key_style),
            Span::raw("Open project code / demo"),
        ]),
        Line::from(vec![
            Span::styled("y        ", key_style),
            Span::raw("Copy email to clipboard"),
        ]),
        Line::from(vec![
            Span::styled("m        ", key_style),
            Span::raw("Open mail client"),
        ]),
        Line::from(vec![
            Span::styled("i        ", key_style),
            Span::raw("Write a message"),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Contact form",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(vec![
            Span::styled("Tab      ", key_style),
            Span::raw("Next field"),
        ]),
        Line::from(vec![
            Span::styled("Ctrl+S   ", key_style),
            Span::raw("Send"),
        ]),
        Line::from(vec![
            Span::styled("Esc      ", key_style),
            Span::raw("Cancel sending / leave form"),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("?        ", key_style),
            Span::raw("Toggle help"),
        ]),
        Line::from(vec![Span::styled("q        ", key_style), Span::raw("Quit")]),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(t.help_border)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(help, area);
}
