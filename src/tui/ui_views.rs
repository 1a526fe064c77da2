use super::app::{ListView, ProjectsView};
use super::theme::theme;
use super::ui_utils::{field_line, tag_line};
use crate::contact::ContactForm;
use crate::model::FormField;
use crate::storage::ContentStore;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
};

fn section_block(title: &str, focused: bool) -> Block<'static> {
    let t = theme();
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(t.border_style(focused))
}

fn heading(text: &str) -> Line<'static> {
    let t = theme();
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(t.accent)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

pub fn draw_hero(f: &mut Frame, store: &ContentStore, area: Rect) {
    let t = theme();
    let profile = store.profile();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(t.text_highlight).add_modifier(Modifier::BOLD),
        )),
    ];
    if let Some(ref title) = profile.title {
        lines.push(Line::from(Span::styled(
            title.clone(),
            Style::default().fg(t.accent),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        profile.bio.clone(),
        Style::default().fg(t.text),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(
            profile.years_of_experience.clone(),
            Style::default().fg(t.border_focused).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" years experience    ", Style::default().fg(t.text_muted)),
        Span::styled(
            format!("{}+", store.projects().len()),
            Style::default().fg(t.border_focused).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" projects", Style::default().fg(t.text_muted)),
    ]));
    lines.push(Line::from(""));
    lines.push(field_line("Email", &profile.email));
    if !profile.location.is_empty() {
        lines.push(field_line("Location", &profile.location));
    }
    for (platform, link) in store.social() {
        lines.push(field_line(platform, link));
    }

    let hero = Paragraph::new(lines)
        .block(section_block("Home", true))
        .wrap(Wrap { trim: true });
    f.render_widget(hero, area);
}

pub fn draw_about(f: &mut Frame, store: &ContentStore, scroll: u16, area: Rect) {
    let t = theme();
    let skills = store.skills();

    let mut lines = vec![heading("Technical skills")];
    for category in &skills.technical {
        lines.push(Line::from(Span::styled(
            category.category.clone(),
            Style::default().fg(t.text_highlight).add_modifier(Modifier::BOLD),
        )));
        lines.push(tag_line(&category.items));
    }

    if !skills.soft.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Soft skills"));
        lines.push(tag_line(&skills.soft));
    }

    lines.push(Line::from(""));
    lines.push(heading("Education"));
    for edu in store.education() {
        lines.push(Line::from(vec![
            Span::styled(
                edu.degree.clone(),
                Style::default().fg(t.text_highlight).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} ({})", edu.institution, edu.year),
                Style::default().fg(t.text_muted),
            ),
        ]));
        if !edu.description.is_empty() {
            lines.push(Line::from(Span::raw(edu.description.clone())));
        }
    }

    if !store.certifications().is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Certifications"));
        for cert in store.certifications() {
            lines.push(Line::from(format!("• {}", cert)));
        }
    }

    let about = Paragraph::new(Text::from(lines))
        .block(section_block("About", true))
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    f.render_widget(about, area);
}

pub fn draw_experience(f: &mut Frame, store: &ContentStore, view: &mut ListView, area: Rect) {
    let t = theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let items: Vec<ListItem> = store
        .experience()
        .iter()
        .map(|exp| {
            ListItem::new(vec![
                Line::from(Span::styled(exp.position.clone(), t.selected_style())),
                Line::from(Span::styled(
                    format!("{} · {}", exp.company, exp.duration),
                    Style::default().fg(t.text_muted),
                )),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(section_block("Experience", true))
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().fg(t.selection_indicator));
    f.render_stateful_widget(list, chunks[0], &mut view.list_state);

    let mut lines = Vec::new();
    if let Some(exp) = store.experience().get(view.selected) {
        lines.push(Line::from(Span::styled(
            format!("{} at {}", exp.position, exp.company),
            Style::default().fg(t.text_highlight).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("{}  {}", exp.duration, exp.location),
            Style::default().fg(t.text_muted),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(exp.description.clone()));
        if !exp.achievements.is_empty() {
            lines.push(Line::from(""));
            for achievement in &exp.achievements {
                lines.push(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(t.achievement)),
                    Span::raw(achievement.clone()),
                ]));
            }
        }
        if !exp.technologies.is_empty() {
            lines.push(Line::from(""));
            lines.push(tag_line(&exp.technologies));
        }
    }

    if !store.publications().is_empty() {
        lines.push(Line::from(""));
        lines.push(heading("Recent publications"));
        for publication in store.publications() {
            lines.push(Line::from(vec![
                Span::styled(publication.title.clone(), t.selected_style()),
                Span::styled(
                    format!("  {} • {}", publication.journal, publication.year),
                    Style::default().fg(t.text_muted),
                ),
            ]));
        }
    }

    let detail = Paragraph::new(lines)
        .block(section_block("Details", false))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[1]);
}

pub fn draw_projects(f: &mut Frame, store: &ContentStore, view: &mut ProjectsView, area: Rect) {
    let t = theme();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = store
        .projects()
        .iter()
        .map(|project| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", project.status),
                    t.status_badge_style(&project.status),
                ),
                Span::raw(" "),
                Span::styled(project.title.clone(), t.selected_style()),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(section_block("Projects", true))
        .highlight_symbol("▌ ")
        .highlight_style(Style::default().fg(t.selection_indicator));
    f.render_stateful_widget(list, chunks[0], &mut view.list.list_state);

    let mut lines = Vec::new();
    if let Some(project) = store.projects().get(view.list.selected) {
        let expanded = view.expanded == Some(view.list.selected);
        lines.push(Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(t.text_highlight).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(project.description.clone()));
        lines.push(Line::from(""));

        if expanded {
            if !project.features.is_empty() {
                lines.push(heading("Key features"));
                for feature in &project.features {
                    lines.push(Line::from(format!("• {}", feature)));
                }
                lines.push(Line::from(""));
            }
            lines.push(heading("Technologies"));
            lines.push(tag_line(&project.technologies));
        } else {
            // Collapsed cards show the first few technologies only
            let preview: Vec<String> = project.technologies.iter().take(3).cloned().collect();
            let mut line = tag_line(&preview);
            if project.technologies.len() > 3 {
                line.spans.push(Span::styled(
                    format!(" +{}", project.technologies.len() - 3),
                    Style::default().fg(t.text_muted),
                ));
            }
            lines.push(line);
            lines.push(Line::from(Span::styled(
                "Enter for details",
                Style::default().fg(t.text_muted),
            )));
        }

        let links = project.links();
        if !links.is_empty() {
            lines.push(Line::from(""));
            for (label, link) in links {
                lines.push(field_line(label, link));
            }
        }
    }

    let detail = Paragraph::new(lines)
        .block(section_block("Details", false))
        .wrap(Wrap { trim: true });
    f.render_widget(detail, chunks[1]);
}

pub fn draw_contact(
    f: &mut Frame,
    store: &ContentStore,
    form: &ContactForm,
    editing: bool,
    area: Rect,
) {
    let t = theme();
    let profile = store.profile();
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let mut info = vec![
        heading("Let's work together"),
        Line::from(""),
        field_line("Email", &profile.email),
    ];
    if !profile.location.is_empty() {
        info.push(field_line("Location", &profile.location));
    }
    info.push(Line::from(""));
    for (platform, link) in store.social() {
        info.push(field_line(platform, link));
    }
    let info = Paragraph::new(info)
        .block(section_block("Contact", !editing))
        .wrap(Wrap { trim: true });
    f.render_widget(info, chunks[0]);

    let form_block = section_block(
        if form.is_submitting() {
            "Sending..."
        } else {
            "Send a message"
        },
        editing,
    );
    let inner = form_block.inner(chunks[1]);
    f.render_widget(form_block, chunks[1]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
        ])
        .split(inner);

    for (field, rect) in FormField::ALL.iter().zip(rows.iter()) {
        let focused = editing && form.focus() == *field;
        let mut text = form.submission().field(*field).to_string();
        if focused && form.can_submit() {
            text.push('_');
        }
        let widget = Paragraph::new(text)
            .style(Style::default().fg(t.text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .title(format!(" {} ", field.label()))
                    .borders(Borders::ALL)
                    .border_set(border::ROUNDED)
                    .border_style(t.field_style(focused)),
            );
        f.render_widget(widget, *rect);
    }
}
