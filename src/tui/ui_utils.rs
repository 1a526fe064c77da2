use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
};

use super::theme::theme;

/// Helper function to create a centered rect
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Rect for the `index`-th toast stacked down from the top-right corner.
pub fn toast_rect(area: Rect, index: u16, width: u16) -> Option<Rect> {
    const HEIGHT: u16 = 3;
    let width = width.min(area.width);
    let y = area.y + 1 + index * HEIGHT;
    if y + HEIGHT > area.y + area.height {
        return None;
    }
    Some(Rect {
        x: area.x + area.width - width,
        y,
        width,
        height: HEIGHT,
    })
}

/// Render labels as `a · b · c` in the technology color.
pub fn tag_line(labels: &[String]) -> Line<'static> {
    let t = theme();
    let mut spans = Vec::new();
    for (i, label) in labels.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(t.text_muted)));
        }
        spans.push(Span::styled(label.clone(), Style::default().fg(t.technology)));
    }
    Line::from(spans)
}

/// Key/value row used in the profile and contact panels.
pub fn field_line(label: &str, value: &str) -> Line<'static> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(t.text_muted)),
        Span::styled(value.to_string(), Style::default().fg(t.text)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_hugs_top_right() {
        let area = Rect::new(0, 0, 100, 30);
        let rect = toast_rect(area, 0, 40).unwrap();
        assert_eq!(rect.x + rect.width, 100);
        assert_eq!(rect.y, 1);

        let second = toast_rect(area, 1, 40).unwrap();
        assert_eq!(second.y, 4);
    }

    #[test]
    fn test_toast_rect_overflow() {
        let area = Rect::new(0, 0, 20, 5);
        assert!(toast_rect(area, 0, 40).is_some());
        assert!(toast_rect(area, 1, 40).is_none());
    }
}
