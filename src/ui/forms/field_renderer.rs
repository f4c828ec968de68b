//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field, its placeholder when empty and its error in the
/// bottom border
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, disabled: bool) {
    let accent = if field.has_error() {
        Color::Red
    } else if is_active && !disabled {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let value_style = if field.value.is_empty() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    } else if disabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default()
    };

    let cursor = if is_active && !disabled { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let mut lines: Vec<Line> = field
        .display_value()
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
        .collect();
    // The placeholder sits after the cursor, typed text before it
    if field.value.is_empty() {
        match lines.first_mut() {
            Some(first) => first.spans.insert(0, cursor_span),
            None => lines.push(Line::from(cursor_span)),
        }
    } else if field.value.ends_with('\n') {
        lines.push(Line::from(cursor_span));
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor_span);
    }

    let mut block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    if let Some(error) = &field.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
