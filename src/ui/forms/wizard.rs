//! Store wizard view

use super::field_renderer::draw_field;
use crate::wizard::WizardController;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the active step with its fields and the navigation row
pub fn draw(frame: &mut Frame, area: Rect, wizard: &WizardController) {
    let step = wizard.current_step();
    let submitting = wizard.is_submitting();

    let block = Block::default()
        .title(format!(
            " Create Store · step {} of {} ",
            wizard.position(),
            wizard.step_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if submitting {
            Color::DarkGray
        } else {
            Color::Cyan
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(3)]; // Heading + prompt
    for name in &step.fields {
        let multiline = wizard.form().field(name).is_some_and(|f| f.is_multiline);
        constraints.push(Constraint::Length(if multiline { 6 } else { 3 }));
    }
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Buttons

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(inner);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            step.heading.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            step.prompt.as_str(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, chunks[0]);

    let focused = wizard.focused_field();
    for (i, name) in step.fields.iter().enumerate() {
        if let Some(field) = wizard.form().field(name) {
            draw_field(
                frame,
                chunks[i + 1],
                field,
                focused == Some(name.as_str()),
                submitting,
            );
        }
    }

    if let Some(area) = chunks.last() {
        frame.render_widget(Paragraph::new(navigation_row(wizard)), *area);
    }
}

fn navigation_row(wizard: &WizardController) -> Line<'static> {
    let key = Style::default().fg(Color::Cyan);
    let mut spans = Vec::new();

    if wizard.position() > 1 {
        spans.push(Span::styled("Esc", key));
        spans.push(Span::raw(": back  "));
    }

    if wizard.is_submitting() {
        spans.push(Span::styled("Saving store...", Style::default().fg(Color::Yellow)));
    } else if wizard.is_terminal() {
        let style = if wizard.can_submit() {
            key
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled("Enter", style));
        spans.push(Span::styled(": save store ✓", style));
    } else {
        spans.push(Span::styled("Enter", key));
        spans.push(Span::raw(": next →"));
    }

    Line::from(spans)
}
