//! Landing view for a freshly created store

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, store_id: &str) {
    let block = Block::default()
        .title(format!(" /{store_id}/dashboard "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let text = vec![
        Line::from(Span::styled(
            "DailySales",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from("Simple sales monitoring for your store."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Store "),
            Span::styled(store_id.to_string(), Style::default().fg(Color::Cyan)),
            Span::raw(" is ready."),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
