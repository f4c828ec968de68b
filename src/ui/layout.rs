//! Layout components (status bar, toasts)

use crate::app::App;
use crate::state::{ToastKind, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 40;

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_view_hints(&app.state.current_view)),
        Style::default().fg(Color::White),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Stack toasts in the top-right corner, newest on top
pub fn draw_toasts(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y;

    for toast in app.state.toasts.iter().rev() {
        let (title, color) = match toast.kind {
            ToastKind::Success => (" ✓ ", Color::Green),
            ToastKind::Error => (" Error ", Color::Red),
        };
        // Two border rows plus the wrapped message
        let text_width = width.saturating_sub(2).max(1) as usize;
        let lines = toast.message.chars().count().div_ceil(text_width).max(1) as u16;
        let height = lines + 2;
        if y + height > area.bottom() {
            break;
        }

        let toast_area = Rect {
            x: area.right().saturating_sub(width),
            y,
            width,
            height,
        };
        frame.render_widget(Clear, toast_area);
        frame.render_widget(
            Paragraph::new(toast.message.as_str())
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .title(title)
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                ),
            toast_area,
        );
        y += height;
    }
}

/// Get keyboard hints for the current view
fn get_view_hints(view: &View) -> String {
    match view {
        View::CreateStore => {
            "Enter:next/save  Shift+Enter:newline  Esc:back  Tab:field  ^C:quit".to_string()
        }
        View::StoreDashboard { .. } => "n:new store  q:quit".to_string(),
    }
}
