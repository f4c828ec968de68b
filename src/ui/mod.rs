//! UI module for rendering the TUI

mod dashboard;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match &app.state.current_view {
        View::CreateStore => {
            if let Some(wizard) = &app.state.wizard {
                forms::wizard::draw(frame, main_area, wizard);
            }
        }
        View::StoreDashboard { store_id } => dashboard::draw(frame, main_area, store_id),
    }

    layout::draw_status_bar(frame, status_area, app);
    layout::draw_toasts(frame, app);
}
