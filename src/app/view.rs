use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::state::AppState;
use crate::ui::widgets;

pub fn render(f: &mut Frame, state: &AppState) {
    // Main layout: path bar + repo header + issue list + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    widgets::render_path_bar(f, vertical[0], state);
    widgets::render_repo_header(f, vertical[1], state);
    widgets::render_issue_list(f, vertical[2], state);
    widgets::render_status_bar(f, vertical[3], state);

    // Overlays
    if state.error_message.is_some() {
        widgets::render_error_modal(f, f.area(), state);
    }
}
