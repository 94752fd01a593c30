pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod project_pane;
pub mod styles;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use project_pane::render_project_pane;
use ratatui::Frame;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, layout.keybindings_area, app.ui_mode);
    render_timer_pane(f, app, layout.timer_area);
    render_project_pane(f, app, layout.projects_area);

    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
