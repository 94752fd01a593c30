use crate::app::AppState;
use crate::store::SyncStatus;
use crate::ui::styles::{
    active_style, border_style, default_style, done_style, error_style, hint_style,
    selected_style, title_style,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Render the project list with its loading, error and empty states
pub fn render_project_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Projects ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Error banner sits above the list
    let list_area = match &app.error {
        Some(message) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(3), Constraint::Min(0)])
                .split(inner);
            let banner = Paragraph::new(vec![
                Line::from(Span::styled(message.as_str(), error_style())),
                Line::from(Span::styled("Esc to dismiss", hint_style())),
            ])
            .wrap(Wrap { trim: true });
            f.render_widget(banner, chunks[0]);
            chunks[1]
        }
        None => inner,
    };

    if app.sync_status == SyncStatus::Loading {
        let loading = Paragraph::new(Span::styled("Loading projects...", hint_style()));
        f.render_widget(loading, list_area);
        return;
    }

    if app.projects.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No projects yet. Press a to add one.",
            hint_style(),
        ));
        f.render_widget(empty, list_area);
        return;
    }

    let active_id = app.projects.active_id();
    let items: Vec<ListItem> = app
        .projects
        .display_order()
        .into_iter()
        .map(|project| {
            let is_active = active_id == Some(project.id.as_str()) && !project.completed;
            let marker = if is_active {
                Span::styled("▶ ", active_style())
            } else {
                Span::raw("  ")
            };
            let checkbox = if project.completed { "[x] " } else { "[ ] " };
            let name_style = if project.completed {
                done_style()
            } else {
                default_style()
            };

            ListItem::new(Line::from(vec![
                marker,
                Span::styled(checkbox, name_style),
                Span::styled(project.name.as_str(), name_style),
                Span::styled(format!("  🍅 {}", project.pomodoros_completed), hint_style()),
            ]))
        })
        .collect();

    let list = List::new(items).highlight_style(selected_style());
    let mut state = ListState::default();
    state.select(Some(app.selected_index));
    f.render_stateful_widget(list, list_area, &mut state);
}
