use crate::app::AppState;
use crate::domain::{format_clock, TimerMode};
use crate::ui::styles::{
    border_style, clock_style, default_style, gauge_style, hint_style, mode_tab_style,
    paused_style, running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

/// Render the countdown pane: mode tabs, clock, progress and the current focus
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let timer = &app.timer;
    let mode = timer.mode();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(" Focus ", title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Mode tabs
            Constraint::Min(1),    // Spacer
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Working on
            Constraint::Length(1), // Cycle
            Constraint::Min(1),    // Spacer
        ])
        .split(inner);

    let titles: Vec<Line> = TimerMode::all()
        .iter()
        .map(|m| Line::from(format!("{} {}", m.hotkey(), m.label())))
        .collect();
    let selected = TimerMode::all().iter().position(|m| *m == mode).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(hint_style())
        .highlight_style(mode_tab_style(mode));
    f.render_widget(tabs, chunks[0]);

    let clock = Paragraph::new(Line::from(Span::styled(
        format_clock(timer.time_left_secs()),
        clock_style(mode),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, chunks[2]);

    let status = if timer.is_running() {
        Span::styled("▶ running", running_style())
    } else {
        Span::styled("⏸ paused", paused_style())
    };
    f.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Center),
        chunks[3],
    );

    let gauge = Gauge::default()
        .gauge_style(gauge_style(mode))
        .ratio(timer.progress().clamp(0.0, 1.0))
        .label(format!("{:.0}%", timer.progress() * 100.0));
    f.render_widget(gauge, chunks[5]);

    let focus = match app.projects.active_project() {
        Some(project) => Line::from(vec![
            Span::styled("Working on: ", hint_style()),
            Span::styled(project.name.as_str(), default_style()),
        ]),
        None => Line::from(Span::styled("Select a project to begin", hint_style())),
    };
    f.render_widget(Paragraph::new(focus).alignment(Alignment::Center), chunks[7]);

    let durations = timer.durations();
    let position = timer.cycle_count() % durations.sessions_until_long_break;
    let cycle = Line::from(Span::styled(
        format!(
            "🍅 {} done · {}/{} until long break",
            timer.cycle_count(),
            position,
            durations.sessions_until_long_break
        ),
        hint_style(),
    ));
    f.render_widget(Paragraph::new(cycle).alignment(Alignment::Center), chunks[8]);
}
