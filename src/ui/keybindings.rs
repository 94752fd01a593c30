use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect, ui_mode: UiMode) {
    let hints = match ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("1/2/3 mode   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter work on   "),
            Span::raw("x complete   "),
            Span::raw("a add   "),
            Span::raw("d delete   "),
            Span::raw("Esc dismiss   "),
            Span::raw("q quit"),
        ]),
        UiMode::AddingProject => Line::from(vec![
            Span::raw(" Enter add   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
