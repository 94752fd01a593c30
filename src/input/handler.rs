use crate::app::AppState;
use crate::domain::{TimerMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingProject => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        // Timer
        KeyCode::Char(' ') => {
            app.toggle_timer();
            Ok(false)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.reset_timer();
            Ok(false)
        }
        KeyCode::Char(c) if TimerMode::all().iter().any(|m| m.hotkey() == c) => {
            if let Some(mode) = TimerMode::all().iter().find(|m| m.hotkey() == c) {
                app.switch_mode(*mode);
            }
            Ok(false)
        }

        // Project list
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }
        KeyCode::Enter => {
            app.activate_selected();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.toggle_selected_complete();
            Ok(false)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.delete_selected();
            Ok(false)
        }
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_project();
            Ok(false)
        }

        KeyCode::Esc => {
            app.dismiss_error();
            Ok(false)
        }

        _ => Ok(false),
    }
}

/// Handle keys in the add-project form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }
        _ => Ok(false),
    }
}
