/// Timer mode: a work session or one of the two breaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Display label for mode tabs
    pub fn label(&self) -> &'static str {
        match self {
            TimerMode::Pomodoro => "Pomodoro",
            TimerMode::ShortBreak => "Short Break",
            TimerMode::LongBreak => "Long Break",
        }
    }

    /// Key hint used to switch into this mode
    pub fn hotkey(&self) -> char {
        match self {
            TimerMode::Pomodoro => '1',
            TimerMode::ShortBreak => '2',
            TimerMode::LongBreak => '3',
        }
    }

    pub fn is_break(&self) -> bool {
        !matches!(self, TimerMode::Pomodoro)
    }

    /// All modes in tab order
    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Pomodoro, TimerMode::ShortBreak, TimerMode::LongBreak]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingProject,
}
