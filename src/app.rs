use crate::domain::{Expiry, Project, ProjectList, Timer, TimerMode, UiMode};
use crate::notifications;
use crate::persistence::{save_state, Config, LocalState};
use crate::store::{SyncEvent, SyncHandle, SyncStatus};
use crate::ticker;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Input form state for adding a project
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub name: String,
}

/// Main application state
pub struct AppState {
    pub timer: Timer,
    pub projects: ProjectList,
    pub sync: SyncHandle,
    pub sync_status: SyncStatus,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    /// Row in the display-ordered project list
    pub selected_index: usize,
    /// Last error worth showing; cleared with Esc
    pub error: Option<String>,
    pub sound: bool,
    pub pending_pushes: usize,
    state_path: PathBuf,
}

impl AppState {
    pub fn new(config: &Config, local: LocalState, sync: SyncHandle, state_path: PathBuf) -> Self {
        Self {
            timer: Timer::new(config.durations),
            projects: ProjectList::new(local.active_project_id),
            sync,
            sync_status: SyncStatus::Unconfigured,
            ui_mode: UiMode::Normal,
            input_form: None,
            selected_index: 0,
            error: None,
            sound: config.sound,
            pending_pushes: 0,
            state_path,
        }
    }

    /// Kick off the initial project fetch
    pub fn start_sync(&mut self) {
        match self.sync.fetch() {
            Ok(()) => self.sync_status = SyncStatus::Loading,
            Err(e) => {
                tracing::warn!(error = %e, "project store unavailable");
                self.sync_status = SyncStatus::Unconfigured;
                self.error = Some(e.to_string());
            }
        }
    }

    // ── Timer intents ────────────────────────────────────────────────

    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
        tracing::debug!(running = self.timer.is_running(), "timer toggled");
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
    }

    pub fn switch_mode(&mut self, mode: TimerMode) {
        self.timer.switch_mode(mode);
    }

    /// Run every tick that has come due
    pub fn tick(&mut self, now: Instant) {
        while self.timer.tick_due(now) {
            if let Some(expiry) = self.timer.tick() {
                self.on_expire(expiry);
            }
        }
    }

    fn on_expire(&mut self, expiry: Expiry) {
        tracing::info!(
            finished = ?expiry.finished,
            next = ?expiry.next,
            cycle = expiry.cycle_count,
            "session complete"
        );

        if self.sound {
            notifications::session_complete(expiry.finished, expiry.next);
        }

        if expiry.finished == TimerMode::Pomodoro {
            if let Some(id) = self.projects.active_project().map(|p| p.id.clone()) {
                self.projects.increment_completed_count(&id);
            }
        }
    }

    /// How long the event loop may block before the next tick or redraw
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        let refresh = ticker::refresh_duration();
        match self.timer.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(refresh),
            None => refresh,
        }
    }

    // ── Project intents ──────────────────────────────────────────────

    /// Project under the cursor, in display order
    pub fn selected_project(&self) -> Option<&Project> {
        self.projects
            .display_order()
            .get(self.selected_index)
            .copied()
    }

    fn selected_project_id(&self) -> Option<String> {
        self.selected_project().map(|p| p.id.clone())
    }

    pub fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.projects.projects().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.projects.projects().len();
        if len == 0 {
            self.selected_index = 0;
        } else if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    pub fn activate_selected(&mut self) {
        if let Some(id) = self.selected_project_id() {
            self.projects.set_active(&id);
        }
    }

    pub fn toggle_selected_complete(&mut self) {
        if let Some(id) = self.selected_project_id() {
            self.projects.toggle_complete(&id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_project_id() {
            self.projects.delete_project(&id);
            self.clamp_selection();
        }
    }

    /// Start adding a new project (opens input form)
    pub fn start_add_project(&mut self) {
        self.input_form = Some(InputFormState::default());
        self.ui_mode = UiMode::AddingProject;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.name.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.name.pop();
        }
    }

    /// Submit input form; blank names just close it
    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.projects.add_project(&form.name);
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Apply finished store requests
    pub fn poll_sync(&mut self) {
        while let Some(event) = self.sync.try_recv() {
            self.apply_sync_event(event);
        }
    }

    fn apply_sync_event(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::Loaded(Ok(projects)) => {
                tracing::info!(count = projects.len(), "projects loaded");
                self.projects.load(projects);
                self.sync_status = SyncStatus::Ready;
                self.clamp_selection();
            }
            SyncEvent::Loaded(Err(e)) => {
                tracing::warn!(error = %e, "project load failed");
                self.sync_status = SyncStatus::LoadFailed;
                self.error = Some(e.to_string());
            }
            SyncEvent::Pushed(result) => {
                self.pending_pushes = self.pending_pushes.saturating_sub(1);
                match result {
                    Ok(()) => tracing::debug!("projects saved"),
                    Err(e) => {
                        tracing::warn!(error = %e, "project save failed");
                        self.error = Some(format!(
                            "Failed to save projects. Check your connection and script setup. ({})",
                            e
                        ));
                    }
                }
            }
        }
    }

    /// Send pending changes out: the project list to the store, the active reference to disk
    pub fn flush(&mut self) {
        if self.projects.take_push_request() {
            if self.sync_status.can_push() {
                self.sync.push(self.projects.projects().to_vec());
                self.pending_pushes += 1;
            } else {
                tracing::debug!(status = ?self.sync_status, "push skipped");
            }
        }

        if self.projects.take_active_change() {
            if let Err(e) = self.save_local_state() {
                tracing::warn!(error = %e, "saving local state failed");
                self.error = Some(format!("Failed to save local state: {}", e));
            }
        }
    }

    pub fn save_local_state(&self) -> anyhow::Result<()> {
        let state = LocalState {
            active_project_id: self.projects.active_id().map(str::to_string),
        };
        save_state(&self.state_path, &state)
    }

    /// Give in-flight pushes a chance to land before exit
    pub fn finish_pending(&mut self, grace: Duration) {
        let deadline = Instant::now() + grace;
        while self.pending_pushes > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                tracing::warn!(pending = self.pending_pushes, "exiting with unsaved pushes");
                break;
            }
            match self.sync.recv_timeout(remaining) {
                Some(event) => self.apply_sync_event(event),
                None => continue,
            }
        }
    }
}
