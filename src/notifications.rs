/// Completion cue for finished sessions.
/// Rings the terminal bell everywhere; macOS also gets a desktop notification.
use crate::domain::TimerMode;
use std::io::Write;

#[cfg(target_os = "macos")]
use std::process::{Command, Stdio};

/// Announce the end of a session. Never fails; problems are logged.
pub fn session_complete(finished: TimerMode, next: TimerMode) {
    let mut stdout = std::io::stdout();
    if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
        tracing::debug!(error = %e, "terminal bell failed");
    }

    #[cfg(target_os = "macos")]
    {
        let prompt = if next.is_break() {
            "Time for a break."
        } else {
            "Back to work."
        };
        let script = format!(
            r#"display notification "{} is up. {}" with title "pomotrack" subtitle "{}" sound name "Glass""#,
            finished.label(),
            prompt,
            next.label()
        );

        // Spawned and left to finish on its own
        if let Err(e) = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            tracing::debug!(error = %e, "desktop notification failed");
        }
    }

    #[cfg(not(target_os = "macos"))]
    {
        tracing::debug!(?finished, ?next, "session complete");
    }
}
