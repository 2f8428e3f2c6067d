#![forbid(unsafe_code)]

//! Fire-and-forget desktop notifications.
//!
//! Dispatch must never block or fail the updater loop: the helper is
//! spawned and abandoned, and a missing `notify-send` is logged at debug
//! and otherwise ignored. The resulting SIGCHLD is why the coordinator
//! verifies the shell's status with `try_wait` before treating a
//! child-exited flag as the shell going away.

use std::process::{Command, Stdio};

/// Send a desktop notification with the given title and body.
pub fn send(title: &str, body: &str) {
    let result = Command::new("notify-send")
        .arg(title)
        .arg(body)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    match result {
        Ok(_) => tracing::debug!(title, "notification dispatched"),
        Err(err) => tracing::debug!(%err, "notification helper unavailable"),
    }
}

/// Body text for the early-shell-exit notification.
pub fn early_exit_body(remaining_secs: u64) -> String {
    format!(
        "Shell exited with {} left on the timer",
        timeterm_core::format_clock(remaining_secs)
    )
}
