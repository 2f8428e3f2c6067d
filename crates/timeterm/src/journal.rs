#![forbid(unsafe_code)]

//! Structured process log.
//!
//! Events go through `tracing`; the subscriber writes to the file named by
//! `TIMETERM_LOG`. Without that variable no subscriber is installed and
//! every event is a no-op, which keeps the controlling terminal (owned by
//! the render loop) free of log noise. Filtering follows `RUST_LOG`,
//! defaulting to `info`.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the log subscriber if `TIMETERM_LOG` names a writable file.
/// Failures are reported to stderr (the render loop has not started yet)
/// and otherwise ignored.
pub fn init() {
    let Ok(path) = std::env::var("TIMETERM_LOG") else {
        return;
    };
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("timeterm: cannot open log file {path}: {err}");
            return;
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// The run started: countdown armed, shell about to launch.
pub fn started(duration_secs: u64, shell: &str) {
    tracing::info!(target: "timeterm::journal", event = "START", duration_secs, shell);
}

/// The countdown reached zero.
pub fn completed(duration_secs: u64) {
    tracing::info!(target: "timeterm::journal", event = "COMPLETED", duration_secs);
}

/// The shell exited; `remaining_secs` is zero after completion.
pub fn shell_exit(remaining_secs: u64, exit_code: i32) {
    tracing::info!(
        target: "timeterm::journal",
        event = "SHELL_EXIT",
        remaining_secs,
        exit_code
    );
}
