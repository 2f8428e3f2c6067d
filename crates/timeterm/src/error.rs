#![forbid(unsafe_code)]

//! Fatal failure taxonomy.
//!
//! Everything below the coordinator surfaces a typed failure; the
//! coordinator decides fatal versus recoverable. Only the kinds here abort
//! the run, always before or via the guard's restoration path, and always
//! with [`FATAL_EXIT_CODE`] so callers can tell a setup failure from any
//! child exit code.

use std::io;

use thiserror::Error;

/// Process exit code for fatal setup failures, distinct from child codes
/// and from the `128 + signal` interrupt convention.
pub const FATAL_EXIT_CODE: i32 = 125;

/// Failures that abort the run.
#[derive(Debug, Error)]
pub enum FatalError {
    /// The terminal could not be queried or put into raw mode.
    #[error("terminal setup failed: {0}")]
    Terminal(#[source] io::Error),

    /// The shell executable could not be started.
    #[error("cannot start shell '{shell}': {source}")]
    SpawnShell {
        shell: String,
        #[source]
        source: io::Error,
    },

    /// Signal handler registration was refused.
    #[error("signal registration failed: {0}")]
    Signals(#[source] io::Error),

    /// The resolved duration was not usable.
    #[error(transparent)]
    Clock(#[from] timeterm_core::ClockError),
}
