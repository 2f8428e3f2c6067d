#![forbid(unsafe_code)]

//! Terminal state guard.
//!
//! The single choke point for terminal cleanup. Acquisition captures the
//! pre-run state (raw-mode settings via crossterm, optionally the screen
//! contents via the alternate buffer); release restores it and is
//! idempotent, so every exit path — normal loop exit, an error branch, a
//! signal-driven shutdown, a panic — can call it without coordination.
//!
//! Cleanup order on release:
//! 1. Reset the scrolling region to the full screen.
//! 2. Show the cursor.
//! 3. Leave the alternate screen (only if it was entered).
//! 4. Exit raw mode, restoring the captured settings.
//! 5. Flush.

use std::io::{self, Write};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use timeterm_core::ansi;

/// One-shot latch guarding the restoration sequence.
///
/// Multiple triggers (interrupt arriving while the child exits, drop racing
/// an explicit release) collapse to a single execution.
#[derive(Debug, Default)]
pub struct ReleaseLatch(AtomicBool);

impl ReleaseLatch {
    pub const fn new() -> Self {
        Self(AtomicBool::new(false))
    }

    /// True for exactly the first caller.
    pub fn first(&self) -> bool {
        !self.0.swap(true, Ordering::SeqCst)
    }
}

/// Captured-state guard for the controlling terminal.
///
/// Only one guard should exist per run. [`TerminalGuard::release`] may be
/// called explicitly; drop calls it as a backstop.
#[derive(Debug)]
pub struct TerminalGuard {
    alternate_screen_enabled: bool,
    latch: ReleaseLatch,
}

impl TerminalGuard {
    /// Capture terminal state and enter raw mode.
    ///
    /// With `restore_screen` the alternate buffer is entered first, so the
    /// previous screen contents reappear on release. Fails if the terminal
    /// cannot be queried or put into raw mode (no controlling terminal,
    /// insufficient permissions); nothing is left half-configured on
    /// failure.
    pub fn acquire(restore_screen: bool) -> io::Result<Self> {
        install_panic_hook();
        crossterm::terminal::enable_raw_mode()?;
        tracing::debug!("raw mode enabled");
        if restore_screen {
            if let Err(err) =
                crossterm::execute!(io::stdout(), crossterm::terminal::EnterAlternateScreen)
            {
                let _ = crossterm::terminal::disable_raw_mode();
                return Err(err);
            }
            tracing::debug!("alternate screen enabled");
        }
        Ok(Self {
            alternate_screen_enabled: restore_screen,
            latch: ReleaseLatch::new(),
        })
    }

    /// Current terminal geometry, falling back to 24x80 when the query
    /// fails (recoverable; the caller keeps last-known geometry on later
    /// failures).
    pub fn size(&self) -> timeterm_core::Geometry {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => timeterm_core::Geometry::new(rows, cols),
            Err(err) => {
                tracing::warn!(%err, "terminal size query failed, using fallback");
                timeterm_core::geometry::FALLBACK
            }
        }
    }

    /// Restore the terminal. Safe to call from any exit path; the second
    /// and later calls are no-ops.
    pub fn release(&self) {
        if !self.latch.first() {
            return;
        }
        let mut stdout = io::stdout();
        let _ = write_restore_sequences(&mut stdout);
        if self.alternate_screen_enabled {
            let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
            tracing::debug!("alternate screen disabled");
        }
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = stdout.flush();
        tracing::debug!("terminal restored");
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.release();
    }
}

/// The region/cursor portion of restoration (shared with the panic path).
fn write_restore_sequences(writer: &mut impl Write) -> io::Result<()> {
    writer.write_all(ansi::REGION_RESET.as_bytes())?;
    writer.write_all(ansi::CURSOR_SHOW.as_bytes())?;
    writer.flush()
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_restore();
            previous(info);
        }));
    });
}

/// Last-resort restoration for the panic path. Does not consult the latch:
/// the process is about to exit and a duplicate reset is harmless.
fn best_effort_restore() {
    let mut stdout = io::stdout();
    let _ = write_restore_sequences(&mut stdout);
    let _ = crossterm::execute!(stdout, crossterm::terminal::LeaveAlternateScreen);
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = stdout.flush();
}
