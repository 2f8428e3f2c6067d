#![forbid(unsafe_code)]

//! The coordinator: one updater loop, one child shell, one teardown path.
//!
//! The updater loop is the sole writer to the reserved band and the only
//! issuer of scrolling-region changes, so terminal writes need no locking.
//! Signals arrive as atomic flags (see [`crate::signals`]) and are polled
//! once per tick; the between-tick sleep is cut short by the waker so
//! shutdown latency stays low. Every exit — child gone, interrupt, fatal
//! error, panic — funnels into the guard's latched release.

use std::io::{self, Write};
use std::process::{Command, ExitStatus};
use std::sync::Arc;
use std::time::{Duration, SystemTime};

use timeterm_core::animate::Strobe;
use timeterm_core::frame::{self, BandFrame};
use timeterm_core::{BAND_HEIGHT, ScrollRegion, TimerClock, ansi, format_clock};

use crate::cli::{self, Cli};
use crate::error::FatalError;
use crate::journal;
use crate::notify;
use crate::signals::{SignalBridge, SignalFlags, Waker};
use crate::terminal::TerminalGuard;

/// Updater period. Signal flags wake the loop early.
const TICK: Duration = Duration::from_secs(1);

/// Why the updater loop stopped.
#[derive(Debug)]
enum Outcome {
    /// The shell exited (possibly before the deadline).
    ChildExit(ExitStatus),
    /// An interrupt/terminate/hangup signal was observed.
    Interrupted(i32),
}

/// Run the countdown session to completion and return the process exit
/// code: the child's code normally, `128 + signal` on interrupt.
pub fn run(cli: &Cli) -> Result<i32, FatalError> {
    let mut clock = TimerClock::new(Duration::from_secs(cli.duration_secs))?;

    let flags = Arc::new(SignalFlags::new());
    let waker = Arc::new(Waker::new());
    let _bridge = SignalBridge::install(Arc::clone(&flags), Arc::clone(&waker))
        .map_err(FatalError::Signals)?;

    let guard = TerminalGuard::acquire(cli.restore_previous).map_err(FatalError::Terminal)?;
    let mut geometry = guard.size();
    let region = ScrollRegion::new(BAND_HEIGHT);

    let mut stdout = io::stdout();
    setup_screen(&mut stdout, &region, geometry);

    let shell = cli::shell_program();
    let mut child = Command::new(&shell).spawn().map_err(|source| FatalError::SpawnShell {
        shell: shell.clone(),
        source,
    })?;
    journal::started(cli.duration_secs, &shell);

    let mut strobe: Option<Strobe> = None;
    let outcome = loop {
        if flags.take_interrupt() {
            let signal = flags.interrupt_signal();
            tracing::info!(signal, "interrupt observed, shutting down");
            let _ = child.kill();
            let _ = child.wait();
            break Outcome::Interrupted(signal);
        }

        if flags.take_resize() {
            geometry = guard.size();
            tracing::debug!(rows = geometry.rows, cols = geometry.cols, "resized");
            // Completion already relinquished the band; only re-reserve
            // while counting.
            if strobe.is_none() {
                let reservation = region.recompute(geometry);
                if reservation.clamped {
                    tracing::warn!(rows = geometry.rows, "terminal too short for the band");
                }
                write_out(&mut stdout, &reservation.sequence);
            }
        }

        if flags.take_child_exited() {
            tracing::debug!("child-status signal observed");
        }
        // SIGCHLD may belong to a notification helper, so the shell's
        // status is always confirmed directly.
        match child.try_wait() {
            Ok(Some(status)) => break Outcome::ChildExit(status),
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "child status poll failed"),
        }

        let now = SystemTime::now();
        let frame_bytes = if clock.completion_due(now) {
            journal::completed(cli.duration_secs);
            if !cli.no_notify {
                notify::send(
                    "Timer completed",
                    &format!("{} countdown finished", format_clock(cli.duration_secs)),
                );
            }
            // Relinquish the reservation so the band may scroll away.
            write_out(&mut stdout, ScrollRegion::release_all());
            let fresh = Strobe::new();
            strobe = Some(fresh);
            frame::render_band(geometry, BandFrame::Finished { strobe: fresh }, !cli.no_bell)
        } else if let Some(s) = strobe.as_mut() {
            s.advance(geometry.cols);
            frame::render_band(geometry, BandFrame::Finished { strobe: *s }, false)
        } else {
            let time = format_clock(clock.remaining(now));
            frame::render_band(
                geometry,
                BandFrame::Counting {
                    progress: clock.progress(now),
                    time: &time,
                },
                false,
            )
        };
        write_out(&mut stdout, &frame_bytes);

        waker.wait_timeout(TICK);
    };

    // Single teardown funnel; release is latched, so the drop backstop and
    // the panic hook cannot double-restore.
    guard.release();

    let code = match outcome {
        Outcome::ChildExit(status) => {
            let code = exit_code_of(status);
            let remaining = if clock.completed() {
                0
            } else {
                clock.remaining(SystemTime::now())
            };
            journal::shell_exit(remaining, code);
            if remaining > 0 && !cli.no_notify {
                notify::send("Shell exited early", &notify::early_exit_body(remaining));
            }
            code
        }
        Outcome::Interrupted(signal) => 128 + signal,
    };
    Ok(code)
}

/// Initial screen preparation: clear, reserve the band, park the cursor at
/// the top of the scrollable area, and print the welcome line the shell
/// will scroll from.
fn setup_screen(out: &mut impl Write, region: &ScrollRegion, geometry: timeterm_core::Geometry) {
    let reservation = region.reserve(geometry);
    if reservation.clamped {
        tracing::warn!(rows = geometry.rows, "terminal too short for the band");
    }
    let mut buf = String::from(ansi::CLEAR_SCREEN);
    buf.push_str(&reservation.sequence);
    ansi::move_to(&mut buf, reservation.scroll_top, 1);
    buf.push_str("timeterm: countdown running in the header; the shell below is yours.\r\n");
    write_out(out, &buf);
}

/// Write an escape stream to the terminal. Failures are recoverable: a
/// vanished terminal also raises SIGHUP, which ends the loop properly.
fn write_out(out: &mut impl Write, bytes: &str) {
    if let Err(err) = out.write_all(bytes.as_bytes()).and_then(|_| out.flush()) {
        tracing::warn!(%err, "terminal write failed");
    }
}

#[cfg(unix)]
fn exit_code_of(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .unwrap_or_else(|| 128 + status.signal().unwrap_or(0))
}

#[cfg(not(unix))]
fn exit_code_of(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
