#![forbid(unsafe_code)]

//! Command-line surface and environment lookups.
//!
//! The duration resolver lives here: the core clock only ever sees a
//! validated positive second count.

use std::env;

use clap::Parser;

/// Upper bound on the countdown: strictly under 24 hours.
pub const MAX_DURATION_SECS: u64 = 24 * 60 * 60;

/// Run an interactive shell below a live countdown band.
#[derive(Debug, Parser)]
#[command(name = "timeterm", version)]
pub struct Cli {
    /// Countdown duration: SS, MM:SS, or HH:MM:SS (under 24 hours).
    #[arg(value_parser = parse_duration)]
    pub duration_secs: u64,

    /// Do not ring the terminal bell on completion.
    #[arg(long)]
    pub no_bell: bool,

    /// Do not send desktop notifications.
    #[arg(long)]
    pub no_notify: bool,

    /// Use the alternate screen and restore the previous screen contents
    /// on exit instead of leaving the session visible.
    #[arg(long)]
    pub restore_previous: bool,
}

/// Parse `SS`, `MM:SS`, or `HH:MM:SS` into whole seconds.
pub fn parse_duration(s: &str) -> Result<u64, String> {
    let parts: Vec<&str> = s.split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return Err(format!("invalid duration '{s}': use SS, MM:SS, or HH:MM:SS"));
    }
    let mut fields = [0u64; 3];
    for (slot, part) in fields[3 - parts.len()..].iter_mut().zip(&parts) {
        *slot = part
            .parse()
            .map_err(|_| format!("invalid duration component '{part}'"))?;
    }
    let [hours, minutes, secs] = fields;
    if parts.len() > 1 && (minutes > 59 || secs > 59) {
        return Err(format!("invalid duration '{s}': minutes and seconds must be under 60"));
    }
    let total = hours * 3600 + minutes * 60 + secs;
    if total == 0 {
        return Err("duration must be positive".into());
    }
    if total >= MAX_DURATION_SECS {
        return Err("duration must be under 24 hours".into());
    }
    Ok(total)
}

/// The user's preferred shell, falling back to `/bin/sh`.
pub fn shell_program() -> String {
    env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
}
