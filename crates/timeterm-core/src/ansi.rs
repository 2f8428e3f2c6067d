#![forbid(unsafe_code)]

//! Bit-exact ANSI control sequences.
//!
//! The band protocol is sequence-exact: the scroll-region, cursor, and
//! inverse-video sequences below are the contract with the terminal, so they
//! are emitted by hand here rather than through a backend library. The
//! binary crate still uses crossterm for raw mode, which has no sequence of
//! its own.
//!
//! | Purpose | Sequence |
//! |---------|----------|
//! | Set scrolling region \[top,bottom\] | `ESC [ {top} ; {bottom} r` |
//! | Reset scrolling region | `ESC [ r` |
//! | Save / restore cursor | `ESC [ s` / `ESC [ u` |
//! | Move cursor to row,col | `ESC [ {row} ; {col} H` |
//! | Clear line | `ESC [ K` |
//! | Inverse video on / off | `ESC [ 7 m` / `ESC [ 27 m` |
//! | Hide / show cursor | `ESC [ ? 25 l` / `ESC [ ? 25 h` |
//! | Clear screen | `ESC [ 2 J` |
//! | Bell | `0x07` |

use std::fmt::Write;

/// Reset the scrolling region to the full screen.
pub const REGION_RESET: &str = "\x1b[r";
/// Save the cursor position (DECSC-style CSI variant).
pub const CURSOR_SAVE: &str = "\x1b[s";
/// Restore the saved cursor position.
pub const CURSOR_RESTORE: &str = "\x1b[u";
/// Clear from the cursor to the end of the line.
pub const CLEAR_LINE: &str = "\x1b[K";
/// Clear the entire screen.
pub const CLEAR_SCREEN: &str = "\x1b[2J";
/// Start inverse video.
pub const INVERSE_ON: &str = "\x1b[7m";
/// End inverse video.
pub const INVERSE_OFF: &str = "\x1b[27m";
/// Hide the cursor.
pub const CURSOR_HIDE: &str = "\x1b[?25l";
/// Show the cursor.
pub const CURSOR_SHOW: &str = "\x1b[?25h";
/// Terminal bell.
pub const BELL: char = '\x07';

/// Append `ESC [ {top} ; {bottom} r` — set the scrolling region.
///
/// `top` and `bottom` are 1-based, inclusive.
#[inline]
pub fn set_region(buf: &mut String, top: u16, bottom: u16) {
    let _ = write!(buf, "\x1b[{top};{bottom}r");
}

/// Append `ESC [ {row} ; {col} H` — absolute cursor move (1-based).
#[inline]
pub fn move_to(buf: &mut String, row: u16, col: u16) {
    let _ = write!(buf, "\x1b[{row};{col}H");
}
