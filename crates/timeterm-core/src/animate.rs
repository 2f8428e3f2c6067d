#![forbid(unsafe_code)]

//! The band animation engine.
//!
//! Everything here is a pure transform from `(columns, progress, time text)`
//! to rows of [`Cell`]s; serialization to escape bytes lives in
//! [`crate::frame`]. The timer row moves through four phases as the
//! inverted prefix advances:
//!
//! 1. **Leading** — the inverted block grows from column 0; the time text
//!    sits at its fixed column after the `TIMER: ` label.
//! 2. **Detachment** — when the edge reaches the time text, the text starts
//!    tracking one column ahead of the edge, stretching the spacer after
//!    the label.
//! 3. **Pinned** — at the right margin the text stops, clamped so its last
//!    character stays on screen.
//! 4. **Overtaking** — the edge keeps advancing and inverts the pinned text
//!    character by character like everything behind it.
//!
//! After completion the row is replaced by a right-justified `COMPLETED!`
//! line and an 8-column inverted [`Strobe`] window bounces across it
//! indefinitely. The separator row always mirrors the timer row's inverted
//! range.

/// Label prefix for the timer row (trailing space included).
pub const LABEL: &str = "TIMER: ";
/// Completion text, right-justified after expiry.
pub const COMPLETED_TEXT: &str = "COMPLETED!";
/// Separator glyph for row 2.
pub const SEPARATOR_GLYPH: char = '─';
/// Width of the bouncing strobe window in columns.
pub const STROBE_WIDTH: u16 = 8;
/// Columns the strobe moves per tick.
pub const STROBE_STEP: u16 = 2;

/// One rendered character cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Glyph to draw.
    pub ch: char,
    /// Whether the cell is drawn in inverse video.
    pub inverted: bool,
}

// ---------------------------------------------------------------------------
// Inverted-prefix geometry
// ---------------------------------------------------------------------------

/// Number of inverted columns for `progress` on a `cols`-wide row.
///
/// Columns `[0, edge)` are inverted; `edge` itself is the first clean
/// column. Rounded so progress 1/3 on 80 columns gives 27.
pub fn inverted_columns(cols: u16, progress: f64) -> u16 {
    let p = progress.clamp(0.0, 1.0);
    let edge = (f64::from(cols) * p).round() as u16;
    edge.min(cols)
}

/// Column where the time text renders, given the inverted edge.
///
/// Before detachment this is the fixed column after the label. Once the
/// edge reaches it the text stays exactly one column ahead of the edge,
/// and it pins at `cols - time_len` so the text never leaves the screen.
pub fn time_column(cols: u16, edge: u16, time_len: u16) -> u16 {
    let fixed_start = LABEL.len() as u16;
    let detached = fixed_start.max(edge.saturating_add(1));
    let pinned = cols.saturating_sub(time_len);
    detached.min(pinned)
}

// ---------------------------------------------------------------------------
// Row composition
// ---------------------------------------------------------------------------

fn place(chars: &mut [char], start: u16, text: &str) {
    let mut col = start as usize;
    for ch in text.chars() {
        if col >= chars.len() {
            break;
        }
        chars[col] = ch;
        col += 1;
    }
}

fn invert_prefix(chars: Vec<char>, edge: u16) -> Vec<Cell> {
    chars
        .into_iter()
        .enumerate()
        .map(|(i, ch)| Cell {
            ch,
            inverted: i < edge as usize,
        })
        .collect()
}

/// Compose the timer row for the counting phase.
///
/// Out-of-range writes are dropped rather than wrapped, so any `cols`
/// (including degenerate widths below the usable minimum) renders a
/// truncated row instead of panicking.
pub fn timer_row(cols: u16, progress: f64, time: &str) -> Vec<Cell> {
    let edge = inverted_columns(cols, progress);
    let col = time_column(cols, edge, time.chars().count() as u16);
    let mut chars = vec![' '; cols as usize];
    place(&mut chars, 0, LABEL);
    place(&mut chars, col, time);
    invert_prefix(chars, edge)
}

/// Compose the separator row, mirroring the timer row's inverted range.
pub fn separator_row(cols: u16, progress: f64) -> Vec<Cell> {
    let edge = inverted_columns(cols, progress);
    invert_prefix(vec![SEPARATOR_GLYPH; cols as usize], edge)
}

/// Compose the base (non-strobe) completion row: the label at the left
/// margin and `COMPLETED!` right-justified.
pub fn completion_row(cols: u16) -> Vec<char> {
    let mut chars = vec![' '; cols as usize];
    place(&mut chars, 0, LABEL);
    let start = cols.saturating_sub(COMPLETED_TEXT.chars().count() as u16);
    place(&mut chars, start, COMPLETED_TEXT);
    chars
}

/// Overlay the strobe window onto a base row: cells under the window render
/// inverted, the rest keep their base state.
pub fn overlay_strobe(base: &[char], strobe: Strobe) -> Vec<Cell> {
    let lo = strobe.offset as usize;
    let hi = lo + STROBE_WIDTH as usize;
    base.iter()
        .enumerate()
        .map(|(i, &ch)| Cell {
            ch,
            inverted: i >= lo && i < hi,
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Strobe
// ---------------------------------------------------------------------------

/// Direction of strobe travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrobeDirection {
    Forward,
    Backward,
}

/// Bouncing inverted window state. Carries momentum across ticks; all other
/// animation state is derived fresh each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strobe {
    /// Left edge of the window, in `[0, cols - STROBE_WIDTH]`.
    pub offset: u16,
    /// Current travel direction.
    pub direction: StrobeDirection,
}

impl Strobe {
    /// A strobe at the left boundary, moving right.
    pub const fn new() -> Self {
        Self {
            offset: 0,
            direction: StrobeDirection::Forward,
        }
    }

    /// Advance one tick with reflecting motion.
    ///
    /// The offset moves [`STROBE_STEP`] columns; reaching or overshooting a
    /// boundary clamps to it and flips the direction.
    pub fn advance(&mut self, cols: u16) {
        let max_left = cols.saturating_sub(STROBE_WIDTH);
        self.offset = self.offset.min(max_left);
        match self.direction {
            StrobeDirection::Forward => {
                self.offset = self.offset.saturating_add(STROBE_STEP);
                if self.offset >= max_left {
                    self.offset = max_left;
                    self.direction = StrobeDirection::Backward;
                }
            }
            StrobeDirection::Backward => {
                self.offset = self.offset.saturating_sub(STROBE_STEP);
                if self.offset == 0 {
                    self.direction = StrobeDirection::Forward;
                }
            }
        }
    }
}

impl Default for Strobe {
    fn default() -> Self {
        Self::new()
    }
}
