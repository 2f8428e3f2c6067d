#![forbid(unsafe_code)]

//! Band frame serialization.
//!
//! Turns one tick of animation state into a single escape stream that
//! repaints rows 1 and 2 without disturbing the shell below: the whole
//! frame is wrapped in hide-cursor / save-cursor ... restore-cursor /
//! show-cursor so the child's cursor never visibly moves, and the updater
//! thread writes the stream in one shot so sequences cannot interleave.

use crate::animate::{self, Cell, Strobe};
use crate::ansi;
use crate::geometry::Geometry;

/// What to draw this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BandFrame<'a> {
    /// Counting down: inverted prefix plus (possibly detached) time text.
    Counting {
        /// Fraction of the countdown consumed, in `[0, 1]`.
        progress: f64,
        /// Formatted remaining time, e.g. `"0:45"`.
        time: &'a str,
    },
    /// Expired: right-justified `COMPLETED!` under a bouncing strobe.
    Finished {
        /// Current strobe window state.
        strobe: Strobe,
    },
}

/// Serialize a row of cells, toggling inverse video at run boundaries.
fn paint_cells(buf: &mut String, cells: &[Cell]) {
    let mut inverted = false;
    for cell in cells {
        if cell.inverted != inverted {
            buf.push_str(if cell.inverted {
                ansi::INVERSE_ON
            } else {
                ansi::INVERSE_OFF
            });
            inverted = cell.inverted;
        }
        buf.push(cell.ch);
    }
    if inverted {
        buf.push_str(ansi::INVERSE_OFF);
    }
}

/// Render one band frame as a complete escape stream.
///
/// `bell` appends a single BEL byte; the caller passes it true exactly once
/// (on the completion tick, unless bells are disabled).
pub fn render_band(geometry: Geometry, frame: BandFrame<'_>, bell: bool) -> String {
    let cols = geometry.cols;
    let (row1, row2) = match frame {
        BandFrame::Counting { progress, time } => (
            animate::timer_row(cols, progress, time),
            animate::separator_row(cols, progress),
        ),
        BandFrame::Finished { strobe } => {
            let base = animate::completion_row(cols);
            let sep = vec![animate::SEPARATOR_GLYPH; cols as usize];
            (
                animate::overlay_strobe(&base, strobe),
                animate::overlay_strobe(&sep, strobe),
            )
        }
    };

    let mut buf = String::new();
    buf.push_str(ansi::CURSOR_HIDE);
    buf.push_str(ansi::CURSOR_SAVE);
    ansi::move_to(&mut buf, 1, 1);
    buf.push_str(ansi::CLEAR_LINE);
    paint_cells(&mut buf, &row1);
    ansi::move_to(&mut buf, 2, 1);
    buf.push_str(ansi::CLEAR_LINE);
    paint_cells(&mut buf, &row2);
    buf.push_str(ansi::CURSOR_RESTORE);
    buf.push_str(ansi::CURSOR_SHOW);
    if bell {
        buf.push(ansi::BELL);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animate::StrobeDirection;

    #[test]
    fn frame_wraps_rows_in_cursor_save_restore() {
        let geom = Geometry::new(24, 20);
        let s = render_band(
            geom,
            BandFrame::Counting {
                progress: 0.0,
                time: "0:03",
            },
            false,
        );
        assert!(s.starts_with("\u{1b}[?25l\u{1b}[s\u{1b}[1;1H\u{1b}[K"));
        assert!(s.contains("\u{1b}[2;1H\u{1b}[K"));
        assert!(s.ends_with("\u{1b}[u\u{1b}[?25h"));
        assert!(!s.contains('\u{7}'));
    }

    #[test]
    fn zero_progress_emits_no_inverse_toggles() {
        let s = render_band(
            Geometry::new(24, 40),
            BandFrame::Counting {
                progress: 0.0,
                time: "0:30",
            },
            false,
        );
        assert!(!s.contains("\u{1b}[7m"));
        assert!(!s.contains("\u{1b}[27m"));
    }

    #[test]
    fn partial_progress_toggles_inverse_once_per_row() {
        let s = render_band(
            Geometry::new(24, 80),
            BandFrame::Counting {
                progress: 0.5,
                time: "0:15",
            },
            false,
        );
        assert_eq!(s.matches("\u{1b}[7m").count(), 2);
        assert_eq!(s.matches("\u{1b}[27m").count(), 2);
    }

    #[test]
    fn bell_rides_the_completion_frame() {
        let strobe = Strobe::new();
        let s = render_band(Geometry::new(24, 80), BandFrame::Finished { strobe }, true);
        assert_eq!(s.matches('\u{7}').count(), 1);
        assert!(s.contains("COMPLETED!"));
    }

    #[test]
    fn strobe_window_toggles_inverse_on_both_rows() {
        let strobe = Strobe {
            offset: 4,
            direction: StrobeDirection::Forward,
        };
        let s = render_band(Geometry::new(24, 40), BandFrame::Finished { strobe }, false);
        // One inverted run per row: the window.
        assert_eq!(s.matches("\u{1b}[7m").count(), 2);
        assert_eq!(s.matches("\u{1b}[27m").count(), 2);
    }
}
