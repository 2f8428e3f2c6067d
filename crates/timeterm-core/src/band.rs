#![forbid(unsafe_code)]

//! Scrolling-region reservation for the top-of-screen band.
//!
//! The band occupies rows 1..=[`BAND_HEIGHT`]; the scrolling region is set
//! to everything below it so the shell scrolls normally while the band
//! stays put. The controller only computes and emits sequences into a
//! string; the caller owns the write to the terminal and the resize
//! re-issue.

use crate::ansi;
use crate::geometry::Geometry;

/// Rows reserved at the top of the screen: timer line plus separator.
pub const BAND_HEIGHT: u16 = 2;

/// The computed result of a reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    /// Escape stream to write: the region-set sequence for the band.
    pub sequence: String,
    /// First scrollable row (1-based). The shell's cursor belongs at or
    /// below this row.
    pub scroll_top: u16,
    /// True when the terminal was too short for the full band and the
    /// scrollable area was clamped to a single row. Logged by the caller,
    /// never fatal.
    pub clamped: bool,
}

/// Computes scroll-region sequences for a fixed-height band.
#[derive(Debug, Clone, Copy)]
pub struct ScrollRegion {
    band_height: u16,
}

impl ScrollRegion {
    /// A controller for a band of `band_height` rows.
    #[inline]
    pub const fn new(band_height: u16) -> Self {
        Self { band_height }
    }

    /// Build the region-set sequence for `geometry`.
    ///
    /// Normally the region is `[band_height + 1, rows]`. When
    /// `rows <= band_height` there is no room for the band and the bottom
    /// row is kept scrollable instead, so the terminal is degraded but
    /// never wedged.
    pub fn reserve(&self, geometry: Geometry) -> Reservation {
        let rows = geometry.rows.max(1);
        let clamped = rows <= self.band_height;
        let scroll_top = if clamped { rows } else { self.band_height + 1 };
        let mut sequence = String::new();
        ansi::set_region(&mut sequence, scroll_top, rows);
        Reservation {
            sequence,
            scroll_top,
            clamped,
        }
    }

    /// Re-issue the reservation after a geometry change.
    #[inline]
    pub fn recompute(&self, geometry: Geometry) -> Reservation {
        self.reserve(geometry)
    }

    /// The region-reset sequence: region = full screen.
    ///
    /// Used both at shutdown and at timer completion, which deliberately
    /// relinquishes the band so it may scroll away.
    #[inline]
    pub const fn release_all() -> &'static str {
        ansi::REGION_RESET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_emits_band_region() {
        let r = ScrollRegion::new(BAND_HEIGHT).reserve(Geometry::new(24, 80));
        assert_eq!(r.sequence, "\u{1b}[3;24r");
        assert_eq!(r.scroll_top, 3);
        assert!(!r.clamped);
    }

    #[test]
    fn reserve_clamps_on_tiny_terminal() {
        let r = ScrollRegion::new(BAND_HEIGHT).reserve(Geometry::new(2, 80));
        assert!(r.clamped);
        assert_eq!(r.scroll_top, 2);
        assert_eq!(r.sequence, "\u{1b}[2;2r");

        // One-row terminal still leaves a one-row scrollable area.
        let r = ScrollRegion::new(BAND_HEIGHT).reserve(Geometry::new(1, 80));
        assert_eq!(r.scroll_top, 1);
        assert_eq!(r.sequence, "\u{1b}[1;1r");
    }

    #[test]
    fn zero_rows_is_treated_as_one() {
        let r = ScrollRegion::new(BAND_HEIGHT).reserve(Geometry::new(0, 80));
        assert_eq!(r.scroll_top, 1);
        assert!(r.clamped);
    }

    #[test]
    fn recompute_matches_reserve() {
        let region = ScrollRegion::new(BAND_HEIGHT);
        let geom = Geometry::new(40, 120);
        assert_eq!(region.recompute(geom), region.reserve(geom));
    }

    #[test]
    fn release_resets_full_screen() {
        assert_eq!(ScrollRegion::release_all(), "\u{1b}[r");
    }
}
