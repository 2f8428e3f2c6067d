//! Property-based invariant tests for the band animation engine.
//!
//! These verify the structural invariants that must hold for any geometry
//! and any tick:
//!
//! 1. The inverted prefix never exceeds the row width.
//! 2. The time column is non-decreasing as the edge advances, and never
//!    places the text past `cols - len(time)`.
//! 3. Rows are always exactly `cols` cells wide, for any width including
//!    degenerate ones.
//! 4. The strobe's left edge stays inside `[0, cols - 8]` and only changes
//!    direction at those boundaries.
//! 5. Clock remaining/progress clamp and never panic for arbitrary offsets.

use std::time::{Duration, SystemTime};

use proptest::prelude::*;
use timeterm_core::animate::{
    self, STROBE_WIDTH, Strobe, StrobeDirection, inverted_columns, time_column,
};
use timeterm_core::clock::{TimerClock, format_clock};

// ── 1. Inverted prefix bounds ───────────────────────────────────────────

proptest! {
    #[test]
    fn inverted_prefix_bounded(cols in 0u16..500, progress in -1.0f64..2.0) {
        let edge = inverted_columns(cols, progress);
        prop_assert!(edge <= cols);
    }
}

// ── 2. Detachment monotonicity ──────────────────────────────────────────

proptest! {
    #[test]
    fn time_column_monotone_and_clamped(cols in 8u16..500, time_len in 4u16..9) {
        let mut prev = 0u16;
        for edge in 0..=cols {
            let col = time_column(cols, edge, time_len);
            prop_assert!(col >= prev, "column moved left: {prev} -> {col}");
            prop_assert!(col <= cols.saturating_sub(time_len));
            prev = col;
        }
    }
}

// ── 3. Row width is exact for any geometry ──────────────────────────────

proptest! {
    #[test]
    fn rows_are_exactly_cols_wide(cols in 0u16..400, progress in 0.0f64..=1.0) {
        prop_assert_eq!(animate::timer_row(cols, progress, "1:23:45").len(), cols as usize);
        prop_assert_eq!(animate::separator_row(cols, progress).len(), cols as usize);
        prop_assert_eq!(animate::completion_row(cols).len(), cols as usize);
    }
}

// ── 4. Strobe bounce ────────────────────────────────────────────────────

proptest! {
    #[test]
    fn strobe_stays_in_bounds_and_reflects(cols in 9u16..400, ticks in 1usize..2000) {
        let max_left = cols - STROBE_WIDTH;
        let mut s = Strobe::new();
        let mut prev = s;
        for _ in 0..ticks {
            s.advance(cols);
            prop_assert!(s.offset <= max_left);
            // Direction changes only at a boundary.
            if s.direction != prev.direction {
                let at_boundary = match s.direction {
                    StrobeDirection::Backward => s.offset == max_left,
                    StrobeDirection::Forward => s.offset == 0,
                };
                prop_assert!(at_boundary);
            }
            prev = s;
        }
    }
}

// ── 5. Clock clamps for arbitrary offsets ───────────────────────────────

proptest! {
    #[test]
    fn remaining_clamps_everywhere(duration in 1u64..86_400, offset in 0u64..200_000) {
        let t0 = SystemTime::UNIX_EPOCH;
        let clock = TimerClock::starting_at(t0, Duration::from_secs(duration)).unwrap();
        let now = t0 + Duration::from_secs(offset);
        let remaining = clock.remaining(now);
        prop_assert!(remaining <= duration);
        let p = clock.progress(now);
        prop_assert!((0.0..=1.0).contains(&p));
        // Formatting never produces bare seconds.
        prop_assert!(format_clock(remaining).contains(':'));
    }
}
