#![forbid(unsafe_code)]

//! Absolute-deadline countdown clock.
//!
//! The clock stores two wall-clock instants (start and end) and derives
//! everything else from "now" on each tick. Nothing accumulates across
//! ticks, so a suspend/resume that skips real time is reflected the moment
//! the next tick fires instead of being replayed second by second.
//! [`SystemTime`] is used rather than `Instant` precisely because it keeps
//! advancing while the machine sleeps.

use std::time::{Duration, SystemTime};

use thiserror::Error;

/// Clock construction failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClockError {
    /// The resolved duration was zero. The CLI layer validates shape and
    /// the 24-hour bound; a non-positive duration is rejected here as a
    /// last line of defense.
    #[error("countdown duration must be positive")]
    ZeroDuration,
}

/// Countdown state anchored to a fixed end instant.
///
/// `end` never changes after construction. `expired_once` latches the
/// one-shot completion transition (bell, notification, region release) so
/// it cannot fire twice no matter how often the loop asks.
#[derive(Debug, Clone)]
pub struct TimerClock {
    start: SystemTime,
    end: SystemTime,
    duration: Duration,
    expired_once: bool,
}

impl TimerClock {
    /// Create a clock starting now.
    pub fn new(duration: Duration) -> Result<Self, ClockError> {
        Self::starting_at(SystemTime::now(), duration)
    }

    /// Create a clock with an explicit start instant.
    pub fn starting_at(start: SystemTime, duration: Duration) -> Result<Self, ClockError> {
        if duration.is_zero() {
            return Err(ClockError::ZeroDuration);
        }
        Ok(Self {
            start,
            end: start + duration,
            duration,
            expired_once: false,
        })
    }

    /// The instant the countdown begins.
    #[inline]
    pub fn start(&self) -> SystemTime {
        self.start
    }

    /// Total requested duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Whole seconds left at `now`, clamped to zero.
    ///
    /// A backwards clock step (before `start`) reads as the full duration;
    /// remaining never exceeds it.
    pub fn remaining(&self, now: SystemTime) -> u64 {
        let left = self
            .end
            .duration_since(now)
            .unwrap_or(Duration::ZERO)
            .as_secs();
        left.min(self.duration.as_secs())
    }

    /// Whether the deadline has passed at `now`.
    #[inline]
    pub fn is_expired(&self, now: SystemTime) -> bool {
        self.remaining(now) == 0
    }

    /// Fraction of the countdown consumed at `now`, clamped to `[0, 1]`.
    ///
    /// Once expired this is 1.0 and stays there.
    pub fn progress(&self, now: SystemTime) -> f64 {
        let total = self.duration.as_secs_f64();
        let left = self.remaining(now) as f64;
        (1.0 - left / total).clamp(0.0, 1.0)
    }

    /// True exactly once: on the first call at or after the deadline.
    ///
    /// The caller runs the completion sequence (bell, notification, region
    /// release) when this returns true.
    pub fn completion_due(&mut self, now: SystemTime) -> bool {
        if self.expired_once || !self.is_expired(now) {
            return false;
        }
        self.expired_once = true;
        true
    }

    /// Whether the completion transition has already fired.
    #[inline]
    pub fn completed(&self) -> bool {
        self.expired_once
    }
}

/// Format whole seconds as a clock string.
///
/// Leading zero components are stripped but minutes are always kept, so the
/// output is never a bare seconds count: `"1:23:45"`, `"23:45"`, `"0:45"`.
pub fn format_clock(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: SystemTime = SystemTime::UNIX_EPOCH;

    fn clock(secs: u64) -> TimerClock {
        TimerClock::starting_at(T0, Duration::from_secs(secs)).unwrap()
    }

    #[test]
    fn zero_duration_is_rejected() {
        assert_eq!(
            TimerClock::starting_at(T0, Duration::ZERO).unwrap_err(),
            ClockError::ZeroDuration
        );
    }

    #[test]
    fn remaining_at_start_is_full_duration() {
        let c = clock(30);
        assert_eq!(c.remaining(T0), 30);
    }

    #[test]
    fn remaining_at_deadline_is_zero() {
        let c = clock(30);
        assert_eq!(c.remaining(T0 + Duration::from_secs(30)), 0);
        assert!(c.is_expired(T0 + Duration::from_secs(30)));
    }

    #[test]
    fn remaining_clamps_past_deadline() {
        let c = clock(30);
        assert_eq!(c.remaining(T0 + Duration::from_secs(1000)), 0);
    }

    #[test]
    fn remaining_is_non_increasing() {
        let c = clock(10);
        let mut prev = u64::MAX;
        for s in 0..=15 {
            let r = c.remaining(T0 + Duration::from_secs(s));
            assert!(r <= prev);
            prev = r;
        }
    }

    #[test]
    fn backwards_clock_step_never_exceeds_duration() {
        // A wall clock stepped before the start instant must not report
        // more time left than was requested.
        let start = T0 + Duration::from_secs(100);
        let c = TimerClock::starting_at(start, Duration::from_secs(30)).unwrap();
        assert_eq!(c.remaining(T0), 30);
    }

    #[test]
    fn progress_spans_zero_to_one() {
        let c = clock(30);
        assert_eq!(c.progress(T0), 0.0);
        let third = c.progress(T0 + Duration::from_secs(10));
        assert!((third - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(c.progress(T0 + Duration::from_secs(30)), 1.0);
        // Frozen at 1.0 after completion.
        assert_eq!(c.progress(T0 + Duration::from_secs(99)), 1.0);
    }

    #[test]
    fn completion_fires_exactly_once() {
        let mut c = clock(3);
        assert!(!c.completion_due(T0 + Duration::from_secs(2)));
        assert!(c.completion_due(T0 + Duration::from_secs(3)));
        assert!(!c.completion_due(T0 + Duration::from_secs(4)));
        assert!(c.completed());
    }

    #[test]
    fn format_keeps_minutes_and_strips_hours() {
        assert_eq!(format_clock(5), "0:05");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(23 * 60 + 45), "23:45");
        assert_eq!(format_clock(3600 + 23 * 60 + 45), "1:23:45");
        assert_eq!(format_clock(5400), "1:30:00");
        assert_eq!(format_clock(0), "0:00");
    }
}
