#![forbid(unsafe_code)]

//! Core: countdown clock math, the reserved-band animation engine, and the
//! ANSI sequences that drive it.
//!
//! This crate is host-agnostic: nothing here touches a terminal, spawns a
//! process, or looks at the clock on its own. The binary crate feeds it a
//! [`geometry::Geometry`], a wall-clock instant, and gets back an escape
//! stream to write. That split keeps every piece of the animation and the
//! region protocol unit-testable without a PTY.

pub mod animate;
pub mod ansi;
pub mod band;
pub mod clock;
pub mod frame;
pub mod geometry;

pub use band::{BAND_HEIGHT, ScrollRegion};
pub use clock::{ClockError, TimerClock, format_clock};
pub use geometry::Geometry;
