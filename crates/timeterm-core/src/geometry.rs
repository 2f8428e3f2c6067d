#![forbid(unsafe_code)]

//! Terminal geometry.

/// Terminal dimensions in character cells.
///
/// Rows and columns are counts, not coordinates; escape sequences built from
/// a `Geometry` use 1-based row/column addressing as the terminal expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    /// Total rows, including the reserved band.
    pub rows: u16,
    /// Total columns.
    pub cols: u16,
}

impl Geometry {
    /// Create a new geometry.
    #[inline]
    pub const fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }
}

/// Fallback used when the terminal size cannot be queried.
pub const FALLBACK: Geometry = Geometry::new(24, 80);
