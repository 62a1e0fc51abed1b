//! Terminal size plumbing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{FALLBACK_HEIGHT, FALLBACK_WIDTH, SIZE_RATIO_DEN, SIZE_RATIO_NUM};

/// Current terminal geometry (80×30 fallback).
#[inline]
#[must_use]
pub fn terminal_geometry() -> (usize, usize) {
    let (Width(w), Height(h)) =
        terminal_size().unwrap_or((Width(FALLBACK_WIDTH), Height(FALLBACK_HEIGHT)));
    (usize::from(w), usize::from(h))
}

/// Printer defaults derived from the terminal dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SizeDefaults {
    pub bar_chart_width: usize,
    pub bar_chart_height: usize,
    pub paragraph_max_width: usize,
}

impl SizeDefaults {
    /// Two-thirds of each dimension for bar charts, the full width for
    /// paragraphs. Integer division truncates.
    #[must_use]
    pub const fn from_dimensions(width: usize, height: usize) -> Self {
        Self {
            bar_chart_width: width * SIZE_RATIO_NUM / SIZE_RATIO_DEN,
            bar_chart_height: height * SIZE_RATIO_NUM / SIZE_RATIO_DEN,
            paragraph_max_width: width,
        }
    }

    /// Defaults for whatever terminal is attached right now.
    #[must_use]
    pub fn current() -> Self {
        let (w, h) = terminal_geometry();
        Self::from_dimensions(w, h)
    }
}
