//! A collection of constants.

/// Width assumed when no terminal is attached
pub const FALLBACK_WIDTH: u16 = 80;
/// Height assumed when no terminal is attached
pub const FALLBACK_HEIGHT: u16 = 30;

/// Size-dependent printer defaults take this share of the terminal.
///
/// A 120×45 terminal yields a 80×30 bar chart.
pub const SIZE_RATIO_NUM: usize = 2;
/// See [`SIZE_RATIO_NUM`].
pub const SIZE_RATIO_DEN: usize = 3;

/// Spaces on each side of a header's text
pub const DEFAULT_HEADER_MARGIN: usize = 5;

/// Glyph used to draw bars
pub const DEFAULT_BAR_CHAR: char = '█';

/// Escape sequence that hides the cursor
pub const HIDE_CURSOR: &str = "\x1b[?25l";
/// Escape sequence that shows the cursor
pub const SHOW_CURSOR: &str = "\x1b[?25h";
