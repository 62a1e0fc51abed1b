//! Public-facing crate root – re-exports + one-shot helpers.
//!
//! The signal restorer is opt-in: it arms when the host calls
//! [`restore::install`], not when the crate is loaded.
//!
//! ```no_run
//! use termgloss::{HeaderPrinter, Printer, StyleContext};
//!
//! let _restorer = termgloss::restore::install();
//! let ctx = StyleContext::global();
//! HeaderPrinter::default().with_full_width().println(ctx, "Hello")?;
//! # Ok::<(), termgloss::Error>(())
//! ```

pub mod core;
pub mod render;
pub mod restore;

pub use crate::core::{
    color::{AnsiCode, Style, colorize},
    config::ContextBuilder,
    context::StyleContext,
    error::{ColorError, Error, RestoreError},
    geometry::SizeDefaults,
};

pub use render::{
    Bar, BarChartPrinter, CursorGuard, HeaderPrinter, ParagraphPrinter, PrefixPrinter, Printer,
};

pub use restore::{Outcome, Restorer, RestorerHandle, State};

/// Switch every printer off on the shared context (CLI quiet mode).
pub fn disable_output() {
    StyleContext::global().disable_output();
}

/// Switch printers back on on the shared context.
pub fn enable_output() {
    StyleContext::global().enable_output();
}

/// Raw output + no colour on the shared context, e.g. for writing to files.
pub fn disable_styling() {
    StyleContext::global().disable_styling();
}

/// Undo [`disable_styling`].
pub fn enable_styling() {
    StyleContext::global().enable_styling();
}

pub fn enable_debug_messages() {
    StyleContext::global().enable_debug_messages();
}

pub fn disable_debug_messages() {
    StyleContext::global().disable_debug_messages();
}

/// Call after a terminal resize. Applies to printers without explicit sizes.
pub fn recalc_terminal_size() {
    StyleContext::global().recalc_terminal_size();
}
