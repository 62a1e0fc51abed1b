//! Switches, colours, geometry and errors shared by every printer.

pub mod color;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod geometry;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, Style, colorize};
pub use config::ContextBuilder;
pub use context::StyleContext;
pub use error::{ColorError, Error, RestoreError};
pub use geometry::{SizeDefaults, terminal_geometry};
