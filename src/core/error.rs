//! Centralised error types used across the crate.

use std::io;

/// Colour parsing faults.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// Everything that can stop the restorer from re-raising a signal.
///
/// None of these propagate past the handler thread: they are reported on
/// stderr and the thread exits.
#[derive(Debug, thiserror::Error)]
pub enum RestoreError {
    #[error("failed to find process: {0}")]
    ProcessLookup(String),
    #[error("failed to signal process with {signal}: {source}")]
    Deliver {
        signal: i32,
        #[source]
        source: io::Error,
    },
    #[error("failed to register signal handlers: {0}")]
    Install(#[source] io::Error),
    #[error("signal restoration is not supported on this platform")]
    Unsupported,
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Restore(#[from] RestoreError),
}
