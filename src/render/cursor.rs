//! Cursor visibility: escape sequences, a RAII guard, and the seam the
//! signal restorer drives.

use std::io::{self, Write, stdout};

use crate::core::constants::{HIDE_CURSOR, SHOW_CURSOR};

/// Anything that can make the cursor visible again.
pub trait CursorControl: Send + 'static {
    fn show(&mut self) -> io::Result<()>;
}

/// Writes the escape sequences straight to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalCursor;

impl TerminalCursor {
    pub fn hide(self) -> io::Result<()> {
        let mut out = stdout().lock();
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()
    }
}

impl CursorControl for TerminalCursor {
    fn show(&mut self) -> io::Result<()> {
        let mut out = stdout().lock();
        out.write_all(SHOW_CURSOR.as_bytes())?;
        out.flush()
    }
}

/// Hides the cursor on construction and shows it again on Drop.
///
/// Covers early returns and panics. Signals are the restorer's job.
pub struct CursorGuard<W: Write = io::Stdout> {
    out: W,
}

impl CursorGuard {
    pub fn new() -> io::Result<Self> {
        Self::on(stdout())
    }
}

impl<W: Write> CursorGuard<W> {
    pub fn on(mut out: W) -> io::Result<Self> {
        out.write_all(HIDE_CURSOR.as_bytes())?;
        out.flush()?;
        Ok(Self { out })
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.out
    }
}

impl<W: Write> Drop for CursorGuard<W> {
    fn drop(&mut self) {
        let _ = self.out.write_all(SHOW_CURSOR.as_bytes());
        let _ = self.out.flush();
    }
}
