pub mod bar_chart;
pub mod cursor;
pub mod header;
pub mod paragraph;
pub mod prefix;

use std::io::{Write, stderr, stdout};

use unicode_width::UnicodeWidthStr;

use crate::core::{context::StyleContext, error::Error};

pub use bar_chart::{Bar, BarChartPrinter};
pub use cursor::{CursorControl, CursorGuard, TerminalCursor};
pub use header::HeaderPrinter;
pub use paragraph::ParagraphPrinter;
pub use prefix::PrefixPrinter;

/// A pre-built formatter. `render` is pure; the print methods consult the
/// context's switches first and write nothing when they say so.
pub trait Printer {
    type Input: ?Sized;

    fn render(&self, ctx: &StyleContext, input: &Self::Input) -> String;

    /// Output switch gate. Printers with extra conditions override this.
    fn should_print(&self, ctx: &StyleContext) -> bool {
        ctx.is_output_enabled()
    }

    fn print_to<W: Write>(
        &self,
        ctx: &StyleContext,
        out: &mut W,
        input: &Self::Input,
    ) -> Result<(), Error> {
        if !self.should_print(ctx) {
            return Ok(());
        }
        let text = self.render(ctx, input);
        out.write_all(text.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }

    fn println(&self, ctx: &StyleContext, input: &Self::Input) -> Result<(), Error> {
        let mut out = stdout().lock();
        self.print_to(ctx, &mut out, input)?;
        out.flush()?;
        Ok(())
    }

    fn eprintln(&self, ctx: &StyleContext, input: &Self::Input) -> Result<(), Error> {
        let mut out = stderr().lock();
        self.print_to(ctx, &mut out, input)?;
        out.flush()?;
        Ok(())
    }
}

// --- Helpers ---

#[inline]
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad `s` with spaces to `width` display columns.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let w = display_width(s);
    let mut out = String::with_capacity(s.len() + width.saturating_sub(w));
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', width.saturating_sub(w)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_right_counts_display_columns() {
        assert_eq!(pad_right("ab", 4), "ab  ");
        assert_eq!(pad_right("日本", 5), "日本 ");
        assert_eq!(pad_right("long", 2), "long");
    }
}
