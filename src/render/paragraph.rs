//! Greedy word wrap.

use crate::{
    core::context::StyleContext,
    render::{Printer, display_width},
};

#[derive(Clone, Copy, Debug, Default)]
pub struct ParagraphPrinter {
    /// Column limit. `None` uses the context's terminal width; `Some(0)`
    /// disables wrapping.
    pub max_width: Option<usize>,
}

impl ParagraphPrinter {
    #[inline]
    #[must_use]
    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }

    /// Collapse whitespace and break lines at `max_width` display columns.
    ///
    /// Words wider than the limit get a line of their own, unbroken.
    #[must_use]
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let mut lines = Vec::new();
        let mut line = String::new();
        let mut line_w = 0;

        for word in text.split_whitespace() {
            let ww = display_width(word);
            if line.is_empty() {
                line.push_str(word);
                line_w = ww;
            } else if max_width == 0 || line_w + 1 + ww <= max_width {
                line.push(' ');
                line.push_str(word);
                line_w += 1 + ww;
            } else {
                lines.push(std::mem::take(&mut line));
                line.push_str(word);
                line_w = ww;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    }
}

impl Printer for ParagraphPrinter {
    type Input = str;

    fn render(&self, ctx: &StyleContext, text: &str) -> String {
        let width = self
            .max_width
            .unwrap_or_else(|| ctx.size_defaults().paragraph_max_width);
        Self::wrap(text, width).join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(width: usize) -> StyleContext {
        StyleContext::builder().terminal_size(width, 24).build()
    }

    #[test]
    fn wraps_at_the_limit() {
        let p = ParagraphPrinter::default().with_max_width(10);
        assert_eq!(
            p.render(&ctx(80), "the quick brown fox jumps"),
            "the quick\nbrown fox\njumps"
        );
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        assert_eq!(ParagraphPrinter::wrap("ab cd", 5), vec!["ab cd"]);
    }

    #[test]
    fn long_words_are_not_split() {
        assert_eq!(
            ParagraphPrinter::wrap("a supercalifragilistic b", 6),
            vec!["a", "supercalifragilistic", "b"]
        );
    }

    #[test]
    fn zero_width_disables_wrapping() {
        assert_eq!(
            ParagraphPrinter::wrap("  many   spaced\nwords ", 0),
            vec!["many spaced words"]
        );
    }

    #[test]
    fn default_width_tracks_the_context() {
        let c = ctx(80);
        let p = ParagraphPrinter::default();
        assert_eq!(p.render(&c, "aa bb cc"), "aa bb cc");
        c.recalc_terminal_size_with(5, 10);
        assert_eq!(p.render(&c, "aa bb cc"), "aa bb\ncc");
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert_eq!(ParagraphPrinter::wrap("日本 語", 4), vec!["日本", "語"]);
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(ParagraphPrinter::wrap("   ", 10).is_empty());
    }
}
