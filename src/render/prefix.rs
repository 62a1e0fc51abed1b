//! Labelled message lines: ` INFO  message`.

use crate::{
    core::{
        color::{AnsiCode, Style},
        context::StyleContext,
    },
    render::{Printer, display_width},
};

#[derive(Clone, Debug)]
pub struct PrefixPrinter {
    pub label: String,
    pub label_style: Style,
    pub message_style: Style,
    /// Only prints while debug messages are enabled.
    pub debugger: bool,
}

impl PrefixPrinter {
    pub fn new(label: impl Into<String>, label_style: Style, message_style: Style) -> Self {
        Self {
            label: label.into(),
            label_style,
            message_style,
            debugger: false,
        }
    }

    fn preset(label: &str, bg: AnsiCode, fg: AnsiCode) -> Self {
        Self::new(label, Style::from([bg, AnsiCode::black()]), Style::from(fg))
    }

    #[must_use]
    pub fn info() -> Self {
        Self::preset("INFO", AnsiCode::bg_cyan(), AnsiCode::light_cyan())
    }
    #[must_use]
    pub fn success() -> Self {
        Self::preset("SUCCESS", AnsiCode::bg_green(), AnsiCode::light_green())
    }
    #[must_use]
    pub fn warning() -> Self {
        Self::preset("WARNING", AnsiCode::bg_yellow(), AnsiCode::light_yellow())
    }
    #[must_use]
    pub fn error() -> Self {
        Self::preset("ERROR", AnsiCode::bg_light_red(), AnsiCode::light_red())
    }
    #[must_use]
    pub fn debug() -> Self {
        Self {
            debugger: true,
            ..Self::preset("DEBUG", AnsiCode::bg_gray(), AnsiCode::gray())
        }
    }
}

impl Printer for PrefixPrinter {
    type Input = str;

    fn should_print(&self, ctx: &StyleContext) -> bool {
        ctx.is_output_enabled() && (!self.debugger || ctx.debug_messages_enabled())
    }

    /// Continuation lines are indented under the first one.
    fn render(&self, ctx: &StyleContext, message: &str) -> String {
        let tag = format!(" {} ", self.label);
        let indent = " ".repeat(display_width(&tag) + 1);
        let mut out = self.label_style.paint(ctx, &tag);
        for (i, line) in message.lines().enumerate() {
            if i == 0 {
                out.push(' ');
            } else {
                out.push('\n');
                out.push_str(&indent);
            }
            out.push_str(&self.message_style.paint(ctx, line));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> StyleContext {
        StyleContext::builder().terminal_size(80, 24).build()
    }

    #[test]
    fn plain_layout_without_color() {
        let c = ctx();
        c.disable_styling();
        assert_eq!(PrefixPrinter::info().render(&c, "ready"), " INFO  ready");
        assert_eq!(
            PrefixPrinter::warning().render(&c, "one\ntwo"),
            " WARNING  one\n          two"
        );
    }

    #[test]
    fn styled_label_and_message() {
        assert_eq!(
            PrefixPrinter::error().render(&ctx(), "boom"),
            "\x1b[101m\x1b[30m ERROR \x1b[0m \x1b[91mboom\x1b[0m"
        );
    }

    #[test]
    fn debug_printer_follows_the_debug_switch() {
        let c = ctx();
        let mut buf = Vec::new();
        PrefixPrinter::debug().print_to(&c, &mut buf, "hidden").unwrap();
        assert!(buf.is_empty());

        c.enable_debug_messages();
        PrefixPrinter::debug().print_to(&c, &mut buf, "shown").unwrap();
        assert!(String::from_utf8(buf.clone()).unwrap().contains("shown"));

        buf.clear();
        c.disable_output();
        PrefixPrinter::debug().print_to(&c, &mut buf, "quiet").unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn non_debug_printers_ignore_the_debug_switch() {
        let c = ctx();
        let mut buf = Vec::new();
        PrefixPrinter::success().print_to(&c, &mut buf, "done").unwrap();
        assert!(!buf.is_empty());
    }
}
