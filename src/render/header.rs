//! Single-line banner with a background band.

use crate::{
    core::{
        color::{AnsiCode, Style},
        constants::DEFAULT_HEADER_MARGIN,
        context::StyleContext,
    },
    render::{Printer, display_width},
};

#[derive(Clone, Debug)]
pub struct HeaderPrinter {
    pub text_style: Style,
    pub background_style: Style,
    /// Spaces on each side of the text.
    pub margin: usize,
    /// Stretch the band across the terminal and centre the text.
    pub full_width: bool,
}

impl Default for HeaderPrinter {
    fn default() -> Self {
        Self {
            text_style: Style::from([AnsiCode::light_white(), AnsiCode::bold()]),
            background_style: Style::from(AnsiCode::bg_gray()),
            margin: DEFAULT_HEADER_MARGIN,
            full_width: false,
        }
    }
}

impl HeaderPrinter {
    #[inline]
    #[must_use]
    pub fn with_full_width(mut self) -> Self {
        self.full_width = true;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_text_style(mut self, style: impl Into<Style>) -> Self {
        self.text_style = style.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn with_background_style(mut self, style: impl Into<Style>) -> Self {
        self.background_style = style.into();
        self
    }

    /// (left, right) padding around `text`.
    fn padding(&self, ctx: &StyleContext, text: &str) -> (usize, usize) {
        let tw = display_width(text);
        if self.full_width {
            let width = ctx.size_defaults().paragraph_max_width;
            if width > tw {
                let left = (width - tw) / 2;
                return (left, width - tw - left);
            }
        }
        (self.margin, self.margin)
    }
}

impl Printer for HeaderPrinter {
    type Input = str;

    fn render(&self, ctx: &StyleContext, text: &str) -> String {
        if ctx.is_raw_output() {
            return text.to_owned();
        }
        let (left, right) = self.padding(ctx, text);
        let band = format!("{}{text}{}", " ".repeat(left), " ".repeat(right));
        let mut style = self.background_style.clone();
        for code in self.text_style.codes() {
            style = style.with(*code);
        }
        style.paint(ctx, &band)
    }
}
