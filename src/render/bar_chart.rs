//! Horizontal / vertical bar charts scaled to the terminal.

use crate::{
    core::{
        color::{AnsiCode, Style},
        constants::DEFAULT_BAR_CHAR,
        context::StyleContext,
    },
    render::{Printer, display_width, pad_right},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bar {
    pub label: String,
    pub value: i64,
}

impl Bar {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    /// Negative values draw as empty bars.
    #[inline]
    fn magnitude(&self) -> u64 {
        u64::try_from(self.value).unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
pub struct BarChartPrinter {
    /// Total columns for horizontal charts. `None` uses the context default.
    pub width: Option<usize>,
    /// Bar rows for vertical charts. `None` uses the context default.
    pub height: Option<usize>,
    pub horizontal: bool,
    pub show_values: bool,
    pub bar_style: Style,
    pub bar_char: char,
}

impl Default for BarChartPrinter {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            horizontal: false,
            show_values: false,
            bar_style: Style::from(AnsiCode::light_blue()),
            bar_char: DEFAULT_BAR_CHAR,
        }
    }
}

/// `value * span / max`, rounded down. Zero when nothing is positive.
#[inline]
fn scale(value: u64, max: u64, span: usize) -> usize {
    if max == 0 {
        return 0;
    }
    let span = span as u128;
    usize::try_from(u128::from(value) * span / u128::from(max)).unwrap_or(usize::MAX)
}

impl BarChartPrinter {
    #[inline]
    #[must_use]
    pub fn with_horizontal(mut self, on: bool) -> Self {
        self.horizontal = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_show_values(mut self, on: bool) -> Self {
        self.show_values = on;
        self
    }
    #[inline]
    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }
    #[inline]
    #[must_use]
    pub fn with_height(mut self, height: usize) -> Self {
        self.height = Some(height);
        self
    }
    #[inline]
    #[must_use]
    pub fn with_bar_style(mut self, style: impl Into<Style>) -> Self {
        self.bar_style = style.into();
        self
    }
    #[inline]
    #[must_use]
    pub fn with_bar_char(mut self, c: char) -> Self {
        self.bar_char = c;
        self
    }

    fn render_horizontal(&self, ctx: &StyleContext, bars: &[Bar], width: usize) -> String {
        let label_w = bars.iter().map(|b| display_width(&b.label)).max().unwrap_or(0);
        let value_w = if self.show_values {
            bars.iter().map(|b| b.value.to_string().len()).max().unwrap_or(0) + 1
        } else {
            0
        };
        let span = width.saturating_sub(label_w + 1 + value_w);
        let max = bars.iter().map(Bar::magnitude).max().unwrap_or(0);

        let mut lines = Vec::with_capacity(bars.len());
        for b in bars {
            let len = scale(b.magnitude(), max, span);
            let mut line = pad_right(&b.label, label_w);
            line.push(' ');
            let bar: String = std::iter::repeat_n(self.bar_char, len).collect();
            line.push_str(&self.bar_style.paint(ctx, &bar));
            if self.show_values {
                line.push(' ');
                line.push_str(&b.value.to_string());
            }
            lines.push(line.trim_end().to_owned());
        }
        lines.join("\n")
    }

    fn render_vertical(&self, ctx: &StyleContext, bars: &[Bar], height: usize) -> String {
        if height == 0 {
            return String::new();
        }
        let col_w = bars
            .iter()
            .map(|b| {
                let v = if self.show_values {
                    b.value.to_string().len()
                } else {
                    0
                };
                display_width(&b.label).max(v).max(1)
            })
            .collect::<Vec<_>>();
        let max = bars.iter().map(Bar::magnitude).max().unwrap_or(0);
        let heights: Vec<usize> = bars
            .iter()
            .map(|b| scale(b.magnitude(), max, height))
            .collect();

        let mut lines = Vec::with_capacity(height + 2);
        if self.show_values {
            let row: Vec<String> = bars
                .iter()
                .zip(&col_w)
                .map(|(b, &w)| pad_right(&b.value.to_string(), w))
                .collect();
            lines.push(row.join(" ").trim_end().to_owned());
        }
        for level in (1..=height).rev() {
            let row: Vec<String> = heights
                .iter()
                .zip(&col_w)
                .map(|(&h, &w)| {
                    if h >= level {
                        let cell: String = std::iter::repeat_n(self.bar_char, w).collect();
                        self.bar_style.paint(ctx, &cell)
                    } else {
                        " ".repeat(w)
                    }
                })
                .collect();
            lines.push(row.join(" ").trim_end().to_owned());
        }
        let labels: Vec<String> = bars
            .iter()
            .zip(&col_w)
            .map(|(b, &w)| pad_right(&b.label, w))
            .collect();
        lines.push(labels.join(" ").trim_end().to_owned());
        lines.join("\n")
    }
}

impl Printer for BarChartPrinter {
    type Input = [Bar];

    fn render(&self, ctx: &StyleContext, bars: &[Bar]) -> String {
        if bars.is_empty() {
            return String::new();
        }
        let defaults = ctx.size_defaults();
        if self.horizontal {
            let width = self.width.unwrap_or(defaults.bar_chart_width);
            self.render_horizontal(ctx, bars, width)
        } else {
            let height = self.height.unwrap_or(defaults.bar_chart_height);
            self.render_vertical(ctx, bars, height)
        }
    }
}
