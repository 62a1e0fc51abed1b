//! Zero-alloc ANSI escape codes + the `Style` that printers paint with.

use std::{fmt, str};

use crate::core::{context::StyleContext, error::ColorError};

const RESET: &str = "\x1b[0m";

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnsiCode {
    Static(&'static str),
    Inline { buf: [u8; 20], len: u8 },
}

macro_rules! named {
    ($($name:ident => $seq:literal),* $(,)?) => {
        $(
            #[inline]
            #[must_use]
            pub const fn $name() -> Self {
                Self::Static($seq)
            }
        )*
    };
}

impl AnsiCode {
    named! {
        black => "\x1b[30m",
        red => "\x1b[31m",
        green => "\x1b[32m",
        yellow => "\x1b[33m",
        blue => "\x1b[34m",
        magenta => "\x1b[35m",
        cyan => "\x1b[36m",
        white => "\x1b[37m",
        gray => "\x1b[90m",
        light_red => "\x1b[91m",
        light_green => "\x1b[92m",
        light_yellow => "\x1b[93m",
        light_blue => "\x1b[94m",
        light_magenta => "\x1b[95m",
        light_cyan => "\x1b[96m",
        light_white => "\x1b[97m",
        bg_black => "\x1b[40m",
        bg_red => "\x1b[41m",
        bg_green => "\x1b[42m",
        bg_yellow => "\x1b[43m",
        bg_blue => "\x1b[44m",
        bg_magenta => "\x1b[45m",
        bg_cyan => "\x1b[46m",
        bg_white => "\x1b[47m",
        bg_gray => "\x1b[100m",
        bg_light_red => "\x1b[101m",
        bg_light_green => "\x1b[102m",
        bg_light_yellow => "\x1b[103m",
        bg_light_blue => "\x1b[104m",
        bg_light_magenta => "\x1b[105m",
        bg_light_cyan => "\x1b[106m",
        bold => "\x1b[1m",
        italic => "\x1b[3m",
        underline => "\x1b[4m",
        reset => "\x1b[0m",
    }

    /// True-colour foreground `ESC[38;2;R;G;Bm`.
    #[must_use]
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::true_color(b"\x1b[38;2;", r, g, b)
    }

    /// True-colour background `ESC[48;2;R;G;Bm`.
    #[must_use]
    pub fn bg_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::true_color(b"\x1b[48;2;", r, g, b)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn true_color(prefix: &[u8; 7], r: u8, g: u8, b: u8) -> Self {
        let mut buf = [0u8; 20];
        buf[..7].copy_from_slice(prefix);
        let mut len = 7;

        for (i, v) in [r, g, b].into_iter().enumerate() {
            len += write_u8(&mut buf[len..], v);
            if i != 2 {
                buf[len] = b';';
                len += 1;
            }
        }
        buf[len] = b'm';
        len += 1;
        // at most 7 + 3 * 3 + 2 + 1 = 19 bytes
        Self::Inline {
            buf,
            len: len as u8,
        }
    }

    /// Parse foreground colour names or `#rrggbb`.  Falls back to hex parser
    /// on miss.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black" => Ok(Self::black()),
            "red" => Ok(Self::red()),
            "green" => Ok(Self::green()),
            "yellow" => Ok(Self::yellow()),
            "blue" => Ok(Self::blue()),
            "magenta" => Ok(Self::magenta()),
            "cyan" => Ok(Self::cyan()),
            "white" => Ok(Self::white()),
            "gray" | "grey" => Ok(Self::gray()),
            _ => Self::from_hex(s),
        }
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Static(s) => s,
            // only ASCII digits, ';', '[', 'm' and ESC are ever written
            Self::Inline { buf, len } => str::from_utf8(&buf[..*len as usize]).unwrap_or(""),
        }
    }
}

// --- Helpers ---
fn write_u8(dst: &mut [u8], mut n: u8) -> usize {
    let mut tmp = [0u8; 3];
    let mut i = 3;
    loop {
        i -= 1;
        tmp[i] = b'0' + n % 10;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    let len = 3 - i;
    dst[..len].copy_from_slice(&tmp[i..]);
    len
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Style ---

/// An ordered set of codes applied together.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style(Vec<AnsiCode>);

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn with(mut self, code: AnsiCode) -> Self {
        self.0.push(code);
        self
    }

    #[must_use]
    pub fn codes(&self) -> &[AnsiCode] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Wrap `text` in this style + reset, unless the context forbids
    /// escapes.
    #[must_use]
    pub fn paint(&self, ctx: &StyleContext, text: &str) -> String {
        if self.0.is_empty() || text.is_empty() || !ctx.styling_active() {
            return text.to_owned();
        }
        let mut out = String::with_capacity(text.len() + 8 * self.0.len() + RESET.len());
        for c in &self.0 {
            out.push_str(c.as_str());
        }
        out.push_str(text);
        out.push_str(RESET);
        out
    }
}

impl From<AnsiCode> for Style {
    #[inline]
    fn from(c: AnsiCode) -> Self {
        Self(vec![c])
    }
}

impl<const N: usize> From<[AnsiCode; N]> for Style {
    #[inline]
    fn from(codes: [AnsiCode; N]) -> Self {
        Self(codes.to_vec())
    }
}

/// Wrap `text` in colour + reset sequence, regardless of any context.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{RESET}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> StyleContext {
        StyleContext::builder().terminal_size(80, 24).build()
    }

    #[test]
    fn rgb_builds_true_color_sequences() {
        assert_eq!(AnsiCode::rgb(210, 135, 10).as_str(), "\x1b[38;2;210;135;10m");
        assert_eq!(AnsiCode::bg_rgb(0, 0, 0).as_str(), "\x1b[48;2;0;0;0m");
        assert_eq!(
            AnsiCode::bg_rgb(255, 255, 255).as_str(),
            "\x1b[48;2;255;255;255m"
        );
    }

    #[test]
    fn names_and_hex_parse() {
        assert_eq!(AnsiCode::from_name(" Red "), Ok(AnsiCode::red()));
        assert_eq!(AnsiCode::from_name("grey"), Ok(AnsiCode::gray()));
        assert_eq!(AnsiCode::from_name("#505050"), Ok(AnsiCode::rgb(0x50, 0x50, 0x50)));
        assert_eq!(AnsiCode::from_hex("#12345"), Err(ColorError::InvalidHexLength));
        assert_eq!(AnsiCode::from_hex("zz0000"), Err(ColorError::InvalidHexDigit));
        assert_eq!(AnsiCode::from_hex("ééé"), Err(ColorError::InvalidHexLength));
    }

    #[test]
    fn paint_wraps_in_codes_and_reset() {
        let s = Style::from([AnsiCode::bold(), AnsiCode::cyan()]);
        assert_eq!(s.paint(&ctx(), "hi"), "\x1b[1m\x1b[36mhi\x1b[0m");
    }

    #[test]
    fn paint_is_plain_in_raw_mode() {
        let c = ctx();
        c.disable_styling();
        assert_eq!(Style::from(AnsiCode::red()).paint(&c, "hi"), "hi");
        c.enable_styling();
        assert_eq!(
            Style::from(AnsiCode::red()).paint(&c, "hi"),
            "\x1b[31mhi\x1b[0m"
        );
    }

    #[test]
    fn paint_is_plain_without_color() {
        let c = ctx();
        c.disable_color();
        assert_eq!(Style::from(AnsiCode::red()).paint(&c, "hi"), "hi");
    }

    #[test]
    fn empty_inputs_pass_through() {
        assert_eq!(Style::new().paint(&ctx(), "x"), "x");
        assert_eq!(Style::from(AnsiCode::red()).paint(&ctx(), ""), "");
    }

    #[test]
    fn colorize_ignores_context() {
        assert_eq!(colorize(&AnsiCode::green(), "ok"), "\x1b[32mok\x1b[0m");
    }
}
