//! Fluent builder for [`StyleContext`] + environment defaults.

use crate::core::{context::StyleContext, geometry::SizeDefaults};

/// Disables colour when set to anything (<https://no-color.org>).
pub const ENV_NO_COLOR: &str = "NO_COLOR";
/// `1`/`true` turns debug messages on.
pub const ENV_DEBUG: &str = "TERMGLOSS_DEBUG";
/// `1`/`true` starts in raw-output mode.
pub const ENV_RAW: &str = "TERMGLOSS_RAW";

#[derive(Debug, Clone)]
pub struct ContextBuilder {
    output: bool,
    debug_messages: bool,
    raw_output: bool,
    color: bool,
    size: Option<(usize, usize)>,
}

impl Default for ContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder {
    pub(crate) fn new() -> Self {
        Self {
            output: true,
            debug_messages: false,
            raw_output: false,
            color: true,
            size: None,
        }
    }

    /// Seed the builder from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Seed the builder from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut b = Self::new();
        if lookup(ENV_NO_COLOR).is_some() {
            b.color = false;
        }
        if let Some(v) = lookup(ENV_DEBUG).and_then(|v| parse_flag(ENV_DEBUG, &v)) {
            b.debug_messages = v;
        }
        if let Some(v) = lookup(ENV_RAW).and_then(|v| parse_flag(ENV_RAW, &v)) {
            b.raw_output = v;
            if v {
                b.color = false;
            }
        }
        b
    }

    #[inline]
    pub fn output(mut self, on: bool) -> Self {
        self.output = on;
        self
    }
    #[inline]
    pub fn debug_messages(mut self, on: bool) -> Self {
        self.debug_messages = on;
        self
    }
    /// Raw output implies no colour, mirroring `disable_styling`.
    #[inline]
    pub fn raw_output(mut self, on: bool) -> Self {
        self.raw_output = on;
        self.color = !on;
        self
    }
    #[inline]
    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }
    /// Pin the terminal size instead of querying it.
    #[inline]
    pub fn terminal_size(mut self, width: usize, height: usize) -> Self {
        self.size = Some((width, height));
        self
    }

    pub fn build(self) -> StyleContext {
        let sizes = match self.size {
            Some((w, h)) => SizeDefaults::from_dimensions(w, h),
            None => SizeDefaults::current(),
        };
        StyleContext::from_parts(
            self.output,
            self.debug_messages,
            self.raw_output,
            self.color,
            sizes,
        )
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        other => {
            tracing::warn!(key, value = other, "ignoring unrecognised flag value");
            None
        }
    }
}

/// `?`-free conversion for builder chains.
impl From<ContextBuilder> for StyleContext {
    fn from(b: ContextBuilder) -> Self {
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let c = ContextBuilder::from_lookup(env(&[])).terminal_size(80, 24).build();
        assert!(c.is_output_enabled());
        assert!(!c.debug_messages_enabled());
        assert!(c.styling_active());
    }

    #[test]
    fn no_color_with_any_value_disables_color() {
        let c = ContextBuilder::from_lookup(env(&[(ENV_NO_COLOR, "")]))
            .terminal_size(80, 24)
            .build();
        assert!(!c.is_color_enabled());
        assert!(!c.is_raw_output());
    }

    #[test]
    fn debug_and_raw_flags_are_read() {
        let c = ContextBuilder::from_lookup(env(&[(ENV_DEBUG, "TRUE"), (ENV_RAW, "1")]))
            .terminal_size(80, 24)
            .build();
        assert!(c.debug_messages_enabled());
        assert!(c.is_raw_output());
        assert!(!c.is_color_enabled());
    }

    #[test]
    fn garbage_values_are_ignored() {
        let c = ContextBuilder::from_lookup(env(&[(ENV_DEBUG, "maybe")]))
            .terminal_size(80, 24)
            .build();
        assert!(!c.debug_messages_enabled());
    }

    #[test]
    fn explicit_setters_override_environment() {
        let c = ContextBuilder::from_lookup(env(&[(ENV_RAW, "1")]))
            .raw_output(false)
            .output(false)
            .terminal_size(30, 9)
            .build();
        assert!(c.styling_active());
        assert!(!c.is_output_enabled());
        assert_eq!(c.size_defaults(), SizeDefaults::from_dimensions(30, 9));
    }
}
