//! Process-wide styling switches, held in an explicit context.
//!
//! Every printer reads these before emitting text. Flags are atomics and the
//! size defaults sit behind a lock, so toggling from one thread while
//! another prints is race-free. Last writer wins.

use std::sync::{
    OnceLock, PoisonError, RwLock,
    atomic::{AtomicBool, Ordering},
};

use crate::core::{
    config::ContextBuilder,
    geometry::{SizeDefaults, terminal_geometry},
};

#[derive(Debug)]
pub struct StyleContext {
    output: AtomicBool,
    debug_messages: AtomicBool,
    raw_output: AtomicBool,
    color: AtomicBool,
    sizes: RwLock<SizeDefaults>,
}

impl StyleContext {
    #[inline]
    pub fn builder() -> ContextBuilder {
        ContextBuilder::new()
    }

    pub(crate) fn from_parts(
        output: bool,
        debug_messages: bool,
        raw_output: bool,
        color: bool,
        sizes: SizeDefaults,
    ) -> Self {
        Self {
            output: AtomicBool::new(output),
            debug_messages: AtomicBool::new(debug_messages),
            raw_output: AtomicBool::new(raw_output),
            color: AtomicBool::new(color),
            sizes: RwLock::new(sizes),
        }
    }

    /// Shared instance for hosts that want a single process-wide switchboard.
    ///
    /// Built from the environment on first use.
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<StyleContext> = OnceLock::new();
        GLOBAL.get_or_init(|| ContextBuilder::from_env().build())
    }

    // --- output ---

    pub fn enable_output(&self) {
        self.output.store(true, Ordering::SeqCst);
        tracing::debug!("output enabled");
    }

    /// Quiet mode: every printer becomes a no-op.
    pub fn disable_output(&self) {
        self.output.store(false, Ordering::SeqCst);
        tracing::debug!("output disabled");
    }

    #[inline]
    pub fn is_output_enabled(&self) -> bool {
        self.output.load(Ordering::SeqCst)
    }

    // --- debug messages ---

    pub fn enable_debug_messages(&self) {
        self.debug_messages.store(true, Ordering::SeqCst);
        tracing::debug!("debug messages enabled");
    }

    pub fn disable_debug_messages(&self) {
        self.debug_messages.store(false, Ordering::SeqCst);
        tracing::debug!("debug messages disabled");
    }

    #[inline]
    pub fn debug_messages_enabled(&self) -> bool {
        self.debug_messages.load(Ordering::SeqCst)
    }

    // --- styling ---

    /// Leave raw-output mode. Also turns colour back on.
    pub fn enable_styling(&self) {
        self.raw_output.store(false, Ordering::SeqCst);
        self.enable_color();
    }

    /// Enter raw-output mode, e.g. when writing to a file. Also turns colour
    /// off.
    pub fn disable_styling(&self) {
        self.raw_output.store(true, Ordering::SeqCst);
        self.disable_color();
    }

    #[inline]
    pub fn is_raw_output(&self) -> bool {
        self.raw_output.load(Ordering::SeqCst)
    }

    pub fn enable_color(&self) {
        self.color.store(true, Ordering::SeqCst);
        tracing::debug!(raw = self.is_raw_output(), "color enabled");
    }

    pub fn disable_color(&self) {
        self.color.store(false, Ordering::SeqCst);
        tracing::debug!(raw = self.is_raw_output(), "color disabled");
    }

    #[inline]
    pub fn is_color_enabled(&self) -> bool {
        self.color.load(Ordering::SeqCst)
    }

    /// Escapes may be emitted only when neither raw mode nor no-colour is set.
    #[inline]
    pub fn styling_active(&self) -> bool {
        !self.is_raw_output() && self.is_color_enabled()
    }

    // --- terminal size ---

    /// Re-read the terminal size and update size-dependent printer defaults.
    ///
    /// Call after a resize notification. Printers that already carry an
    /// explicit width/height are unaffected.
    pub fn recalc_terminal_size(&self) {
        let (w, h) = terminal_geometry();
        self.recalc_terminal_size_with(w, h);
    }

    /// Same as [`Self::recalc_terminal_size`] for a size the host already
    /// knows.
    pub fn recalc_terminal_size_with(&self, width: usize, height: usize) {
        let next = SizeDefaults::from_dimensions(width, height);
        *self.sizes.write().unwrap_or_else(PoisonError::into_inner) = next;
        tracing::debug!(width, height, ?next, "terminal size recalculated");
    }

    #[inline]
    pub fn size_defaults(&self) -> SizeDefaults {
        *self.sizes.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        ContextBuilder::new().build()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use proptest::prelude::*;

    use super::*;

    fn ctx() -> StyleContext {
        StyleContext::builder().terminal_size(90, 30).build()
    }

    #[test]
    fn defaults_match_a_fresh_process() {
        let c = ctx();
        assert!(c.is_output_enabled());
        assert!(!c.debug_messages_enabled());
        assert!(!c.is_raw_output());
        assert!(c.is_color_enabled());
        assert!(c.styling_active());
    }

    #[test]
    fn disable_styling_forces_raw_and_no_color() {
        let c = ctx();
        c.disable_styling();
        assert!(c.is_raw_output());
        assert!(!c.is_color_enabled());
        assert!(!c.styling_active());

        c.enable_styling();
        assert!(!c.is_raw_output());
        assert!(c.is_color_enabled());
        assert!(c.styling_active());
    }

    #[test]
    fn color_switch_alone_keeps_raw_mode() {
        let c = ctx();
        c.disable_color();
        assert!(!c.is_raw_output());
        assert!(!c.styling_active());
    }

    #[test]
    fn recalc_updates_size_defaults() {
        let c = ctx();
        assert_eq!(c.size_defaults().bar_chart_width, 60);
        c.recalc_terminal_size_with(0, 1);
        let d = c.size_defaults();
        assert_eq!(d.bar_chart_width, 0);
        assert_eq!(d.bar_chart_height, 0);
        assert_eq!(d.paragraph_max_width, 0);

        c.recalc_terminal_size_with(300, 100);
        let d = c.size_defaults();
        assert_eq!(d.bar_chart_width, 200);
        assert_eq!(d.bar_chart_height, 66);
        assert_eq!(d.paragraph_max_width, 300);
    }

    #[test]
    fn toggles_from_other_threads_are_visible() {
        let c = Arc::new(ctx());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let c = Arc::clone(&c);
                thread::spawn(move || {
                    for _ in 0..100 {
                        c.disable_output();
                        c.enable_output();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(c.is_output_enabled());
    }

    #[test]
    fn global_is_a_single_instance() {
        assert!(std::ptr::eq(StyleContext::global(), StyleContext::global()));
    }

    proptest! {
        #[test]
        fn output_flag_is_last_writer_wins(calls in proptest::collection::vec(any::<bool>(), 1..16)) {
            let c = ctx();
            for &enable in &calls {
                if enable { c.enable_output() } else { c.disable_output() }
            }
            prop_assert_eq!(c.is_output_enabled(), *calls.last().unwrap());
        }

        #[test]
        fn debug_flag_is_last_writer_wins(calls in proptest::collection::vec(any::<bool>(), 1..16)) {
            let c = ctx();
            for &enable in &calls {
                if enable { c.enable_debug_messages() } else { c.disable_debug_messages() }
            }
            prop_assert_eq!(c.debug_messages_enabled(), *calls.last().unwrap());
        }

        #[test]
        fn styling_round_trip_ends_with_last_call(calls in proptest::collection::vec(any::<bool>(), 1..16)) {
            let c = ctx();
            for &enable in &calls {
                if enable { c.enable_styling() } else { c.disable_styling() }
            }
            let last = *calls.last().unwrap();
            prop_assert_eq!(c.is_raw_output(), !last);
            prop_assert_eq!(c.is_color_enabled(), last);
        }

        #[test]
        fn size_defaults_are_two_thirds(w in 0usize..10_000, h in 0usize..10_000) {
            let c = ctx();
            c.recalc_terminal_size_with(w, h);
            let d = c.size_defaults();
            prop_assert_eq!(d.bar_chart_width, w * 2 / 3);
            prop_assert_eq!(d.bar_chart_height, h * 2 / 3);
            prop_assert_eq!(d.paragraph_max_width, w);
        }
    }
}
