//! Signal-triggered terminal restorer.
//!
//! A printer may hide the cursor (progress animations do). If the process
//! is then interrupted the shell is left without one. The restorer waits on
//! a background thread for SIGINT / SIGTERM, shows the cursor, drops its own
//! subscription and re-raises the signal so the default disposition (usually
//! termination) still happens.
//!
//! ```text
//!   Armed ──first signal──▶ show cursor ─▶ cancel subscription ─▶ re-raise ─▶ Fired
//!                                                                   │
//!                                              lookup/deliver error ┴─▶ report, Fired
//! ```
//!
//! There is no restart: once fired the thread is gone and later signals hit
//! the default handler.

use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    thread::{self, JoinHandle},
};

use crate::{
    core::error::RestoreError,
    render::cursor::{CursorControl, TerminalCursor},
};

#[cfg(unix)]
pub use os::{HANDLED_SIGNALS, OsRelay, OsSignals};

// --- Seams ---

/// Where signals come from. The OS implementation blocks on signal-hook.
pub trait SignalSource {
    /// Block until the next signal; `None` once the source is closed.
    fn wait(&mut self) -> Option<i32>;
    /// Stop intercepting. Later deliveries reach the default handler.
    fn cancel(self);
}

/// Locates the current process and hands it a signal.
pub trait SignalRelay: Send + 'static {
    fn current_process(&self) -> Result<u32, RestoreError>;
    fn deliver(&self, pid: u32, signal: i32) -> Result<(), RestoreError>;
}

// --- State machine ---

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Armed,
    Fired,
}

/// How the handler thread ended.
#[derive(Debug)]
pub enum Outcome {
    /// Cursor shown and the signal handed back to the process.
    Reraised(i32),
    /// Cursor shown but the signal could not be re-delivered. The process
    /// keeps running.
    Failed(RestoreError),
    /// The source closed before any signal arrived.
    Closed,
    /// The handler thread panicked.
    Panicked,
}

/// Single-use token shared between the handler and its handle.
#[derive(Clone, Debug)]
struct Token(Arc<AtomicBool>);

impl Token {
    fn armed() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    fn mark_fired(&self) {
        self.0.store(false, Ordering::SeqCst);
    }

    fn state(&self) -> State {
        if self.0.load(Ordering::SeqCst) {
            State::Armed
        } else {
            State::Fired
        }
    }
}

pub struct Restorer<C, R> {
    cursor: C,
    relay: R,
    token: Token,
}

impl<R: SignalRelay> Restorer<TerminalCursor, R> {
    pub fn with_relay(relay: R) -> Self {
        Self::new(TerminalCursor, relay)
    }
}

impl<C: CursorControl, R: SignalRelay> Restorer<C, R> {
    pub fn new(cursor: C, relay: R) -> Self {
        Self {
            cursor,
            relay,
            token: Token::armed(),
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.token.state()
    }

    /// Wait for the first signal from `source` and handle it.
    ///
    /// Consumes at most one signal; anything queued behind it is left to
    /// the source, which has been cancelled by then.
    pub fn run<S: SignalSource>(mut self, mut source: S) -> Outcome {
        match source.wait() {
            Some(signal) => self.fire(signal, source),
            None => {
                tracing::debug!("signal source closed before any signal");
                Outcome::Closed
            }
        }
    }

    fn fire<S: SignalSource>(&mut self, signal: i32, source: S) -> Outcome {
        self.token.mark_fired();
        tracing::info!(signal, "restoring cursor before re-raising");

        // No precondition on prior cursor state: showing twice is harmless.
        if let Err(e) = self.cursor.show() {
            tracing::warn!(error = %e, "could not show cursor");
        }

        source.cancel();

        match self.reraise(signal) {
            Ok(()) => Outcome::Reraised(signal),
            Err(err) => {
                eprintln!("{err}");
                tracing::error!(signal, error = %err, "signal re-delivery failed; process left running");
                Outcome::Failed(err)
            }
        }
    }

    fn reraise(&self, signal: i32) -> Result<(), RestoreError> {
        let pid = self.relay.current_process()?;
        self.relay.deliver(pid, signal)
    }
}

// --- Background thread ---

/// Handle to an installed restorer. Exposes the state, never cancellation.
pub struct RestorerHandle {
    token: Token,
    join: JoinHandle<Outcome>,
}

impl RestorerHandle {
    #[inline]
    pub fn state(&self) -> State {
        self.token.state()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }

    /// Block until the handler thread exits.
    pub fn join(self) -> Outcome {
        self.join.join().unwrap_or(Outcome::Panicked)
    }
}

/// Run `restorer` against `source` on a dedicated thread.
///
/// `source` must already be subscribed so nothing delivered before the
/// thread starts is lost.
pub fn spawn<C, R, S>(restorer: Restorer<C, R>, source: S) -> Result<RestorerHandle, RestoreError>
where
    C: CursorControl,
    R: SignalRelay,
    S: SignalSource + Send + 'static,
{
    let token = restorer.token.clone();
    let join = thread::Builder::new()
        .name("termgloss-restorer".into())
        .spawn(move || restorer.run(source))
        .map_err(RestoreError::Install)?;
    Ok(RestorerHandle { token, join })
}

/// Subscribe to SIGINT + SIGTERM and restore the stdout cursor on the first
/// one.
///
/// Nothing is armed at load time: a host that never calls this gets no
/// cursor restoration. Call it once, early in `main`, before any printer
/// hides the cursor.
#[cfg(unix)]
pub fn install() -> Result<RestorerHandle, RestoreError> {
    install_with(TerminalCursor, OsRelay)
}

/// [`install`] with custom cursor / relay seams.
#[cfg(unix)]
pub fn install_with<C, R>(cursor: C, relay: R) -> Result<RestorerHandle, RestoreError>
where
    C: CursorControl,
    R: SignalRelay,
{
    let signals = OsSignals::new()?;
    tracing::debug!(signals = ?HANDLED_SIGNALS, "restorer armed");
    spawn(Restorer::new(cursor, relay), signals)
}

#[cfg(not(unix))]
pub fn install() -> Result<RestorerHandle, RestoreError> {
    Err(RestoreError::Unsupported)
}

#[cfg(unix)]
mod os {
    use std::{
        io,
        sync::{
            Arc,
            atomic::{AtomicBool, Ordering},
        },
    };

    use signal_hook::{
        consts::signal::{SIGINT, SIGTERM},
        flag,
        iterator::Signals,
        low_level,
    };

    use super::{RestoreError, SignalRelay, SignalSource};

    pub const HANDLED_SIGNALS: [i32; 2] = [SIGINT, SIGTERM];

    /// signal-hook subscription for [`HANDLED_SIGNALS`].
    ///
    /// signal-hook never uninstalls its process-wide handler, and an empty
    /// handler swallows the signal. A conditional default action is
    /// registered next to the iterator and switched on by `cancel`, so later
    /// deliveries get the default disposition.
    pub struct OsSignals {
        signals: Signals,
        fall_through: Arc<AtomicBool>,
    }

    impl OsSignals {
        pub fn new() -> Result<Self, RestoreError> {
            let fall_through = Arc::new(AtomicBool::new(false));
            for sig in HANDLED_SIGNALS {
                flag::register_conditional_default(sig, Arc::clone(&fall_through))
                    .map_err(RestoreError::Install)?;
            }
            let signals = Signals::new(HANDLED_SIGNALS).map_err(RestoreError::Install)?;
            Ok(Self {
                signals,
                fall_through,
            })
        }
    }

    impl SignalSource for OsSignals {
        fn wait(&mut self) -> Option<i32> {
            self.signals.forever().next()
        }

        fn cancel(self) {
            self.fall_through.store(true, Ordering::SeqCst);
            self.signals.handle().close();
        }
    }

    /// Re-raises through signal-hook's default-disposition emulation, so the
    /// signal is not swallowed by the (now empty) registered handler.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct OsRelay;

    impl SignalRelay for OsRelay {
        fn current_process(&self) -> Result<u32, RestoreError> {
            Ok(std::process::id())
        }

        fn deliver(&self, pid: u32, signal: i32) -> Result<(), RestoreError> {
            if pid != std::process::id() {
                return Err(RestoreError::Deliver {
                    signal,
                    source: io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("can only re-raise in the current process, not {pid}"),
                    ),
                });
            }
            low_level::emulate_default_handler(signal)
                .map_err(|source| RestoreError::Deliver { signal, source })
        }
    }
}
