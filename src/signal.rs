//! Signal handling module
//!
//! This module wires SIGTERM and SIGINT to a scheduler's stop flag using the
//! signal-hook crate. The flag is set inside the signal handler itself, so the
//! stop transition never waits on anything else. A dedicated thread receives
//! the same signals afterwards and does the logging, outside signal context.

use signal_hook::consts::signal::{SIGINT, SIGTERM};
use signal_hook::iterator::{Handle, Signals};
use signal_hook::{flag, low_level, SigId};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::cancellation::StopHandle;
use crate::error::Result;

/// Signals treated as a request for graceful shutdown
pub const SHUTDOWN_SIGNALS: [i32; 2] = [SIGTERM, SIGINT];

/// Human-readable name for the shutdown signals
pub fn signal_name(signal: i32) -> &'static str {
    match signal {
        SIGTERM => "SIGTERM",
        SIGINT => "SIGINT",
        _ => "unknown",
    }
}

/// Installs shutdown signal handlers for a scheduler
pub struct SignalHandler {
    stop: StopHandle,
}

impl SignalHandler {
    pub fn new(stop: StopHandle) -> Self {
        Self { stop }
    }

    /// Register the handlers and start the logging thread.
    ///
    /// Handlers are active as soon as this returns. They stay registered until
    /// the returned [`SignalListener`] is shut down or dropped.
    pub fn start(&self) -> Result<SignalListener> {
        let mut registered = Vec::with_capacity(SHUTDOWN_SIGNALS.len());
        for signal in SHUTDOWN_SIGNALS {
            match flag::register(signal, Arc::clone(self.stop.flag())) {
                Ok(id) => registered.push(id),
                Err(e) => {
                    unregister_all(&registered);
                    return Err(e.into());
                }
            }
        }

        let signals = match Signals::new(SHUTDOWN_SIGNALS) {
            Ok(signals) => signals,
            Err(e) => {
                unregister_all(&registered);
                return Err(e.into());
            }
        };
        let handle = signals.handle();

        let thread = thread::Builder::new()
            .name("signal-logger".into())
            .spawn(move || log_signals(signals));

        let thread = match thread {
            Ok(thread) => thread,
            Err(e) => {
                handle.close();
                unregister_all(&registered);
                return Err(e.into());
            }
        };

        tracing::debug!("Shutdown handlers installed for SIGTERM and SIGINT");

        Ok(SignalListener {
            registered,
            handle,
            thread: Some(thread),
        })
    }
}

fn log_signals(mut signals: Signals) {
    let mut stopping = false;

    for signal in signals.forever() {
        if stopping {
            tracing::debug!("Received {} while already stopping", signal_name(signal));
            continue;
        }
        stopping = true;
        tracing::info!(
            "Received signal {} for graceful shutdown",
            signal_name(signal)
        );
        tracing::info!("Exiting...");
    }
}

fn unregister_all(ids: &[SigId]) {
    for id in ids {
        low_level::unregister(*id);
    }
}

/// Keeps the shutdown handlers installed while alive
pub struct SignalListener {
    registered: Vec<SigId>,
    handle: Handle,
    thread: Option<JoinHandle<()>>,
}

impl SignalListener {
    /// Remove the handlers and wait for the logging thread to finish
    pub fn shutdown(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        unregister_all(&self.registered);
        self.registered.clear();
        self.handle.close();

        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                tracing::warn!("Signal logging thread panicked");
            }
        }
    }
}

impl Drop for SignalListener {
    fn drop(&mut self) {
        self.teardown();
    }
}
