//! Cooperative stop signalling
//!
//! A [`StopToken`] is the single piece of state shared between the run loop and
//! whoever asks it to stop. It only ever moves from "running" to "stopped".

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A set-once flag used to request a graceful stop
#[derive(Clone, Debug)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

/// Handles are plain clones of the token; the alias documents intent at call sites.
pub type StopHandle = StopToken;

impl StopToken {
    /// Create a new token in the running state
    pub fn new() -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request a stop.
    ///
    /// Returns `true` only for the call that performed the transition, so that
    /// concurrent callers can agree on who logs the shutdown.
    pub fn request_stop(&self) -> bool {
        !self.stopped.swap(true, Ordering::SeqCst)
    }

    /// Check if a stop has been requested
    pub fn is_stop_requested(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }

    /// The raw flag, for registering async-signal-safe handlers against it.
    pub(crate) fn flag(&self) -> &Arc<AtomicBool> {
        &self.stopped
    }
}

impl Default for StopToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    #[test]
    fn starts_running() {
        let token = StopToken::new();
        assert!(!token.is_stop_requested());
    }

    #[test]
    fn stop_is_visible_through_clones() {
        let token = StopToken::new();
        let handle = token.clone();

        assert!(handle.request_stop());
        assert!(token.is_stop_requested());
    }

    #[test]
    fn second_request_reports_no_transition() {
        let token = StopToken::new();
        assert!(token.request_stop());
        assert!(!token.request_stop());
        assert!(token.is_stop_requested());
    }

    #[test]
    fn concurrent_requests_transition_once() {
        let token = StopToken::new();
        let transitions = Arc::new(AtomicUsize::new(0));

        let threads: Vec<_> = (0..8)
            .map(|_| {
                let token = token.clone();
                let transitions = transitions.clone();
                thread::spawn(move || {
                    if token.request_stop() {
                        transitions.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();

        for t in threads {
            t.join().unwrap();
        }

        assert_eq!(transitions.load(Ordering::SeqCst), 1);
        assert!(token.is_stop_requested());
    }
}
