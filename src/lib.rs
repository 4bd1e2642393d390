//! graceful-worker: a periodic background worker with graceful shutdown
//!
//! The crate runs one unit of work on a fixed cadence and stops cleanly when
//! the process receives SIGTERM or SIGINT:
//! - The coarse delay between iterations is waited out in short sleeps
//! - A shared stop flag is checked around every sleep
//! - Signal handlers only set that flag; logging happens on its own thread
//!
//! Shutdown latency is bounded by one fine interval plus whatever is left of
//! an in-flight work unit, which is never interrupted.
//!
//! # Example
//!
//! ```rust,no_run
//! use graceful_worker::{config::SchedulerConfig, signal::SignalHandler, work, Scheduler};
//! use std::time::Duration;
//!
//! # fn main() -> Result<(), graceful_worker::error::Error> {
//! let config = SchedulerConfig::default().with_coarse_delay(Duration::from_secs(30));
//! let mut scheduler = Scheduler::new(config, work::from_fn(|| {
//!     // Check the upstream status here
//!     Ok(())
//! }))?;
//!
//! let listener = SignalHandler::new(scheduler.stop_handle()).start()?;
//! let summary = scheduler.run();
//! listener.shutdown();
//!
//! println!("ran {} iterations", summary.iterations);
//! # Ok(())
//! # }
//! ```

pub mod cancellation;
pub mod config;
pub mod scheduler;
pub mod signal;
pub mod timer;
pub mod work;

// Re-export core types
pub use cancellation::{StopHandle, StopToken};
pub use config::{FailurePolicy, SchedulerConfig, DEFAULT_COARSE_DELAY, DEFAULT_FINE_INTERVAL};
pub use scheduler::{RunSummary, Scheduler, StopReason};
pub use signal::{SignalHandler, SignalListener};
pub use timer::{PollSchedule, Sleeper, ThreadSleeper};
pub use work::{from_fn, Idle, WorkError, WorkUnit};

/// Error types for the scheduler
pub mod error {
    use std::time::Duration;
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum Error {
        #[error("Fine poll interval must be greater than zero")]
        ZeroFineInterval,

        #[error("Fine poll interval {fine:?} exceeds coarse delay {coarse:?}")]
        FineIntervalExceedsDelay { fine: Duration, coarse: Duration },

        #[error("Signal handler setup failed: {0}")]
        SignalSetup(#[from] std::io::Error),
    }

    pub type Result<T> = std::result::Result<T, Error>;
}
