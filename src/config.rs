//! Configuration for the scheduler
//!
//! The timing constants are the only tunables. A smaller fine interval gives a
//! more responsive shutdown at the cost of more wake-ups, while a larger one
//! wakes less often but may delay shutdown by up to one interval.

use std::time::Duration;

use crate::error::{Error, Result};

/// Default target wait between successive work invocations
pub const DEFAULT_COARSE_DELAY: Duration = Duration::from_secs(120);

/// Default granularity at which the stop flag is re-checked while waiting
pub const DEFAULT_FINE_INTERVAL: Duration = Duration::from_secs(1);

/// What the scheduler does when a work unit returns an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Log the failure and keep the normal cadence
    #[default]
    LogAndContinue,
    /// Log the failure and leave the run loop
    Stop,
}

/// Scheduler settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub coarse_delay: Duration,
    pub fine_interval: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            coarse_delay: DEFAULT_COARSE_DELAY,
            fine_interval: DEFAULT_FINE_INTERVAL,
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl SchedulerConfig {
    pub fn with_coarse_delay(mut self, delay: Duration) -> Self {
        self.coarse_delay = delay;
        self
    }

    pub fn with_fine_interval(mut self, interval: Duration) -> Self {
        self.fine_interval = interval;
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Reject settings that would make the wait degenerate.
    ///
    /// A fine interval longer than the coarse delay yields zero sleep
    /// increments, which turns the loop into a busy spin.
    pub fn validate(&self) -> Result<()> {
        if self.fine_interval.is_zero() {
            return Err(Error::ZeroFineInterval);
        }
        if self.fine_interval > self.coarse_delay {
            return Err(Error::FineIntervalExceedsDelay {
                fine: self.fine_interval,
                coarse: self.coarse_delay,
            });
        }
        Ok(())
    }
}
