//! Shutdown-aware scheduler
//!
//! Runs a [`WorkUnit`] on a fixed cadence. Between invocations the coarse delay
//! is waited out as a series of fine-grained sleeps, and the stop flag is
//! checked around every one of them. A stop request is therefore observed
//! within one fine interval, plus whatever remains of an in-flight work unit.

use tracing::{debug, error, info};

use crate::cancellation::{StopHandle, StopToken};
use crate::config::{FailurePolicy, SchedulerConfig};
use crate::error::Result;
use crate::timer::{PollSchedule, Sleeper, ThreadSleeper};
use crate::work::WorkUnit;

/// Why [`Scheduler::run`] returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The stop flag was observed
    StopRequested,
    /// A work unit failed under [`FailurePolicy::Stop`]
    WorkFailed,
}

/// What happened during one call to [`Scheduler::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Work invocations, successful or not
    pub iterations: u64,
    /// Work invocations that returned an error
    pub failures: u64,
    pub reason: StopReason,
}

/// Periodic work loop with cooperative, signal-friendly shutdown
pub struct Scheduler<W, S = ThreadSleeper> {
    config: SchedulerConfig,
    schedule: PollSchedule,
    stop: StopToken,
    work: W,
    sleeper: S,
}

impl<W: WorkUnit> Scheduler<W, ThreadSleeper> {
    /// Create a scheduler that sleeps in real time
    pub fn new(config: SchedulerConfig, work: W) -> Result<Self> {
        Self::with_sleeper(config, work, ThreadSleeper)
    }
}

impl<W: WorkUnit, S: Sleeper> Scheduler<W, S> {
    /// Create a scheduler with a custom [`Sleeper`]
    pub fn with_sleeper(config: SchedulerConfig, work: W, sleeper: S) -> Result<Self> {
        config.validate()?;
        let schedule = PollSchedule::new(config.coarse_delay, config.fine_interval);

        Ok(Self {
            config,
            schedule,
            stop: StopToken::new(),
            work,
            sleeper,
        })
    }

    /// A cloneable handle that can stop this scheduler from any thread
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Request a graceful stop. Idempotent.
    pub fn request_stop(&self) -> bool {
        self.stop.request_stop()
    }

    pub fn is_stop_requested(&self) -> bool {
        self.stop.is_stop_requested()
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn schedule(&self) -> PollSchedule {
        self.schedule
    }

    /// Run until a stop is requested.
    ///
    /// Blocks the calling thread. Work in progress when the stop arrives is
    /// allowed to finish; no new work starts afterwards.
    pub fn run(&mut self) -> RunSummary {
        info!(
            "Starting worker service (delay {:?}, poll {:?})...",
            self.config.coarse_delay, self.config.fine_interval
        );

        let mut iterations = 0u64;
        let mut failures = 0u64;
        let mut reason = StopReason::StopRequested;

        while !self.stop.is_stop_requested() {
            iterations += 1;
            if let Err(e) = self.work.perform() {
                failures += 1;
                error!("Work unit failed on iteration {}: {}", iterations, e);
                if self.config.failure_policy == FailurePolicy::Stop {
                    reason = StopReason::WorkFailed;
                    break;
                }
            }

            if self.wait_out_delay() {
                break;
            }
        }

        info!(
            "Scheduler stopped after {} iterations ({} failed)",
            iterations, failures
        );

        RunSummary {
            iterations,
            failures,
            reason,
        }
    }

    /// Sleep through the coarse delay in fine increments.
    ///
    /// Returns `true` if a stop was requested, either during the wait or by the
    /// time it completed.
    fn wait_out_delay(&mut self) -> bool {
        let interval = self.schedule.interval();

        for _ in 0..self.schedule.increments() {
            if self.stop.is_stop_requested() {
                debug!("Stop observed during delay");
                return true;
            }
            self.sleeper.sleep(interval);
        }

        self.stop.is_stop_requested()
    }
}
