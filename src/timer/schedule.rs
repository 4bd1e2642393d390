use std::time::Duration;

/// The coarse delay broken into fine-grained sleep increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSchedule {
    interval: Duration,
    increments: u64,
}

impl PollSchedule {
    /// Plan `coarse / fine` increments of `fine` each.
    ///
    /// Any remainder of the division is dropped. A zero `fine` yields an empty
    /// schedule; config validation rejects that before a scheduler is built.
    pub fn new(coarse: Duration, fine: Duration) -> Self {
        let increments = if fine.is_zero() {
            0
        } else {
            (coarse.as_nanos() / fine.as_nanos()) as u64
        };

        PollSchedule {
            interval: fine,
            increments,
        }
    }

    /// Length of one sleep increment
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of sleeps in a full, uninterrupted wait
    pub fn increments(&self) -> u64 {
        self.increments
    }

    /// Total time slept by a full wait
    pub fn total(&self) -> Duration {
        u32::try_from(self.increments)
            .ok()
            .and_then(|n| self.interval.checked_mul(n))
            .unwrap_or(Duration::MAX)
    }
}
