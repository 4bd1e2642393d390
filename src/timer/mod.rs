//! Timing primitives for the run loop
//!
//! The loop never blocks for the full coarse delay at once. It walks a
//! [`PollSchedule`] of short sleeps through a [`Sleeper`], which is the only
//! place the loop suspends.

use std::time::Duration;

pub mod schedule;

pub use schedule::PollSchedule;

/// Blocks the calling thread for a duration
pub trait Sleeper: Send {
    fn sleep(&mut self, duration: Duration);
}

/// A [`Sleeper`] backed by `std::thread::sleep`
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

impl<S: Sleeper + ?Sized> Sleeper for Box<S> {
    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn thread_sleeper_blocks_for_at_least_duration() {
        let mut sleeper = ThreadSleeper;
        let start = Instant::now();
        sleeper.sleep(Duration::from_millis(20));
        assert!(start.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn boxed_sleeper_delegates() {
        struct Counting(u32);
        impl Sleeper for Counting {
            fn sleep(&mut self, _duration: Duration) {
                self.0 += 1;
            }
        }

        let mut boxed: Box<Counting> = Box::new(Counting(0));
        boxed.sleep(Duration::from_secs(1));
        boxed.sleep(Duration::from_secs(1));
        assert_eq!(boxed.0, 2);
    }
}
