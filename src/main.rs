//! Worker binary
//!
//! Runs a heartbeat on the default two-minute cadence until SIGTERM or SIGINT.

use graceful_worker::{signal::SignalHandler, work, Scheduler, SchedulerConfig};
use tracing::{debug, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let mut beats = 0u64;
    let heartbeat = work::from_fn(move || {
        beats += 1;
        debug!("Heartbeat #{}", beats);
        Ok(())
    });

    let mut scheduler = Scheduler::new(SchedulerConfig::default(), heartbeat)?;
    let listener = SignalHandler::new(scheduler.stop_handle()).start()?;

    let summary = scheduler.run();
    listener.shutdown();

    info!(
        "Worker exited cleanly after {} iterations",
        summary.iterations
    );
    Ok(())
}
