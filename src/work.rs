//! Work unit abstraction
//!
//! The scheduler knows nothing about what a unit of work does. It only calls
//! [`WorkUnit::perform`] once per iteration and hands the result to its
//! failure policy.

use thiserror::Error;

/// Errors a work unit may report back to the scheduler
#[derive(Error, Debug)]
pub enum WorkError {
    #[error("work unit failed: {0}")]
    Failed(String),

    #[error("work unit IO failed: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// One unit of periodic work
pub trait WorkUnit {
    fn perform(&mut self) -> Result<(), WorkError>;
}

/// A [`WorkUnit`] wrapping a closure, see [`from_fn`]
pub struct FnWork<F> {
    f: F,
}

impl<F> WorkUnit for FnWork<F>
where
    F: FnMut() -> Result<(), WorkError>,
{
    fn perform(&mut self) -> Result<(), WorkError> {
        (self.f)()
    }
}

/// Build a work unit from a closure
pub fn from_fn<F>(f: F) -> FnWork<F>
where
    F: FnMut() -> Result<(), WorkError>,
{
    FnWork { f }
}

/// A work unit that does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Idle;

impl WorkUnit for Idle {
    fn perform(&mut self) -> Result<(), WorkError> {
        Ok(())
    }
}

impl<W: WorkUnit + ?Sized> WorkUnit for Box<W> {
    fn perform(&mut self) -> Result<(), WorkError> {
        (**self).perform()
    }
}
