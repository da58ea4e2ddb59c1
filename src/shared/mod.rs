//! Synchronized state shared by traversal workers
//!
//! Each type owns its lock privately and exposes only single, atomic operations.

pub mod counter;
pub mod queue;
pub mod tracker;

pub use counter::{LinkCounter, LinkCounts};
pub use queue::WorkQueue;
pub use tracker::VisitedTracker;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Tracker and counter shared by every worker of one traversal
#[derive(Debug, Default)]
pub struct SharedState {
    pub tracker: VisitedTracker,
    pub counter: LinkCounter,
}

/// Lock ignoring poisoning. Every critical section in this module is a single
/// collection call, so a panicking holder cannot leave the data half-updated.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
