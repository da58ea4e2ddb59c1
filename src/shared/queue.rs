//! Thread-safe FIFO work queue

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{GraphError, Result};

use super::lock;

/// FIFO queue of pending items. No deduplication; the same item may be queued
/// any number of times.
#[derive(Debug)]
pub struct WorkQueue<T> {
    items: Mutex<VecDeque<T>>,
}

impl<T> WorkQueue<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn push(&self, item: T) {
        lock(&self.items).push_back(item);
    }

    /// Remove the earliest pushed item.
    ///
    /// Calling this on an empty queue is a caller bug and fails with
    /// [`GraphError::EmptyQueue`]. Only pair it with [`is_empty`](Self::is_empty)
    /// when no other thread pops from the same queue; otherwise use
    /// [`try_pop`](Self::try_pop).
    pub fn pop(&self) -> Result<T> {
        lock(&self.items).pop_front().ok_or(GraphError::EmptyQueue)
    }

    /// Check-and-pop under a single lock acquisition
    pub fn try_pop(&self) -> Option<T> {
        lock(&self.items).pop_front()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.items).is_empty()
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }
}

impl<T> Default for WorkQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
