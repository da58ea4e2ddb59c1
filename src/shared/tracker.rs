//! Visited set shared by all workers

use std::collections::HashSet;
use std::sync::Mutex;

use crate::graph::NodeId;

use super::lock;

/// Records which nodes have been claimed for processing.
///
/// Claiming is a single test-and-insert under one lock, so when several workers
/// race on the same node exactly one of them wins.
#[derive(Debug, Default)]
pub struct VisitedTracker {
    visited: Mutex<HashSet<NodeId>>,
}

impl VisitedTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            visited: Mutex::new(HashSet::with_capacity(capacity)),
        }
    }

    /// Claim `id` for the caller. Returns `false` if it was already claimed.
    pub fn try_claim(&self, id: NodeId) -> bool {
        lock(&self.visited).insert(id)
    }

    /// Whether `id` has been claimed. Only a snapshot; never use it to decide
    /// who processes a node.
    pub fn is_visited(&self, id: NodeId) -> bool {
        lock(&self.visited).contains(&id)
    }

    /// Number of claimed nodes
    pub fn len(&self) -> usize {
        lock(&self.visited).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.visited).is_empty()
    }
}
