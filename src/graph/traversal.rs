//! Concurrent multi-entry BFS with link counting
//!
//! One worker thread per entry point. Workers share a [`VisitedTracker`] and a
//! [`LinkCounter`]; a node is claimed at pop time, so it may sit in queues
//! several times but its links are counted by exactly one worker.

use std::thread;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::shared::{LinkCounter, LinkCounts, SharedState, VisitedTracker, WorkQueue};

use super::{LinkGraph, NodeId};

/// How work queues are distributed between workers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueMode {
    /// Each worker owns a queue seeded with its own entry point
    #[default]
    PerWorker,
    /// All workers push to and pop from one queue
    Shared,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TraversalOptions {
    #[serde(default)]
    pub queue_mode: QueueMode,
}

/// What a single worker did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerReport {
    pub worker: usize,
    pub entry: String,
    /// Nodes this worker claimed and counted
    pub claimed: usize,
    /// Pops that found the node already claimed
    pub skipped: usize,
    /// Link symbols counted by this worker
    pub links: usize,
}

/// Result of a full traversal
#[derive(Debug, Clone, Serialize)]
pub struct TraversalReport {
    pub counts: LinkCounts,
    pub workers: Vec<WorkerReport>,
    /// Distinct nodes visited across all workers
    pub visited: usize,
}

/// BFS from `entry`, counting links of every node this worker claims.
///
/// `queue` may be private to this worker or shared with others; the loop only
/// ever pops with the atomic `try_pop`, so both work. Runs until the queue is
/// empty.
pub fn count_links<G>(
    graph: &G,
    shared: &SharedState,
    queue: &WorkQueue<NodeId>,
    entry: NodeId,
    worker: usize,
) -> WorkerReport
where
    G: LinkGraph + ?Sized,
{
    let mut report = WorkerReport {
        worker,
        entry: graph.name(entry).to_string(),
        claimed: 0,
        skipped: 0,
        links: 0,
    };
    tracing::debug!(worker, entry = %report.entry, "worker started");

    queue.push(entry);
    while let Some(node) = queue.try_pop() {
        if !shared.tracker.try_claim(node) {
            report.skipped += 1;
            continue;
        }
        report.claimed += 1;
        tracing::trace!(worker, node = graph.name(node), "claimed");

        for symbol in graph.links(node) {
            shared.counter.add(symbol);
            report.links += 1;
        }

        // Visitation is filtered at pop time, not here
        for &next in graph.edges(node) {
            queue.push(next);
        }
    }

    tracing::debug!(
        worker,
        claimed = report.claimed,
        skipped = report.skipped,
        "worker finished"
    );
    report
}

/// Run one worker per entry point and wait for all of them.
///
/// Counts are read only after every worker has been joined.
pub fn run<G>(graph: &G, options: &TraversalOptions) -> Result<TraversalReport>
where
    G: LinkGraph + Sync + ?Sized,
{
    let entries = graph.entry_points();
    let shared = SharedState {
        tracker: VisitedTracker::with_capacity(graph.node_count()),
        counter: LinkCounter::new(),
    };
    let shared_queue = WorkQueue::new();

    let workers = thread::scope(|s| -> Result<Vec<WorkerReport>> {
        let mut handles = Vec::with_capacity(entries.len());
        for (worker, &entry) in entries.iter().enumerate() {
            let shared = &shared;
            let shared_queue = &shared_queue;
            let mode = options.queue_mode;
            let handle = thread::Builder::new()
                .name(format!("linkcount-worker-{}", worker))
                .spawn_scoped(s, move || match mode {
                    QueueMode::PerWorker => {
                        let queue = WorkQueue::new();
                        count_links(graph, shared, &queue, entry, worker)
                    }
                    QueueMode::Shared => count_links(graph, shared, shared_queue, entry, worker),
                })
                .map_err(|source| GraphError::WorkerSpawn { worker, source })?;
            handles.push(handle);
        }

        // Join all handles first, then map panics
        let joined: Vec<_> = handles.into_iter().map(|h| h.join()).collect();
        joined
            .into_iter()
            .enumerate()
            .map(|(worker, r)| r.map_err(|_| GraphError::WorkerPanicked { worker }))
            .collect()
    })?;

    let counts = shared.counter.snapshot();
    let visited = shared.tracker.len();
    tracing::info!(
        "Traversal complete: {} workers, {} nodes visited, {} links counted",
        workers.len(),
        visited,
        counts.total()
    );

    Ok(TraversalReport { counts, workers, visited })
}
