//! linkcount - concurrent link counting over a configured directed graph
//!
//! # Architecture
//!
//! - **Graph**: immutable arena of nodes, built once from a [`GraphConfig`]
//! - **Shared state**: [`VisitedTracker`] (atomic claim) and [`LinkCounter`]
//! - **Traversal**: one BFS worker thread per entry point, joined before counts are read
//!
//! A node reachable from several entry points, or through several edges, is
//! counted exactly once. Cycles terminate.
//!
//! # Usage example
//!
//! ```
//! use linkcount::{GraphBuilder, GraphConfig, TraversalOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = GraphConfig::new()
//!     .node("one", "ABC", ["two", "three"])
//!     .node("two", "BBA", ["four"])
//!     .node("three", "DEF", Vec::<String>::new())
//!     .node("four", "FHHG", Vec::<String>::new())
//!     .entry("one");
//!
//! let graph = GraphBuilder::from_config(&config).build()?;
//! let report = linkcount::run(&graph, &TraversalOptions::default())?;
//!
//! assert_eq!(report.counts.get("B"), 3);
//! println!("{}", report.counts);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod shared;

pub use config::{GraphConfig, NodeConfig};
pub use error::{GraphError, Result};
pub use graph::{
    count_links, run, Graph, GraphBuilder, LinkGraph, Node, NodeId, QueueMode, TraversalOptions,
    TraversalReport, WorkerReport,
};
pub use shared::{LinkCounter, LinkCounts, SharedState, VisitedTracker, WorkQueue};
