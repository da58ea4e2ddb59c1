//! Error types for graph construction and traversal

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Node '{node}' has an edge to undefined node '{target}'")]
    UnknownEdgeTarget { node: String, target: String },

    #[error("Entry point references undefined node '{0}'")]
    UnknownEntryPoint(String),

    #[error("Pop called on an empty queue")]
    EmptyQueue,

    #[error("Traversal worker {worker} panicked")]
    WorkerPanicked { worker: usize },

    #[error("Failed to spawn traversal worker {worker}: {source}")]
    WorkerSpawn {
        worker: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
