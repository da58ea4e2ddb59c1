//! Graph model, construction and traversal

pub mod builder;
pub mod traversal;

#[cfg(test)]
mod tests;

pub use builder::GraphBuilder;
pub use traversal::{count_links, run, QueueMode, TraversalOptions, TraversalReport, WorkerReport};

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// Dense index of a node inside its graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A graph node. Immutable once the graph is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub name: String,
    pub links: Vec<String>,
    pub edges: Vec<NodeId>,
}

/// Read-only view the traversal needs from a graph
pub trait LinkGraph {
    /// Link symbols attached to a node
    fn links(&self, id: NodeId) -> &[String];

    /// Outgoing edge targets of a node
    fn edges(&self, id: NodeId) -> &[NodeId];

    /// Ordered entry points, one traversal worker each
    fn entry_points(&self) -> &[NodeId];

    /// Node name (for logs and reports)
    fn name(&self, id: NodeId) -> &str;

    fn node_count(&self) -> usize;
}

/// Arena of nodes deduplicated by name, plus entry points
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    entry_points: Vec<NodeId>,
}

impl Graph {
    pub(crate) fn from_parts(nodes: Vec<Node>, index: HashMap<String, NodeId>, entry_points: Vec<NodeId>) -> Self {
        Self { nodes, index, entry_points }
    }

    /// Get a node by ID
    ///
    /// Panics if `id` does not belong to this graph.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look a node up by name
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::from_index(i), node))
    }

    /// Sequential BFS over everything reachable from `start`.
    ///
    /// Returns each reachable node once, in visiting order.
    pub fn reachable_from(&self, start: &[NodeId]) -> Vec<NodeId> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from_iter(start.iter().copied());
        let mut result = Vec::new();

        while let Some(id) = queue.pop_front() {
            if !visited.insert(id) {
                continue;
            }
            result.push(id);

            for &next in self.edges(id) {
                if !visited.contains(&next) {
                    queue.push_back(next);
                }
            }
        }

        result
    }
}

impl LinkGraph for Graph {
    fn links(&self, id: NodeId) -> &[String] {
        &self.node(id).links
    }

    fn edges(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).edges
    }

    fn entry_points(&self) -> &[NodeId] {
        &self.entry_points
    }

    fn name(&self, id: NodeId) -> &str {
        &self.node(id).name
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
