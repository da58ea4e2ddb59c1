//! Graph construction from a [`GraphConfig`]
//!
//! Nodes are created as shells first (one per configured name, memoized in the
//! name index), then edges are resolved against that index. Cyclic and forward
//! references therefore reuse the existing node instead of recursing.

use std::collections::HashMap;

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};

use super::{Graph, Node, NodeId};

/// Builds an immutable [`Graph`] from a configuration
pub struct GraphBuilder<'a> {
    config: &'a GraphConfig,
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
}

impl<'a> GraphBuilder<'a> {
    pub fn from_config(config: &'a GraphConfig) -> Self {
        Self {
            config,
            nodes: Vec::with_capacity(config.nodes.len()),
            index: HashMap::with_capacity(config.nodes.len()),
        }
    }

    pub fn build(mut self) -> Result<Graph> {
        let config = self.config;

        // Shells, in sorted name order (BTreeMap) so ids are stable across runs
        for (name, node_config) in &config.nodes {
            self.node_shell(name, &node_config.links);
        }

        for (name, node_config) in &config.nodes {
            let id = self.index[name.as_str()];
            let mut edges = Vec::with_capacity(node_config.edges.len());
            for target in &node_config.edges {
                let target_id = self.index.get(target.as_str()).copied().ok_or_else(|| {
                    GraphError::UnknownEdgeTarget {
                        node: name.clone(),
                        target: target.clone(),
                    }
                })?;
                edges.push(target_id);
            }
            self.nodes[id.index()].edges = edges;
        }

        let entry_points = config
            .entry_points
            .iter()
            .map(|name| {
                self.index
                    .get(name.as_str())
                    .copied()
                    .ok_or_else(|| GraphError::UnknownEntryPoint(name.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::info!(
            "Built graph: {} nodes, {} edges, {} entry points",
            self.nodes.len(),
            self.nodes.iter().map(|n| n.edges.len()).sum::<usize>(),
            entry_points.len()
        );

        Ok(Graph::from_parts(self.nodes, self.index, entry_points))
    }

    /// Returns the existing node for `name`, or registers a new edgeless one
    fn node_shell(&mut self, name: &str, links: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }

        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            name: name.to_string(),
            links: split_links(links),
            edges: Vec::new(),
        });
        self.index.insert(name.to_string(), id);
        id
    }
}

/// One link symbol per character
fn split_links(links: &str) -> Vec<String> {
    links.chars().map(String::from).collect()
}
