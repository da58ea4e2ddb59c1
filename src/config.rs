//! Declarative graph configuration
//!
//! A configuration names every node once, together with its link string and
//! the names of its edge targets, plus the ordered list of entry points:
//!
//! ```json
//! {
//!   "nodes": {
//!     "one": { "links": "ABC", "edges": ["two"] },
//!     "two": { "links": "BBA" }
//!   },
//!   "entry_points": ["one"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Configuration of a single node
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Link symbols, one per character
    #[serde(default)]
    pub links: String,

    /// Names of outgoing edge targets, in order
    #[serde(default)]
    pub edges: Vec<String>,
}

/// Full graph configuration: node definitions keyed by name plus entry points
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub nodes: BTreeMap<String, NodeConfig>,

    #[serde(default)]
    pub entry_points: Vec<String>,
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a node definition
    pub fn node<I, S>(mut self, name: impl Into<String>, links: impl Into<String>, edges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.insert(
            name.into(),
            NodeConfig {
                links: links.into(),
                edges: edges.into_iter().map(Into::into).collect(),
            },
        );
        self
    }

    /// Append an entry point
    pub fn entry(mut self, name: impl Into<String>) -> Self {
        self.entry_points.push(name.into());
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON configuration from disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!("Loaded graph config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Built-in nine node graph with two entry points.
    ///
    /// Every node is reachable; `three` and `two` are shared between the
    /// `one` and `nine` entry points, and `nine -> three -> six -> nine` is a cycle.
    pub fn sample() -> Self {
        Self::new()
            .node("one", "ABC", ["two", "three"])
            .node("two", "BBA", ["four"])
            .node("three", "DEF", ["five", "six", "seven"])
            .node("four", "FHHG", Vec::<String>::new())
            .node("five", "AAA", ["seven", "eight"])
            .node("six", "AAA", ["eight", "nine"])
            .node("seven", "JBK", Vec::<String>::new())
            .node("eight", "BBB", ["two"])
            .node("nine", "KVOSD", ["three"])
            .entry("one")
            .entry("nine")
    }
}
