//! Link symbol counter

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Mutex;

use serde::Serialize;

use super::lock;

/// Shared `symbol -> count` aggregator
#[derive(Debug, Default)]
pub struct LinkCounter {
    counts: Mutex<HashMap<String, u64>>,
}

impl LinkCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `symbol`, starting from zero if unseen
    pub fn add(&self, symbol: &str) {
        let mut counts = lock(&self.counts);
        match counts.get_mut(symbol) {
            Some(count) => *count += 1,
            None => {
                counts.insert(symbol.to_string(), 1);
            }
        }
    }

    /// Copy of the current totals. Complete once every worker has finished.
    pub fn snapshot(&self) -> LinkCounts {
        let counts = lock(&self.counts);
        LinkCounts {
            counts: counts.iter().map(|(k, &v)| (k.clone(), v)).collect(),
        }
    }
}

/// Final link tally, ordered by symbol
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkCounts {
    counts: BTreeMap<String, u64>,
}

impl LinkCounts {
    /// Count for `symbol`, zero if it was never seen
    pub fn get(&self, symbol: &str) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for LinkCounts {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl fmt::Display for LinkCounts {
    /// `A:2 B:3 C:1`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (symbol, count)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", symbol, count)?;
        }
        Ok(())
    }
}
