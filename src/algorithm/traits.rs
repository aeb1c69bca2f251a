use serde::Serialize;

use crate::graph::Graph;
use crate::Result;

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the frontier and closed
    pub expanded: usize,
    /// Successful relaxations (a cheaper path to a node was found)
    pub relaxed: usize,
    /// Entries pushed onto the frontier heap
    pub pushed: usize,
    /// Stale frontier entries discarded on pop
    pub stale_discarded: usize,
}

/// A shortest path between two nodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Node names from source to destination, both included
    pub path: Vec<String>,

    /// Sum of edge weights along `path`
    pub cost: f64,

    pub stats: SearchStats,
}

impl SearchResult {
    /// Number of edges on the path
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait PathSearch {
    /// Get the name of the algorithm
    fn name(&self) -> &str;

    /// Finds a shortest path from `source` to `destination`
    fn shortest_path<G: Graph>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<SearchResult>;
}
