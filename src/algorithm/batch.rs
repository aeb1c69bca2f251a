//! Many independent point-to-point queries against one shared graph.
//!
//! The graph is read-only after construction, so it is shared across rayon
//! workers without locking; every query owns its own frontier and search
//! state.

use rayon::prelude::*;

use crate::algorithm::{PathSearch, SearchResult};
use crate::graph::Graph;
use crate::Result;

/// Runs `algorithm` on every `(source, destination)` pair in parallel
///
/// Results are returned in the order of `pairs`. A failing query does not
/// affect the others.
pub fn search_pairs<A, G, S>(algorithm: &A, graph: &G, pairs: &[(S, S)]) -> Vec<Result<SearchResult>>
where
    A: PathSearch + Sync,
    G: Graph + Sync,
    S: AsRef<str> + Sync,
{
    pairs
        .par_iter()
        .map(|(source, destination)| {
            algorithm.shortest_path(graph, source.as_ref(), destination.as_ref())
        })
        .collect()
}

/// Every ordered pair of distinct nodes in `graph`, in node order
pub fn all_pairs<G: Graph>(graph: &G) -> Vec<(String, String)> {
    let n = graph.node_count();
    let mut pairs = Vec::with_capacity(n * n.saturating_sub(1));
    for a in 0..n {
        for b in 0..n {
            if a != b {
                pairs.push((graph.node_name(a).to_string(), graph.node_name(b).to_string()));
            }
        }
    }
    pairs
}
