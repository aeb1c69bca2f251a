use std::fmt;
use std::sync::Arc;

use log::{debug, trace, warn};
use ordered_float::OrderedFloat;

use crate::algorithm::{PathSearch, SearchResult, SearchStats};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeIndex};
use crate::heuristic::{BuiltinHeuristic, Heuristic, HeuristicRegistry};
use crate::{Error, Result};

/// A* search with a pluggable heuristic
///
/// With the zero heuristic this is Dijkstra's algorithm with early exit at
/// the destination.
#[derive(Clone)]
pub struct AStar {
    heuristic: Arc<dyn Heuristic>,
    /// Name the heuristic was resolved under, for logs and reports
    heuristic_name: String,
    /// Maximum number of nodes to expand before giving up
    expansion_limit: Option<usize>,
}

impl AStar {
    /// Create a search using `heuristic`, labelled `name`
    pub fn new(name: impl Into<String>, heuristic: Arc<dyn Heuristic>) -> Self {
        AStar {
            heuristic,
            heuristic_name: name.into(),
            expansion_limit: None,
        }
    }

    /// Create a search using the heuristic registered under `name`
    pub fn from_registry(registry: &HeuristicRegistry, name: &str) -> Result<Self> {
        Ok(Self::new(name, registry.resolve(name)?))
    }

    /// Create a search with the zero heuristic
    pub fn dijkstra() -> Self {
        Self::new(BuiltinHeuristic::Zero.name(), Arc::new(BuiltinHeuristic::Zero))
    }

    /// Stop with `ExpansionLimit` once `limit` nodes have been expanded
    /// without reaching the destination
    pub fn with_expansion_limit(mut self, limit: usize) -> Self {
        self.expansion_limit = Some(limit);
        self
    }

    pub fn heuristic_name(&self) -> &str {
        &self.heuristic_name
    }

    pub fn expansion_limit(&self) -> Option<usize> {
        self.expansion_limit
    }
}

impl fmt::Debug for AStar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AStar")
            .field("heuristic", &self.heuristic_name)
            .field("expansion_limit", &self.expansion_limit)
            .finish()
    }
}

impl PathSearch for AStar {
    fn name(&self) -> &str {
        "A*"
    }

    fn shortest_path<G: Graph>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<SearchResult> {
        let result = search(graph, source, destination, &*self.heuristic, self.expansion_limit)?;
        debug!(
            "A* [{}] {} -> {}: cost={} hops={} expanded={} relaxed={} stale={}",
            self.heuristic_name,
            source,
            destination,
            result.cost,
            result.hop_count(),
            result.stats.expanded,
            result.stats.relaxed,
            result.stats.stale_discarded
        );
        Ok(result)
    }
}

/// Finds a shortest path from `source` to `destination` guided by `heuristic`
pub fn shortest_path<G: Graph>(
    graph: &G,
    source: &str,
    destination: &str,
    heuristic: &dyn Heuristic,
) -> Result<SearchResult> {
    search(graph, source, destination, heuristic, None)
}

/// Transient per-search state, indexed by node
struct SearchState<'a> {
    best_known_cost: Vec<f64>,
    predecessor: Vec<Option<NodeIndex>>,
    closed: Vec<bool>,
    /// Heuristic estimate to the destination, computed on first use
    estimates: Vec<Option<f64>>,
    heuristic: &'a dyn Heuristic,
    warned: bool,
}

impl<'a> SearchState<'a> {
    fn new(nodes: usize, heuristic: &'a dyn Heuristic) -> Self {
        SearchState {
            best_known_cost: vec![f64::INFINITY; nodes],
            predecessor: vec![None; nodes],
            closed: vec![false; nodes],
            estimates: vec![None; nodes],
            heuristic,
            warned: false,
        }
    }

    /// Heuristic from `node` to the destination; negative and NaN estimates
    /// are clamped to 0
    fn estimate<G: Graph>(&mut self, graph: &G, node: NodeIndex, destination: NodeIndex) -> f64 {
        if let Some(h) = self.estimates[node] {
            return h;
        }
        let raw = self
            .heuristic
            .estimate(graph.node_name(node), graph.node_name(destination));
        let h = if raw >= 0.0 {
            raw
        } else {
            if !self.warned {
                warn!(
                    "heuristic returned {} for {} -> {}; using 0",
                    raw,
                    graph.node_name(node),
                    graph.node_name(destination)
                );
                self.warned = true;
            }
            0.0
        };
        self.estimates[node] = Some(h);
        h
    }

    fn reconstruct<G: Graph>(&self, graph: &G, destination: NodeIndex) -> Vec<String> {
        let mut path = vec![graph.node_name(destination).to_string()];
        let mut current = destination;
        while let Some(previous) = self.predecessor[current] {
            path.push(graph.node_name(previous).to_string());
            current = previous;
        }
        path.reverse();
        path
    }
}

fn search<G: Graph>(
    graph: &G,
    source: &str,
    destination: &str,
    heuristic: &dyn Heuristic,
    expansion_limit: Option<usize>,
) -> Result<SearchResult> {
    let src = graph
        .node_index(source)
        .ok_or_else(|| Error::UnknownNode(source.to_string()))?;
    let dst = graph
        .node_index(destination)
        .ok_or_else(|| Error::UnknownNode(destination.to_string()))?;

    if src == dst {
        return Ok(SearchResult {
            path: vec![source.to_string()],
            cost: 0.0,
            stats: SearchStats::default(),
        });
    }

    let n = graph.node_count();
    let mut state = SearchState::new(n, heuristic);
    let mut frontier: Frontier<OrderedFloat<f64>> = Frontier::with_capacity(n);
    let mut stats = SearchStats::default();
    let mut skipped_closed = 0;

    state.best_known_cost[src] = 0.0;
    let h0 = state.estimate(graph, src, dst);
    frontier.insert_or_improve(src, OrderedFloat(h0));
    stats.pushed += 1;

    while !frontier.is_empty() {
        let (u, priority) = frontier.pop_min()?;
        if state.closed[u] {
            skipped_closed += 1;
            continue;
        }
        if let Some(limit) = expansion_limit {
            if stats.expanded >= limit {
                return Err(Error::ExpansionLimit { limit });
            }
        }
        state.closed[u] = true;
        stats.expanded += 1;
        trace!(
            "expand {} g={} f={}",
            graph.node_name(u),
            state.best_known_cost[u],
            priority
        );

        if u == dst {
            stats.stale_discarded = frontier.stale_discarded() + skipped_closed;
            return Ok(SearchResult {
                path: state.reconstruct(graph, dst),
                cost: state.best_known_cost[dst],
                stats,
            });
        }

        let cost_u = state.best_known_cost[u];
        for edge in graph.outgoing_edges(u) {
            let v = edge.target;
            // closed nodes are final; they are never reopened
            if state.closed[v] {
                continue;
            }
            let candidate = cost_u + edge.weight;
            if candidate < state.best_known_cost[v] {
                state.best_known_cost[v] = candidate;
                state.predecessor[v] = Some(u);
                stats.relaxed += 1;
                let h = state.estimate(graph, v, dst);
                if frontier.insert_or_improve(v, OrderedFloat(candidate + h)) {
                    stats.pushed += 1;
                }
            }
        }
    }

    Err(Error::NoPath {
        from: source.to_string(),
        to: destination.to_string(),
    })
}
