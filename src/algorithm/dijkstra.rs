use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;

use crate::algorithm::{PathSearch, SearchResult, SearchStats};
use crate::graph::{Graph, NodeIndex};
use crate::{Error, Result};

/// Shortest-path tree rooted at a single source
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    /// Distances from source to each node, `None` when unreachable
    pub distances: Vec<Option<f64>>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<NodeIndex>>,

    /// Source node index
    pub source: NodeIndex,
}

impl ShortestPathTree {
    /// Distance from the source to `node`, if reachable
    pub fn distance_to<G: Graph>(&self, graph: &G, node: &str) -> Option<f64> {
        graph
            .node_index(node)
            .and_then(|idx| self.distances.get(idx).copied().flatten())
    }

    /// Path from the source to `node` as node names, if reachable
    pub fn path_to<G: Graph>(&self, graph: &G, node: &str) -> Option<Vec<String>> {
        let target = graph.node_index(node)?;
        self.distances.get(target).copied().flatten()?;

        let mut path = Vec::new();
        let mut current = target;
        while current != self.source {
            path.push(graph.node_name(current).to_string());
            current = self.predecessors[current]?;
        }
        path.push(graph.node_name(self.source).to_string());
        path.reverse();
        Some(path)
    }
}

/// Classic single-source Dijkstra over a plain binary heap
///
/// Kept independent of the A* frontier so it can serve as a reference for it.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Compute shortest paths from `source` to every reachable node
    pub fn compute_shortest_paths<G: Graph>(
        &self,
        graph: &G,
        source: &str,
    ) -> Result<ShortestPathTree> {
        let source = graph
            .node_index(source)
            .ok_or_else(|| Error::UnknownNode(source.to_string()))?;

        let n = graph.node_count();
        let mut distances: Vec<Option<f64>> = vec![None; n];
        let mut predecessors: Vec<Option<NodeIndex>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Some(0.0);

        let mut queue = BinaryHeap::new();
        queue.push(Reverse((OrderedFloat(0.0), source)));

        while let Some(Reverse((OrderedFloat(dist_u), u))) = queue.pop() {
            if settled[u] {
                continue;
            }
            settled[u] = true;

            // Relax all outgoing edges
            for edge in graph.outgoing_edges(u) {
                let v = edge.target;
                let new_dist = dist_u + edge.weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(Reverse((OrderedFloat(new_dist), v)));
                }
            }
        }

        Ok(ShortestPathTree {
            distances,
            predecessors,
            source,
        })
    }
}

impl PathSearch for Dijkstra {
    fn name(&self) -> &str {
        "Dijkstra"
    }

    fn shortest_path<G: Graph>(
        &self,
        graph: &G,
        source: &str,
        destination: &str,
    ) -> Result<SearchResult> {
        if !graph.contains(destination) {
            return Err(Error::UnknownNode(destination.to_string()));
        }
        let tree = self.compute_shortest_paths(graph, source)?;
        let no_path = || Error::NoPath {
            from: source.to_string(),
            to: destination.to_string(),
        };
        let cost = tree.distance_to(graph, destination).ok_or_else(no_path)?;
        let path = tree.path_to(graph, destination).ok_or_else(no_path)?;
        let expanded = tree.distances.iter().filter(|d| d.is_some()).count();

        Ok(SearchResult {
            path,
            cost,
            stats: SearchStats {
                expanded,
                ..SearchStats::default()
            },
        })
    }
}
