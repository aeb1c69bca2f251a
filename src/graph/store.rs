use std::collections::HashMap;
use std::io::{self, Write};

use crate::graph::traits::{Edge, Graph, NodeIndex};
use crate::{Error, Result};

/// One input edge before it is placed into the adjacency lists
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub weight: f64,
    /// Source line number, when the edge was read from text
    pub line: Option<usize>,
}

impl EdgeRecord {
    /// Creates an edge record that did not come from a file
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: f64) -> Self {
        EdgeRecord {
            from: from.into(),
            to: to.into(),
            weight,
            line: None,
        }
    }
}

/// Immutable adjacency-list graph keyed by string node ids
///
/// Node names are interned to dense indices on construction. Every node that
/// appears as either endpoint of an edge gets an adjacency list, possibly
/// empty, so destination-only nodes are still known to the graph.
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node names, indexed by `NodeIndex`
    names: Vec<String>,

    /// Reverse lookup: name -> index
    index: HashMap<String, NodeIndex>,

    /// Outgoing edges for each node: node -> [(target, weight)]
    adjacency: Vec<Vec<Edge>>,

    edge_count: usize,
}

impl GraphStore {
    /// Builds a graph from edge records
    ///
    /// In undirected mode every record is inserted in both directions with the
    /// same weight. Fails with `MalformedEdge` on the first record whose
    /// weight is negative, NaN or infinite.
    pub fn build<I>(edges: I, undirected: bool) -> Result<Self>
    where
        I: IntoIterator<Item = EdgeRecord>,
    {
        let mut graph = GraphStore::default();

        for (position, record) in edges.into_iter().enumerate() {
            let line = record.line.unwrap_or(position + 1);
            validate_weight(record.weight).map_err(|reason| Error::MalformedEdge { line, reason })?;

            let from = graph.intern(&record.from);
            let to = graph.intern(&record.to);
            graph.push_edge(from, to, record.weight);
            if undirected {
                graph.push_edge(to, from, record.weight);
            }
        }

        Ok(graph)
    }

    fn intern(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        self.adjacency.push(Vec::new());
        idx
    }

    fn push_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: f64) {
        self.adjacency[from].push(Edge { target: to, weight });
        self.edge_count += 1;
    }

    /// Returns the node names in order of first appearance
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }

    /// Returns `(neighbor, weight)` pairs for a node's outgoing edges
    ///
    /// Unknown nodes and nodes without outgoing edges yield an empty list.
    pub fn neighbors(&self, name: &str) -> Vec<(&str, f64)> {
        match self.node_index(name) {
            Some(idx) => self.adjacency[idx]
                .iter()
                .map(|edge| (self.names[edge.target].as_str(), edge.weight))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Gets the weight of the cheapest edge `from -> to`, if any
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.node_index(from)?;
        let to = self.node_index(to)?;
        self.adjacency[from]
            .iter()
            .filter(|edge| edge.target == to)
            .map(|edge| edge.weight)
            .reduce(f64::min)
    }

    /// Writes every stored edge as a `from to weight` line
    ///
    /// An undirected graph is written with both directions expanded, so
    /// reading the output back in directed mode yields the same graph.
    pub fn write_edge_list<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (from, edges) in self.adjacency.iter().enumerate() {
            for edge in edges {
                writeln!(out, "{} {} {}", self.names[from], self.names[edge.target], edge.weight)?;
            }
        }
        Ok(())
    }
}

impl Graph for GraphStore {
    fn node_count(&self) -> usize {
        self.names.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn node_index(&self, name: &str) -> Option<NodeIndex> {
        self.index.get(name).copied()
    }

    fn node_name(&self, index: NodeIndex) -> &str {
        &self.names[index]
    }

    fn outgoing_edges(&self, node: NodeIndex) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Validate that a weight is usable by Dijkstra/A*
fn validate_weight(weight: f64) -> std::result::Result<(), String> {
    if !weight.is_finite() {
        return Err(format!("weight {} is not finite", weight));
    }
    if weight < 0.0 {
        return Err(format!("negative weight {}", weight));
    }
    Ok(())
}
