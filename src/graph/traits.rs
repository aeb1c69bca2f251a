use std::fmt::Debug;

/// Dense index of a node inside a graph. Indices are assigned in order of
/// first appearance and are only meaningful for the graph that issued them.
pub type NodeIndex = usize;

/// An outgoing edge as stored in the adjacency lists
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Index of the target node
    pub target: NodeIndex,
    /// Non-negative, finite edge weight
    pub weight: f64,
}

/// Trait representing a read-only weighted directed graph with named nodes
///
/// Search algorithms work on dense indices and only translate to and from
/// node names at their boundaries.
pub trait Graph: Debug {
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of stored (directed) edges
    fn edge_count(&self) -> usize;

    /// Looks up the index of a node by name
    fn node_index(&self, name: &str) -> Option<NodeIndex>;

    /// Returns the name of the node at `index`
    ///
    /// Panics if `index` was not issued by this graph.
    fn node_name(&self, index: NodeIndex) -> &str;

    /// Returns the outgoing edges of a node, in insertion order
    fn outgoing_edges(&self, node: NodeIndex) -> &[Edge];

    /// Returns true if the node appears in the graph as an edge endpoint
    fn contains(&self, name: &str) -> bool {
        self.node_index(name).is_some()
    }
}
