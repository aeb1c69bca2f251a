//! A* / Dijkstra shortest-path engine over weighted graphs with string node ids.
//!
//! The graph is loaded once from a whitespace-separated edge list and is
//! read-only afterwards. Searches run a unified A* loop: with the `zero`
//! heuristic it degenerates to Dijkstra's algorithm. Heuristics are looked up
//! by name in a [`HeuristicRegistry`] owned by the caller.
//!
//! Heuristics must be admissible for the returned path to be optimal. The
//! engine does not check this; an overestimating heuristic yields a valid but
//! possibly more expensive path, never an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod heuristic;
pub mod report;

pub use algorithm::{
    astar::{shortest_path, AStar},
    dijkstra::Dijkstra,
    PathSearch, SearchResult, SearchStats,
};
pub use graph::{GraphStore, LoadOptions};
pub use heuristic::{Heuristic, HeuristicRegistry};

use std::path::PathBuf;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An input line (or in-memory edge) that is not a valid `from to weight` triple.
    /// `line` is the 1-based line number in the source text, or the 1-based
    /// position for edges supplied in memory.
    #[error("malformed edge at line {line}: {reason}")]
    MalformedEdge { line: usize, reason: String },

    #[error("failed to read graph {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown heuristic: {0}")]
    UnknownHeuristic(String),

    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// Popping from a frontier with no live entries. Seeing this outside of
    /// the frontier's own tests is a bug in the search loop.
    #[error("frontier is empty")]
    EmptyFrontier,

    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },

    #[error("search exceeded the expansion limit of {limit} nodes")]
    ExpansionLimit { limit: usize },
}

impl Error {
    /// Process exit code for this error class.
    ///
    /// 1 = malformed input, 2 = no path, 3 = unknown heuristic or node,
    /// 4 = expansion limit hit, 70 = internal invariant violation.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::MalformedEdge { .. } | Error::Io { .. } => 1,
            Error::NoPath { .. } => 2,
            Error::UnknownHeuristic(_) | Error::UnknownNode(_) => 3,
            Error::ExpansionLimit { .. } => 4,
            Error::EmptyFrontier => 70,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
