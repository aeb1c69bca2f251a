//! Edge-list input format.
//!
//! One edge per line: `<from> <to> <weight>`, separated by any whitespace.
//! Blank lines and lines whose first non-blank character is `#` are ignored.
//! There is no header row.

use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::store::{EdgeRecord, GraphStore};
use crate::graph::traits::Graph;
use crate::{Error, Result};

/// Options controlling how an edge list becomes a graph
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Insert every edge in both directions with the same weight
    pub undirected: bool,
}

impl LoadOptions {
    pub fn undirected() -> Self {
        LoadOptions { undirected: true }
    }
}

/// Reads and parses a graph file
pub fn load_graph<P: AsRef<Path>>(path: P, options: LoadOptions) -> Result<GraphStore> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = parse_edge_list(&text, options)?;
    debug!(
        "loaded {} ({} nodes, {} edges, undirected={})",
        path.display(),
        graph.node_count(),
        graph.edge_count(),
        options.undirected
    );
    Ok(graph)
}

/// Parses edge-list text into a graph
pub fn parse_edge_list(text: &str, options: LoadOptions) -> Result<GraphStore> {
    let mut records = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        records.push(parse_line(trimmed, line)?);
    }
    GraphStore::build(records, options.undirected)
}

fn parse_line(text: &str, line: usize) -> Result<EdgeRecord> {
    let malformed = |reason: String| Error::MalformedEdge { line, reason };

    let fields: Vec<&str> = text.split_whitespace().collect();
    let [from, to, weight] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected `<from> <to> <weight>`, found {} field(s)",
            fields.len()
        )));
    };
    let weight: f64 = weight
        .parse()
        .map_err(|_| malformed(format!("invalid weight `{}`", weight)))?;

    Ok(EdgeRecord {
        from: from.to_string(),
        to: to.to_string(),
        weight,
        line: Some(line),
    })
}
