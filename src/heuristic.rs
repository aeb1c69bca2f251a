//! Heuristics and the name -> heuristic registry.
//!
//! A heuristic estimates the remaining cost from a node to the destination.
//! For A* to return an optimal path it must be admissible, i.e. never
//! overestimate. The engine does not verify this: an inadmissible heuristic
//! silently produces a path that may cost more than the optimum.
//!
//! The coordinate heuristics read node names as `"<int>,<int>"`. When either
//! name does not parse they return 0.0 instead of failing, so graphs that mix
//! coordinate and free-form names still search correctly, just with less
//! guidance for the non-coordinate nodes.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::{Error, Result};

/// Estimate of the remaining cost between two nodes
pub trait Heuristic: Send + Sync {
    /// Returns a non-negative estimate of the cost from `node` to `goal`
    fn estimate(&self, node: &str, goal: &str) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn estimate(&self, node: &str, goal: &str) -> f64 {
        self(node, goal)
    }
}

/// The heuristics shipped with the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuiltinHeuristic {
    /// Always 0; turns A* into Dijkstra
    Zero,
    /// `|dx| + |dy|` over `"x,y"` coordinates
    Manhattan,
    /// Straight-line distance over `"x,y"` coordinates
    Euclidean,
}

impl BuiltinHeuristic {
    pub const ALL: [BuiltinHeuristic; 3] = [
        BuiltinHeuristic::Zero,
        BuiltinHeuristic::Manhattan,
        BuiltinHeuristic::Euclidean,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BuiltinHeuristic::Zero => "zero",
            BuiltinHeuristic::Manhattan => "manhattan",
            BuiltinHeuristic::Euclidean => "euclidean",
        }
    }
}

impl fmt::Display for BuiltinHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Heuristic for BuiltinHeuristic {
    fn estimate(&self, node: &str, goal: &str) -> f64 {
        match self {
            BuiltinHeuristic::Zero => 0.0,
            BuiltinHeuristic::Manhattan => match (parse_xy(node), parse_xy(goal)) {
                (Some((ax, ay)), Some((bx, by))) => {
                    // each difference may already need the full u64 range
                    ax.abs_diff(bx) as f64 + ay.abs_diff(by) as f64
                }
                _ => 0.0,
            },
            BuiltinHeuristic::Euclidean => match (parse_xy(node), parse_xy(goal)) {
                (Some((ax, ay)), Some((bx, by))) => {
                    let dx = ax.abs_diff(bx) as f64;
                    let dy = ay.abs_diff(by) as f64;
                    dx.hypot(dy)
                }
                _ => 0.0,
            },
        }
    }
}

/// Parses a `"x,y"` node name into integer coordinates
///
/// Whitespace around either number is tolerated; anything else fails.
pub fn parse_xy(name: &str) -> Option<(i64, i64)> {
    let (x, y) = name.split_once(',')?;
    Some((x.trim().parse().ok()?, y.trim().parse().ok()?))
}

/// Maps heuristic names to implementations
///
/// Each engine or caller owns its registry; there is no process-wide table.
/// `HeuristicRegistry::default()` holds the built-ins under `zero` (alias
/// `none`), `manhattan` and `euclidean`.
#[derive(Clone)]
pub struct HeuristicRegistry {
    entries: BTreeMap<String, Arc<dyn Heuristic>>,
}

impl HeuristicRegistry {
    /// Creates a registry with no entries
    pub fn empty() -> Self {
        HeuristicRegistry {
            entries: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the built-in heuristics
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        for builtin in BuiltinHeuristic::ALL {
            registry.register(builtin.name(), builtin);
        }
        registry.register("none", BuiltinHeuristic::Zero);
        registry
    }

    /// Registers `heuristic` under `name`, replacing any previous entry
    pub fn register<H>(&mut self, name: impl Into<String>, heuristic: H) -> &mut Self
    where
        H: Heuristic + 'static,
    {
        self.entries.insert(name.into(), Arc::new(heuristic));
        self
    }

    /// Looks up a heuristic by name
    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Heuristic>> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownHeuristic(name.to_string()))
    }

    /// Returns the registered names in sorted order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

impl Default for HeuristicRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

impl fmt::Debug for HeuristicRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
