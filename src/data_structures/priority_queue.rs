use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

use crate::{Error, Result};

/// A heap entry. Ordering is by priority, then by insertion sequence, so
/// equal priorities pop first-in first-out. `node` never takes part in the
/// comparison because sequences are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Entry<P> {
    priority: P,
    sequence: u64,
    node: usize,
}

/// Min-priority frontier over dense node indices with lazy deletion
///
/// Lowering a node's priority pushes a fresh entry and leaves the old one in
/// the heap. Each node's live entry is tracked alongside, and entries that
/// no longer match it are discarded when they reach the top. `len` and
/// `is_empty` count live nodes only, never stale entries.
///
/// Ties: among entries with equal priority, the one inserted first pops
/// first. This is deterministic for a given insertion sequence and decides
/// which of several optimal paths a search returns.
#[derive(Debug)]
pub struct Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap, possibly holding stale entries
    heap: BinaryHeap<Reverse<Entry<P>>>,

    /// Priority and sequence of the live entry for each node in the frontier
    current: Vec<Option<(P, u64)>>,

    /// Number of nodes with a live entry
    live: usize,

    next_sequence: u64,

    stale_discarded: usize,
}

impl<P> Frontier<P>
where
    P: Ord + Copy + Debug,
{
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty frontier sized for node indices below `nodes`
    pub fn with_capacity(nodes: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(nodes),
            current: vec![None; nodes],
            live: 0,
            next_sequence: 0,
            stale_discarded: 0,
        }
    }

    /// Returns true if no live node remains
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns the number of live nodes
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns the current priority of `node`, if it is in the frontier
    pub fn priority_of(&self, node: usize) -> Option<P> {
        self.current.get(node).copied().flatten().map(|(priority, _)| priority)
    }

    /// Inserts `node`, or lowers its priority if it is already present
    ///
    /// Returns true if a heap entry was pushed. A priority that is not
    /// strictly lower than the node's current one is ignored.
    pub fn insert_or_improve(&mut self, node: usize, priority: P) -> bool {
        if node >= self.current.len() {
            self.current.resize(node + 1, None);
        }

        match self.current[node] {
            Some((existing, _)) if existing <= priority => return false,
            // the superseded entry stays in the heap until pop_min drops it
            Some(_) => {}
            None => self.live += 1,
        }

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.current[node] = Some((priority, sequence));
        self.heap.push(Reverse(Entry {
            priority,
            sequence,
            node,
        }));
        true
    }

    /// Removes and returns the live node with the lowest priority
    pub fn pop_min(&mut self) -> Result<(usize, P)> {
        while let Some(Reverse(entry)) = self.heap.pop() {
            if self.current[entry.node] != Some((entry.priority, entry.sequence)) {
                self.stale_discarded += 1;
                continue;
            }
            self.current[entry.node] = None;
            self.live -= 1;
            return Ok((entry.node, entry.priority));
        }
        Err(Error::EmptyFrontier)
    }

    /// Number of stale entries dropped by `pop_min` so far
    pub fn stale_discarded(&self) -> usize {
        self.stale_discarded
    }

    /// Number of entries in the backing heap, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Clears the frontier, including the stale-entry counter
    pub fn clear(&mut self) {
        self.heap.clear();
        self.current.iter_mut().for_each(|slot| *slot = None);
        self.live = 0;
        self.stale_discarded = 0;
    }
}

impl<P> Default for Frontier<P>
where
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
