//! Open list and closed set for best-first search.
//!
//! The open list may hold several entries for the same state; entries whose
//! state was closed in the meantime are discarded by the search loop when
//! popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashSet};
use std::hash::Hash;

use crate::node::{FrontierKey, NodeId};

/// An open-list entry: ordering key plus the arena id of the node.
///
/// `BinaryHeap` is a max-heap, so we use `Reverse<FrontierKey>` to get
/// min-heap behavior (lowest score first).
#[derive(Debug, PartialEq, Eq)]
struct OpenEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// Priority queue of node ids ordered by [`FrontierKey`].
#[derive(Debug, Default)]
pub struct OpenList {
    heap: BinaryHeap<OpenEntry>,
    high_water: u64,
}

impl OpenList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node id with its ordering key.
    pub fn push(&mut self, key: FrontierKey, node: NodeId) {
        self.heap.push(OpenEntry {
            key: Reverse(key),
            node,
        });
        let size = self.heap.len() as u64;
        if size > self.high_water {
            self.high_water = size;
        }
    }

    /// Remove and return the entry with the lowest key.
    #[must_use]
    pub fn pop(&mut self) -> Option<(FrontierKey, NodeId)> {
        self.heap.pop().map(|e| (e.key.0, e.node))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// High-water mark of open-list size.
    #[must_use]
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}

/// States expanded during one run. Grows monotonically.
#[derive(Debug)]
pub struct ClosedSet<S> {
    states: HashSet<S>,
}

impl<S: Eq + Hash> ClosedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: HashSet::new(),
        }
    }

    /// Close `state`. Returns `false` if it was already closed.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Number of closed states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Eq + Hash> Default for ClosedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
