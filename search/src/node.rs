//! Search node records and the arena that owns them.
//!
//! Nodes are append-only: a node is created once, never mutated, and refers
//! to its parent by [`NodeId`]. Because a parent is always created before its
//! children, parent links cannot form a cycle.

use crate::contract::Cost;

/// Stable index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// An immutable search node.
#[derive(Debug, Clone)]
pub struct SearchNode<S, A> {
    /// Parent node (`None` for root).
    pub parent: Option<NodeId>,
    /// The action that produced this node from its parent (`None` for root).
    pub action: Option<A>,
    /// The state at this node.
    pub state: S,
    /// Cumulative path cost from the root.
    pub g: Cost,
    /// Heuristic estimate at `state`.
    pub h: Cost,
    /// Global counter for deterministic tie-breaking.
    pub creation_order: u64,
}

impl<S, A> SearchNode<S, A> {
    /// `g_weight * g + h_weight * h`, saturating at `Cost::MAX`.
    #[must_use]
    pub fn score(&self, g_weight: u64, h_weight: u64) -> Cost {
        g_weight
            .saturating_mul(self.g)
            .saturating_add(h_weight.saturating_mul(self.h))
    }
}

/// Append-only owner of every node created during one search run.
#[derive(Debug)]
pub struct NodeArena<S, A> {
    nodes: Vec<SearchNode<S, A>>,
}

impl<S, A> NodeArena<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Insert the root node (`g = 0`).
    pub fn push_root(&mut self, state: S, h: Cost) -> NodeId {
        self.push(SearchNode {
            parent: None,
            action: None,
            state,
            g: 0,
            h,
            creation_order: 0,
        })
    }

    /// Insert a child of `parent` reached by `action` at cost `step_cost`.
    ///
    /// The child's `g` is the parent's `g` plus `step_cost`.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        action: A,
        state: S,
        step_cost: Cost,
        h: Cost,
    ) -> NodeId {
        let g = self.nodes[parent.0].g.saturating_add(step_cost);
        self.push(SearchNode {
            parent: Some(parent),
            action: Some(action),
            state,
            g,
            h,
            creation_order: self.nodes.len() as u64,
        })
    }

    fn push(&mut self, node: SearchNode<S, A>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Look up a node.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<S, A> Default for NodeArena<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// The open-list ordering key: `(score, creation_order)`.
///
/// Lower score first; ties broken by older creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub score: Cost,
    pub creation_order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.score
            .cmp(&other.score)
            .then(self.creation_order.cmp(&other.creation_order))
    }
}
