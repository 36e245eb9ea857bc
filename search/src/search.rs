//! Best-first graph search entry point and expansion loop.
//!
//! # Algorithm
//!
//! ```text
//! open ← {root}
//! loop:
//!   open empty            → FrontierExhausted
//!   pop lowest (score, creation_order)
//!   state already closed  → discard (stale), continue
//!   budget consumed       → ExpansionBudgetExceeded
//!   close state, expanded += 1
//!   goal                  → GoalReached, reconstruct path
//!   push every successor with g = g(parent) + cost(action)
//! ```
//!
//! Uniform-cost search is the `(g_weight = 1, h_weight = 0)` instance. With
//! non-negative costs it returns a minimum-cost path; with `h_weight > 0` the
//! path is minimum-cost only for an admissible heuristic under A* weighting.

use log::{debug, trace};

use crate::contract::{Cost, StateSpace, INFINITE_HEURISTIC};
use crate::error::SearchError;
use crate::frontier::{ClosedSet, OpenList};
use crate::node::{FrontierKey, NodeArena, NodeId};
use crate::policy::BestFirstPolicy;

/// A solution: the ordered actions from the initial state to a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<A> {
    /// Actions in application order. Empty if the initial state is a goal.
    pub actions: Vec<A>,
    /// Sum of action costs along the path.
    pub cost: Cost,
}

impl<A> Path<A> {
    /// Number of actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Why a search run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A goal state was expanded.
    GoalReached,
    /// The open list emptied without reaching a goal.
    FrontierExhausted,
    /// The policy's expansion budget was consumed first.
    ExpansionBudgetExceeded { limit: u64 },
}

/// Counters collected during one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States moved into the closed set (equals closed-set size).
    pub expanded: u64,
    /// Nodes created, including the root.
    pub generated: u64,
    /// Popped entries whose state was already closed.
    pub stale_discarded: u64,
    /// Nodes not opened because their heuristic was infinite.
    pub pruned_unreachable: u64,
    /// Largest open-list size observed.
    pub frontier_high_water: u64,
}

/// Result of a best-first search run.
#[derive(Debug, Clone)]
pub struct SearchResult<A> {
    /// The path found, or `None` when no goal was reached.
    pub path: Option<Path<A>>,
    pub stats: SearchStats,
    pub termination: TerminationReason,
}

impl<A> SearchResult<A> {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached)
    }
}

/// Run best-first search over `space` with the weighting in `policy`.
///
/// Ties between equal scores are broken by node creation order, so a fixed
/// space yields the same result on every run.
///
/// # Preconditions
///
/// The [`StateSpace`] contract must hold. In particular, path costs must not
/// approach `Cost::MAX`: they saturate, and optimality is then unspecified.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] only for pre-flight policy
/// validation failures. Once the loop starts it always returns `Ok`.
pub fn best_first_search<S>(
    space: &S,
    policy: &BestFirstPolicy,
) -> Result<SearchResult<S::Action>, SearchError>
where
    S: StateSpace + ?Sized,
{
    policy.validate()?;
    debug!(
        "best-first search start: g_weight={} h_weight={} max_expansions={:?}",
        policy.g_weight, policy.h_weight, policy.max_expansions
    );

    let mut arena: NodeArena<S::State, S::Action> = NodeArena::new();
    let mut open = OpenList::new();
    let mut closed: ClosedSet<S::State> = ClosedSet::new();
    let mut stats = SearchStats::default();

    let root_state = space.init();
    let root_h = space.h(&root_state);
    let root = arena.push_root(root_state, root_h);
    stats.generated += 1;
    open_node(&arena, &mut open, &mut stats, policy, root);

    let (termination, goal) = loop {
        if open.is_empty() {
            break (TerminationReason::FrontierExhausted, None);
        }

        let Some((key, current)) = open.pop() else {
            break (TerminationReason::FrontierExhausted, None);
        };
        let node = arena.get(current);

        if closed.contains(&node.state) {
            stats.stale_discarded += 1;
            continue;
        }

        // Only fresh nodes count against the budget.
        if let Some(limit) = policy.max_expansions {
            if stats.expanded >= limit {
                break (TerminationReason::ExpansionBudgetExceeded { limit }, None);
            }
        }
        closed.insert(node.state.clone());
        stats.expanded += 1;
        trace!(
            "expand #{}: score={} g={} h={}",
            stats.expanded,
            key.score,
            node.g,
            node.h
        );

        if space.is_goal(&node.state) {
            break (TerminationReason::GoalReached, Some(current));
        }

        for pair in space.succ(&node.state) {
            let step_cost = space.cost(&pair.action);
            let h = space.h(&pair.state);
            let child = arena.push_child(current, pair.action, pair.state, step_cost, h);
            stats.generated += 1;
            open_node(&arena, &mut open, &mut stats, policy, child);
        }
    };

    stats.frontier_high_water = open.high_water();

    let path = goal.map(|goal| Path {
        actions: reconstruct_path(&arena, goal),
        cost: arena.get(goal).g,
    });

    debug!(
        "best-first search done: {:?} expanded={} generated={} stale={} cost={:?}",
        termination,
        stats.expanded,
        stats.generated,
        stats.stale_discarded,
        path.as_ref().map(|p| p.cost)
    );

    Ok(SearchResult {
        path,
        stats,
        termination,
    })
}

/// Uniform-cost search: [`best_first_search`] with weights `(1, 0)`.
///
/// # Errors
///
/// Never fails for the default policy; the `Result` mirrors
/// [`best_first_search`].
pub fn uniform_cost_search<S>(space: &S) -> Result<SearchResult<S::Action>, SearchError>
where
    S: StateSpace + ?Sized,
{
    best_first_search(space, &BestFirstPolicy::uniform_cost())
}

/// Reconstruct the action sequence from the root to `goal`.
///
/// Walks parent links back to the root, collecting each node's action, and
/// reverses the result. A root goal yields an empty sequence.
#[must_use]
pub fn reconstruct_path<S, A: Clone>(arena: &NodeArena<S, A>, goal: NodeId) -> Vec<A> {
    let mut actions = Vec::new();
    let mut current = Some(goal);

    while let Some(id) = current {
        let node = arena.get(id);
        if let Some(action) = &node.action {
            actions.push(action.clone());
        }
        current = node.parent;
    }

    actions.reverse();
    actions
}

fn open_node<S, A>(
    arena: &NodeArena<S, A>,
    open: &mut OpenList,
    stats: &mut SearchStats,
    policy: &BestFirstPolicy,
    id: NodeId,
) {
    let node = arena.get(id);
    if node.h == INFINITE_HEURISTIC {
        stats.pruned_unreachable += 1;
        return;
    }
    open.push(
        FrontierKey {
            score: node.score(policy.g_weight, policy.h_weight),
            creation_order: node.creation_order,
        },
        id,
    );
}
