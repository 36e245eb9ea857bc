//! Problem contracts consumed by the search engines.
//!
//! Problems expose themselves through one of two traits:
//!
//! - [`StateSpace`]: a graph of states reachable by costed actions, searched
//!   by [`crate::search::best_first_search`].
//! - [`CombinatorialOptimizationProblem`]: a configuration space explored by
//!   local perturbation, searched by [`crate::local::hill_climb`].
//!
//! The engines never inspect states, actions or configurations directly; all
//! access goes through these traits.

use std::hash::Hash;

use rand::Rng;

/// Action cost and cumulative path cost.
///
/// Unsigned: a negative action cost cannot be expressed. Path costs are
/// accumulated with saturating arithmetic; a space whose path costs reach
/// `Cost::MAX` is outside the engine's optimality contract.
pub type Cost = u64;

/// Heuristic value denoting a state from which no goal is reachable.
pub const INFINITE_HEURISTIC: Cost = Cost::MAX;

/// Objective value of a configuration (lower is better, 0 is optimal by convention).
pub type Objective = i64;

/// One legal transition out of a state: the action and the state it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionStatePair<A, S> {
    pub action: A,
    pub state: S,
}

impl<A, S> ActionStatePair<A, S> {
    #[must_use]
    pub fn new(action: A, state: S) -> Self {
        Self { action, state }
    }
}

/// A problem expressed as a graph of states connected by costed actions.
///
/// # Contract
///
/// - Every method is pure: equal inputs yield equal outputs. `succ` may return
///   its pairs in any order, but the order must be stable across calls so
///   that tie-breaking in the open list is reproducible.
/// - `succ` returns a finite sequence.
/// - `h` returns [`INFINITE_HEURISTIC`] only for states from which no goal is
///   reachable; such states are never expanded.
///
/// Violations are problem defects. The engine does not check for them and
/// its results are unspecified when they occur.
pub trait StateSpace {
    /// A point in the state graph. Used as a closed-set key.
    type State: Clone + Eq + Hash;
    /// A transition label. Its cost is looked up through [`StateSpace::cost`].
    type Action: Clone;

    /// The initial state.
    fn init(&self) -> Self::State;

    /// Goal test.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All legal transitions out of `state`.
    fn succ(&self, state: &Self::State) -> Vec<ActionStatePair<Self::Action, Self::State>>;

    /// Cost of applying `action`.
    fn cost(&self, action: &Self::Action) -> Cost;

    /// Estimate of the remaining cost from `state` to a goal.
    ///
    /// Defaults to 0, which turns every weighting into uniform-cost ordering.
    fn h(&self, _state: &Self::State) -> Cost {
        0
    }
}

/// A problem expressed as a configuration space explored by local moves.
///
/// Both generator methods receive the caller's random source so that runs
/// are reproducible from a seed; implementations must not read any other
/// source of randomness.
pub trait CombinatorialOptimizationProblem {
    /// A candidate point in the configuration space.
    type Configuration: Clone;

    /// Starting candidate (may be randomized).
    fn initial_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Configuration;

    /// Candidates reachable from `conf` in one local move.
    fn neighbors<R: Rng + ?Sized>(
        &self,
        conf: &Self::Configuration,
        rng: &mut R,
    ) -> Vec<Self::Configuration>;

    /// Objective value to minimize.
    fn h(&self, conf: &Self::Configuration) -> Objective;

    /// Success test. Conventionally `h(conf) == 0`, but a problem may accept
    /// candidates that are not globally optimal.
    fn is_solution(&self, conf: &Self::Configuration) -> bool;
}
