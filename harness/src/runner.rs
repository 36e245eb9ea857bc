//! Harness runner: drives the search engines on a world and packages the
//! outcome as a report.
//!
//! The runner uses ONLY engine APIs: `best_first_search`, `hill_climb` and
//! the [`StateSpace`] contract. It adds timing, aggregation and rendering
//! of actions and states; it does not implement search logic itself.
//!
//! # Entry points
//!
//! ```text
//! solve(space, policy)              → SolveReport    (one best-first run, timed)
//! run_trials(problem, policy, N)    → TrialSummary   (N hill-climbing runs, shared rng)
//! inspect(space, walk_length, rng)  → Inspection     (successor dump + random walk)
//! ```

use std::fmt::Display;
use std::time::Instant;

use log::{debug, info};
use rand::Rng;
use wayfind_search::contract::{ActionStatePair, CombinatorialOptimizationProblem, StateSpace};
use wayfind_search::error::SearchError;
use wayfind_search::local::hill_climb;
use wayfind_search::policy::{BestFirstPolicy, HillClimbingPolicy};
use wayfind_search::search::best_first_search;

use crate::contract::World;
use crate::report::{
    Inspection, SolutionSummary, SolveReport, StateDump, SuccessorDump, TrialSummary, WalkStep,
};

/// Default random-walk length of [`inspect`].
pub const DEFAULT_WALK_LENGTH: usize = 7;

/// Default seed of [`inspect`]'s random walk.
pub const DEFAULT_WALK_SEED: u64 = 4_052_169;

/// Run one best-first search on `space` and time it.
///
/// # Errors
///
/// Returns [`SearchError`] if the policy is rejected by the engine.
pub fn solve<S>(space: &S, policy: &BestFirstPolicy) -> Result<SolveReport, SearchError>
where
    S: StateSpace + World,
    S::Action: Display,
{
    let world_id = space.world_id();
    info!("solving {world_id}");

    let start = Instant::now();
    let result = best_first_search(space, policy)?;
    let elapsed = start.elapsed();

    let solution = result.path.map(|path| SolutionSummary {
        actions: path.actions.iter().map(ToString::to_string).collect(),
        cost: path.cost,
    });
    debug!(
        "{world_id}: {:?} after {} expansions in {:?}",
        result.termination, result.stats.expanded, elapsed
    );

    Ok(SolveReport {
        world_id,
        policy: *policy,
        stats: result.stats,
        termination: result.termination,
        solution,
        elapsed,
    })
}

/// Run `runs` independent hill-climbing trials sharing `rng`.
///
/// Trials draw from `rng` in sequence, so a seeded generator makes the whole
/// summary reproducible.
///
/// # Errors
///
/// Returns [`SearchError`] if the policy is rejected by the engine.
pub fn run_trials<P, R>(
    problem: &P,
    policy: HillClimbingPolicy,
    runs: u64,
    rng: &mut R,
) -> Result<TrialSummary, SearchError>
where
    P: CombinatorialOptimizationProblem + World,
    R: Rng + ?Sized,
{
    policy.validate()?;
    let mut summary = TrialSummary {
        world_id: problem.world_id(),
        policy,
        runs,
        successes: 0,
        total_steps: 0,
        successful_steps: 0,
    };

    for _ in 0..runs {
        let result = hill_climb(problem, policy, rng)?;
        summary.total_steps += result.steps;
        if result.success {
            summary.successes += 1;
            summary.successful_steps += result.steps;
        }
    }

    info!(
        "{}: {}/{} trials succeeded",
        summary.world_id, summary.successes, summary.runs
    );
    Ok(summary)
}

/// Dump the neighborhood of the initial state and take a random walk.
///
/// The walk starts at the first successor of the initial state (or the
/// initial state itself if it has none) and stops early at a state without
/// successors.
pub fn inspect<S, R>(space: &S, walk_length: usize, rng: &mut R) -> Inspection
where
    S: StateSpace + World,
    S::State: Display,
    S::Action: Display,
    R: Rng + ?Sized,
{
    let init = space.init();
    let initial_pairs = space.succ(&init);
    let initial_successors = dump_successors(space, &initial_pairs);

    let (mut current, first_successor) = match initial_pairs.into_iter().next() {
        Some(pair) => {
            let dump = dump_state(space, &pair.state);
            let successors = dump_successors(space, &space.succ(&pair.state));
            (pair.state, Some((dump, successors)))
        }
        None => (init.clone(), None),
    };

    let mut walk = Vec::with_capacity(walk_length);
    let mut walk_stopped_early = false;
    for _ in 0..walk_length {
        let mut successors = space.succ(&current);
        if successors.is_empty() {
            walk_stopped_early = true;
            break;
        }
        let pick = successors.swap_remove(rng.random_range(0..successors.len()));
        walk.push(WalkStep {
            action: pick.action.to_string(),
            reached: dump_state(space, &pick.state),
        });
        current = pick.state;
    }

    Inspection {
        world_id: space.world_id(),
        initial: dump_state(space, &init),
        initial_successors,
        first_successor,
        walk,
        walk_stopped_early,
    }
}

fn dump_state<S>(space: &S, state: &S::State) -> StateDump
where
    S: StateSpace,
    S::State: Display,
{
    StateDump {
        state: state.to_string(),
        is_goal: space.is_goal(state),
    }
}

fn dump_successors<S>(
    space: &S,
    pairs: &[ActionStatePair<S::Action, S::State>],
) -> Vec<SuccessorDump>
where
    S: StateSpace,
    S::State: Display,
    S::Action: Display,
{
    pairs
        .iter()
        .map(|pair| SuccessorDump {
            action: pair.action.to_string(),
            cost: space.cost(&pair.action),
            state: pair.state.to_string(),
        })
        .collect()
}
