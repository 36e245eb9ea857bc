//! Greedy local search (hill climbing).
//!
//! Both termination policies share the neighbor-selection rule: evaluate all
//! neighbors of the current candidate and pick the first one with minimum
//! objective. They differ in acceptance:
//!
//! - [`HillClimbingPolicy::Unbounded`] moves only on strict improvement and
//!   stops at the first local optimum. Plateaus end the run.
//! - [`HillClimbingPolicy::Bounded`] also takes equal-objective moves, so it
//!   can walk across plateaus; the step cap guarantees termination.
//!
//! Every iteration checks, in order: solution reached, step cap consumed
//! (bounded only), neighbors available, acceptance. `steps` counts accepted
//! moves, so a run that starts on a solution reports zero steps.

use log::{debug, trace};
use rand::Rng;

use crate::contract::{CombinatorialOptimizationProblem, Objective};
use crate::error::SearchError;
use crate::policy::HillClimbingPolicy;

/// Why a hill-climbing run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTermination {
    /// The current candidate satisfied `is_solution`.
    SolutionReached,
    /// No acceptable neighbor exists.
    LocalOptimum,
    /// The candidate had no neighbors at all.
    NoNeighbors,
    /// The bounded policy's step cap was consumed.
    StepBudgetExhausted,
}

/// Outcome of one hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbResult<C> {
    /// `is_solution` of the final candidate.
    pub success: bool,
    /// Number of moves made.
    pub steps: u64,
    /// Objective of the final candidate.
    pub objective: Objective,
    /// The final candidate.
    pub candidate: C,
    pub termination: LocalTermination,
}

/// Run hill climbing on `problem` from a fresh initial candidate.
///
/// `rng` is the only source of randomness; it is handed to the problem's
/// candidate and neighbor generators.
///
/// # Errors
///
/// Returns [`SearchError::InvalidPolicy`] for a bounded policy with a zero
/// step cap. Reaching a non-solution local optimum is not an error.
pub fn hill_climb<P, R>(
    problem: &P,
    policy: HillClimbingPolicy,
    rng: &mut R,
) -> Result<HillClimbResult<P::Configuration>, SearchError>
where
    P: CombinatorialOptimizationProblem + ?Sized,
    R: Rng + ?Sized,
{
    policy.validate()?;

    let mut current = problem.initial_candidate(rng);
    let mut current_h = problem.h(&current);
    let mut steps: u64 = 0;

    let termination = loop {
        if problem.is_solution(&current) {
            break LocalTermination::SolutionReached;
        }
        if policy.max_steps().is_some_and(|cap| steps >= cap) {
            break LocalTermination::StepBudgetExhausted;
        }

        let Some((best, best_h)) = best_neighbor(problem, &current, rng) else {
            break LocalTermination::NoNeighbors;
        };

        let accept = match policy {
            HillClimbingPolicy::Unbounded => best_h < current_h,
            HillClimbingPolicy::Bounded { .. } => best_h <= current_h,
        };
        if !accept {
            break LocalTermination::LocalOptimum;
        }

        trace!("step {}: objective {} -> {}", steps + 1, current_h, best_h);
        current = best;
        current_h = best_h;
        steps += 1;
    };

    let success = problem.is_solution(&current);
    debug!(
        "hill climbing done: {:?} success={} steps={} objective={}",
        termination, success, steps, current_h
    );

    Ok(HillClimbResult {
        success,
        steps,
        objective: current_h,
        candidate: current,
        termination,
    })
}

/// First neighbor with minimum objective, or `None` if there are no neighbors.
fn best_neighbor<P, R>(
    problem: &P,
    current: &P::Configuration,
    rng: &mut R,
) -> Option<(P::Configuration, Objective)>
where
    P: CombinatorialOptimizationProblem + ?Sized,
    R: Rng + ?Sized,
{
    let mut best: Option<(P::Configuration, Objective)> = None;
    for neighbor in problem.neighbors(current, rng) {
        let h = problem.h(&neighbor);
        let improves = match &best {
            None => true,
            Some((_, best_h)) => h < *best_h,
        };
        if improves {
            best = Some((neighbor, h));
        }
    }
    best
}
