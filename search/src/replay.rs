//! Path replay verification.
//!
//! Re-walks an action sequence from the initial state using only `succ`
//! lookups and checks that it ends in a goal. The search engine is not
//! involved, so a replay independently confirms a returned [`Path`].

use crate::contract::{Cost, StateSpace};
use crate::error::ReplayError;
use crate::search::Path;

/// States visited while replaying a path, with the recomputed total cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay<S> {
    /// Initial state followed by the state after each action.
    pub states: Vec<S>,
    /// Sum of `cost(action)` over the replayed actions.
    pub cost: Cost,
}

/// Replay `actions` from `space.init()`.
///
/// At each step the action must equal the action of some successor pair of
/// the current state; the first matching pair is followed.
///
/// # Errors
///
/// - [`ReplayError::ActionNotApplicable`] if an action has no matching successor.
/// - [`ReplayError::EndsOutsideGoal`] if the final state is not a goal.
pub fn replay_actions<S>(
    space: &S,
    actions: &[S::Action],
) -> Result<Replay<S::State>, ReplayError>
where
    S: StateSpace + ?Sized,
    S::Action: PartialEq,
{
    let mut state = space.init();
    let mut states = vec![state.clone()];
    let mut cost: Cost = 0;

    for (step, action) in actions.iter().enumerate() {
        let next = space
            .succ(&state)
            .into_iter()
            .find(|pair| pair.action == *action)
            .ok_or(ReplayError::ActionNotApplicable { step })?;
        cost = cost.saturating_add(space.cost(&next.action));
        state = next.state;
        states.push(state.clone());
    }

    if !space.is_goal(&state) {
        return Err(ReplayError::EndsOutsideGoal {
            steps: actions.len(),
        });
    }

    Ok(Replay { states, cost })
}

/// Replay a [`Path`] and check that its recorded cost matches the replayed cost.
///
/// Returns `Ok(true)` when the path is valid and its cost agrees.
///
/// # Errors
///
/// Propagates the errors of [`replay_actions`].
pub fn verify_path<S>(space: &S, path: &Path<S::Action>) -> Result<bool, ReplayError>
where
    S: StateSpace + ?Sized,
    S::Action: PartialEq,
{
    let replay = replay_actions(space, &path.actions)?;
    Ok(replay.cost == path.cost)
}
