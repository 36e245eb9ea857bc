//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. A search that starts
//! always finishes with a structured result; "no solution" is expressed via
//! [`crate::search::TerminationReason`] or
//! [`crate::local::HillClimbResult::success`], never as an error.

/// Typed failure for pre-flight policy validation.
///
/// Returned before any state is expanded or any candidate is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The policy carries a budget or cap that can never make progress.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => write!(f, "invalid search policy: {detail}"),
        }
    }
}

impl std::error::Error for SearchError {}

/// Failure while replaying an action sequence against a state space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The action at `step` is not among the successors of the state reached so far.
    ActionNotApplicable { step: usize },
    /// All actions applied, but the final state is not a goal.
    EndsOutsideGoal { steps: usize },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ActionNotApplicable { step } => {
                write!(f, "action at step {step} is not applicable")
            }
            Self::EndsOutsideGoal { steps } => {
                write!(f, "path of {steps} actions does not end in a goal state")
            }
        }
    }
}

impl std::error::Error for ReplayError {}
