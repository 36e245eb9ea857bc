//! Search policy types.
//!
//! Policies are plain values validated once before a run starts.

use crate::error::SearchError;

/// Weighting and budget configuration for best-first graph search.
///
/// Nodes are ordered by `g_weight * g + h_weight * h`.
///
/// | weights | algorithm |
/// |---|---|
/// | (1, 0) | uniform-cost search |
/// | (0, 1) | greedy best-first search |
/// | (1, 1) | A* |
/// | other | weighted best-first search |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestFirstPolicy {
    /// Multiplier for the cumulative path cost.
    pub g_weight: u64,
    /// Multiplier for the heuristic estimate.
    pub h_weight: u64,
    /// Optional cap on expansions. `None` runs until a goal is found or the
    /// open list is exhausted.
    pub max_expansions: Option<u64>,
}

impl BestFirstPolicy {
    /// Arbitrary non-negative weights, no expansion budget.
    #[must_use]
    pub fn weighted(g_weight: u64, h_weight: u64) -> Self {
        Self {
            g_weight,
            h_weight,
            max_expansions: None,
        }
    }

    /// Uniform-cost search: `(1, 0)`.
    #[must_use]
    pub fn uniform_cost() -> Self {
        Self::weighted(1, 0)
    }

    /// Greedy best-first search: `(0, 1)`.
    #[must_use]
    pub fn greedy() -> Self {
        Self::weighted(0, 1)
    }

    /// A*: `(1, 1)`.
    #[must_use]
    pub fn astar() -> Self {
        Self::weighted(1, 1)
    }

    /// Same weights with an expansion budget.
    #[must_use]
    pub fn with_max_expansions(self, max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..self
        }
    }

    /// Whether the weighting is the uniform-cost special case.
    #[must_use]
    pub fn is_uniform_cost(&self) -> bool {
        self.h_weight == 0 && self.g_weight > 0
    }

    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for an expansion budget of zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be positive when set".into(),
            });
        }
        Ok(())
    }
}

impl Default for BestFirstPolicy {
    fn default() -> Self {
        Self::uniform_cost()
    }
}

/// Termination policy for hill climbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HillClimbingPolicy {
    /// Move only to strictly improving neighbors; stop at the first local optimum.
    #[default]
    Unbounded,
    /// Move to the best neighbor unless it is strictly worse (plateau moves are
    /// taken), stopping after `max_steps` moves.
    Bounded { max_steps: u64 },
}

impl HillClimbingPolicy {
    /// Default step cap of the bounded policy.
    pub const DEFAULT_MAX_STEPS: u64 = 100;

    /// Bounded policy with [`Self::DEFAULT_MAX_STEPS`].
    #[must_use]
    pub fn bounded_default() -> Self {
        Self::Bounded {
            max_steps: Self::DEFAULT_MAX_STEPS,
        }
    }

    /// The step cap, if any.
    #[must_use]
    pub fn max_steps(&self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::Bounded { max_steps } => Some(*max_steps),
        }
    }

    /// Validate the policy before a run.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] for a bounded policy with a zero cap.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_steps() == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "bounded hill climbing needs max_steps > 0".into(),
            });
        }
        Ok(())
    }
}
