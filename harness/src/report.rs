//! Run reports: text rendering, JSON rendering and determinism digests.
//!
//! Every report has a text form (the [`fmt::Display`] impl, matching the
//! classic console output of the search drivers) and a JSON form built with
//! `serde_json::json!`. The JSON form splits into a deterministic part and
//! optional wall-clock fields; only the deterministic part is digested.
//!
//! # Digest format
//!
//! ```text
//! sha256( DOMAIN_REPORT || compact_json(deterministic_json) )  →  "sha256:<hex>"
//! ```
//!
//! `serde_json` objects are `BTreeMap`-backed, so the compact rendering has
//! sorted keys and is byte-stable for equal reports.

use std::fmt;
use std::time::Duration;

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use wayfind_search::contract::Cost;
use wayfind_search::policy::{BestFirstPolicy, HillClimbingPolicy};
use wayfind_search::search::{SearchStats, TerminationReason};

/// Domain prefix for report digests.
pub const DOMAIN_REPORT: &[u8] = b"WAYFIND::REPORT::V1\0";

/// Shared JSON surface of all reports.
pub trait Report {
    /// JSON fields that are identical for identical inputs.
    fn deterministic_json(&self) -> Value;

    /// Full JSON form. Defaults to the deterministic part.
    fn to_json(&self) -> Value {
        self.deterministic_json()
    }

    /// Digest of [`Report::deterministic_json`].
    fn digest(&self) -> String {
        report_digest(&self.deterministic_json())
    }
}

/// Domain-separated SHA-256 of the compact JSON rendering of `value`.
#[must_use]
pub fn report_digest(value: &Value) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_REPORT);
    hasher.update(value.to_string().as_bytes());
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

// ---------------------------------------------------------------------------
// Best-first search
// ---------------------------------------------------------------------------

/// A solution as recorded in a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionSummary {
    /// Actions rendered with their `Display` impl, in application order.
    pub actions: Vec<String>,
    pub cost: Cost,
}

/// Outcome of one best-first search run on a world.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub world_id: String,
    pub policy: BestFirstPolicy,
    pub stats: SearchStats,
    pub termination: TerminationReason,
    /// `None` when no goal was reached.
    pub solution: Option<SolutionSummary>,
    /// Wall-clock time spent inside the search engine.
    pub elapsed: Duration,
}

impl SolveReport {
    /// Number of expanded states.
    #[must_use]
    pub fn expanded(&self) -> u64 {
        self.stats.expanded
    }
}

impl Report for SolveReport {
    fn deterministic_json(&self) -> Value {
        let solution = self.solution.as_ref().map_or(Value::Null, |s| {
            json!({
                "actions": s.actions,
                "length": s.actions.len(),
                "cost": s.cost,
            })
        });
        json!({
            "kind": "best_first",
            "world_id": self.world_id,
            "policy": {
                "g_weight": self.policy.g_weight,
                "h_weight": self.policy.h_weight,
                "max_expansions": self.policy.max_expansions,
            },
            "termination": termination_json(self.termination),
            "stats": {
                "expanded": self.stats.expanded,
                "generated": self.stats.generated,
                "stale_discarded": self.stats.stale_discarded,
                "pruned_unreachable": self.stats.pruned_unreachable,
                "frontier_high_water": self.stats.frontier_high_water,
            },
            "solution": solution,
        })
    }

    fn to_json(&self) -> Value {
        let mut value = self.deterministic_json();
        if let Value::Object(map) = &mut value {
            map.insert(
                "elapsed_seconds".into(),
                json!(self.elapsed.as_secs_f64()),
            );
        }
        value
    }
}

fn termination_json(termination: TerminationReason) -> Value {
    match termination {
        TerminationReason::GoalReached => json!({ "reason": "goal_reached" }),
        TerminationReason::FrontierExhausted => json!({ "reason": "frontier_exhausted" }),
        TerminationReason::ExpansionBudgetExceeded { limit } => {
            json!({ "reason": "expansion_budget_exceeded", "limit": limit })
        }
    }
}

impl fmt::Display for SolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} seconds search time", self.elapsed.as_secs_f64())?;
        writeln!(f, "number of expanded nodes: {}", self.stats.expanded)?;
        match &self.solution {
            None => {
                if let TerminationReason::ExpansionBudgetExceeded { limit } = self.termination {
                    writeln!(f, "expansion budget of {limit} nodes exhausted")?;
                }
                writeln!(f, "no solution")
            }
            Some(solution) => {
                writeln!(f, "Solution:")?;
                for action in &solution.actions {
                    writeln!(f, "{action}")?;
                }
                writeln!(f, "Solution length: {}", solution.actions.len())?;
                writeln!(f, "Solution cost: {}", solution.cost)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Hill climbing trials
// ---------------------------------------------------------------------------

/// Aggregate of repeated hill-climbing runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialSummary {
    pub world_id: String,
    pub policy: HillClimbingPolicy,
    pub runs: u64,
    pub successes: u64,
    /// Moves summed over all runs.
    pub total_steps: u64,
    /// Moves summed over successful runs only.
    pub successful_steps: u64,
}

#[allow(clippy::cast_precision_loss)]
fn ratio(num: u64, den: u64) -> Option<f64> {
    (den > 0).then(|| num as f64 / den as f64)
}

impl TrialSummary {
    /// Fraction of runs that reached a solution, in `[0, 1]`.
    #[must_use]
    pub fn success_rate(&self) -> f64 {
        ratio(self.successes, self.runs).unwrap_or(0.0)
    }

    /// Average moves per run.
    #[must_use]
    pub fn mean_steps(&self) -> f64 {
        ratio(self.total_steps, self.runs).unwrap_or(0.0)
    }

    /// Average moves per successful run, `None` if no run succeeded.
    #[must_use]
    pub fn mean_steps_successful(&self) -> Option<f64> {
        ratio(self.successful_steps, self.successes)
    }
}

impl Report for TrialSummary {
    fn deterministic_json(&self) -> Value {
        json!({
            "kind": "hill_climbing",
            "world_id": self.world_id,
            "policy": hill_climbing_policy_json(self.policy),
            "runs": self.runs,
            "successes": self.successes,
            "total_steps": self.total_steps,
            "successful_steps": self.successful_steps,
            "success_rate": self.success_rate(),
            "mean_steps": self.mean_steps(),
            "mean_steps_successful": self.mean_steps_successful(),
        })
    }
}

fn hill_climbing_policy_json(policy: HillClimbingPolicy) -> Value {
    match policy {
        HillClimbingPolicy::Unbounded => json!({ "kind": "unbounded" }),
        HillClimbingPolicy::Bounded { max_steps } => {
            json!({ "kind": "bounded", "max_steps": max_steps })
        }
    }
}

impl fmt::Display for TrialSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Percentage of successful runs: {}%",
            self.success_rate() * 100.0
        )?;
        writeln!(f, "Average number of steps: {}", self.mean_steps())?;
        match self.mean_steps_successful() {
            Some(mean) => writeln!(f, "Average number of steps in successful runs: {mean}"),
            None => writeln!(f, "Average number of steps in successful runs: n/a"),
        }
    }
}

// ---------------------------------------------------------------------------
// State-space inspection
// ---------------------------------------------------------------------------

/// A state rendered for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateDump {
    pub state: String,
    pub is_goal: bool,
}

/// One successor pair rendered for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuccessorDump {
    pub action: String,
    pub cost: Cost,
    pub state: String,
}

/// One random-walk step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStep {
    pub action: String,
    pub reached: StateDump,
}

/// Structured walk through a state space, used to sanity-check a world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub world_id: String,
    pub initial: StateDump,
    pub initial_successors: Vec<SuccessorDump>,
    /// The first successor of the initial state and its own successors.
    pub first_successor: Option<(StateDump, Vec<SuccessorDump>)>,
    pub walk: Vec<WalkStep>,
    /// The walk hit a state without successors before its full length.
    pub walk_stopped_early: bool,
}

impl Report for Inspection {
    fn deterministic_json(&self) -> Value {
        let first = self.first_successor.as_ref().map_or(Value::Null, |(s, succ)| {
            json!({ "state": state_json(s), "successors": successors_json(succ) })
        });
        let walk: Vec<Value> = self
            .walk
            .iter()
            .map(|step| json!({ "action": step.action, "state": state_json(&step.reached) }))
            .collect();
        json!({
            "kind": "inspection",
            "world_id": self.world_id,
            "initial": state_json(&self.initial),
            "initial_successors": successors_json(&self.initial_successors),
            "first_successor": first,
            "walk": walk,
            "walk_stopped_early": self.walk_stopped_early,
        })
    }
}

fn state_json(dump: &StateDump) -> Value {
    json!({ "state": dump.state, "is_goal": dump.is_goal })
}

fn successors_json(successors: &[SuccessorDump]) -> Value {
    successors
        .iter()
        .map(|s| json!({ "action": s.action, "cost": s.cost, "state": s.state }))
        .collect()
}

fn write_state(f: &mut fmt::Formatter<'_>, dump: &StateDump) -> fmt::Result {
    writeln!(f, "{}", dump.state)?;
    writeln!(
        f,
        "Is it a goal state? {}",
        if dump.is_goal { "yes" } else { "no" }
    )?;
    writeln!(f)
}

fn write_successors(f: &mut fmt::Formatter<'_>, successors: &[SuccessorDump]) -> fmt::Result {
    for (i, s) in successors.iter().enumerate() {
        writeln!(f, "successor #{i}:")?;
        writeln!(f, "    action:    {}", s.action)?;
        writeln!(f, "    cost:      {}", s.cost)?;
        writeln!(f, "    new state: {}", s.state)?;
    }
    Ok(())
}

impl fmt::Display for Inspection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dumping initial state...")?;
        write_state(f, &self.initial)?;
        writeln!(f, "Dumping successor pairs of initial state...")?;
        write_successors(f, &self.initial_successors)?;
        if let Some((state, successors)) = &self.first_successor {
            writeln!(f, "Pick first successor:")?;
            write_state(f, state)?;
            writeln!(f, "Dumping successor pairs of this state...")?;
            write_successors(f, successors)?;
        }
        writeln!(f, "Perform a random walk from this state...")?;
        for step in &self.walk {
            writeln!(f, "picking action: {}", step.action)?;
            write_state(f, &step.reached)?;
        }
        if self.walk_stopped_early {
            writeln!(f, "no successors: stopping random walk")?;
        }
        Ok(())
    }
}
