//! Wayfind Search: generic best-first graph search and hill climbing.
//!
//! This crate provides the two search engines and the contracts they
//! consume. It knows nothing about concrete problems, instance files or
//! reporting; those live in `wayfind_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! wayfind_search  ←  wayfind_harness
//! (engines,           (worlds, loading,
//!  contracts)          reports, CLI)
//! ```
//!
//! # Key types
//!
//! - [`StateSpace`]: states, successors, action costs and a heuristic
//! - [`CombinatorialOptimizationProblem`]: candidates, neighbors, objective
//! - [`best_first_search`]: weighted best-first search (uniform-cost, greedy, A*)
//! - [`hill_climb`]: greedy local search with two termination policies
//! - [`BestFirstPolicy`] / [`HillClimbingPolicy`]: engine configuration
//! - [`replay_actions`]: independent path verification
//!
//! [`StateSpace`]: contract::StateSpace
//! [`CombinatorialOptimizationProblem`]: contract::CombinatorialOptimizationProblem
//! [`best_first_search`]: search::best_first_search
//! [`hill_climb`]: local::hill_climb
//! [`BestFirstPolicy`]: policy::BestFirstPolicy
//! [`HillClimbingPolicy`]: policy::HillClimbingPolicy
//! [`replay_actions`]: replay::replay_actions

#![forbid(unsafe_code)]

pub mod contract;
pub mod error;
pub mod frontier;
pub mod local;
pub mod node;
pub mod policy;
pub mod replay;
pub mod search;
