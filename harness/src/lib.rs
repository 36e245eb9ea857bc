//! Wayfind Harness: concrete worlds and run orchestration for the engines.
//!
//! The harness loads problem instances, runs them through
//! `wayfind_search` (`best_first_search`, `hill_climb`) and packages the
//! outcome as a report with text, JSON and digest forms.
//!
//! The harness does NOT implement search logic; it delegates to the engines.
//! Worlds provide domain data only; the runner owns timing and aggregation.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod contract;
pub mod loading;
pub mod report;
pub mod runner;
pub mod worlds;
