//! World contract: what the runner needs from a concrete problem on top of
//! the engine traits in `wayfind_search::contract`.
//!
//! Worlds supply domain data only (states, actions, costs, candidates).
//! Timing, aggregation and report rendering belong to the runner.

/// A concrete problem that can be named in a report.
pub trait World {
    /// Stable identifier recorded in reports (e.g. `"lights_out:3x3"`).
    ///
    /// Two worlds with equal ids must describe the same problem instance
    /// shape, so report digests stay comparable across runs.
    fn world_id(&self) -> String;
}
