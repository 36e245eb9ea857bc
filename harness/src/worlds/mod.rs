//! Problem worlds run by the harness.

pub mod lights_out;
pub mod queens;
