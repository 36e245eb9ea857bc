//! Shared helpers for wayfind benchmark suites.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wayfind_harness::worlds::lights_out::{LightsGrid, LightsOut, Toggle};

/// A solvable `rows × cols` lights-out instance.
///
/// Built by applying `toggles` random toggles to the dark grid, so a
/// solution of at most `toggles` actions exists.
#[must_use]
pub fn scrambled_lights_out(rows: usize, cols: usize, toggles: usize, seed: u64) -> LightsOut {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = LightsGrid::dark(rows, cols);
    for _ in 0..toggles {
        let toggle = Toggle {
            row: rng.random_range(0..rows),
            col: rng.random_range(0..cols),
        };
        grid = grid.toggled(toggle);
    }
    LightsOut::new(grid)
}
