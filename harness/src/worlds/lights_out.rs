//! `LightsOut`: the grid-toggle puzzle as a [`StateSpace`].
//!
//! A state is a `rows × cols` grid of lights. Toggling a cell flips it and
//! its orthogonal neighbors. The goal is the all-off grid.
//!
//! # Costs
//!
//! Every toggle starts at cost 5 and is one cheaper for touching the first or
//! last row, and one cheaper again for touching the first or last column.
//! A toggle therefore never costs less than the number of lights it flips,
//! which makes the lit-cell count an admissible and consistent heuristic.

use std::fmt;

use wayfind_search::contract::{ActionStatePair, Cost, StateSpace};

use crate::contract::World;

/// Base cost of a toggle away from every edge.
const BASE_TOGGLE_COST: Cost = 5;

/// A grid of lights in row-major order (`true` = on).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LightsGrid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl LightsGrid {
    /// The all-off `rows × cols` grid.
    #[must_use]
    pub fn dark(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Build a grid from rows the loader has already checked to be of equal
    /// length.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub(crate) fn from_rows(rows: &[Vec<bool>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == cols),
            "all rows must have {cols} columns"
        );
        Self {
            rows: rows.len(),
            cols,
            cells: rows.concat(),
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the light at `(row, col)` is on.
    #[must_use]
    pub fn is_on(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Number of lights that are on.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }

    /// Copy of this grid with `toggle` applied.
    #[must_use]
    pub fn toggled(&self, toggle: Toggle) -> Self {
        let mut next = self.clone();
        for (row, col) in toggle.affected_cells(self.rows, self.cols) {
            let idx = row * self.cols + col;
            next.cells[idx] = !next.cells[idx];
        }
        next
    }
}

impl fmt::Display for LightsGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.is_on(row, col) { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Toggle the light at `(row, col)` and its orthogonal neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toggle {
    pub row: usize,
    pub col: usize,
}

impl Toggle {
    /// Cells flipped by this toggle on a `rows × cols` grid.
    fn affected_cells(self, rows: usize, cols: usize) -> impl Iterator<Item = (usize, usize)> {
        let Toggle { row, col } = self;
        let up = row.checked_sub(1).map(|r| (r, col));
        let down = (row + 1 < rows).then_some((row + 1, col));
        let left = col.checked_sub(1).map(|c| (row, c));
        let right = (col + 1 < cols).then_some((row, col + 1));
        std::iter::once((row, col)).chain([up, down, left, right].into_iter().flatten())
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Toggle ({}, {})", self.row, self.col)
    }
}

/// The lights-out state space for one initial grid.
#[derive(Debug, Clone)]
pub struct LightsOut {
    initial: LightsGrid,
    /// One toggle per cell, row-major, with its precomputed cost.
    toggles: Vec<(Toggle, Cost)>,
}

impl LightsOut {
    #[must_use]
    pub fn new(initial: LightsGrid) -> Self {
        let (rows, cols) = (initial.rows, initial.cols);
        let toggles = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Toggle { row, col }))
            .map(|t| (t, toggle_cost(t, rows, cols)))
            .collect();
        Self { initial, toggles }
    }

    #[must_use]
    pub fn initial(&self) -> &LightsGrid {
        &self.initial
    }
}

impl World for LightsOut {
    fn world_id(&self) -> String {
        format!("lights_out:{}x{}", self.initial.rows, self.initial.cols)
    }
}

fn toggle_cost(toggle: Toggle, rows: usize, cols: usize) -> Cost {
    let mut cost = BASE_TOGGLE_COST;
    if toggle.row == 0 || toggle.row + 1 == rows {
        cost -= 1;
    }
    if toggle.col == 0 || toggle.col + 1 == cols {
        cost -= 1;
    }
    cost
}

impl StateSpace for LightsOut {
    type State = LightsGrid;
    type Action = Toggle;

    fn init(&self) -> LightsGrid {
        self.initial.clone()
    }

    fn is_goal(&self, state: &LightsGrid) -> bool {
        state.cells.iter().all(|&on| !on)
    }

    fn succ(&self, state: &LightsGrid) -> Vec<ActionStatePair<Toggle, LightsGrid>> {
        self.toggles
            .iter()
            .map(|&(toggle, _)| ActionStatePair::new(toggle, state.toggled(toggle)))
            .collect()
    }

    fn cost(&self, action: &Toggle) -> Cost {
        toggle_cost(*action, self.initial.rows, self.initial.cols)
    }

    fn h(&self, state: &LightsGrid) -> Cost {
        state.lit_count() as Cost
    }
}
