//! `Queens`: N-queens placement as a [`CombinatorialOptimizationProblem`].
//!
//! A placement puts exactly one queen in each row; the configuration records
//! the column of each row's queen. The objective counts attacking pairs
//! (shared column or shared diagonal). A local move relocates one queen
//! within its row.

use std::fmt;

use rand::Rng;
use wayfind_search::contract::{CombinatorialOptimizationProblem, Objective};

use crate::contract::World;

/// Board size of the classic puzzle.
pub const DEFAULT_SIZE: usize = 8;

/// One queen per row; `columns[row]` is that queen's column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    columns: Vec<usize>,
}

impl Placement {
    /// Wrap a column-per-row vector.
    #[must_use]
    pub fn new(columns: Vec<usize>) -> Self {
        Self { columns }
    }

    #[must_use]
    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    /// Number of attacking queen pairs.
    #[must_use]
    pub fn conflicts(&self) -> usize {
        let n = self.columns.len();
        (0..n)
            .flat_map(|i| (i + 1..n).map(move |j| (i, j)))
            .filter(|&(i, j)| attacks(i, self.columns[i], j, self.columns[j]))
            .count()
    }
}

fn attacks(row_a: usize, col_a: usize, row_b: usize, col_b: usize) -> bool {
    col_a == col_b || row_a.abs_diff(row_b) == col_a.abs_diff(col_b)
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.columns.len();
        let border = "-".repeat(n);
        writeln!(f, " {border} ")?;
        for &queen in &self.columns {
            f.write_str("|")?;
            for col in 0..n {
                f.write_str(if col == queen { "X" } else { " " })?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, " {border} ")
    }
}

/// N-queens on an `n × n` board.
#[derive(Debug, Clone)]
pub struct Queens {
    n: usize,
    start: Option<Placement>,
}

impl Queens {
    /// Random initial placements on an `n × n` board.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self { n, start: None }
    }

    /// Always start from `start`. The board size is taken from the placement.
    #[must_use]
    pub fn with_start(start: Placement) -> Self {
        Self {
            n: start.columns.len(),
            start: Some(start),
        }
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.n
    }
}

impl World for Queens {
    fn world_id(&self) -> String {
        format!("queens:{}", self.n)
    }
}

impl Default for Queens {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl CombinatorialOptimizationProblem for Queens {
    type Configuration = Placement;

    fn initial_candidate<R: Rng + ?Sized>(&self, rng: &mut R) -> Placement {
        if let Some(start) = &self.start {
            return start.clone();
        }
        let columns = (0..self.n).map(|_| rng.random_range(0..self.n)).collect();
        Placement { columns }
    }

    fn neighbors<R: Rng + ?Sized>(&self, conf: &Placement, _rng: &mut R) -> Vec<Placement> {
        let mut out = Vec::with_capacity(self.n * self.n.saturating_sub(1));
        for row in 0..self.n {
            for col in 0..self.n {
                if col == conf.columns[row] {
                    continue;
                }
                let mut columns = conf.columns.clone();
                columns[row] = col;
                out.push(Placement { columns });
            }
        }
        out
    }

    fn h(&self, conf: &Placement) -> Objective {
        Objective::try_from(conf.conflicts()).unwrap_or(Objective::MAX)
    }

    fn is_solution(&self, conf: &Placement) -> bool {
        self.h(conf) == 0
    }
}
