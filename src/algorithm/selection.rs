//! Lowest-entropy cell selection and random tile assignment

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::spatial::grid::{Cell, Grid};

/// Seeded random source shared by every stochastic choice of a solver
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Wrap an already constructed generator
    pub const fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    /// Uniform index below `len`, `None` for an empty range
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.rng.random_range(0..len))
    }

    /// Uniform element of `items`
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        self.choose_index(items.len())
            .and_then(|index| items.get(index).copied())
    }
}

/// Result of one collapse attempt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollapseOutcome {
    /// The cell at row-major `cell` was fixed to `tile`
    Collapsed {
        /// Row-major cell index
        cell: usize,
        /// Assigned tile index
        tile: usize,
    },
    /// The selected cell had no candidates left
    Contradiction {
        /// Row-major cell index
        cell: usize,
    },
    /// Every cell was already collapsed
    Complete,
}

/// Row-major indices of uncollapsed cells with the fewest candidates
///
/// Returned in ascending order so a seeded tie-break is reproducible.
pub fn lowest_entropy_cells(grid: &Grid) -> Vec<usize> {
    let mut minimum = usize::MAX;
    let mut candidates = Vec::new();

    for (index, cell) in grid.cells().enumerate() {
        if cell.is_collapsed() {
            continue;
        }
        let count = cell.candidate_count();
        if count < minimum {
            minimum = count;
            candidates.clear();
        }
        if count == minimum {
            candidates.push(index);
        }
    }

    candidates
}

/// Collapse one lowest-entropy cell to a uniformly chosen candidate
///
/// Ties between equally constrained cells are broken uniformly at random.
/// A selected cell without candidates is reported as a contradiction and
/// left for the caller to recover from.
pub fn collapse_one(grid: &mut Grid, random: &mut RandomSelector) -> CollapseOutcome {
    let Some(index) = random.choose(&lowest_entropy_cells(grid)) else {
        return CollapseOutcome::Complete;
    };
    let Some(cell) = grid.cell_at_mut(index) else {
        return CollapseOutcome::Complete;
    };

    let pick = random
        .choose_index(cell.candidate_count())
        .and_then(|position| cell.options().nth(position));

    pick.map_or(CollapseOutcome::Contradiction { cell: index }, |tile| {
        *cell = Cell::collapsed_to(cell.options().capacity(), tile);
        CollapseOutcome::Collapsed { cell: index, tile }
    })
}
