//! Single-pass neighbor relaxation over a whole grid generation
//!
//! Each pass reads the current grid and writes a fresh snapshot, so the
//! outcome does not depend on scan direction. One pass narrows each cell
//! against its direct neighbors only; reaching a fixed point takes repeated
//! passes, one per solver step.

use crate::algorithm::bitset::TileBitset;
use crate::io::error::Result;
use crate::spatial::direction::Direction;
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::TileCatalog;

/// Result of one relaxation pass
#[derive(Debug)]
pub enum RelaxationOutcome {
    /// Every uncollapsed cell kept at least one candidate
    Relaxed(Grid),
    /// A cell lost all candidates; the partial snapshot was discarded
    Contradiction {
        /// Row-major index of the first emptied cell
        cell: usize,
    },
}

/// Tiles a neighbor in `direction` still permits for the cell it faces
///
/// Union, over the neighbor's candidates, of their adjacency towards the
/// cell (the opposite of `direction`).
pub fn allowed_by_neighbor<H>(
    neighbor: &Cell,
    direction: Direction,
    catalog: &TileCatalog<H>,
) -> TileBitset {
    let mut allowed = TileBitset::new(catalog.tile_count());
    for option in neighbor.options().iter() {
        if let Some(tile) = catalog.tile(option) {
            allowed.union_with(tile.compatible_set(direction.opposite()));
        }
    }
    allowed
}

/// Candidates of the cell at (`i`, `j`) after filtering against its neighbors
///
/// Grid-edge cells skip the directions without a neighbor.
pub fn relaxed_options<H>(grid: &Grid, i: usize, j: usize, catalog: &TileCatalog<H>) -> TileBitset {
    let Some(cell) = grid.cell(i, j) else {
        return TileBitset::new(catalog.tile_count());
    };

    let mut options = cell.options().clone();
    for direction in Direction::ALL {
        let Some(neighbor) = direction
            .neighbor(i, j, grid.dims())
            .and_then(|(ni, nj)| grid.cell(ni, nj))
        else {
            continue;
        };
        options.intersect_with(&allowed_by_neighbor(neighbor, direction, catalog));
    }
    options
}

/// Compute the next grid snapshot from the current one
///
/// Collapsed cells are copied unchanged. The first uncollapsed cell left
/// without candidates aborts the pass.
///
/// # Errors
///
/// Returns a computation error if the snapshot cannot be shaped into a grid
pub fn update_neighbors<H>(grid: &Grid, catalog: &TileCatalog<H>) -> Result<RelaxationOutcome> {
    let mut next = Vec::with_capacity(grid.len());

    for ((i, j), cell) in grid.positioned_cells() {
        if cell.is_collapsed() {
            next.push(cell.clone());
            continue;
        }

        let options = relaxed_options(grid, i, j, catalog);
        if options.is_empty() {
            return Ok(RelaxationOutcome::Contradiction {
                cell: grid.index(i, j),
            });
        }
        next.push(Cell::with_options(options));
    }

    let (dim_x, dim_y) = grid.dims();
    Ok(RelaxationOutcome::Relaxed(Grid::from_cells(
        dim_x, dim_y, next,
    )?))
}
