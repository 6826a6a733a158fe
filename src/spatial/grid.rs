//! Grid and cell state for the collapse solver
//!
//! A grid generation is a dense `dim_y x dim_x` array of cells addressed
//! row-major (`i + j * dim_x`). Generations are never patched across a
//! reset: restarting, resizing or toggling symmetry builds a new grid.

use ndarray::Array2;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, computation_error};

/// One grid position with its remaining candidate tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    collapsed: bool,
    options: TileBitset,
}

impl Cell {
    /// Uncollapsed cell allowing every tile of a catalog
    pub fn new(tile_count: usize) -> Self {
        Self {
            collapsed: false,
            options: TileBitset::all(tile_count),
        }
    }

    /// Uncollapsed cell restricted to `options`
    pub const fn with_options(options: TileBitset) -> Self {
        Self {
            collapsed: false,
            options,
        }
    }

    /// Cell fixed to a single tile
    pub fn collapsed_to(tile_count: usize, tile: usize) -> Self {
        Self {
            collapsed: true,
            options: TileBitset::single(tile_count, tile),
        }
    }

    /// Whether a tile has been assigned
    pub const fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    /// The assigned tile, only once collapsed
    pub fn chosen_tile(&self) -> Option<usize> {
        if self.collapsed {
            self.options.nth(0)
        } else {
            None
        }
    }

    /// Number of remaining candidates
    pub fn candidate_count(&self) -> usize {
        self.options.count()
    }

    /// Remaining candidates
    pub const fn options(&self) -> &TileBitset {
        &self.options
    }

    /// Restrict the candidates to those also present in `allowed`
    pub fn restrict(&mut self, allowed: &TileBitset) {
        self.options.intersect_with(allowed);
    }
}

/// Dense cell array owned by the solver
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Fresh grid where every cell allows every tile
    pub fn new(dim_x: usize, dim_y: usize, tile_count: usize) -> Self {
        Self {
            cells: Array2::from_elem((dim_y, dim_x), Cell::new(tile_count)),
        }
    }

    /// Grid from row-major cells
    ///
    /// # Errors
    ///
    /// Returns a computation error if `cells` does not hold `dim_x * dim_y` entries
    pub fn from_cells(dim_x: usize, dim_y: usize, cells: Vec<Cell>) -> Result<Self> {
        let cells = Array2::from_shape_vec((dim_y, dim_x), cells)
            .map_err(|err| computation_error("grid snapshot", &err))?;
        Ok(Self { cells })
    }

    /// Grid width in cells
    pub fn dim_x(&self) -> usize {
        self.cells.ncols()
    }

    /// Grid height in cells
    pub fn dim_y(&self) -> usize {
        self.cells.nrows()
    }

    /// Dimensions as (`dim_x`, `dim_y`)
    pub fn dims(&self) -> (usize, usize) {
        (self.dim_x(), self.dim_y())
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of column `i`, row `j`
    pub fn index(&self, i: usize, j: usize) -> usize {
        i + j * self.dim_x()
    }

    /// Cell at column `i`, row `j`
    pub fn cell(&self, i: usize, j: usize) -> Option<&Cell> {
        self.cells.get((j, i))
    }

    /// Mutable cell at column `i`, row `j`
    pub fn cell_mut(&mut self, i: usize, j: usize) -> Option<&mut Cell> {
        self.cells.get_mut((j, i))
    }

    /// Cell at a row-major index
    pub fn cell_at(&self, index: usize) -> Option<&Cell> {
        let dim_x = self.dim_x();
        if dim_x == 0 {
            return None;
        }
        self.cell(index % dim_x, index / dim_x)
    }

    /// Mutable cell at a row-major index
    pub fn cell_at_mut(&mut self, index: usize) -> Option<&mut Cell> {
        let dim_x = self.dim_x();
        if dim_x == 0 {
            return None;
        }
        self.cell_mut(index % dim_x, index / dim_x)
    }

    /// Cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Cells with their (`i`, `j`) position in row-major order
    pub fn positioned_cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells.indexed_iter().map(|((j, i), cell)| ((i, j), cell))
    }

    /// Whether every cell has been assigned a tile
    pub fn all_collapsed(&self) -> bool {
        self.cells.iter().all(Cell::is_collapsed)
    }

    /// Number of collapsed cells
    pub fn collapsed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_collapsed()).count()
    }
}
