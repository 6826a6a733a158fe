use crate::{
    algorithm::propagation::{RelaxationOutcome, update_neighbors},
    algorithm::selection::{CollapseOutcome, RandomSelector, collapse_one},
    io::configuration::{MAX_GRID_DIMENSION, MIN_GRID_DIMENSION, SolverConfig},
    io::error::{AlgorithmError, Result, invalid_parameter},
    spatial::boundary::BoundaryConstraint,
    spatial::grid::{Cell, Grid},
    spatial::symmetry::SymmetryAdapter,
    spatial::tiles::{Tile, TileCatalog},
};

/// What a single solver step did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    /// One cell was collapsed and its neighbors relaxed
    Collapsed {
        /// Row-major index of the collapsed cell
        cell: usize,
        /// Tile assigned to it
        tile: usize,
    },
    /// A cell ran out of candidates and the whole grid was rebuilt
    Contradiction {
        /// Row-major index of the emptied cell
        cell: usize,
        /// Restarts since the last reset, including this one
        restarts: usize,
    },
    /// Every cell was already collapsed; nothing changed
    AllCollapsed,
}

/// Naive wave function collapse over an edge-socket tile catalog
///
/// Owns the catalog and the current grid generation. Each [`Solver::step`]
/// collapses the lowest-entropy cell and runs one relaxation pass; any empty
/// candidate set rebuilds the whole grid from scratch.
pub struct Solver<H> {
    catalog: TileCatalog<H>,
    grid: Grid,
    boundary: Option<BoundaryConstraint>,
    symmetry: SymmetryAdapter,
    /// Rendered dimensions (`dim_x`, `dim_y`) before symmetry halving
    full_dims: (usize, usize),
    random: RandomSelector,
    max_restarts: Option<usize>,
    restarts: usize,
    total_restarts: usize,
    steps: usize,
}

impl<H> Solver<H> {
    /// Create a solver and its first grid generation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configured dimensions leave an
    /// active axis below `MIN_GRID_DIMENSION` or exceed `MAX_GRID_DIMENSION`
    pub fn new(catalog: TileCatalog<H>, config: SolverConfig) -> Result<Self> {
        let symmetry = SymmetryAdapter::new(config.mirror_x, config.mirror_y);
        let full_dims = (config.dim_x, config.dim_y);
        let (dim_x, dim_y) = validate_dims(full_dims, symmetry)?;

        let boundary = config
            .boundary
            .map(|socket| BoundaryConstraint::new(socket, &catalog));
        let grid = Grid::new(dim_x, dim_y, catalog.tile_count());

        let mut solver = Self {
            catalog,
            grid,
            boundary,
            symmetry,
            full_dims,
            random: RandomSelector::new(config.seed),
            max_restarts: config.max_restarts,
            restarts: 0,
            total_restarts: 0,
            steps: 0,
        };
        solver.start_over();
        Ok(solver)
    }

    /// Replace the random source, e.g. to share one across solvers
    #[must_use]
    pub const fn with_random(mut self, random: RandomSelector) -> Self {
        self.random = random;
        self
    }

    /// Rebuild the grid: all candidates everywhere, then the boundary rule
    fn start_over(&mut self) {
        let (dim_x, dim_y) = self.symmetry.active_dims(self.full_dims);
        self.grid = Grid::new(dim_x, dim_y, self.catalog.tile_count());

        if let Some(boundary) = &self.boundary {
            boundary.apply(&mut self.grid, self.symmetry);
        }
    }

    /// Start a fresh grid and clear the restart counter
    pub fn reset(&mut self) {
        self.restarts = 0;
        self.start_over();
    }

    /// Change the full grid dimensions; implies a reset
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` and leaves the solver untouched if the new
    /// dimensions are out of range under the current symmetry
    pub fn resize(&mut self, dim_x: usize, dim_y: usize) -> Result<()> {
        validate_dims((dim_x, dim_y), self.symmetry)?;
        self.full_dims = (dim_x, dim_y);
        self.reset();
        Ok(())
    }

    /// Grow both axes by one step (two cells while mirroring)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the grid would exceed `MAX_GRID_DIMENSION`
    pub fn grow(&mut self) -> Result<()> {
        let step = self.symmetry.resize_step();
        self.resize(self.full_dims.0 + step, self.full_dims.1 + step)
    }

    /// Shrink both axes by one step (two cells while mirroring)
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if an active axis would drop below
    /// `MIN_GRID_DIMENSION`
    pub fn shrink(&mut self) -> Result<()> {
        let step = self.symmetry.resize_step();
        let (full_x, full_y) = self.full_dims;
        match (full_x.checked_sub(step), full_y.checked_sub(step)) {
            (Some(dim_x), Some(dim_y)) => self.resize(dim_x, dim_y),
            _ => Err(invalid_parameter(
                "dimension",
                &format!("{full_x}x{full_y}"),
                &"grid is already at its minimum size",
            )),
        }
    }

    /// Toggle mirror axes; recomputes active dimensions and resets
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` and keeps the previous symmetry if halving
    /// would leave an active axis empty
    pub fn set_symmetry(&mut self, mirror_x: bool, mirror_y: bool) -> Result<()> {
        let symmetry = SymmetryAdapter::new(mirror_x, mirror_y);
        validate_dims(self.full_dims, symmetry)?;
        self.symmetry = symmetry;
        self.reset();
        Ok(())
    }

    /// Collapse one cell and relax its neighbors
    ///
    /// A no-op returning [`StepResult::AllCollapsed`] once every cell holds a
    /// tile. A contradiction in either phase rebuilds the grid and skips the
    /// rest of the step.
    ///
    /// # Errors
    ///
    /// Returns `Unsatisfiable` once contradictions exceed the restart ceiling
    pub fn step(&mut self) -> Result<StepResult> {
        if self.grid.all_collapsed() {
            return Ok(StepResult::AllCollapsed);
        }
        self.steps += 1;

        let (cell, tile) = match collapse_one(&mut self.grid, &mut self.random) {
            CollapseOutcome::Collapsed { cell, tile } => (cell, tile),
            CollapseOutcome::Contradiction { cell } => return self.recover(cell),
            CollapseOutcome::Complete => return Ok(StepResult::AllCollapsed),
        };

        match update_neighbors(&self.grid, &self.catalog)? {
            RelaxationOutcome::Relaxed(next) => {
                self.grid = next;
                if self.grid.all_collapsed() {
                    self.restarts = 0;
                }
                Ok(StepResult::Collapsed { cell, tile })
            }
            RelaxationOutcome::Contradiction { cell: emptied } => self.recover(emptied),
        }
    }

    /// Run up to `count` steps, stopping early once the grid is complete
    ///
    /// Returns the result of the last step taken.
    ///
    /// # Errors
    ///
    /// Propagates `Unsatisfiable` from [`Solver::step`]
    pub fn step_many(&mut self, count: usize) -> Result<StepResult> {
        let mut last = StepResult::AllCollapsed;
        for _ in 0..count {
            last = self.step()?;
            if last == StepResult::AllCollapsed {
                break;
            }
        }
        Ok(last)
    }

    /// Step until the grid is complete or `max_steps` is spent
    ///
    /// Returns whether the grid is complete.
    ///
    /// # Errors
    ///
    /// Propagates `Unsatisfiable` from [`Solver::step`]
    pub fn run(&mut self, max_steps: usize) -> Result<bool> {
        for _ in 0..max_steps {
            if self.step()? == StepResult::AllCollapsed {
                return Ok(true);
            }
        }
        Ok(self.grid.all_collapsed())
    }

    fn recover(&mut self, cell: usize) -> Result<StepResult> {
        self.restarts += 1;
        self.total_restarts += 1;
        self.start_over();

        if self.max_restarts.is_some_and(|ceiling| self.restarts > ceiling) {
            return Err(AlgorithmError::Unsatisfiable {
                restarts: self.restarts,
                grid_dimensions: self.grid.dims(),
            });
        }

        Ok(StepResult::Contradiction {
            cell,
            restarts: self.restarts,
        })
    }

    /// Current grid generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Catalog the solver draws tiles from
    pub const fn catalog(&self) -> &TileCatalog<H> {
        &self.catalog
    }

    /// Boundary rule applied on every restart, if any
    pub const fn boundary(&self) -> Option<&BoundaryConstraint> {
        self.boundary.as_ref()
    }

    /// Active mirror axes
    pub const fn symmetry(&self) -> SymmetryAdapter {
        self.symmetry
    }

    /// Rendered dimensions before symmetry halving
    pub const fn full_dims(&self) -> (usize, usize) {
        self.full_dims
    }

    /// Solved dimensions (`dim_x`, `dim_y`)
    pub fn dims(&self) -> (usize, usize) {
        self.grid.dims()
    }

    /// Restarts since the last reset or completion
    pub const fn restarts(&self) -> usize {
        self.restarts
    }

    /// Restarts over the solver's lifetime
    pub const fn total_restarts(&self) -> usize {
        self.total_restarts
    }

    /// Steps that did work (excludes no-op calls on a complete grid)
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Whether every cell holds a tile
    pub fn is_complete(&self) -> bool {
        self.grid.all_collapsed()
    }

    /// Tile assigned to column `i`, row `j`, once collapsed
    pub fn tile_at(&self, i: usize, j: usize) -> Option<&Tile<H>> {
        self.grid
            .cell(i, j)
            .and_then(Cell::chosen_tile)
            .and_then(|index| self.catalog.tile(index))
    }
}

/// Active dimensions for `full` under `symmetry`, if both are in range
fn validate_dims(full: (usize, usize), symmetry: SymmetryAdapter) -> Result<(usize, usize)> {
    let (full_x, full_y) = full;
    if full_x > MAX_GRID_DIMENSION || full_y > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "dimension",
            &format!("{full_x}x{full_y}"),
            &format!("must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }

    let (dim_x, dim_y) = symmetry.active_dims(full);
    if dim_x < MIN_GRID_DIMENSION || dim_y < MIN_GRID_DIMENSION {
        return Err(invalid_parameter(
            "dimension",
            &format!("{full_x}x{full_y}"),
            &format!("solved area {dim_x}x{dim_y} is below {MIN_GRID_DIMENSION} per axis"),
        ));
    }

    Ok((dim_x, dim_y))
}
