//! Solver constants and runtime configuration defaults

use crate::spatial::tiles::EdgeSocket;

/// Default grid dimension on both axes
pub const DEFAULT_DIMENSION: usize = 5;

/// Smallest active dimension the solver accepts on either axis
pub const MIN_GRID_DIMENSION: usize = 1;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Unsatisfiable catalog/boundary combinations would otherwise restart forever
/// Restarts tolerated between resets before reporting the grid unsatisfiable
pub const DEFAULT_MAX_RESTARTS: usize = 10_000;

/// Default step budget for a batch run
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Steps taken per batch in fast mode
pub const FAST_MODE_STEPS: usize = 200;

/// Edge length in pixels of one rendered tile
pub const DEFAULT_TILE_PIXELS: u32 = 64;

// Keeps the rendered canvas within what a PNG encoder will take in memory
/// Largest accepted tile edge length in pixels
pub const MAX_TILE_PIXELS: u32 = 1024;

/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_result";

/// Runtime parameters for a solver instance
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Full grid width in cells, before symmetry halving
    pub dim_x: usize,
    /// Full grid height in cells, before symmetry halving
    pub dim_y: usize,
    /// Socket every outward-facing border edge must carry
    pub boundary: Option<EdgeSocket>,
    /// Solve the left half only and mirror it horizontally
    pub mirror_x: bool,
    /// Solve the top half only and mirror it vertically
    pub mirror_y: bool,
    /// Seed for the shared random source
    pub seed: u64,
    /// Restart ceiling, `None` restarts without limit
    pub max_restarts: Option<usize>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            dim_x: DEFAULT_DIMENSION,
            dim_y: DEFAULT_DIMENSION,
            boundary: None,
            mirror_x: false,
            mirror_y: false,
            seed: DEFAULT_SEED,
            max_restarts: Some(DEFAULT_MAX_RESTARTS),
        }
    }
}

impl SolverConfig {
    /// Configuration for a square grid with default settings otherwise
    pub fn square(dimension: usize) -> Self {
        Self {
            dim_x: dimension,
            dim_y: dimension,
            ..Self::default()
        }
    }

    /// Replace the boundary socket
    #[must_use]
    pub fn with_boundary(mut self, boundary: Option<EdgeSocket>) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the random seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
