//! Command-line interface for solving a bundled tile set into a PNG

use crate::algorithm::executor::Solver;
use crate::io::configuration::{
    DEFAULT_DIMENSION, DEFAULT_MAX_RESTARTS, DEFAULT_MAX_STEPS, DEFAULT_SEED, DEFAULT_TILE_PIXELS,
    FAST_MODE_STEPS, MAX_TILE_PIXELS, OUTPUT_SUFFIX, SolverConfig,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{export_png, load_tile_images, render_grid, synthesize_tile_images};
use crate::io::presets::Preset;
use crate::io::progress::SolveProgress;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilecollapse")]
#[command(
    author,
    version,
    about = "Generate tile grids by edge-socket wave function collapse"
)]
/// Command-line arguments for the tile grid generator
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Bundled tile set to solve with
    #[arg(short, long, value_enum, default_value_t = Preset::Kolam1)]
    pub preset: Preset,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Grid width in cells (implies square if height not specified)
    #[arg(short = 'w', long, default_value_t = DEFAULT_DIMENSION)]
    pub width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long)]
    pub height: Option<usize>,

    /// Solve the left half only and mirror it onto the right
    #[arg(short = 'x', long)]
    pub mirror_x: bool,

    /// Solve the top half only and mirror it onto the bottom
    #[arg(short = 'y', long)]
    pub mirror_y: bool,

    /// Ignore the tile set's border socket
    #[arg(long)]
    pub no_boundary: bool,

    /// Directory holding `0.png`, `1.png`, ... (glyphs are drawn when absent)
    #[arg(short, long, value_name = "DIR")]
    pub tiles: Option<PathBuf>,

    /// Rendered tile edge length in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_PIXELS)]
    pub tile_size: u32,

    /// Output PNG path (defaults to `<preset>_result.png`)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum solver steps before giving up
    #[arg(short = 'n', long, default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Restarts tolerated before the grid is declared unsatisfiable
    #[arg(short = 'r', long, default_value_t = DEFAULT_MAX_RESTARTS)]
    pub max_restarts: usize,

    /// Restart without limit
    #[arg(long)]
    pub no_restart_limit: bool,

    /// Take many steps between progress updates
    #[arg(short, long)]
    pub fast: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Full grid dimensions requested on the command line
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height.unwrap_or(self.width))
    }

    /// Steps taken between progress updates
    pub const fn steps_per_update(&self) -> usize {
        if self.fast { FAST_MODE_STEPS } else { 1 }
    }

    /// Solver configuration assembled from the arguments
    pub fn solver_config(&self) -> SolverConfig {
        let (dim_x, dim_y) = self.dimensions();
        SolverConfig {
            dim_x,
            dim_y,
            boundary: if self.no_boundary {
                None
            } else {
                self.preset.boundary()
            },
            mirror_x: self.mirror_x,
            mirror_y: self.mirror_y,
            seed: self.seed,
            max_restarts: (!self.no_restart_limit).then_some(self.max_restarts),
        }
    }

    /// Where the rendered grid is written
    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}{OUTPUT_SUFFIX}.png", self.preset.name()))
        })
    }
}

/// Outcome of one command-line run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Whether every cell was collapsed
    pub completed: bool,
    /// Solver steps taken
    pub steps: usize,
    /// Grid restarts over the whole run
    pub restarts: usize,
    /// Written PNG
    pub output: PathBuf,
}

/// Builds the catalog, drives the solver and exports the result
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Solve the configured grid and write it as PNG
    ///
    /// An incomplete grid is still rendered, with pending cells outlined.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Tile images cannot be loaded
    /// - The grid dimensions are out of range
    /// - The restart ceiling is exceeded
    /// - The PNG cannot be written
    pub fn run(&self) -> Result<RunSummary> {
        if !(1..=MAX_TILE_PIXELS).contains(&self.cli.tile_size) {
            return Err(invalid_parameter(
                "tile_size",
                &self.cli.tile_size,
                &format!("must be between 1 and {MAX_TILE_PIXELS} pixels"),
            ));
        }

        let patterns = self.cli.preset.patterns()?;
        let images = match &self.cli.tiles {
            Some(dir) => load_tile_images(dir, self.cli.preset.image_count(), self.cli.tile_size)?,
            None => synthesize_tile_images(&patterns, self.cli.tile_size),
        };
        let handles: Vec<usize> = (0..images.len()).collect();
        let catalog = self.cli.preset.catalog(&handles)?;
        let mut solver = Solver::new(catalog, self.cli.solver_config())?;

        let progress = if self.cli.should_show_progress() {
            SolveProgress::new(self.cli.preset.name(), solver.grid().len())
        } else {
            SolveProgress::hidden()
        };

        let batch = self.cli.steps_per_update();
        while !solver.is_complete() && solver.steps() < self.cli.max_steps {
            let remaining = self.cli.max_steps - solver.steps();
            solver.step_many(batch.min(remaining))?;
            progress.update(solver.grid().collapsed_count(), solver.total_restarts());
        }
        let completed = solver.is_complete();
        progress.finish(completed);

        let output = self.cli.output_path();
        let rendered = render_grid(&solver, &images, self.cli.tile_size)?;
        export_png(&rendered, &output)?;

        // Allow print for user feedback on an unfinished grid
        #[allow(clippy::print_stderr)]
        if !completed && !self.cli.quiet {
            eprintln!(
                "Stopped after {} steps with {} of {} cells collapsed",
                solver.steps(),
                solver.grid().collapsed_count(),
                solver.grid().len()
            );
        }

        Ok(RunSummary {
            completed,
            steps: solver.steps(),
            restarts: solver.total_restarts(),
            output,
        })
    }
}
