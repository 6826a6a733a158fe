//! Edge-socket wave function collapse for 2-D tile grids
//!
//! A small table of base patterns with directional edge sockets is expanded
//! into its distinct rotations and their adjacency rules. The solver then
//! collapses one lowest-entropy cell per step and relaxes its neighbors,
//! rebuilding the whole grid whenever a cell runs out of candidates.

#![forbid(unsafe_code)]

/// Solver implementation including selection, relaxation and restarts
pub mod algorithm;
/// Configuration, bundled catalogs, rendering and command-line host
pub mod io;
/// Tile catalog, grid state and the boundary and symmetry rules
pub mod spatial;

pub use algorithm::{Solver, StepResult};
pub use io::error::{AlgorithmError, Result};
