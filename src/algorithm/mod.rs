/// Fixed-capacity tile index sets for cell options and adjacency masks
pub mod bitset;
/// Solver state machine: stepping, restarts, resizing and symmetry
pub mod executor;
/// Single-pass neighbor relaxation
pub mod propagation;
/// Lowest-entropy cell selection and seeded random choice
pub mod selection;

pub use executor::{Solver, StepResult};
