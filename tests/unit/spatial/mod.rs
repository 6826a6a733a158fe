pub mod grid;
pub mod symmetry;
