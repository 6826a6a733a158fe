//! Spatial data structures for the collapse solver
//!
//! This module contains spatial-related functionality including:
//! - Directions and edge order
//! - Tile catalog construction
//! - Grid and cell state
//! - Boundary and symmetry rules applied to a grid generation

/// Boundary socket restriction on the outer ring
pub mod boundary;
/// Cardinal directions in clockwise edge order
pub mod direction;
/// Grid state and cell candidate sets
pub mod grid;
/// Mirrored solving of half grids
pub mod symmetry;
/// Edge sockets, tile variants and catalog construction
pub mod tiles;

pub use direction::Direction;
pub use grid::{Cell, Grid};
pub use tiles::{BasePattern, EdgeSocket, Tile, TileCatalog};
