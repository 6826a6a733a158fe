//! Outer-ring socket restriction applied when a grid generation starts

use crate::algorithm::bitset::TileBitset;
use crate::spatial::direction::Direction;
use crate::spatial::grid::Grid;
use crate::spatial::symmetry::SymmetryAdapter;
use crate::spatial::tiles::{EdgeSocket, TileCatalog};

/// Border rule: every outward-facing edge must carry `socket`
///
/// Holds one allowed-tile mask per outward direction, precomputed once per
/// catalog so reapplying the rule on every restart is a plain intersection.
#[derive(Clone, Debug)]
pub struct BoundaryConstraint {
    socket: EdgeSocket,
    allowed: [TileBitset; 4],
}

impl BoundaryConstraint {
    /// Precompute the allowed tiles for each outward direction
    pub fn new<H>(socket: EdgeSocket, catalog: &TileCatalog<H>) -> Self {
        let allowed = Direction::ALL.map(|direction| catalog.tiles_with_edge(direction, &socket));
        Self { socket, allowed }
    }

    /// Socket the outer ring is restricted to
    pub const fn socket(&self) -> &EdgeSocket {
        &self.socket
    }

    /// Tiles whose edge facing `direction` carries the socket
    pub const fn allowed(&self, direction: Direction) -> &TileBitset {
        match direction {
            Direction::Up => &self.allowed[0],
            Direction::Right => &self.allowed[1],
            Direction::Down => &self.allowed[2],
            Direction::Left => &self.allowed[3],
        }
    }

    /// Intersect every border cell with the masks of the edges it exposes
    ///
    /// The far edge of a mirrored axis is left open because the renderer
    /// rebuilds it by reflecting the solved half.
    pub fn apply(&self, grid: &mut Grid, symmetry: SymmetryAdapter) {
        let (dim_x, dim_y) = grid.dims();
        for j in 0..dim_y {
            for i in 0..dim_x {
                let exposed = Direction::ALL.into_iter().filter(|&direction| {
                    direction.neighbor(i, j, (dim_x, dim_y)).is_none()
                        && !symmetry.exempts(direction)
                });

                let Some(cell) = grid.cell_mut(i, j) else {
                    continue;
                };
                for direction in exposed {
                    cell.restrict(self.allowed(direction));
                }
            }
        }
    }
}
