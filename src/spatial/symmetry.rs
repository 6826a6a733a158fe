//! Mirrored solving: only one half of a mirrored axis is solved

use crate::spatial::direction::Direction;

/// Active mirror axes
///
/// The solver keeps the full (rendered) dimensions and asks the adapter which
/// part of them is actually solved. A mirrored axis solves `full / 2` cells,
/// and the renderer reflects that half onto the other one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymmetryAdapter {
    mirror_x: bool,
    mirror_y: bool,
}

impl SymmetryAdapter {
    /// Adapter for the given mirror axes
    pub const fn new(mirror_x: bool, mirror_y: bool) -> Self {
        Self { mirror_x, mirror_y }
    }

    /// Left half is reflected onto the right half
    pub const fn mirror_x(self) -> bool {
        self.mirror_x
    }

    /// Top half is reflected onto the bottom half
    pub const fn mirror_y(self) -> bool {
        self.mirror_y
    }

    /// Whether any axis is mirrored
    pub const fn is_active(self) -> bool {
        self.mirror_x || self.mirror_y
    }

    /// Solved dimensions for the given full dimensions
    ///
    /// Halving rounds down, so an odd full extent on a mirrored axis renders
    /// one cell short: full 5 solves 2 cells and draws 4.
    pub const fn active_dims(self, full: (usize, usize)) -> (usize, usize) {
        let dim_x = if self.mirror_x { full.0 / 2 } else { full.0 };
        let dim_y = if self.mirror_y { full.1 / 2 } else { full.1 };
        (dim_x, dim_y)
    }

    /// Whether the boundary rule skips the grid edge facing `direction`
    pub const fn exempts(self, direction: Direction) -> bool {
        match direction {
            Direction::Right => self.mirror_x,
            Direction::Down => self.mirror_y,
            Direction::Up | Direction::Left => false,
        }
    }

    /// Change in full dimensions for one grow or shrink step
    ///
    /// Mirrored halves grow by one cell, which is two rendered cells; the
    /// other axis follows so the picture keeps its aspect.
    pub const fn resize_step(self) -> usize {
        if self.is_active() { 2 } else { 1 }
    }
}
