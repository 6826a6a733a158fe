//! Cardinal directions in clockwise edge order

/// One of the four tile edges, listed clockwise starting at the top
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row `j - 1`
    Up,
    /// Towards column `i + 1`
    Right,
    /// Towards row `j + 1`
    Down,
    /// Towards column `i - 1`
    Left,
}

impl Direction {
    /// All directions in edge order (up, right, down, left)
    pub const ALL: [Self; 4] = [Self::Up, Self::Right, Self::Down, Self::Left];

    /// Position of this direction in a clockwise edge tuple
    pub const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Right => 1,
            Self::Down => 2,
            Self::Left => 3,
        }
    }

    /// The facing direction
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }

    /// Neighbor of `(i, j)` in this direction, if it lies inside `dims`
    pub const fn neighbor(self, i: usize, j: usize, dims: (usize, usize)) -> Option<(usize, usize)> {
        let (dim_x, dim_y) = dims;
        match self {
            Self::Up if j > 0 => Some((i, j - 1)),
            Self::Right if i + 1 < dim_x => Some((i + 1, j)),
            Self::Down if j + 1 < dim_y => Some((i, j + 1)),
            Self::Left if i > 0 => Some((i - 1, j)),
            _ => None,
        }
    }
}
