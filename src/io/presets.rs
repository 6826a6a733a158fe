//! Bundled pattern tables

use clap::ValueEnum;

use crate::io::error::Result;
use crate::spatial::tiles::{BasePattern, EdgeSocket, TileCatalog};

/// Sockets for each pattern, clockwise (up, right, down, left)
const CIRCUIT: [[&str; 4]; 13] = [
    ["AAA", "AAA", "AAA", "AAA"],
    ["BBB", "BBB", "BBB", "BBB"],
    ["BBB", "BCB", "BBB", "BBB"],
    ["BBB", "BDB", "BBB", "BDB"],
    ["ABB", "BCB", "BBA", "AAA"],
    ["ABB", "BBB", "BBB", "BBA"],
    ["BBB", "BCB", "BBB", "BCB"],
    ["BDB", "BCB", "BDB", "BCB"],
    ["BDB", "BBB", "BCB", "BBB"],
    ["BCB", "BCB", "BBB", "BCB"],
    ["BCB", "BCB", "BCB", "BCB"],
    ["BCB", "BCB", "BBB", "BBB"],
    ["BBB", "BCB", "BBB", "BCB"],
];

const KOLAM_0: [[&str; 4]; 6] = [
    ["00", "00", "00", "00"],
    ["00", "00", "01", "10"],
    ["10", "00", "01", "11"],
    ["10", "01", "11", "11"],
    ["11", "11", "11", "11"],
    ["10", "01", "10", "01"],
];

const KOLAM_1: [[&str; 4]; 5] = [
    ["000", "010", "010", "000"],
    ["010", "010", "010", "000"],
    ["010", "010", "010", "010"],
    ["000", "010", "000", "000"],
    ["010", "000", "010", "000"],
];

/// Final tile index that may not sit next to itself in the bundled sets
///
/// Counted after rotation and deduplication, so it names a different
/// pattern variant in each set.
const SELF_EXCLUDED_TILE: usize = 5;

/// Tile sets shipped with the crate
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Circuit board traces and chips
    Circuit,
    /// Dot kolam strokes on a two-character socket grid
    Kolam0,
    /// Single-line kolam strokes on a three-character socket grid
    Kolam1,
}

impl Preset {
    /// Every bundled preset, single-line kolam first
    pub const ALL: [Self; 3] = [Self::Kolam1, Self::Kolam0, Self::Circuit];

    /// Short name used for output files
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circuit => "circuit",
            Self::Kolam0 => "kolam0",
            Self::Kolam1 => "kolam1",
        }
    }

    const fn table(self) -> &'static [[&'static str; 4]] {
        match self {
            Self::Circuit => &CIRCUIT,
            Self::Kolam0 => &KOLAM_0,
            Self::Kolam1 => &KOLAM_1,
        }
    }

    /// Base patterns of the set, in table order
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a bundled row is malformed
    pub fn patterns(self) -> Result<Vec<BasePattern>> {
        BasePattern::from_table::<_, &str>(self.table())
    }

    /// Catalog of the set with its image handles
    ///
    /// Tile 5 of the expanded catalog loses its pairing with itself.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a bundled row is malformed or `images` is empty
    pub fn catalog<H: Clone>(self, images: &[H]) -> Result<TileCatalog<H>> {
        TileCatalog::build(&self.patterns()?, images)?.without_self_pair(SELF_EXCLUDED_TILE)
    }

    /// [`Preset::catalog`] using pattern indices as image handles
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if a bundled row is malformed
    pub fn indexed_catalog(self) -> Result<TileCatalog<usize>> {
        let handles: Vec<usize> = (0..self.image_count()).collect();
        self.catalog(&handles)
    }

    /// Number of tile images the set ships with
    pub const fn image_count(self) -> usize {
        self.table().len()
    }

    /// Socket the outer ring defaults to, if the set closes its border
    pub fn boundary(self) -> Option<EdgeSocket> {
        match self {
            Self::Circuit => None,
            Self::Kolam0 => Some(EdgeSocket::from("00")),
            Self::Kolam1 => Some(EdgeSocket::from("000")),
        }
    }
}
