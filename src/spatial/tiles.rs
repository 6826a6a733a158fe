//! Tile catalog construction from edge-socket pattern tables
//!
//! Expands each base pattern into its distinct quarter-turn rotations,
//! deduplicates the resulting variants by edge signature and derives the
//! directional adjacency lists the solver filters cell options with.

use std::collections::HashSet;
use std::fmt;

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{AlgorithmError, Result, invalid_catalog};
use crate::spatial::direction::Direction;

/// Connection type of one tile edge
///
/// Sockets are read clockwise around the tile, so two facing edges are
/// traversed in opposite order: they fit when one is the exact reversal
/// of the other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeSocket(String);

impl EdgeSocket {
    /// Wrap a socket label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Raw socket label
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Socket with its characters in reverse order
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self(self.0.chars().rev().collect())
    }

    /// Whether `self` equals the reversal of `other`
    pub fn is_reverse_of(&self, other: &Self) -> bool {
        self.0.chars().eq(other.0.chars().rev())
    }
}

impl From<&str> for EdgeSocket {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for EdgeSocket {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for EdgeSocket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Four sockets in clockwise order (up, right, down, left)
pub type EdgeTuple = [EdgeSocket; 4];

/// Socket at the edge facing `direction`
pub const fn edge_at(edges: &EdgeTuple, direction: Direction) -> &EdgeSocket {
    match direction {
        Direction::Up => &edges[0],
        Direction::Right => &edges[1],
        Direction::Down => &edges[2],
        Direction::Left => &edges[3],
    }
}

/// Rotate an edge tuple clockwise by `quarter_turns`
///
/// The rotated edge at position `p` is the original edge at `(p - k) mod 4`.
pub fn rotate_edges(edges: &EdgeTuple, quarter_turns: usize) -> EdgeTuple {
    let start = (4 - quarter_turns % 4) % 4;
    let mut source = edges.iter().cycle().skip(start);
    std::array::from_fn(|_| source.next().cloned().unwrap_or_default())
}

/// Un-rotated entry of a pattern table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasePattern {
    edges: EdgeTuple,
    forbid_self_adjacency: bool,
}

impl BasePattern {
    /// Create a pattern from four sockets (up, right, down, left)
    pub fn new<S: Into<EdgeSocket>>(edges: [S; 4]) -> Self {
        Self {
            edges: edges.map(Into::into),
            forbid_self_adjacency: false,
        }
    }

    /// Create a pattern from a socket list of unchecked length
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the list does not hold exactly four sockets
    pub fn from_sockets<S: AsRef<str>>(sockets: &[S]) -> Result<Self> {
        match sockets {
            [up, right, down, left] => Ok(Self::new([
                up.as_ref(),
                right.as_ref(),
                down.as_ref(),
                left.as_ref(),
            ])),
            _ => Err(invalid_catalog(&format!(
                "pattern has {} edge sockets, expected 4",
                sockets.len()
            ))),
        }
    }

    /// Parse a whole pattern table, one socket list per row
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` naming the first row without four sockets
    pub fn from_table<R, S>(table: &[R]) -> Result<Vec<Self>>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        table
            .iter()
            .enumerate()
            .map(|(row, sockets)| {
                Self::from_sockets(sockets.as_ref())
                    .map_err(|err| invalid_catalog(&format!("row {row}: {err}")))
            })
            .collect()
    }

    /// Keep variants of this pattern from neighboring each other
    #[must_use]
    pub const fn forbidding_self_adjacency(mut self) -> Self {
        self.forbid_self_adjacency = true;
        self
    }

    /// Edge sockets of the un-rotated pattern
    pub const fn edges(&self) -> &EdgeTuple {
        &self.edges
    }

    /// Whether variants of this pattern may sit next to each other
    pub const fn forbids_self_adjacency(&self) -> bool {
        self.forbid_self_adjacency
    }
}

/// A concrete rotated variant with its adjacency lists
#[derive(Clone, Debug)]
pub struct Tile<H> {
    edges: EdgeTuple,
    base_index: usize,
    index: usize,
    rotation: usize,
    image: H,
    compatible: [Vec<usize>; 4],
    compatible_sets: [TileBitset; 4],
}

impl<H> Tile<H> {
    /// Edge sockets in clockwise order
    pub const fn edges(&self) -> &EdgeTuple {
        &self.edges
    }

    /// Socket on the edge facing `direction`
    pub const fn edge(&self, direction: Direction) -> &EdgeSocket {
        edge_at(&self.edges, direction)
    }

    /// Position of the source pattern in the pattern table
    pub const fn base_index(&self) -> usize {
        self.base_index
    }

    /// Dense catalog index
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Clockwise quarter turns applied to the base image
    pub const fn rotation(&self) -> usize {
        self.rotation
    }

    /// Host image handle of the source pattern
    pub const fn image(&self) -> &H {
        &self.image
    }

    /// Indices of tiles allowed as the neighbor in `direction`
    pub fn compatible(&self, direction: Direction) -> &[usize] {
        match direction {
            Direction::Up => &self.compatible[0],
            Direction::Right => &self.compatible[1],
            Direction::Down => &self.compatible[2],
            Direction::Left => &self.compatible[3],
        }
    }

    /// Same as [`Tile::compatible`] as a bitset
    pub const fn compatible_set(&self, direction: Direction) -> &TileBitset {
        match direction {
            Direction::Up => &self.compatible_sets[0],
            Direction::Right => &self.compatible_sets[1],
            Direction::Down => &self.compatible_sets[2],
            Direction::Left => &self.compatible_sets[3],
        }
    }
}

/// Rotation surviving deduplication, before indices and adjacency exist
struct Variant {
    edges: EdgeTuple,
    base_index: usize,
    rotation: usize,
}

/// Immutable set of tile variants and their adjacency rules
#[derive(Clone, Debug)]
pub struct TileCatalog<H> {
    tiles: Vec<Tile<H>>,
    pattern_count: usize,
}

impl TileCatalog<usize> {
    /// Build a catalog whose image handle is the pattern index itself
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the pattern table is empty
    pub fn indexed(patterns: &[BasePattern]) -> Result<Self> {
        let handles: Vec<usize> = (0..patterns.len()).collect();
        Self::build(patterns, &handles)
    }
}

impl<H: Clone> TileCatalog<H> {
    /// Expand base patterns into variants and derive adjacency
    ///
    /// Pattern `b` uses `images[b % images.len()]`, so fewer images than
    /// patterns wrap around.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCatalog` if the pattern table or the image set is empty
    pub fn build(patterns: &[BasePattern], images: &[H]) -> Result<Self> {
        if patterns.is_empty() {
            return Err(invalid_catalog(&"pattern table is empty"));
        }
        if images.is_empty() {
            return Err(invalid_catalog(&"no tile images supplied"));
        }

        let variants = Self::expand_variants(patterns);
        let adjacency = Self::derive_adjacency(&variants, patterns);
        let tile_count = variants.len();

        let tiles = variants
            .into_iter()
            .zip(adjacency)
            .enumerate()
            .map(|(index, (variant, compatible))| {
                let image = images
                    .get(variant.base_index % images.len())
                    .cloned()
                    .ok_or_else(|| invalid_catalog(&"image index out of range"))?;
                let compatible_sets = compatible
                    .each_ref()
                    .map(|list| TileBitset::from_indices(list, tile_count));
                Ok(Tile {
                    edges: variant.edges,
                    base_index: variant.base_index,
                    index,
                    rotation: variant.rotation,
                    image,
                    compatible,
                    compatible_sets,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            tiles,
            pattern_count: patterns.len(),
        })
    }

    fn expand_variants(patterns: &[BasePattern]) -> Vec<Variant> {
        let mut rotated = Vec::with_capacity(patterns.len() * 4);
        for (base_index, pattern) in patterns.iter().enumerate() {
            // Rotationally symmetric patterns yield fewer than four variants
            let mut own = HashSet::new();
            for rotation in 0..4 {
                let edges = rotate_edges(pattern.edges(), rotation);
                if own.insert(edges.clone()) {
                    rotated.push(Variant {
                        edges,
                        base_index,
                        rotation,
                    });
                }
            }
        }

        // Different patterns may still rotate into the same signature
        let mut seen = HashSet::new();
        rotated
            .into_iter()
            .filter(|variant| seen.insert(variant.edges.clone()))
            .collect()
    }

    fn derive_adjacency(variants: &[Variant], patterns: &[BasePattern]) -> Vec<[Vec<usize>; 4]> {
        variants
            .iter()
            .map(|tile| {
                let mut compatible: [Vec<usize>; 4] = Default::default();
                for (other_index, other) in variants.iter().enumerate() {
                    let isolated = tile.base_index == other.base_index
                        && patterns
                            .get(tile.base_index)
                            .is_some_and(BasePattern::forbids_self_adjacency);
                    if isolated {
                        continue;
                    }

                    for (direction, list) in Direction::ALL.iter().zip(compatible.iter_mut()) {
                        let facing = edge_at(&other.edges, direction.opposite());
                        if facing.is_reverse_of(edge_at(&tile.edges, *direction)) {
                            list.push(other_index);
                        }
                    }
                }
                compatible
            })
            .collect()
    }
}

impl<H> TileCatalog<H> {
    /// Number of tile variants
    pub const fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of base patterns the catalog was built from
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// All tile variants in index order
    pub fn tiles(&self) -> &[Tile<H>] {
        &self.tiles
    }

    /// Tile variant by index
    pub fn tile(&self, index: usize) -> Option<&Tile<H>> {
        self.tiles.get(index)
    }

    /// Adjacency list of `index` towards `direction`, empty for unknown tiles
    pub fn compatible(&self, index: usize, direction: Direction) -> &[usize] {
        self.tiles
            .get(index)
            .map_or(&[], |tile| tile.compatible(direction))
    }

    /// Drop the pairing of tile `index` with itself in every direction
    ///
    /// Pairs with other tiles are kept, so adjacency stays symmetric.
    ///
    /// # Errors
    ///
    /// Returns `InvalidTileIndex` if `index` is not in the catalog
    pub fn without_self_pair(mut self, index: usize) -> Result<Self> {
        let max_tiles = self.tile_count();
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or(AlgorithmError::InvalidTileIndex { index, max_tiles })?;

        for (list, set) in tile.compatible.iter_mut().zip(tile.compatible_sets.iter_mut()) {
            list.retain(|&other| other != index);
            set.remove(index);
        }
        Ok(self)
    }

    /// Tiles whose edge facing `direction` equals `socket`
    pub fn tiles_with_edge(&self, direction: Direction, socket: &EdgeSocket) -> TileBitset {
        let mut matching = TileBitset::new(self.tile_count());
        for tile in &self.tiles {
            if tile.edge(direction) == socket {
                matching.insert(tile.index);
            }
        }
        matching
    }
}
