//! Terrain grid

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Coord, TerrainType, Tile, TileSize};
use crate::consts::{SMALL_BLOCK_DIM, TID_WALL};
use crate::errors::MapError;

/// Tile every grid starts from before a generator or loader writes it
const UNSET: Tile = Tile::new(TileSize::ZERO, TerrainType::Wall, TID_WALL, 0);

/// Finished (or in-progress) level layout
///
/// Stored row-major; all access goes through [`Coord`] so rows and columns
/// are never transposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTerrainMap")]
pub struct TerrainMap {
    width: usize,
    height: usize,
    /// Pixels per tile edge used by the level builder
    block_size: u32,
    /// Player spawn block (only set by the layout loader)
    start_block: Coord,
    tiles: Vec<Tile>,
}

/// Unchecked wire form; tile count is validated on conversion
#[derive(Deserialize)]
struct RawTerrainMap {
    width: usize,
    height: usize,
    block_size: u32,
    start_block: Coord,
    tiles: Vec<Tile>,
}

impl TryFrom<RawTerrainMap> for TerrainMap {
    type Error = MapError;

    fn try_from(raw: RawTerrainMap) -> Result<Self, Self::Error> {
        let expected = raw
            .width
            .checked_mul(raw.height)
            .ok_or(MapError::TooLarge {
                width: raw.width,
                height: raw.height,
            })?;
        if raw.tiles.len() != expected {
            return Err(MapError::TileCount {
                expected,
                found: raw.tiles.len(),
            });
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            block_size: raw.block_size,
            start_block: raw.start_block,
            tiles: raw.tiles,
        })
    }
}

impl TerrainMap {
    /// Create a grid of unset wall tiles
    pub fn new(width: usize, height: usize, block_size: u32) -> Self {
        Self {
            width,
            height,
            block_size,
            start_block: Coord::default(),
            tiles: vec![UNSET; width * height],
        }
    }

    /// Create a grid with the default block size
    pub fn with_size(width: usize, height: usize) -> Self {
        Self::new(width, height, SMALL_BLOCK_DIM)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    /// Spawn block of a loaded layout; (0, 0) for generated maps
    pub fn start_block(&self) -> Coord {
        self.start_block
    }

    pub(crate) fn set_start_block(&mut self, c: Coord) {
        self.start_block = c;
    }

    pub fn in_bounds(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    fn index(&self, c: Coord) -> Option<usize> {
        self.in_bounds(c).then(|| c.y * self.width + c.x)
    }

    /// Tile at `c`, or `None` outside the grid
    pub fn get(&self, c: Coord) -> Option<&Tile> {
        self.index(c).map(|i| &self.tiles[i])
    }

    /// Terrain type at `c`, or `None` outside the grid
    pub fn terrain(&self, c: Coord) -> Option<TerrainType> {
        self.get(c).map(|t| t.terrain)
    }

    /// Terrain type at `c + (dx, dy)`, or `None` outside the grid
    pub fn terrain_at(&self, c: Coord, dx: i32, dy: i32) -> Option<TerrainType> {
        self.neighbor(c, dx, dy).and_then(|n| self.terrain(n))
    }

    /// Does the cell at `c + (dx, dy)` exist and have terrain `t`
    pub fn is(&self, c: Coord, dx: i32, dy: i32, t: TerrainType) -> bool {
        self.terrain_at(c, dx, dy) == Some(t)
    }

    /// Overwrite the tile at `c`; writes outside the grid are dropped
    pub fn set(&mut self, c: Coord, tile: Tile) {
        if let Some(i) = self.index(c) {
            self.tiles[i] = tile;
        }
    }

    pub(crate) fn tile_mut(&mut self, c: Coord) -> Option<&mut Tile> {
        self.index(c).map(|i| &mut self.tiles[i])
    }

    /// `c + (dx, dy)` if it lies inside the grid
    pub fn neighbor(&self, c: Coord, dx: i32, dy: i32) -> Option<Coord> {
        c.offset(dx, dy, self.width, self.height)
    }

    /// Count cells of terrain `t` within `radius_x` columns and `radius_y` rows of `c`
    ///
    /// The centre cell is never counted and cells outside the grid are absent.
    /// With `orthogonal_only`, only cells sharing the centre's row or column count.
    pub fn count_matching(
        &self,
        c: Coord,
        radius_x: i32,
        radius_y: i32,
        t: TerrainType,
        orthogonal_only: bool,
    ) -> usize {
        let mut count = 0;
        for dy in -radius_y..=radius_y {
            for dx in -radius_x..=radius_x {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if orthogonal_only && dx != 0 && dy != 0 {
                    continue;
                }
                if self.terrain_at(c, dx, dy) == Some(t) {
                    count += 1;
                }
            }
        }
        count
    }

    /// All coordinates, row by row
    pub fn coords(&self) -> impl Iterator<Item = Coord> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| Coord::new(x, y)))
    }

    /// Number of tiles with terrain `t`
    pub fn count_of(&self, t: TerrainType) -> usize {
        self.tiles.iter().filter(|tile| tile.terrain == t).count()
    }

    /// Coordinates of tiles with terrain `t`, row by row
    pub fn positions_of(&self, t: TerrainType) -> Vec<Coord> {
        self.coords()
            .filter(|&c| self.terrain(c) == Some(t))
            .collect()
    }

    /// Rows of tiles, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.width.max(1))
    }

    /// Render one character per tile, one line per row
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|t| t.terrain.symbol()));
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TerrainMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_ascii())
    }
}
