//! Terrain model
//!
//! Contains the coordinate convention, tile types, the terrain grid and the
//! maze carver that seeds it.

mod coord;
mod map;
mod maze;
mod tile;

pub use coord::{Coord, ORTHOGONAL};
pub use map::TerrainMap;
pub use maze::{Maze, MazeCell};
pub use tile::{TerrainType, Tile, TileSize};
