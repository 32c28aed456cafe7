//! sg-core: level generation engine for shaftgen
//!
//! Carves a perfect maze over an odd-sized lattice, then reshapes it through a
//! fixed sequence of terrain passes into a grid of annotated tiles (walls,
//! ladders, doors, exit, items and keys). A static ASCII layout loader produces
//! the same tile model without any randomness.
//!
//! This crate has no rendering or game-object knowledge; the level builder
//! that consumes a [`terrain::TerrainMap`] decides how tiles become objects.

pub mod config;
pub mod errors;
pub mod generation;
pub mod layout;
pub mod terrain;

mod consts;
mod rng;

pub use config::{ExtraPasses, GeneratorOptions, OptionsError};
pub use consts::*;
pub use errors::{Feature, GenerationError, LayoutError, MapError};
pub use generation::{LevelGenerator, create_terrain_map};
pub use layout::{load_layout, load_layout_file};
pub use rng::{GameRng, RandomSource};
pub use terrain::{Coord, TerrainMap, TerrainType, Tile, TileSize};
