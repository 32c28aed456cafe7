//! Terrain tile types

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::consts::{
    DOOR_WIDTH, LADDER_WIDTH, SMALL_BLOCK_DIM, TID_BACKDROP, TID_BIG_DOOR, TID_DOOR, TID_EXIT,
    TID_LADDER, TID_LOCKED_DOOR, TID_NONE, TID_POLE, TID_WALL,
};

/// Terrain type of a grid cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum TerrainType {
    #[default]
    Empty = 0,
    Wall = 1,
    Ladder = 2,
    /// Ladder drawn as a single pole
    Pole = 3,
    Door = 4,
    LockedDoor = 5,
    /// Door two blocks tall
    BigDoor = 6,
    Exit = 7,
    Key = 8,
    /// Powerup or treasure spawn point
    ItemPlaceholder = 9,
    /// Weapon spawn point
    ItemPlaceholder2 = 10,
    BrickBackdrop = 11,
}

impl TerrainType {
    /// Check if this is any kind of door
    pub const fn is_door(&self) -> bool {
        matches!(
            self,
            TerrainType::Door | TerrainType::LockedDoor | TerrainType::BigDoor
        )
    }

    /// Check if this is climbable
    pub const fn is_ladder(&self) -> bool {
        matches!(self, TerrainType::Ladder | TerrainType::Pole)
    }

    /// Plain terrain: open space, solid wall, ladder or a spawn marker
    pub const fn is_plain(&self) -> bool {
        matches!(
            self,
            TerrainType::Empty
                | TerrainType::Wall
                | TerrainType::Ladder
                | TerrainType::ItemPlaceholder
                | TerrainType::ItemPlaceholder2
        )
    }

    /// Get the display character for this terrain type
    pub const fn symbol(&self) -> char {
        match self {
            TerrainType::Empty => ' ',
            TerrainType::Wall => '#',
            TerrainType::Ladder => 'l',
            TerrainType::Pole => 'p',
            TerrainType::Door => 'D',
            TerrainType::LockedDoor => 'L',
            TerrainType::BigDoor => 'B',
            TerrainType::Exit => 'E',
            TerrainType::Key => 'k',
            TerrainType::ItemPlaceholder => 'i',
            TerrainType::ItemPlaceholder2 => 'w',
            TerrainType::BrickBackdrop => '.',
        }
    }
}

/// Render size of a tile in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileSize {
    pub width: u32,
    pub height: u32,
}

impl TileSize {
    pub const ZERO: TileSize = TileSize::new(0, 0);
    pub const BLOCK: TileSize = TileSize::new(SMALL_BLOCK_DIM, SMALL_BLOCK_DIM);

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A single terrain cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Tile {
    /// Size of the object the level builder places here
    pub size: TileSize,

    /// Terrain type
    pub terrain: TerrainType,

    /// Texture id
    pub texture_id: u16,

    /// Color/variant id
    pub variant_id: u16,
}

impl Tile {
    pub const fn new(size: TileSize, terrain: TerrainType, texture_id: u16, variant_id: u16) -> Self {
        Self {
            size,
            terrain,
            texture_id,
            variant_id,
        }
    }

    /// Open space
    pub const fn empty() -> Self {
        Self::new(TileSize::ZERO, TerrainType::Empty, TID_NONE, 0)
    }

    /// Full block of wall
    pub const fn wall() -> Self {
        Self::new(TileSize::BLOCK, TerrainType::Wall, TID_WALL, 0)
    }

    pub const fn ladder() -> Self {
        Self::new(
            TileSize::new(LADDER_WIDTH, SMALL_BLOCK_DIM),
            TerrainType::Ladder,
            TID_LADDER,
            0,
        )
    }

    pub const fn pole() -> Self {
        Self::new(
            TileSize::new(LADDER_WIDTH, SMALL_BLOCK_DIM),
            TerrainType::Pole,
            TID_POLE,
            0,
        )
    }

    pub const fn door(block_height: u32) -> Self {
        Self::new(
            TileSize::new(DOOR_WIDTH, block_height),
            TerrainType::Door,
            TID_DOOR,
            0,
        )
    }

    pub const fn locked_door(block_height: u32) -> Self {
        Self::new(
            TileSize::new(DOOR_WIDTH, block_height),
            TerrainType::LockedDoor,
            TID_LOCKED_DOOR,
            0,
        )
    }

    /// Door spanning two blocks; the cell below it is left empty
    pub const fn big_door(block_height: u32) -> Self {
        Self::new(
            TileSize::new(DOOR_WIDTH, block_height * 2),
            TerrainType::BigDoor,
            TID_BIG_DOOR,
            0,
        )
    }

    pub const fn exit() -> Self {
        Self::new(TileSize::BLOCK, TerrainType::Exit, TID_EXIT, 0)
    }

    pub const fn key() -> Self {
        Self::new(TileSize::ZERO, TerrainType::Key, TID_NONE, 0)
    }

    pub const fn marker(terrain: TerrainType) -> Self {
        Self::new(TileSize::ZERO, terrain, TID_NONE, 0)
    }

    pub const fn backdrop() -> Self {
        Self::new(TileSize::BLOCK, TerrainType::BrickBackdrop, TID_BACKDROP, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_symbols_are_unique() {
        let mut seen = std::collections::HashSet::new();
        for t in TerrainType::iter() {
            assert!(seen.insert(t.symbol()), "duplicate symbol for {}", t);
        }
    }

    #[test]
    fn test_door_classes() {
        assert!(TerrainType::Door.is_door());
        assert!(TerrainType::BigDoor.is_door());
        assert!(TerrainType::LockedDoor.is_door());
        assert!(!TerrainType::Exit.is_door());
        assert!(!TerrainType::Door.is_plain());
        assert!(TerrainType::Ladder.is_plain());
    }

    #[test]
    fn test_big_door_is_two_blocks_tall() {
        let door = Tile::big_door(40);
        assert_eq!(door.size, TileSize::new(DOOR_WIDTH, 80));
        assert_eq!(door.terrain, TerrainType::BigDoor);
    }

    #[test]
    fn test_default_tile_is_empty() {
        assert_eq!(Tile::default(), Tile::empty());
    }
}
