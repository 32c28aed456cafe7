//! Optional cosmetic passes, run after keys are placed when enabled in
//! [`crate::ExtraPasses`]

use log::debug;

use crate::consts::{LEDGE_HEIGHT, SMALL_BLOCK_DIM, TID_TALL_WALL, TID_WIDE_WALL};
use crate::terrain::{Coord, TerrainMap, TerrainType, Tile, TileSize};

/// Open up row 1, keeping walls that frame a door below them
pub fn erase_top_walls(map: &mut TerrainMap) {
    let mut erased = 0;

    for x in 1..map.width().saturating_sub(1) {
        let c = Coord::new(x, 1);
        if map.is(c, 0, 0, TerrainType::Wall)
            && !map.is(c, 0, 1, TerrainType::BigDoor)
            && !map.is(c, 0, 2, TerrainType::BigDoor)
            && !map.is(c, 0, 1, TerrainType::Door)
        {
            map.set(c, Tile::empty());
            erased += 1;
        }
    }

    debug!("erased {} top walls", erased);
}

/// Flatten the wall capping a ladder into a thin ledge
pub fn squish_ladder_end_platforms(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    let ledge = Tile::new(
        TileSize::new(SMALL_BLOCK_DIM, LEDGE_HEIGHT),
        TerrainType::Wall,
        TID_TALL_WALL,
        1,
    );

    for y in 2..h.saturating_sub(2) {
        for x in 1..w.saturating_sub(1) {
            let c = Coord::new(x, y);
            let plain = |dy| map.terrain_at(c, 0, dy).is_some_and(|t| t.is_plain());
            if map.is(c, 0, 0, TerrainType::Wall)
                && map.is(c, 0, 1, TerrainType::Ladder)
                && plain(-1)
                && plain(1)
            {
                map.set(c, ledge);
            }
        }
    }
}

fn is_full_wall(map: &TerrainMap, c: Coord) -> bool {
    map.get(c)
        .is_some_and(|t| t.terrain == TerrainType::Wall && t.size == TileSize::BLOCK)
}

/// Merge neighbouring full wall blocks to cut the object count
///
/// Horizontal pairs become one double-width block, then the remaining
/// vertical pairs become one double-height block. The absorbed cell is left
/// empty.
pub fn condense_wall_count(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    let wide = Tile::new(
        TileSize::new(SMALL_BLOCK_DIM * 2, SMALL_BLOCK_DIM),
        TerrainType::Wall,
        TID_WIDE_WALL,
        0,
    );
    let tall = Tile::new(
        TileSize::new(SMALL_BLOCK_DIM, SMALL_BLOCK_DIM * 2),
        TerrainType::Wall,
        TID_TALL_WALL,
        0,
    );
    let before = map.count_of(TerrainType::Wall);

    for x in 1..w.saturating_sub(1) {
        for y in 1..h.saturating_sub(1) {
            let (c, right) = (Coord::new(x, y), Coord::new(x + 1, y));
            if is_full_wall(map, c) && is_full_wall(map, right) {
                map.set(c, wide);
                map.set(right, Tile::empty());
            }
        }
    }

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let (c, below) = (Coord::new(x, y), Coord::new(x, y + 1));
            if is_full_wall(map, c) && is_full_wall(map, below) {
                map.set(c, tall);
                map.set(below, Tile::empty());
            }
        }
    }

    debug!(
        "condensed walls from {} to {}",
        before,
        map.count_of(TerrainType::Wall)
    );
}
