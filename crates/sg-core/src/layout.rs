//! Static ASCII layouts
//!
//! A layout is a 32x14 character grid, read row by row after dropping
//! newlines, tabs and NULs:
//!
//! | char | tile            |
//! |------|-----------------|
//! | `#`  | wall            |
//! | `l`  | ladder          |
//! | `p`  | pole            |
//! | `.`  | brick backdrop  |
//! | `D`  | door            |
//! | `S`  | player start    |
//!
//! Anything else is empty space. Only the interior is read; the outer ring is
//! left as unset wall for the level builder.

use std::fs;
use std::path::Path;

use log::debug;

use crate::consts::{LAYOUT_HEIGHT, LAYOUT_WIDTH, SMALL_BLOCK_DIM, TID_BACKDROP};
use crate::errors::LayoutError;
use crate::terrain::{Coord, TerrainMap, TerrainType, Tile};

/// Characters needed to reach the last interior cell
const REQUIRED_CELLS: usize = (LAYOUT_HEIGHT - 2) * LAYOUT_WIDTH + LAYOUT_WIDTH - 1;

fn tile_for(ch: u8) -> Tile {
    match ch {
        b'#' => Tile::wall(),
        b'l' => Tile::ladder(),
        b'p' => Tile::pole(),
        b'.' => Tile::backdrop(),
        b'D' => Tile::door(SMALL_BLOCK_DIM),
        _ => Tile::empty(),
    }
}

/// Texture offset from [`TID_BACKDROP`] picked from the surrounding tiles
fn backdrop_variant(map: &TerrainMap, c: Coord) -> u16 {
    use TerrainType::{BrickBackdrop as Brick, Door, Wall};

    let at = |dx, dy| map.terrain_at(c, dx, dy);
    let (l, r, u, d) = (at(-1, 0), at(1, 0), at(0, -1), at(0, 1));
    let wall = |t: Option<TerrainType>| t == Some(Wall);

    if wall(l) && wall(u) {
        6
    } else if wall(l) && wall(d) {
        7
    } else if wall(r) && wall(u) {
        8
    } else if wall(r) && wall(d) {
        9
    } else if wall(l) && r == Some(Brick) {
        4
    } else if wall(r) && l == Some(Brick) {
        5
    } else if wall(u) && d == Some(Brick) {
        2
    } else if wall(d) && u == Some(Brick) {
        if wall(at(1, -1)) { 11 } else { 3 }
    } else if wall(u) && wall(d) {
        if r == Some(Door) { 10 } else { 1 }
    } else {
        0
    }
}

/// Parse a layout from text
pub fn load_layout(text: &str) -> Result<TerrainMap, LayoutError> {
    let cells: Vec<u8> = text
        .bytes()
        .filter(|b| !matches!(b, b'\n' | b'\t' | b'\0'))
        .collect();
    if cells.len() < REQUIRED_CELLS {
        return Err(LayoutError::TooShort {
            expected: REQUIRED_CELLS,
            found: cells.len(),
        });
    }

    let mut map = TerrainMap::new(LAYOUT_WIDTH, LAYOUT_HEIGHT, SMALL_BLOCK_DIM);
    for x in 1..LAYOUT_WIDTH - 1 {
        for y in 1..LAYOUT_HEIGHT - 1 {
            let c = Coord::new(x, y);
            let ch = cells[y * LAYOUT_WIDTH + x];
            if ch == b'S' {
                map.set_start_block(c);
            }
            map.set(c, tile_for(ch));
        }
    }

    for c in map.positions_of(TerrainType::BrickBackdrop) {
        let variant = backdrop_variant(&map, c);
        if let Some(tile) = map.tile_mut(c) {
            tile.texture_id = TID_BACKDROP + variant;
        }
    }

    debug!(
        "loaded layout: {} walls, {} ladders, start at {:?}",
        map.count_of(TerrainType::Wall),
        map.count_of(TerrainType::Ladder),
        map.start_block()
    );
    Ok(map)
}

/// Read and parse a layout file
pub fn load_layout_file(path: &Path) -> Result<TerrainMap, LayoutError> {
    let text = fs::read_to_string(path)?;
    load_layout(&text)
}
