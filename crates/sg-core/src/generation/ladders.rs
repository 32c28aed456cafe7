//! Ladder passes
//!
//! Seeds are dropped into vertical corridor cells, grown into full spans,
//! pruned where a wall sits two cells above and below, and finally joined
//! across single wall cells left behind by erosion.

use log::debug;

use crate::terrain::{Coord, TerrainMap, TerrainType, Tile};

/// Mark ladder seeds; returns them bottom row first
///
/// A seed is an interior empty cell over an empty cell with exactly two empty
/// orthogonal neighbours. Rows are scanned bottom to top, so a fresh seed
/// blocks the cell above it from seeding too.
pub fn add_ladder_points(map: &mut TerrainMap) -> Vec<Coord> {
    let mut seeds = Vec::new();
    let (w, h) = (map.width(), map.height());
    if w < 3 || h < 3 {
        return seeds;
    }

    for y in (1..=h - 2).rev() {
        for x in 1..=w - 2 {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Empty)
                && map.is(c, 0, 1, TerrainType::Empty)
                && map.count_matching(c, 1, 1, TerrainType::Empty, true) == 2
            {
                map.set(c, Tile::ladder());
                seeds.push(c);
            }
        }
    }

    debug!("placed {} ladder seeds", seeds.len());
    seeds
}

/// Grow every seed down then up through consecutive empty cells
pub fn extend_ladders(map: &mut TerrainMap, seeds: &[Coord]) {
    for &seed in seeds {
        for step in [1, -1] {
            let mut dy = step;
            while let Some(c) = map.neighbor(seed, 0, dy) {
                if map.terrain(c) != Some(TerrainType::Empty) {
                    break;
                }
                map.set(c, Tile::ladder());
                dy += step;
            }
        }
    }
}

/// Clear ladders that only bridge a single gap between two walls
///
/// A ladder cell with wall two rows above and two rows below is removed along
/// with the cells directly above and below it.
pub fn trim_unneeded_ladders(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    let mut removed = 0;

    for y in 2..h.saturating_sub(2) {
        for x in 1..w.saturating_sub(1) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Ladder)
                && map.is(c, 0, -2, TerrainType::Wall)
                && map.is(c, 0, 2, TerrainType::Wall)
            {
                map.set(c, Tile::empty());
                map.set(Coord::new(x, y - 1), Tile::empty());
                map.set(Coord::new(x, y + 1), Tile::empty());
                removed += 1;
            }
        }
    }

    debug!("trimmed {} unneeded ladders", removed);
}

/// Turn a wall sandwiched between two ladder cells into ladder
pub fn connect_ladder_chains(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());

    for x in 0..w {
        for y in 1..h.saturating_sub(1) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Wall)
                && map.is(c, 0, 1, TerrainType::Ladder)
                && map.is(c, 0, -1, TerrainType::Ladder)
            {
                map.set(c, Tile::ladder());
            }
        }
    }
}
