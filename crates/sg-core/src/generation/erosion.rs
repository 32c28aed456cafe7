//! Wall erosion and platform passes

use log::debug;

use crate::terrain::{Coord, TerrainMap, TerrainType, Tile};

/// Erode wall stubs `iterations` times
///
/// Each iteration first collects every wall with at least three empty
/// orthogonal neighbours, then clears them all at once, so a wall exposed by
/// this iteration's removals waits for the next one.
pub fn trim_edges(map: &mut TerrainMap, iterations: u32) {
    let mut total = 0;

    for _ in 0..iterations {
        let pending: Vec<Coord> = map
            .coords()
            .filter(|&c| {
                map.is(c, 0, 0, TerrainType::Wall)
                    && map.count_matching(c, 1, 1, TerrainType::Empty, true) >= 3
            })
            .collect();
        if pending.is_empty() {
            break;
        }

        total += pending.len();
        for c in pending {
            map.set(c, Tile::empty());
        }
    }

    debug!("trim_edges({}): cleared {} walls", iterations, total);
}

/// Drop small floating platforms into wide open space
///
/// An empty cell whose whole neighbourhood (one column either side,
/// `1 + variation` rows above and below) is empty becomes wall. A second scan
/// fills single empty cells pinched between a wall on the left and right.
pub fn add_mini_platforms(map: &mut TerrainMap, variation: u32) {
    let (w, h) = (map.width(), map.height());
    let rady = 1 + variation as i32;
    let open_neighbourhood = (3 * (2 * rady as usize + 1)) - 1;
    let mut added = 0;

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Empty)
                && map.count_matching(c, 1, rady, TerrainType::Empty, false) == open_neighbourhood
            {
                map.set(c, Tile::wall());
                added += 1;
            }
        }
    }

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Empty)
                && map.count_matching(c, 1, 1, TerrainType::Wall, true) == 2
                && map.count_matching(c, 1, 1, TerrainType::Wall, false) == 2
                && map.is(c, -1, 0, TerrainType::Wall)
                && map.is(c, 1, 0, TerrainType::Wall)
            {
                map.set(c, Tile::wall());
                added += 1;
            }
        }
    }

    debug!("added {} platform walls", added);
}

/// Clear the outer ring; the level builder puts its own boundary there
pub fn make_edges_empty(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    for c in map.coords().filter(|c| c.is_edge(w, h)) {
        map.set(c, Tile::empty());
    }
}
