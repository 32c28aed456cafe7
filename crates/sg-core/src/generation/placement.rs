//! Item and key placement

use log::{debug, trace};

use crate::errors::{Feature, GenerationError};
use crate::rng::RandomSource;
use crate::terrain::{Coord, TerrainMap, TerrainType, Tile};

/// Mark item slots: empty cells resting on a lone wall tip, and alcoves
///
/// A tip is a wall cell with no wall to its left or right. An alcove is an
/// empty cell over a three-wide ledge with open space beyond both ends. Cells
/// directly under a big door are skipped. Most slots get the common
/// placeholder, a few the rare one.
pub fn add_items<R: RandomSource>(map: &mut TerrainMap, rng: &mut R) {
    let (w, h) = (map.width(), map.height());
    let mut placed = 0;

    for y in 1..h.saturating_sub(1) {
        for x in 1..w.saturating_sub(1) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 1, TerrainType::Wall)
                && map.is(c, 0, 0, TerrainType::Empty)
                && !map.is(c, 1, 1, TerrainType::Wall)
                && !map.is(c, -1, 1, TerrainType::Wall)
                && !map.is(c, 0, -1, TerrainType::BigDoor)
            {
                let kind = if rng.one_in(29) {
                    TerrainType::ItemPlaceholder2
                } else {
                    TerrainType::ItemPlaceholder
                };
                map.set(c, Tile::marker(kind));
                placed += 1;
            }
        }
    }

    for y in 2..h.saturating_sub(2) {
        for x in 2..w.saturating_sub(2) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 1, TerrainType::Wall)
                && map.is(c, 0, 0, TerrainType::Empty)
                && map.is(c, 1, 1, TerrainType::Wall)
                && map.is(c, -1, 1, TerrainType::Wall)
                && map.is(c, 2, 1, TerrainType::Empty)
                && map.is(c, -2, 1, TerrainType::Empty)
                && map.is(c, 1, 0, TerrainType::Empty)
                && map.is(c, -1, 0, TerrainType::Empty)
                && !map.is(c, 0, -1, TerrainType::BigDoor)
            {
                let kind = if rng.one_in(4) {
                    TerrainType::ItemPlaceholder2
                } else {
                    TerrainType::ItemPlaceholder
                };
                map.set(c, Tile::marker(kind));
                placed += 1;
            }
        }
    }

    debug!("marked {} item slots", placed);
}

/// Drop `count` keys onto random empty cells standing on wall
///
/// Each key gets `attempts` random draws over the interior; a key that finds
/// no valid cell fails the whole level.
pub fn add_keys<R: RandomSource>(
    map: &mut TerrainMap,
    count: u32,
    attempts: u32,
    rng: &mut R,
) -> Result<(), GenerationError> {
    let max_x = map.width() as i32 - 2;
    let max_y = map.height() as i32 - 2;

    for key in 0..count {
        let spot = (0..attempts).find_map(|_| {
            let c = Coord::new(
                rng.uniform_int(1, max_x).max(0) as usize,
                rng.uniform_int(1, max_y).max(0) as usize,
            );
            let valid = map.is(c, 0, 0, TerrainType::Empty)
                && map.is(c, 0, 1, TerrainType::Wall)
                && !map.is(c, 0, -1, TerrainType::BigDoor);
            valid.then_some(c)
        });

        match spot {
            Some(c) => {
                trace!("key {} at {:?}", key, c);
                map.set(c, Tile::key());
            }
            None => {
                return Err(GenerationError::PlacementExhausted {
                    feature: Feature::Key,
                    attempts,
                });
            }
        }
    }

    debug!("placed {} keys", count);
    Ok(())
}
