//! Exit shaft placement
//!
//! The exit sits in row 2 against the left or right edge, behind a run of
//! stacked locked doors (one per key) sandwiched between wall anchors in rows
//! 1 and 3. The cell just past the last locked door is opened so the shaft
//! always connects to the maze.

use log::debug;

use crate::consts::{BOSS_LEVEL1, BOSS_LEVEL3, KEYS_PER_LEVEL, MAX_EXIT_WIDTH, MAX_KEY_LEVEL, table_key_count};
use crate::errors::GenerationError;
use crate::rng::RandomSource;
use crate::terrain::{Coord, TerrainMap, Tile};

/// Number of locked doors in the exit shaft for a level
pub fn exit_width_for_level<R: RandomSource>(level: u32, rng: &mut R) -> u32 {
    let level = level.max(1);
    let table = |lev: u32| KEYS_PER_LEVEL[(lev - 1) as usize];

    if level < BOSS_LEVEL1 {
        table(level)
    } else if level <= BOSS_LEVEL3 {
        3
    } else if level <= MAX_KEY_LEVEL {
        rng.uniform_int(3, table(level) as i32) as u32
    } else {
        rng.uniform_int(3, MAX_EXIT_WIDTH as i32) as u32
    }
}

/// Keys to place: the table value up to the last boss level, then one per locked door
pub fn key_count_for_level(level: u32, exit_width: u32) -> u32 {
    table_key_count(level).unwrap_or(exit_width)
}

/// Carve the exit shaft; returns its width
pub fn add_exit<R: RandomSource>(
    map: &mut TerrainMap,
    level: u32,
    rng: &mut R,
) -> Result<u32, GenerationError> {
    let shaft = exit_width_for_level(level, rng);
    let width = map.width();
    if width < shaft as usize + 3 || map.height() < 4 {
        return Err(GenerationError::ExitDoesNotFit { width, shaft });
    }

    let left = rng.one_in(2);
    let column = |i: usize| if left { 2 + i } else { width - 3 - i };
    let door_height = map.block_size();

    for i in 0..shaft as usize {
        let x = column(i);
        map.set(Coord::new(x, 3), Tile::wall());
        map.set(Coord::new(x, 2), Tile::locked_door(door_height));
        map.set(Coord::new(x, 1), Tile::wall());
    }
    map.set(Coord::new(column(shaft as usize), 2), Tile::empty());

    let exit_x = if left { 1 } else { width - 2 };
    map.set(Coord::new(exit_x, 2), Tile::exit());
    map.set(Coord::new(exit_x, 3), Tile::wall());
    map.set(Coord::new(exit_x, 1), Tile::wall());

    debug!(
        "exit on the {} side at x={}, {} locked doors",
        if left { "left" } else { "right" },
        exit_x,
        shaft
    );
    Ok(shaft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use crate::terrain::TerrainType;

    #[test]
    fn test_exit_width_table() {
        let mut rng = GameRng::new(3);
        assert_eq!(exit_width_for_level(1, &mut rng), 1);
        assert_eq!(exit_width_for_level(7, &mut rng), 2);
        assert_eq!(exit_width_for_level(BOSS_LEVEL1, &mut rng), 3);
        assert_eq!(exit_width_for_level(BOSS_LEVEL3, &mut rng), 3);
        for _ in 0..100 {
            let w = exit_width_for_level(30, &mut rng);
            assert!((3..=4).contains(&w));
            let w = exit_width_for_level(200, &mut rng);
            assert!((3..=MAX_EXIT_WIDTH).contains(&w));
        }
    }

    #[test]
    fn test_key_count_follows_exit_after_last_boss() {
        assert_eq!(key_count_for_level(1, 1), 1);
        assert_eq!(key_count_for_level(BOSS_LEVEL3, 3), 3);
        assert_eq!(key_count_for_level(BOSS_LEVEL3 + 1, 5), 5);
    }

    #[test]
    fn test_add_exit_layout() {
        for seed in 0..10 {
            let mut rng = GameRng::new(seed);
            let mut map = TerrainMap::with_size(15, 9);
            let shaft = add_exit(&mut map, 4, &mut rng).unwrap();
            assert_eq!(shaft, 2);

            let exits = map.positions_of(TerrainType::Exit);
            assert_eq!(exits.len(), 1);
            let exit = exits[0];
            assert_eq!(exit.y, 2);
            assert!(exit.x == 1 || exit.x == 13);
            assert_eq!(map.count_of(TerrainType::LockedDoor), 2);
            assert_eq!(map.terrain(Coord::new(exit.x, 1)), Some(TerrainType::Wall));
            assert_eq!(map.terrain(Coord::new(exit.x, 3)), Some(TerrainType::Wall));

            // opening just past the doors
            let opening = if exit.x == 1 { 4 } else { 10 };
            assert_eq!(map.terrain(Coord::new(opening, 2)), Some(TerrainType::Empty));
        }
    }

    #[test]
    fn test_add_exit_too_narrow() {
        let mut rng = GameRng::new(0);
        let mut map = TerrainMap::with_size(5, 9);
        let err = add_exit(&mut map, BOSS_LEVEL3, &mut rng).unwrap_err();
        assert_eq!(err, GenerationError::ExitDoesNotFit { width: 5, shaft: 3 });
    }
}
