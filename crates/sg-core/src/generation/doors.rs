//! Door passes
//!
//! Doors are cut into vertical wall runs: a big door replaces two stacked
//! wall cells, a mini door a single one. Both keep a minimum spacing from
//! doors of the same kind.

use log::debug;

use crate::terrain::{Coord, TerrainMap, TerrainType, Tile};

/// Rows searched above and below a candidate for an existing big door
const BIG_DOOR_SPACING: i32 = 5;

/// Rows searched above and below a candidate for an existing mini door
const MINI_DOOR_SPACING: i32 = 7;

fn is_vertical_run(map: &TerrainMap, c: Coord) -> bool {
    map.count_matching(c, 1, 1, TerrainType::Wall, true) == 2
}

/// Replace two-cell pieces of thin vertical wall with a big door
///
/// The wall cell must sit in a vertical run at least two deep on both
/// sides. The door takes the upper cell and the lower cell is cleared, since
/// the door tile spans both.
pub fn add_big_doors(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    let door_height = map.block_size();
    let mut placed = 0;

    for y in 2..h.saturating_sub(2) {
        for x in 2..w.saturating_sub(2) {
            let c = Coord::new(x, y);
            if !map.is(c, 0, 0, TerrainType::Wall) || !is_vertical_run(map, c) {
                continue;
            }
            let below = Coord::new(x, y + 1);
            if is_vertical_run(map, below)
                && [-2, -1, 1, 2]
                    .iter()
                    .all(|&dy| map.is(c, 0, dy, TerrainType::Wall))
                && map.count_matching(c, 2, BIG_DOOR_SPACING, TerrainType::BigDoor, false) == 0
            {
                map.set(below, Tile::empty());
                map.set(c, Tile::big_door(door_height));
                placed += 1;
            }
        }
    }

    debug!("placed {} big doors", placed);
}

/// Replace single cells of thin vertical wall with a mini door
pub fn add_mini_doors(map: &mut TerrainMap) {
    let (w, h) = (map.width(), map.height());
    let door_height = map.block_size();
    let mut placed = 0;

    for y in 2..h.saturating_sub(2) {
        for x in 2..w.saturating_sub(2) {
            let c = Coord::new(x, y);
            if map.is(c, 0, 0, TerrainType::Wall)
                && is_vertical_run(map, c)
                && map.is(c, 0, -1, TerrainType::Wall)
                && map.is(c, 0, 1, TerrainType::Wall)
                && !map.is(c, 0, 2, TerrainType::BigDoor)
                && map.count_matching(c, 2, MINI_DOOR_SPACING, TerrainType::Door, false) == 0
            {
                map.set(c, Tile::door(door_height));
                placed += 1;
            }
        }
    }

    debug!("placed {} mini doors", placed);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::testutil::map_from_rows;

    fn wall_column(height: usize) -> TerrainMap {
        let rows: Vec<&str> = std::iter::repeat_n("__#__", height).collect();
        map_from_rows(&rows)
    }

    #[test]
    fn test_big_door_in_wall_column() {
        let mut map = wall_column(7);
        add_big_doors(&mut map);

        assert_eq!(map.positions_of(TerrainType::BigDoor), vec![Coord::new(2, 2)]);
        assert_eq!(map.terrain(Coord::new(2, 3)), Some(TerrainType::Empty));
        let door = map.get(Coord::new(2, 2)).unwrap();
        assert_eq!(door.size.height, map.block_size() * 2);
    }

    #[test]
    fn test_big_door_needs_thin_wall() {
        let mut map = map_from_rows(&[
            "_###_", //
            "_###_",
            "_###_",
            "_###_",
            "_###_",
            "_###_",
            "_###_",
        ]);
        add_big_doors(&mut map);
        assert_eq!(map.count_of(TerrainType::BigDoor), 0);
    }

    #[test]
    fn test_big_doors_are_spaced() {
        let mut map = wall_column(30);
        add_big_doors(&mut map);
        let doors = map.positions_of(TerrainType::BigDoor);
        assert!(doors.len() > 1);
        for pair in doors.windows(2) {
            assert!(pair[1].y - pair[0].y > BIG_DOOR_SPACING as usize);
        }
    }

    #[test]
    fn test_mini_door_in_wall_column() {
        let mut map = wall_column(5);
        add_mini_doors(&mut map);
        assert_eq!(map.positions_of(TerrainType::Door), vec![Coord::new(2, 2)]);
    }

    #[test]
    fn test_mini_doors_are_spaced() {
        let mut map = wall_column(20);
        add_mini_doors(&mut map);
        assert_eq!(
            map.positions_of(TerrainType::Door),
            vec![Coord::new(2, 2), Coord::new(2, 10)]
        );
    }

    #[test]
    fn test_mini_door_skips_cell_above_big_door() {
        let mut map = wall_column(6);
        map.set(Coord::new(2, 4), Tile::big_door(40));
        add_mini_doors(&mut map);
        assert_eq!(map.terrain(Coord::new(2, 2)), Some(TerrainType::Wall));
    }
}
