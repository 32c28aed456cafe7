//! Grid coordinates
//!
//! `x` is the column and `y` the row everywhere in this crate. Offsets that
//! would leave the grid are never formed: [`Coord::offset`] returns `None`
//! instead, which every pass treats as "neighbour absent".

use serde::{Deserialize, Serialize};

/// Unit steps up, down, left, right
pub const ORTHOGONAL: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// Grid coordinate (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Coordinate shifted by (dx, dy), or `None` if it leaves `width` x `height`
    pub fn offset(self, dx: i32, dy: i32, width: usize, height: usize) -> Option<Coord> {
        let x = self.x as i64 + dx as i64;
        let y = self.y as i64 + dy as i64;
        if x < 0 || y < 0 || x >= width as i64 || y >= height as i64 {
            return None;
        }
        Some(Coord::new(x as usize, y as usize))
    }

    /// Is this coordinate on the outer ring of a `width` x `height` grid
    pub fn is_edge(self, width: usize, height: usize) -> bool {
        self.x == 0 || self.y == 0 || self.x + 1 == width || self.y + 1 == height
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Coord::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_in_bounds() {
        let c = Coord::new(2, 3);
        assert_eq!(c.offset(1, -1, 5, 5), Some(Coord::new(3, 2)));
        assert_eq!(c.offset(0, 0, 5, 5), Some(c));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let c = Coord::new(0, 4);
        assert_eq!(c.offset(-1, 0, 5, 5), None);
        assert_eq!(c.offset(0, 1, 5, 5), None);
        assert_eq!(c.offset(5, 0, 5, 5), None);
    }

    #[test]
    fn test_is_edge() {
        assert!(Coord::new(0, 2).is_edge(5, 5));
        assert!(Coord::new(4, 2).is_edge(5, 5));
        assert!(Coord::new(2, 4).is_edge(5, 5));
        assert!(!Coord::new(2, 2).is_edge(5, 5));
    }
}
