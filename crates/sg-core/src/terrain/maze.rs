//! Maze carving
//!
//! Builds a perfect maze (a spanning tree) over the odd lattice of an
//! odd-sized grid with a randomized depth-first walk. Lattice cells are the
//! (odd, odd) coordinates; every other cell starts as wall and a carve knocks
//! out the wall cell between two lattice cells.

use log::{debug, trace};

use super::{Coord, ORTHOGONAL};
use crate::errors::GenerationError;
use crate::rng::RandomSource;

/// Cell state of the carved maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MazeCell {
    Empty,
    #[default]
    Wall,
}

/// Maze under construction
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<MazeCell>,
}

impl Maze {
    /// Lay out the uncarved lattice: (odd, odd) cells empty, everything else wall
    ///
    /// Both dimensions must be odd and at least 3.
    pub fn new(width: usize, height: usize) -> Result<Self, GenerationError> {
        if width % 2 == 0 || height % 2 == 0 {
            return Err(GenerationError::EvenDimensions { width, height });
        }
        if width < 3 || height < 3 {
            return Err(GenerationError::GridTooSmall {
                width,
                height,
                min_width: 3,
                min_height: 3,
            });
        }

        let mut cells = vec![MazeCell::Wall; width * height];
        for y in (1..height).step_by(2) {
            for x in (1..width).step_by(2) {
                cells[y * width + x] = MazeCell::Empty;
            }
        }
        // (0, 0) is a fixed wall anchor
        cells[0] = MazeCell::Wall;

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of lattice floors, which is also the number of cells the walk visits
    pub fn guaranteed_floor_count(&self) -> usize {
        ((self.width - 1) / 2) * ((self.height - 1) / 2)
    }

    /// Cell at `c`, or `None` outside the grid
    pub fn cell(&self, c: Coord) -> Option<MazeCell> {
        (c.x < self.width && c.y < self.height).then(|| self.cells[c.y * self.width + c.x])
    }

    pub fn is_wall(&self, c: Coord) -> bool {
        self.cell(c) == Some(MazeCell::Wall)
    }

    fn set(&mut self, c: Coord, cell: MazeCell) {
        if c.x < self.width && c.y < self.height {
            self.cells[c.y * self.width + c.x] = cell;
        }
    }

    /// A cell is trapped when nothing in its 8-neighbourhood has been opened
    pub fn is_trapped(&self, c: Coord) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                if let Some(n) = c.offset(dx, dy, self.width, self.height)
                    && !self.is_wall(n)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Carve the spanning tree
    ///
    /// Walks from a random lattice cell. While any lattice neighbour two cells
    /// away is still trapped, directions are drawn uniformly until one lands on
    /// such a neighbour, the wall between is knocked out and the walk moves
    /// there. Otherwise the walk backtracks.
    pub fn carve<R: RandomSource>(&mut self, rng: &mut R) {
        let required = self.guaranteed_floor_count();
        let lattice_w = ((self.width - 1) / 2) as i32;
        let lattice_h = ((self.height - 1) / 2) as i32;
        let mut current = Coord::new(
            rng.uniform_int(0, lattice_w - 1) as usize * 2 + 1,
            rng.uniform_int(0, lattice_h - 1) as usize * 2 + 1,
        );
        trace!(
            "carving {}x{} maze from {:?}, {} floors",
            self.width, self.height, current, required
        );

        let mut stack = Vec::with_capacity(required);
        let mut visited = 1;

        while visited < required {
            let candidates = ORTHOGONAL.map(|(dx, dy)| {
                current
                    .offset(2 * dx, 2 * dy, self.width, self.height)
                    .filter(|&n| self.is_trapped(n))
            });

            if candidates.iter().any(Option::is_some) {
                let (dir, next) = loop {
                    let dir = rng.uniform_int(0, 3) as usize;
                    if let Some(next) = candidates[dir] {
                        break (dir, next);
                    }
                };
                let (dx, dy) = ORTHOGONAL[dir];
                if let Some(knock) = current.offset(dx, dy, self.width, self.height) {
                    self.set(knock, MazeCell::Empty);
                }
                stack.push(current);
                current = next;
                visited += 1;
            } else {
                match stack.pop() {
                    Some(prev) => current = prev,
                    // every lattice cell is reachable, so this only happens on a corrupt grid
                    None => break,
                }
            }
        }

        debug!(
            "carved {}x{} maze: {} of {} floors visited",
            self.width, self.height, visited, required
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::GameRng;
    use std::collections::{HashSet, VecDeque};

    fn lattice(maze: &Maze) -> Vec<Coord> {
        let mut cells = Vec::new();
        for y in (1..maze.height()).step_by(2) {
            for x in (1..maze.width()).step_by(2) {
                cells.push(Coord::new(x, y));
            }
        }
        cells
    }

    /// Count carved walls and the lattice cells reachable from (1, 1)
    fn tree_stats(maze: &Maze) -> (usize, usize) {
        let mut carved = 0;
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let on_lattice = x % 2 == 1 && y % 2 == 1;
                if !on_lattice && !maze.is_wall(Coord::new(x, y)) {
                    carved += 1;
                }
            }
        }

        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([Coord::new(1, 1)]);
        seen.insert(Coord::new(1, 1));
        while let Some(c) = queue.pop_front() {
            for (dx, dy) in ORTHOGONAL {
                let (Some(gap), Some(next)) = (
                    c.offset(dx, dy, maze.width(), maze.height()),
                    c.offset(2 * dx, 2 * dy, maze.width(), maze.height()),
                ) else {
                    continue;
                };
                if !maze.is_wall(gap) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        (carved, seen.len())
    }

    #[test]
    fn test_initial_lattice() {
        let maze = Maze::new(9, 7).unwrap();
        assert_eq!(maze.guaranteed_floor_count(), 12);
        assert_eq!(lattice(&maze).len(), 12);
        for c in lattice(&maze) {
            assert_eq!(maze.cell(c), Some(MazeCell::Empty));
            assert!(maze.is_trapped(c));
        }
        assert!(maze.is_wall(Coord::new(0, 0)));
        assert!(maze.is_wall(Coord::new(2, 1)));
    }

    #[test]
    fn test_rejects_even_dimensions() {
        assert_eq!(
            Maze::new(10, 7).unwrap_err(),
            GenerationError::EvenDimensions {
                width: 10,
                height: 7
            }
        );
        assert!(Maze::new(9, 8).is_err());
        assert!(Maze::new(1, 9).is_err());
    }

    #[test]
    fn test_carve_produces_spanning_tree() {
        for seed in 0..20 {
            let mut rng = GameRng::new(seed);
            let mut maze = Maze::new(15, 11).unwrap();
            maze.carve(&mut rng);

            let floors = maze.guaranteed_floor_count();
            let (carved, reachable) = tree_stats(&maze);
            assert_eq!(reachable, floors, "seed {} left cells unreachable", seed);
            assert_eq!(carved, floors - 1, "seed {} has a cycle", seed);
            for c in lattice(&maze) {
                assert!(!maze.is_wall(c));
            }
        }
    }

    #[test]
    fn test_single_cell_maze() {
        let mut rng = GameRng::new(1);
        let mut maze = Maze::new(3, 3).unwrap();
        maze.carve(&mut rng);
        assert_eq!(tree_stats(&maze), (0, 1));
    }

    #[test]
    fn test_outer_ring_stays_wall() {
        let mut rng = GameRng::new(99);
        let mut maze = Maze::new(21, 13).unwrap();
        maze.carve(&mut rng);
        for x in 0..21 {
            assert!(maze.is_wall(Coord::new(x, 0)));
            assert!(maze.is_wall(Coord::new(x, 12)));
        }
        for y in 0..13 {
            assert!(maze.is_wall(Coord::new(0, y)));
            assert!(maze.is_wall(Coord::new(20, y)));
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn carve_is_spanning_tree(half_w in 1usize..12, half_h in 1usize..12, seed: u64) {
                let (w, h) = (half_w * 2 + 1, half_h * 2 + 1);
                let mut rng = GameRng::new(seed);
                let mut maze = Maze::new(w, h).unwrap();
                maze.carve(&mut rng);
                let floors = maze.guaranteed_floor_count();
                let (carved, reachable) = tree_stats(&maze);
                prop_assert_eq!(reachable, floors);
                prop_assert_eq!(carved, floors - 1);
            }
        }
    }
}
