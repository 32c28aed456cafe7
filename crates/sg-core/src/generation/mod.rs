//! Level generation
//!
//! A level is a carved maze reshaped by a fixed sequence of passes. The order
//! matters: each pass relies on what the earlier ones left behind (ladder
//! seeds need the raw corridors, doors need eroded thin walls, items and keys
//! need the final floors).

mod doors;
mod erosion;
mod exit;
mod finishing;
mod ladders;
mod placement;

pub use doors::{add_big_doors, add_mini_doors};
pub use erosion::{add_mini_platforms, make_edges_empty, trim_edges};
pub use exit::{add_exit, exit_width_for_level, key_count_for_level};
pub use finishing::{condense_wall_count, erase_top_walls, squish_ladder_end_platforms};
pub use ladders::{add_ladder_points, connect_ladder_chains, extend_ladders, trim_unneeded_ladders};
pub use placement::{add_items, add_keys};

use log::{debug, info, warn};

use crate::config::{ExtraPasses, GeneratorOptions};
use crate::consts::{MIN_GRID_HEIGHT, MIN_GRID_WIDTH, grid_size_for_level};
use crate::errors::GenerationError;
use crate::rng::{GameRng, RandomSource};
use crate::terrain::{Maze, MazeCell, TerrainMap, TerrainType, Tile};

fn check_dimensions(width: usize, height: usize) -> Result<(), GenerationError> {
    if width % 2 == 0 || height % 2 == 0 {
        return Err(GenerationError::EvenDimensions { width, height });
    }
    if width < MIN_GRID_WIDTH || height < MIN_GRID_HEIGHT {
        return Err(GenerationError::GridTooSmall {
            width,
            height,
            min_width: MIN_GRID_WIDTH,
            min_height: MIN_GRID_HEIGHT,
        });
    }
    Ok(())
}

/// Copy a carved maze into a fresh terrain grid
pub(crate) fn copy_maze(maze: &Maze, block_size: u32) -> TerrainMap {
    let mut map = TerrainMap::new(maze.width(), maze.height(), block_size);
    for c in map.coords() {
        let tile = match maze.cell(c) {
            Some(MazeCell::Empty) => Tile::empty(),
            _ => Tile::wall(),
        };
        map.set(c, tile);
    }
    map
}

/// Carve a maze of `size` (width, height) and turn it into wall and empty tiles
pub fn build_maze<R: RandomSource>(
    size: (usize, usize),
    block_size: u32,
    rng: &mut R,
) -> Result<TerrainMap, GenerationError> {
    let mut maze = Maze::new(size.0, size.1)?;
    maze.carve(rng);
    Ok(copy_maze(&maze, block_size))
}

fn draw_iterations<R: RandomSource>(range: (u32, u32), rng: &mut R) -> u32 {
    rng.uniform_int(range.0 as i32, range.1 as i32).max(0) as u32
}

/// Generate one level of `size` (width, height), running every pass once
///
/// Fails without retrying; see [`LevelGenerator`] for the retrying front end.
pub fn create_terrain_map<R: RandomSource>(
    size: (usize, usize),
    level: u32,
    options: &GeneratorOptions,
    rng: &mut R,
) -> Result<TerrainMap, GenerationError> {
    if level == 0 {
        return Err(GenerationError::InvalidLevel(level));
    }
    check_dimensions(size.0, size.1)?;

    let mut map = build_maze(size, options.block_size, rng)?;
    let exit_width = add_exit(&mut map, level, rng)?;

    let seeds = add_ladder_points(&mut map);
    trim_edges(&mut map, draw_iterations(options.first_trim, rng));
    extend_ladders(&mut map, &seeds);
    trim_unneeded_ladders(&mut map);
    drop(seeds);

    trim_edges(&mut map, draw_iterations(options.second_trim, rng));
    add_mini_platforms(&mut map, options.platform_variation);
    add_big_doors(&mut map);
    add_mini_doors(&mut map);
    connect_ladder_chains(&mut map);
    make_edges_empty(&mut map);
    add_items(&mut map, rng);

    let keys = key_count_for_level(level, exit_width);
    add_keys(&mut map, keys, options.key_attempts, rng)?;

    if options.extra_passes.contains(ExtraPasses::ERASE_TOP_WALLS) {
        erase_top_walls(&mut map);
    }
    if options.extra_passes.contains(ExtraPasses::SQUISH_LADDER_ENDS) {
        squish_ladder_end_platforms(&mut map);
    }
    if options.extra_passes.contains(ExtraPasses::CONDENSE_WALLS) {
        condense_wall_count(&mut map);
    }

    debug!(
        "level {} ({}x{}): {} walls, {} ladders, {} doors, {} keys",
        level,
        size.0,
        size.1,
        map.count_of(TerrainType::Wall),
        map.count_of(TerrainType::Ladder),
        map.count_of(TerrainType::Door) + map.count_of(TerrainType::BigDoor),
        map.count_of(TerrainType::Key)
    );
    Ok(map)
}

/// Failures a fresh set of random draws can get past
fn is_retryable(err: &GenerationError) -> bool {
    matches!(
        err,
        GenerationError::PlacementExhausted { .. } | GenerationError::ExitDoesNotFit { .. }
    )
}

/// Owns the options and random source for a run of levels
#[derive(Debug, Clone)]
pub struct LevelGenerator<R: RandomSource = GameRng> {
    options: GeneratorOptions,
    rng: R,
}

impl LevelGenerator<GameRng> {
    /// Generator with default options and a seeded [`GameRng`]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GeneratorOptions::default(), GameRng::new(seed))
    }
}

impl<R: RandomSource> LevelGenerator<R> {
    pub fn new(options: GeneratorOptions, rng: R) -> Self {
        Self { options, rng }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Generate a level using the grid size from the level table
    pub fn generate(&mut self, level: u32) -> Result<TerrainMap, GenerationError> {
        self.generate_sized(grid_size_for_level(level), level)
    }

    /// Generate a level of a given size, retrying placement failures
    ///
    /// Dimension and level errors are returned at once; they would fail the
    /// same way on every attempt.
    pub fn generate_sized(
        &mut self,
        size: (usize, usize),
        level: u32,
    ) -> Result<TerrainMap, GenerationError> {
        let attempts = self.options.generation_attempts.max(1);
        let mut last = None;

        for attempt in 1..=attempts {
            match create_terrain_map(size, level, &self.options, &mut self.rng) {
                Ok(map) => {
                    info!(
                        "generated level {} ({}x{}) on attempt {}",
                        level, size.0, size.1, attempt
                    );
                    return Ok(map);
                }
                Err(err) if is_retryable(&err) => {
                    warn!("level {} attempt {}/{} failed: {}", level, attempt, attempts, err);
                    last = Some(err);
                }
                Err(err) => return Err(err),
            }
        }

        Err(GenerationError::AttemptsExhausted {
            attempts,
            last: Box::new(last.unwrap_or(GenerationError::InvalidLevel(level))),
        })
    }
}
