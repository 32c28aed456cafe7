//! Level tables and render constants
//!
//! Level-indexed tables are 1-based on the level number; lookups clamp to the
//! table bounds so callers never index outside them.

/// Edge length of one grid block in pixels
pub const SMALL_BLOCK_DIM: u32 = 40;

/// Boss levels (exit width and key count switch rules at these thresholds)
pub const BOSS_LEVEL1: u32 = 8;
pub const BOSS_LEVEL2: u32 = 15;
pub const BOSS_LEVEL3: u32 = 22;

/// Last level covered by [`KEYS_PER_LEVEL`]
pub const MAX_KEY_LEVEL: u32 = 39;

/// Widest exit shaft (number of stacked locked doors)
pub const MAX_EXIT_WIDTH: u32 = 6;

/// Smallest grid the pipeline accepts
pub const MIN_GRID_WIDTH: usize = 11;
pub const MIN_GRID_HEIGHT: usize = 7;

/// Static layout dimensions
pub const LAYOUT_WIDTH: usize = 32;
pub const LAYOUT_HEIGHT: usize = 14;

/// Keys (and locked doors) per level, index = level - 1
pub const KEYS_PER_LEVEL: [u32; MAX_KEY_LEVEL as usize] = [
    1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 5, 5, 6,
];

/// Grid size (width, height) per level, index = level - 1; later levels reuse the last entry
pub const LEVEL_MAP_SIZES: [(usize, usize); 10] = [
    (15, 15),
    (17, 15),
    (17, 19),
    (17, 21),
    (19, 21),
    (19, 23),
    (21, 23),
    (23, 23),
    (23, 25),
    (25, 27),
];

/// Texture ids handed to the level builder
pub const TID_NONE: u16 = 0;
pub const TID_WIDE_WALL: u16 = 2;
pub const TID_WALL: u16 = 15;
pub const TID_LADDER: u16 = 16;
pub const TID_BIG_DOOR: u16 = 22;
pub const TID_DOOR: u16 = 24;
pub const TID_TALL_WALL: u16 = 26;
pub const TID_LOCKED_DOOR: u16 = 29;
pub const TID_EXIT: u16 = 30;
pub const TID_POLE: u16 = 60;
pub const TID_BACKDROP: u16 = 61;

/// Width in pixels of door sprites
pub const DOOR_WIDTH: u32 = 23;

/// Width in pixels of ladder sprites
pub const LADDER_WIDTH: u32 = 12;

/// Height in pixels of a squished ladder-end ledge
pub const LEDGE_HEIGHT: u32 = 15;

/// Keys to place for a level at or below [`BOSS_LEVEL3`]
///
/// Returns `None` above that threshold, where the key count follows the exit width.
pub fn table_key_count(level: u32) -> Option<u32> {
    if level == 0 || level > BOSS_LEVEL3 {
        return None;
    }
    Some(KEYS_PER_LEVEL[(level - 1) as usize])
}

/// Grid size for a level
pub fn grid_size_for_level(level: u32) -> (usize, usize) {
    let idx = (level.max(1) as usize - 1).min(LEVEL_MAP_SIZES.len() - 1);
    LEVEL_MAP_SIZES[idx]
}
