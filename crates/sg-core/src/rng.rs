//! Random number generation for level generation
//!
//! Uses a seeded ChaCha RNG so a seed reproduces a level exactly.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of random draws injected into the carver and every pipeline pass
pub trait RandomSource {
    /// Uniform integer in `low..=high`; returns `high` when `high <= low`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// Returns true with probability 1/n
    fn one_in(&mut self, n: u32) -> bool {
        if n <= 1 {
            return true;
        }
        self.uniform_int(0, n as i32 - 1) == 0
    }

    /// Returns true with probability percent/100
    fn percent_chance(&mut self, percent: u32) -> bool {
        self.uniform_int(0, 99) < percent as i32
    }
}

/// Level generation random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
/// Note: RNG state is not serialized - a restored generator restarts from its seed.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for GameRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for GameRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(GameRng::new(seed))
    }
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        if high <= low {
            return high;
        }
        self.rng.gen_range(low..=high)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
