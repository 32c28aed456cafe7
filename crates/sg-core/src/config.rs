//! Generator options and configuration file loading
//!
//! Options files use an rc-style format:
//!
//! ```text
//! # comment
//! OPTIONS=block_size:40,first_trim:4-6,second_trim:14-17
//! OPTIONS=condense_walls,!erase_top_walls
//! ```

use std::path::Path;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::SMALL_BLOCK_DIM;

bitflags! {
    /// Optional cosmetic passes run after key placement
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ExtraPasses: u8 {
        const ERASE_TOP_WALLS = 0x01;
        const SQUISH_LADDER_ENDS = 0x02;
        const CONDENSE_WALLS = 0x04;
    }
}

// Manual serde impl for ExtraPasses
impl Serialize for ExtraPasses {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ExtraPasses {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u8::deserialize(deserializer)?;
        Ok(ExtraPasses::from_bits_truncate(bits))
    }
}

/// Errors from parsing or validating generator options
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    #[error("could not read options file: {0}")]
    Io(String),

    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} needs a value")]
    MissingValue(String),

    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String),

    #[error("invalid options: {0}")]
    Invalid(String),
}

/// Tunables for one generator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Pixels per tile edge
    pub block_size: u32,

    /// Iteration range of the first erosion pass
    pub first_trim: (u32, u32),

    /// Iteration range of the second, heavier erosion pass
    pub second_trim: (u32, u32),

    /// Extra rows of clearance required above and below a new mini platform
    pub platform_variation: u32,

    /// Random draws allowed per key before giving up
    pub key_attempts: u32,

    /// Whole-level attempts made by [`crate::LevelGenerator`]
    pub generation_attempts: u32,

    pub extra_passes: ExtraPasses,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            block_size: SMALL_BLOCK_DIM,
            first_trim: (4, 6),
            second_trim: (14, 17),
            platform_variation: 1,
            key_attempts: 10_000,
            generation_attempts: 16,
            extra_passes: ExtraPasses::empty(),
        }
    }
}

impl GeneratorOptions {
    /// Load options from a file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| OptionsError::Io(e.to_string()))?;

        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();

            // Skip comments and empty lines
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',') {
                    options.parse_option(opt.trim())?;
                }
            } else {
                return Err(OptionsError::Invalid(format!("unrecognised line: {}", line)));
            }
        }

        options.validate()?;
        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if opt.is_empty() {
            return Ok(());
        }

        let (negated, opt_name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };

        if let Some((key, value)) = opt_name.split_once(':') {
            return self.set_option(key.trim(), value.trim());
        }
        if let Some((key, value)) = opt_name.split_once('=') {
            return self.set_option(key.trim(), value.trim());
        }

        self.set_bool_option(opt_name, !negated)
    }

    /// Toggle an extra pass
    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        let flag = match name {
            "erase_top_walls" => ExtraPasses::ERASE_TOP_WALLS,
            "squish_ladder_ends" => ExtraPasses::SQUISH_LADDER_ENDS,
            "condense_walls" => ExtraPasses::CONDENSE_WALLS,
            "block_size" | "first_trim" | "second_trim" | "platform_variation"
            | "key_attempts" | "generation_attempts" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        };
        self.extra_passes.set(flag, value);
        Ok(())
    }

    /// Set an option with a value
    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        match name {
            "block_size" => self.block_size = parse_number(name, value)?,
            "first_trim" => self.first_trim = parse_range(name, value)?,
            "second_trim" => self.second_trim = parse_range(name, value)?,
            "platform_variation" => self.platform_variation = parse_number(name, value)?,
            "key_attempts" => self.key_attempts = parse_number(name, value)?,
            "generation_attempts" => self.generation_attempts = parse_number(name, value)?,
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Reject settings the pipeline cannot run with
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.block_size == 0 {
            return Err(OptionsError::Invalid("block_size must be positive".into()));
        }
        for (name, (low, high)) in [
            ("first_trim", self.first_trim),
            ("second_trim", self.second_trim),
        ] {
            if low > high {
                return Err(OptionsError::Invalid(format!(
                    "{} range {}-{} is inverted",
                    name, low, high
                )));
            }
        }
        if self.key_attempts == 0 || self.generation_attempts == 0 {
            return Err(OptionsError::Invalid("attempt limits must be positive".into()));
        }
        Ok(())
    }
}

fn parse_number(name: &str, value: &str) -> Result<u32, OptionsError> {
    value
        .parse()
        .map_err(|_| OptionsError::InvalidValue(name.to_string(), value.to_string()))
}

/// Parse `low-high` or a single number
fn parse_range(name: &str, value: &str) -> Result<(u32, u32), OptionsError> {
    match value.split_once('-') {
        Some((low, high)) => Ok((
            parse_number(name, low.trim())?,
            parse_number(name, high.trim())?,
        )),
        None => {
            let n = parse_number(name, value)?;
            Ok((n, n))
        }
    }
}
