//! Error types for generation, layout loading and options
//!
//! Nothing in this crate panics on bad input; every failure is one of these
//! values so the caller can retry with fresh randomness or fall back to a
//! static layout.

use std::io;

use strum::Display;
use thiserror::Error;

/// Feature whose placement can run out of attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Feature {
    Exit,
    Key,
}

/// Errors that can occur while carving or running the terrain pipeline
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("grid dimensions must both be odd, got {width}x{height}")]
    EvenDimensions { width: usize, height: usize },

    #[error("grid {width}x{height} is smaller than the minimum {min_width}x{min_height}")]
    GridTooSmall {
        width: usize,
        height: usize,
        min_width: usize,
        min_height: usize,
    },

    #[error("level numbers start at 1, got {0}")]
    InvalidLevel(u32),

    #[error("exit shaft of width {shaft} does not fit a grid {width} cells wide")]
    ExitDoesNotFit { width: usize, shaft: u32 },

    #[error("could not place {feature} after {attempts} attempts")]
    PlacementExhausted { feature: Feature, attempts: u32 },

    #[error("level generation failed {attempts} times, last error: {last}")]
    AttemptsExhausted {
        attempts: u32,
        last: Box<GenerationError>,
    },
}

/// Errors from reading a serialised [`crate::TerrainMap`] back in
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("map has {found} tiles, expected {expected}")]
    TileCount { expected: usize, found: usize },

    #[error("map dimensions {width}x{height} overflow")]
    TooLarge { width: usize, height: usize },
}

/// Errors from the static ASCII layout loader
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("could not read layout file: {0}")]
    Io(#[from] io::Error),

    #[error("layout has {found} cells, expected at least {expected}")]
    TooShort { expected: usize, found: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_error_display() {
        let err = GenerationError::EvenDimensions {
            width: 16,
            height: 15,
        };
        assert!(err.to_string().contains("16x15"));

        let err = GenerationError::PlacementExhausted {
            feature: Feature::Key,
            attempts: 10,
        };
        assert_eq!(err.to_string(), "could not place Key after 10 attempts");
    }

    #[test]
    fn test_attempts_exhausted_reports_last() {
        let err = GenerationError::AttemptsExhausted {
            attempts: 3,
            last: Box::new(GenerationError::InvalidLevel(0)),
        };
        let text = err.to_string();
        assert!(text.contains("3 times"));
        assert!(text.contains("start at 1"));
    }

    #[test]
    fn test_layout_error_from_io() {
        let io = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: LayoutError = io.into();
        assert!(err.to_string().contains("missing"));
    }
}
