//! Board configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Smallest width/height on which a run of three fits.
pub const MIN_DIMENSION: usize = 3;

/// Fewest token types for which cascades reliably settle.
///
/// Two types can fill a board without matches, but on larger boards the
/// unconstrained cascade refills almost never come back stable.
pub const MIN_PALETTE: u8 = 3;

/// Retry budget for the no-immediate-match refill.
pub const DEFAULT_REFILL_ATTEMPTS: u32 = 100;

/// Parameters for one board instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Number of distinct token types. Tokens are `0..palette_size`.
    pub palette_size: u8,

    /// Seed for the default token source.
    /// Same seed produces the same board and cascades.
    pub seed: u64,

    /// Re-rolls allowed per cell before a constrained refill accepts a
    /// run-completing token anyway.
    pub max_refill_attempts: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 8,
            height: 8,
            palette_size: 5,
            seed: 42,
            max_refill_attempts: DEFAULT_REFILL_ATTEMPTS,
        }
    }
}

impl BoardConfig {
    /// Create a config with the given dimensions, palette and seed.
    #[must_use]
    pub fn new(width: usize, height: usize, palette_size: u8, seed: u64) -> Self {
        Self {
            width,
            height,
            palette_size,
            seed,
            max_refill_attempts: DEFAULT_REFILL_ATTEMPTS,
        }
    }

    /// Set the board dimensions.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the palette size.
    pub fn with_palette(mut self, palette_size: u8) -> Self {
        self.palette_size = palette_size;
        self
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the constrained-refill retry budget.
    pub fn with_max_refill_attempts(mut self, attempts: u32) -> Self {
        self.max_refill_attempts = attempts;
        self
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(ConfigError::TooSmall {
                width: self.width,
                height: self.height,
            });
        }
        if self.palette_size < MIN_PALETTE {
            return Err(ConfigError::PaletteTooSmall(self.palette_size));
        }
        Ok(())
    }
}
