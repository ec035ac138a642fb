//! Core engine types: positions, RNG, configuration, errors.
//!
//! Nothing in this module knows about tokens or matching. The board-level
//! modules build on these.

pub mod position;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Axis, Direction, Position};
pub use rng::{GameRng, GameRngState};
pub use config::{BoardConfig, DEFAULT_REFILL_ATTEMPTS, MIN_DIMENSION, MIN_PALETTE};
pub use error::{BoundsError, ConfigError, EngineError, SwapError};
