//! Error taxonomy.
//!
//! - [`BoundsError`]: grid access outside `[0, width) x [0, height)`. A
//!   programming error; indexing a grid out of bounds panics with it.
//! - [`SwapError`]: a swap request that is not between two adjacent,
//!   in-bounds cells. Rejected without touching the board.
//! - [`ConfigError`]: board parameters that cannot produce a playable board.
//! - [`EngineError`]: everything the [`Engine`](crate::engine::Engine)
//!   hands back to its caller.
//!
//! Exhausting the refill retry budget is not an error here: it is
//! reported through [`RefillReport`](crate::refill::RefillReport) and never
//! stops the engine.

use thiserror::Error;

use super::position::{Direction, Position};

/// A grid coordinate outside the board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("position {position} is outside the {width}x{height} grid")]
pub struct BoundsError {
    pub position: Position,
    pub width: usize,
    pub height: usize,
}

/// Rejected swap request.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SwapError {
    /// One of the two cells is off the board.
    #[error(transparent)]
    OutOfBounds(#[from] BoundsError),

    /// A directional move would leave the board.
    #[error("cannot move {direction} from {from}: board edge")]
    OffEdge { from: Position, direction: Direction },

    /// The two cells do not share an edge.
    #[error("{a} and {b} are not adjacent")]
    NotAdjacent { a: Position, b: Position },
}

/// Board parameters that cannot produce a playable board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid must be at least 3x3 for a match to be possible, got {width}x{height}")]
    TooSmall { width: usize, height: usize },

    #[error("palette needs at least 3 token types for cascades to settle, got {0}")]
    PaletteTooSmall(u8),

    #[error("grid is {actual_width}x{actual_height} but config expects {width}x{height}")]
    GridMismatch {
        width: usize,
        height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

/// Errors returned by the engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A cascade is still in flight; input is not accepted until it settles.
    #[error("board is resolving a cascade and does not accept input")]
    Busy,

    #[error("invalid swap: {0}")]
    InvalidSwap(#[from] SwapError),

    #[error(transparent)]
    Bounds(#[from] BoundsError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Bombs can only be armed on a cell holding a token.
    #[error("cell {0} holds no token")]
    EmptyCell(Position),
}
