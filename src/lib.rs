//! # match3-engine
//!
//! A presentation-agnostic rules engine for grid-based match-3 puzzles.
//!
//! ## Design Principles
//!
//! 1. **No Presentation**: The engine owns no timers, coroutines, or screen
//!    coordinates. Callers send discrete commands and receive
//!    [`BoardEvent`]s to animate.
//!
//! 2. **Deterministic**: All randomness flows through a [`TokenSource`].
//!    The default source is a seeded ChaCha8 stream, so a seed fully
//!    determines a game.
//!
//! 3. **One Owner**: The [`Engine`] owns its [`Grid`]. Every other component
//!    is a stateless function over the grid and refers to cells by
//!    [`Position`], never by back-reference.
//!
//! ## Modules
//!
//! - `core`: Positions, directions, RNG, configuration, errors
//! - `board`: Tokens, cells, and the grid
//! - `matching`: Run detection and bomb expansion
//! - `swap`: Swap validation and reversal
//! - `gravity`: Column compaction
//! - `refill`: Token sources and refill planning
//! - `events`: Output event stream
//! - `engine`: The orchestrating state machine
//!
//! ## Quick Start
//!
//! ```
//! use match3_engine::{BoardEvent, Engine, Position};
//!
//! let mut engine = Engine::initialize(6, 6, 4, 7).unwrap();
//! assert_eq!(engine.drain_events().last(), Some(&BoardEvent::BoardStable));
//!
//! match engine.swap_and_resolve(Position::new(2, 2), Position::new(3, 2)) {
//!     Ok(events) => assert!(events.iter().any(|e| e.is_stable() || matches!(e, BoardEvent::SwapReverted { .. }))),
//!     Err(err) => panic!("{err}"),
//! }
//! ```

pub mod core;
pub mod board;
pub mod matching;
pub mod swap;
pub mod gravity;
pub mod refill;
pub mod events;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Axis, Direction, Position,
    GameRng, GameRngState,
    BoardConfig,
    BoundsError, ConfigError, EngineError, SwapError,
};

pub use crate::board::{BombKind, Cell, Grid, TokenType};

pub use crate::matching::{MatchDetector, MatchSet};

pub use crate::swap::{PendingSwap, SwapOutcome, SwapReport, SwapResolver};

pub use crate::gravity::{Fall, GravityCompactor};

pub use crate::refill::{RefillPlanner, RefillReport, ScriptedSource, TokenSource};

pub use crate::events::BoardEvent;

pub use crate::engine::{Engine, PassSummary, Phase, ResolutionReport, ResolutionStatus};
