//! Match detection.
//!
//! [`MatchDetector`] scans a grid for runs of three or more identical
//! tokens along either axis and expands the result through triggered
//! bombs. Detection and tagging are fused: [`MatchDetector::detect`] sets
//! `matched` on every cell it returns so the clear step can scan for the
//! flag.
//!
//! ## Example
//!
//! ```
//! use match3_engine::board::{Cell, Grid, TokenType};
//! use match3_engine::core::Position;
//! use match3_engine::matching::MatchDetector;
//!
//! // Bottom row is a run of three; everything else is distinct.
//! let mut grid = Grid::from_fn(3, 3, |pos| {
//!     let id = if pos.row == 0 { 0 } else { (1 + pos.column + pos.row) % 3 + 1 };
//!     Cell::with_token(TokenType::new(id as u8))
//! });
//!
//! let matches = MatchDetector::detect(&mut grid);
//! assert_eq!(matches.len(), 3);
//! assert!(grid[Position::new(1, 0)].matched);
//! ```

mod detector;
mod set;

pub use detector::MatchDetector;
pub use set::MatchSet;
