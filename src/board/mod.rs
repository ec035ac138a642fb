//! Board storage: tokens, cells, and the grid that owns them.
//!
//! The grid is a pure data container. Matching, swapping, gravity and
//! refill all operate on it from outside and refer to cells by
//! [`Position`](crate::core::Position), never by stored back-references.

pub mod cell;
pub mod grid;

pub use cell::{BombKind, Cell, TokenType};
pub use grid::Grid;
