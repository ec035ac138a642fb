//! Grid coordinates and directions.
//!
//! Positions are `(column, row)` with row 0 at the bottom of the board, so
//! `Direction::Up` increases the row index and gravity pulls toward row 0.
//!
//! Positions know nothing about grid dimensions. Stepping below zero yields
//! `None`; the upper bound is checked by the grid that owns the cells.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Column index, 0 = leftmost.
    pub column: usize,
    /// Row index, 0 = bottom.
    pub row: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Offset by a signed delta on each axis.
    ///
    /// Returns `None` if either coordinate would go below zero.
    #[must_use]
    pub fn offset(self, columns: isize, rows: isize) -> Option<Self> {
        Some(Self {
            column: self.column.checked_add_signed(columns)?,
            row: self.row.checked_add_signed(rows)?,
        })
    }

    /// The neighbouring position one step in `direction`.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dc, dr) = direction.delta();
        self.offset(dc, dr)
    }

    /// Check 4-directional adjacency (exactly one step apart).
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        self.column.abs_diff(other.column) + self.row.abs_diff(other.row) == 1
    }

    /// Direction from `self` to an adjacent `other`, if they are adjacent.
    #[must_use]
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&d| self.step(d) == Some(other))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// One of the four swap directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(column, row)` delta for one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The reverse direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The axis this direction moves along.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A board axis. Runs are detected independently along each.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// Both axes.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];

    /// Step `distance` cells along this axis (negative = left/down).
    #[must_use]
    pub fn walk(self, from: Position, distance: isize) -> Option<Position> {
        match self {
            Axis::Horizontal => from.offset(distance, 0),
            Axis::Vertical => from.offset(0, distance),
        }
    }
}
