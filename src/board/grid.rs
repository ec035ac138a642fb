//! The width x height cell array.
//!
//! Cells are stored column-major (`column * height + row`) so that the
//! per-column passes of gravity and refill walk contiguous memory.
//!
//! ## Access
//!
//! - `get`/`get_mut`/`set`/`swap` return [`BoundsError`] for coordinates
//!   outside the board.
//! - `grid[pos]` is for positions the caller already knows are in bounds
//!   (e.g. produced by [`Grid::positions`]). An out-of-bounds index is a
//!   programming error and panics with the same `BoundsError` message.

use serde::{Deserialize, Serialize};

use crate::core::{BoundsError, Direction, Position};

use super::cell::{Cell, TokenType};

/// Rectangular board of cells with fixed dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; width * height],
        }
    }

    /// Create a grid by evaluating `f` at every position.
    #[must_use]
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(Position) -> Cell) -> Self {
        let mut grid = Self::new(width, height);
        for column in 0..width {
            for row in 0..height {
                let pos = Position::new(column, row);
                grid.cells[column * height + row] = f(pos);
            }
        }
        grid
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.column < self.width && pos.row < self.height
    }

    /// Fail with a [`BoundsError`] if `pos` is off the board.
    pub fn check(&self, pos: Position) -> Result<(), BoundsError> {
        self.index_of(pos).map(|_| ())
    }

    fn index_of(&self, pos: Position) -> Result<usize, BoundsError> {
        if self.is_in_bounds(pos) {
            Ok(pos.column * self.height + pos.row)
        } else {
            Err(BoundsError {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    // === Cell Access ===

    /// Get the cell at `pos`.
    pub fn get(&self, pos: Position) -> Result<&Cell, BoundsError> {
        let index = self.index_of(pos)?;
        Ok(&self.cells[index])
    }

    /// Get a mutable cell at `pos`.
    pub fn get_mut(&mut self, pos: Position) -> Result<&mut Cell, BoundsError> {
        let index = self.index_of(pos)?;
        Ok(&mut self.cells[index])
    }

    /// Replace the cell at `pos`, returning the previous contents.
    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<Cell, BoundsError> {
        let index = self.index_of(pos)?;
        Ok(std::mem::replace(&mut self.cells[index], cell))
    }

    /// Exchange the full contents of two cells.
    pub fn swap(&mut self, a: Position, b: Position) -> Result<(), BoundsError> {
        let ia = self.index_of(a)?;
        let ib = self.index_of(b)?;
        self.cells.swap(ia, ib);
        Ok(())
    }

    /// Token at `pos`, or `None` if the cell is empty or off the board.
    #[must_use]
    pub fn token_at(&self, pos: Position) -> Option<TokenType> {
        self.get(pos).ok().and_then(|cell| cell.token)
    }

    /// The in-bounds neighbour of `pos` in `direction`.
    #[must_use]
    pub fn neighbor(&self, pos: Position, direction: Direction) -> Option<Position> {
        pos.step(direction).filter(|&p| self.is_in_bounds(p))
    }

    // === Iteration ===

    /// All positions, column by column, bottom to top.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let height = self.height;
        (0..self.width).flat_map(move |column| (0..height).map(move |row| Position::new(column, row)))
    }

    /// Positions of one column, bottom to top.
    pub fn column(&self, column: usize) -> impl Iterator<Item = Position> {
        (0..self.height).map(move |row| Position::new(column, row))
    }

    /// Positions of one row, left to right.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Position> {
        (0..self.width).map(move |column| Position::new(column, row))
    }

    /// Tokens of one column, bottom to top.
    #[must_use]
    pub fn column_tokens(&self, column: usize) -> Vec<Option<TokenType>> {
        self.column(column).map(|pos| self.token_at(pos)).collect()
    }

    /// Positions currently tagged as matched, in scan order.
    #[must_use]
    pub fn matched_positions(&self) -> Vec<Position> {
        self.positions().filter(|&pos| self[pos].matched).collect()
    }

    // === Queries ===

    /// Check if every cell holds a token.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Check if any cell is tagged as matched.
    #[must_use]
    pub fn has_matched(&self) -> bool {
        self.cells.iter().any(|cell| cell.matched)
    }
}

impl std::ops::Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Cell {
        match self.index_of(pos) {
            Ok(index) => &self.cells[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl std::ops::IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Cell {
        match self.index_of(pos) {
            Ok(index) => &mut self.cells[index],
            Err(err) => panic!("{err}"),
        }
    }
}

impl std::fmt::Display for Grid {
    /// Top row first; `.` for empty, token id otherwise.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in (0..self.height).rev() {
            for pos in self.row(row) {
                match self[pos].token {
                    Some(token) => write!(f, "{:>3}", token.raw())?,
                    None => write!(f, "{:>3}", '.')?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
