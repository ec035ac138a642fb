//! Column compaction after a clear.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::Position;

/// One surviving token's fall within its column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fall {
    pub from: Position,
    pub to: Position,
}

impl Fall {
    /// Number of rows fallen.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from.row - self.to.row
    }
}

/// Stateless gravity pass.
pub struct GravityCompactor;

impl GravityCompactor {
    /// Drop every token down over the empty cells below it.
    ///
    /// Columns are independent. Within a column, surviving tokens keep
    /// their relative order and all empty cells end up on top. Falls are
    /// listed column by column, bottom to top.
    pub fn compact(grid: &mut Grid) -> Vec<Fall> {
        let mut falls = Vec::new();
        for column in 0..grid.width() {
            Self::compact_column(grid, column, &mut falls);
        }
        falls
    }

    /// Compact a single column, appending its falls to `falls`.
    pub fn compact_column(grid: &mut Grid, column: usize, falls: &mut Vec<Fall>) {
        let mut gap = 0;
        for row in 0..grid.height() {
            let from = Position::new(column, row);
            if grid[from].is_empty() {
                gap += 1;
            } else if gap > 0 {
                let to = Position::new(column, row - gap);
                grid[to] = std::mem::take(&mut grid[from]);
                falls.push(Fall { from, to });
            }
        }
    }
}
