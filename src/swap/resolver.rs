//! Swap validation, application and reversal.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::board::{Cell, Grid};
use crate::core::{Position, SwapError};
use crate::matching::{MatchDetector, MatchSet};

/// Result of a swap attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SwapOutcome {
    /// The swap produced at least one match and stays on the board.
    Applied,
    /// No match; the board was restored to its pre-swap contents.
    Reverted,
}

/// A swap in flight, holding what is needed to undo it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingSwap {
    pub a: Position,
    pub b: Position,
    pub previous_a: Cell,
    pub previous_b: Cell,
}

impl PendingSwap {
    /// Capture the current contents of `a` and `b`.
    pub fn capture(grid: &Grid, a: Position, b: Position) -> Result<Self, SwapError> {
        Ok(Self {
            a,
            b,
            previous_a: *grid.get(a)?,
            previous_b: *grid.get(b)?,
        })
    }

    /// Put both cells back exactly as captured.
    pub fn revert(self, grid: &mut Grid) -> Result<(), SwapError> {
        grid.set(self.a, self.previous_a)?;
        grid.set(self.b, self.previous_b)?;
        Ok(())
    }
}

/// Outcome plus the matches an applied swap produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwapReport {
    pub outcome: SwapOutcome,
    /// Empty when the swap was reverted.
    pub matches: MatchSet,
}

/// Stateless swap resolver.
pub struct SwapResolver;

impl SwapResolver {
    /// Check that `a` and `b` are on the board and share an edge.
    pub fn validate(grid: &Grid, a: Position, b: Position) -> Result<(), SwapError> {
        grid.check(a)?;
        grid.check(b)?;
        if !a.is_adjacent(b) {
            return Err(SwapError::NotAdjacent { a, b });
        }
        Ok(())
    }

    /// Swap two adjacent cells and keep the swap only if it creates a match.
    ///
    /// On `Applied`, the matched cells are tagged on the grid. On
    /// `Reverted`, the grid is identical to its state before the call.
    /// Invalid requests leave the grid untouched.
    pub fn try_swap(grid: &mut Grid, a: Position, b: Position) -> Result<SwapReport, SwapError> {
        Self::validate(grid, a, b)?;
        let pending = PendingSwap::capture(grid, a, b)?;

        grid.swap(a, b)?;
        let matches = MatchDetector::detect(grid);

        if matches.is_empty() {
            pending.revert(grid)?;
            debug!(%a, %b, "swap reverted");
            Ok(SwapReport {
                outcome: SwapOutcome::Reverted,
                matches,
            })
        } else {
            debug!(%a, %b, matched = matches.len(), "swap applied");
            Ok(SwapReport {
                outcome: SwapOutcome::Applied,
                matches,
            })
        }
    }
}
