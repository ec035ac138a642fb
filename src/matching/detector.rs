//! Run detection and bomb expansion.
//!
//! ## Algorithm
//!
//! Every occupied cell is treated as the centre of a horizontal and a
//! vertical triple. When all three cells of a triple hold the same token,
//! all three are added to the set. Overlapping triples cover runs longer
//! than three, and cells on the board edge simply have no triple along the
//! axis that would leave the board.
//!
//! A bomb that lands in the set sweeps its whole row (or column) into the
//! set as well. Bombs caught in a sweep fire in turn, until no new bomb is
//! reached.
//!
//! The result is a set union closed under bomb sweeps, so the order cells
//! are visited in has no effect on it.

use smallvec::SmallVec;
use tracing::trace;

use crate::board::{BombKind, Grid, TokenType};
use crate::core::{Axis, Position};

use super::set::MatchSet;

/// Stateless match finder.
pub struct MatchDetector;

impl MatchDetector {
    /// Find all matches and tag them on the grid.
    ///
    /// Every returned position has `matched` set on its cell. Flags set by
    /// earlier passes are left alone; clearing resets them.
    pub fn detect(grid: &mut Grid) -> MatchSet {
        let set = Self::find(grid);
        for pos in set.iter() {
            grid[pos].matched = true;
        }
        set
    }

    /// Find all matches without touching the grid.
    #[must_use]
    pub fn find(grid: &Grid) -> MatchSet {
        Self::find_in_order(grid, grid.positions())
    }

    /// Find all matches, visiting centre cells in the given order.
    ///
    /// Positions off the board are skipped. The result equals [`find`]
    /// whenever `order` covers every position.
    ///
    /// [`find`]: MatchDetector::find
    #[must_use]
    pub fn find_in_order(grid: &Grid, order: impl IntoIterator<Item = Position>) -> MatchSet {
        let mut set = MatchSet::new();
        let mut bombs: SmallVec<[Position; 8]> = SmallVec::new();

        for center in order {
            if !grid.is_in_bounds(center) {
                continue;
            }
            for axis in Axis::BOTH {
                if let Some(run) = Self::triple(grid, center, axis) {
                    trace!(%center, ?axis, "triple matched");
                    for pos in run {
                        if set.insert(pos) && grid[pos].bomb.is_some() {
                            bombs.push(pos);
                        }
                    }
                }
            }
        }

        Self::sweep_bombs(grid, &mut set, bombs);
        set
    }

    /// The triple centred on `center` along `axis`, if all three cells are
    /// on the board and hold the same token.
    #[must_use]
    pub fn triple(grid: &Grid, center: Position, axis: Axis) -> Option<[Position; 3]> {
        let token = grid.token_at(center)?;
        let before = axis.walk(center, -1)?;
        let after = axis.walk(center, 1)?;

        if grid.token_at(before) == Some(token) && grid.token_at(after) == Some(token) {
            Some([before, center, after])
        } else {
            None
        }
    }

    /// Check if placing `token` at `pos` would complete a run of three with
    /// tokens already on the board.
    ///
    /// Considers every triple that contains `pos`, in either axis. The
    /// current contents of `pos` itself are ignored.
    #[must_use]
    pub fn completes_run(grid: &Grid, pos: Position, token: TokenType) -> bool {
        Axis::BOTH.into_iter().any(|axis| {
            (-2isize..=0).any(|start| {
                (start..start + 3)
                    .filter(|&k| k != 0)
                    .all(|k| axis.walk(pos, k).and_then(|p| grid.token_at(p)) == Some(token))
            })
        })
    }

    fn sweep_bombs(grid: &Grid, set: &mut MatchSet, mut bombs: SmallVec<[Position; 8]>) {
        while let Some(bomb) = bombs.pop() {
            let Some(kind) = grid[bomb].bomb else {
                continue;
            };
            set.record_bomb(bomb);

            let line: Vec<Position> = match kind {
                BombKind::Row => grid.row(bomb.row).collect(),
                BombKind::Column => grid.column(bomb.column).collect(),
            };
            trace!(%bomb, ?kind, "bomb swept line");

            for pos in line {
                let cell = grid[pos];
                if cell.is_empty() {
                    continue;
                }
                if set.insert(pos) && cell.bomb.is_some() {
                    bombs.push(pos);
                }
            }
        }
    }
}
