//! Refill planning for empty cells.

use serde::{Deserialize, Serialize};
use tracing::{trace, warn};

use crate::board::{Cell, Grid, TokenType};
use crate::core::{BoardConfig, Position, DEFAULT_REFILL_ATTEMPTS};
use crate::matching::MatchDetector;

use super::source::TokenSource;

/// What a refill placed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefillReport {
    /// Every spawned token, in placement order.
    pub spawned: Vec<(Position, TokenType)>,

    /// Cells where the constrained refill ran out of re-rolls and accepted
    /// a token that completes a run. Always empty for unconstrained refills.
    pub fallbacks: Vec<Position>,
}

impl RefillReport {
    /// Check if any cell fell back to a run-completing token.
    #[must_use]
    pub fn used_fallback(&self) -> bool {
        !self.fallbacks.is_empty()
    }
}

/// Fills empty cells from a [`TokenSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefillPlanner {
    palette_size: u8,
    max_attempts: u32,
}

impl RefillPlanner {
    /// Create a planner for the given palette.
    ///
    /// A palette of 0 is treated as a single token type.
    #[must_use]
    pub fn new(palette_size: u8) -> Self {
        Self {
            palette_size: palette_size.max(1),
            max_attempts: DEFAULT_REFILL_ATTEMPTS,
        }
    }

    /// Create a planner from board configuration.
    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.palette_size).with_max_attempts(config.max_refill_attempts)
    }

    /// Set the re-roll budget for constrained refills.
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[must_use]
    pub fn palette_size(&self) -> u8 {
        self.palette_size
    }

    /// Fill every empty cell, column by column, top to bottom.
    ///
    /// With `allow_immediate_match == false`, a candidate that would
    /// complete a run with tokens already on the board is re-rolled, up to
    /// the attempt budget. If the budget runs out the last candidate is
    /// placed anyway and the cell is listed in
    /// [`RefillReport::fallbacks`].
    pub fn refill<S: TokenSource + ?Sized>(
        &self,
        grid: &mut Grid,
        source: &mut S,
        allow_immediate_match: bool,
    ) -> RefillReport {
        let mut report = RefillReport::default();

        for column in 0..grid.width() {
            for row in (0..grid.height()).rev() {
                let pos = Position::new(column, row);
                if !grid[pos].is_empty() {
                    continue;
                }

                let token = if allow_immediate_match {
                    source.next_token(self.palette_size)
                } else {
                    let (token, settled) = self.pick_without_match(grid, pos, source);
                    if !settled {
                        warn!(%pos, %token, attempts = self.max_attempts, "refill fell back to a matching token");
                        report.fallbacks.push(pos);
                    }
                    token
                };

                trace!(%pos, %token, "spawned");
                grid[pos] = Cell::with_token(token);
                report.spawned.push((pos, token));
            }
        }

        report
    }

    /// Draw until a token does not complete a run at `pos`.
    ///
    /// Returns the token and whether it is free of matches.
    fn pick_without_match<S: TokenSource + ?Sized>(
        &self,
        grid: &Grid,
        pos: Position,
        source: &mut S,
    ) -> (TokenType, bool) {
        let mut token = source.next_token(self.palette_size);
        let mut attempts = 0;

        while MatchDetector::completes_run(grid, pos, token) {
            if attempts >= self.max_attempts {
                return (token, false);
            }
            token = source.next_token(self.palette_size);
            attempts += 1;
        }

        (token, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::refill::ScriptedSource;

    #[test]
    fn test_fills_only_empty_cells() {
        let mut grid = Grid::from_fn(3, 3, |pos| {
            if pos.row == 2 {
                Cell::EMPTY
            } else {
                Cell::with_token(TokenType::new(9))
            }
        });
        let mut rng = GameRng::new(1);

        let report = RefillPlanner::new(3).refill(&mut grid, &mut rng, true);

        assert_eq!(report.spawned.len(), 3);
        assert!(grid.is_full());
        assert!(grid[Position::new(0, 0)].holds(TokenType::new(9)));
        assert!(report.spawned.iter().all(|(pos, _)| pos.row == 2));
    }

    #[test]
    fn test_scan_is_top_down_per_column() {
        let mut grid = Grid::new(2, 2);
        let mut source = ScriptedSource::new(vec![0, 1, 2, 3]);

        let report = RefillPlanner::new(4).refill(&mut grid, &mut source, true);

        let order: Vec<_> = report.spawned.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(
            order,
            vec![
                Position::new(0, 1),
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_constrained_refill_avoids_matches() {
        for seed in 0..20 {
            let mut grid = Grid::new(8, 8);
            let mut rng = GameRng::new(seed);

            let report = RefillPlanner::new(3).refill(&mut grid, &mut rng, false);

            assert!(!report.used_fallback());
            assert!(MatchDetector::find(&grid).is_empty(), "seed {seed}");
        }
    }

    #[test]
    fn test_constrained_refill_rerolls() {
        // Column 0 is [A, A, empty]; the script offers A first, then B.
        let mut grid = Grid::from_fn(3, 3, |pos| {
            if pos.column == 0 && pos.row < 2 {
                Cell::with_token(TokenType::new(0))
            } else if pos.column == 0 {
                Cell::EMPTY
            } else {
                Cell::with_token(TokenType::new(2))
            }
        });
        grid[Position::new(1, 2)] = Cell::with_token(TokenType::new(1));
        let mut source = ScriptedSource::new(vec![0, 1]);

        let report = RefillPlanner::new(3).refill(&mut grid, &mut source, false);

        assert_eq!(report.spawned, vec![(Position::new(0, 2), TokenType::new(1))]);
        assert_eq!(source.drawn(), 2);
    }

    #[test]
    fn test_fallback_after_budget() {
        // Only token 0 is ever offered and it always completes the column.
        let mut grid = Grid::from_fn(3, 3, |pos| {
            if pos.column == 0 && pos.row == 2 {
                Cell::EMPTY
            } else if pos.column == 0 {
                Cell::with_token(TokenType::new(0))
            } else {
                Cell::with_token(TokenType::new(1 + (pos.row + pos.column) as u8 % 2))
            }
        });
        let mut source = ScriptedSource::new(vec![0]);

        let report = RefillPlanner::new(3)
            .with_max_attempts(5)
            .refill(&mut grid, &mut source, false);

        assert_eq!(report.fallbacks, vec![Position::new(0, 2)]);
        assert!(grid[Position::new(0, 2)].holds(TokenType::new(0)));
        assert_eq!(source.drawn(), 6);
    }

    #[test]
    fn test_unconstrained_refill_allows_matches() {
        let mut grid = Grid::new(3, 3);
        let mut source = ScriptedSource::new(vec![0]);

        let report = RefillPlanner::new(3).refill(&mut grid, &mut source, true);

        assert!(!report.used_fallback());
        assert_eq!(MatchDetector::find(&grid).len(), 9);
    }

    #[test]
    fn test_zero_palette_yields_single_token() {
        let planner = RefillPlanner::new(0);
        assert_eq!(planner.palette_size(), 1);

        let mut grid = Grid::new(3, 3);
        let mut rng = GameRng::new(1);
        let report = planner.refill(&mut grid, &mut rng, true);

        assert_eq!(report.spawned.len(), 9);
        assert!(report.spawned.iter().all(|(_, token)| token.raw() == 0));
    }

    #[test]
    fn test_from_config() {
        let config = BoardConfig::default().with_palette(6).with_max_refill_attempts(7);
        let planner = RefillPlanner::from_config(&config);
        assert_eq!(planner.palette_size(), 6);
        assert_eq!(planner, RefillPlanner::new(6).with_max_attempts(7));
    }
}
