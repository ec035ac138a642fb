//! The engine: owns one board and sequences swaps into cascades.

use tracing::{debug, instrument, warn};

use crate::board::{BombKind, Grid};
use crate::core::{
    BoardConfig, ConfigError, Direction, EngineError, GameRng, GameRngState, Position, SwapError,
};
use crate::events::BoardEvent;
use crate::gravity::GravityCompactor;
use crate::matching::MatchDetector;
use crate::refill::{RefillPlanner, RefillReport, TokenSource};
use crate::swap::{SwapOutcome, SwapResolver};

use super::phase::{PassSummary, Phase, ResolutionReport, ResolutionStatus};

/// Match-3 rules engine for a single board.
///
/// ## Lifecycle
///
/// 1. Construct with [`Engine::initialize`], [`Engine::from_config`],
///    [`Engine::with_source`] or [`Engine::from_grid`]. The board is filled
///    without immediate matches and settled before it accepts input.
/// 2. [`request_swap`](Engine::request_swap) or
///    [`request_move`](Engine::request_move). A reverted swap leaves the
///    board accepting input; an applied one enters `Resolving`.
/// 3. Drive the cascade with [`step`](Engine::step) (one pass per call) or
///    [`resolve`](Engine::resolve) (to completion).
/// 4. Collect what happened with [`drain_events`](Engine::drain_events).
///
/// Requests made while `Resolving` are rejected with [`EngineError::Busy`].
#[derive(Clone, Debug)]
pub struct Engine<S = GameRng> {
    config: BoardConfig,
    grid: Grid,
    phase: Phase,
    source: S,
    planner: RefillPlanner,
    events: Vec<BoardEvent>,
    /// Passes run in the current resolution.
    passes: usize,
}

impl Engine<GameRng> {
    /// Create a seeded board of the given size and palette.
    pub fn initialize(width: usize, height: usize, palette_size: u8, seed: u64) -> Result<Self, EngineError> {
        Self::from_config(BoardConfig::new(width, height, palette_size, seed))
    }

    /// Create a board seeded from `config.seed`.
    pub fn from_config(config: BoardConfig) -> Result<Self, EngineError> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }

    /// Current position in the token stream, for replays.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.source.state()
    }
}

impl<S: TokenSource> Engine<S> {
    /// Create a board that draws tokens from `source`.
    pub fn with_source(config: BoardConfig, source: S) -> Result<Self, EngineError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height);
        let mut engine = Self::assemble(config, grid, source);
        engine.settle();
        Ok(engine)
    }

    /// Start from an existing grid.
    ///
    /// Empty cells are filled without immediate matches and any matches
    /// already present are resolved, so the engine starts stable.
    pub fn from_grid(config: BoardConfig, mut grid: Grid, source: S) -> Result<Self, EngineError> {
        config.validate()?;
        if grid.width() != config.width || grid.height() != config.height {
            return Err(ConfigError::GridMismatch {
                width: config.width,
                height: config.height,
                actual_width: grid.width(),
                actual_height: grid.height(),
            }
            .into());
        }

        for pos in grid.matched_positions() {
            grid[pos].matched = false;
        }

        let mut engine = Self::assemble(config, grid, source);
        engine.settle();
        Ok(engine)
    }

    fn assemble(config: BoardConfig, grid: Grid, source: S) -> Self {
        Self {
            planner: RefillPlanner::from_config(&config),
            config,
            grid,
            phase: Phase::AcceptingInput,
            source,
            events: Vec::new(),
            passes: 0,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_accepting_input(&self) -> bool {
        self.phase == Phase::AcceptingInput
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn events(&self) -> &[BoardEvent] {
        &self.events
    }

    /// Take all recorded events.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commands ===

    /// Rebuild the whole board from the token source.
    ///
    /// Every existing token is reported cleared before the new fill.
    pub fn reset(&mut self) -> Result<(), EngineError> {
        self.ensure_accepting()?;

        for pos in self.grid.positions().collect::<Vec<_>>() {
            if let Some(token) = self.grid[pos].clear() {
                self.events.push(BoardEvent::TokenCleared { pos, token });
            }
        }

        self.settle();
        Ok(())
    }

    /// Arm the token at `pos` as a row or column bomb.
    ///
    /// Replaces any bomb kind the token already carried.
    #[instrument(level = "debug", skip(self))]
    pub fn set_bomb_flag(&mut self, pos: Position, kind: BombKind) -> Result<(), EngineError> {
        self.ensure_accepting()?;

        let cell = self.grid.get_mut(pos)?;
        if cell.is_empty() {
            return Err(EngineError::EmptyCell(pos));
        }
        cell.bomb = Some(kind);

        self.events.push(BoardEvent::BombSet { pos, kind });
        Ok(())
    }

    /// Swap two adjacent cells.
    ///
    /// On [`SwapOutcome::Applied`] the engine enters `Resolving`; drive it
    /// with [`step`](Self::step) or [`resolve`](Self::resolve). Invalid
    /// requests leave the board untouched.
    #[instrument(level = "debug", skip(self))]
    pub fn request_swap(&mut self, a: Position, b: Position) -> Result<SwapOutcome, EngineError> {
        self.ensure_accepting()?;

        let report = SwapResolver::try_swap(&mut self.grid, a, b)?;
        self.events.push(BoardEvent::TokensSwapped { a, b });

        match report.outcome {
            SwapOutcome::Applied => {
                self.phase = Phase::Resolving;
                self.passes = 0;
            }
            SwapOutcome::Reverted => {
                self.events.push(BoardEvent::SwapReverted { a, b });
            }
        }

        Ok(report.outcome)
    }

    /// Swap the token at `pos` with its neighbour in `direction`.
    pub fn request_move(&mut self, pos: Position, direction: Direction) -> Result<SwapOutcome, EngineError> {
        self.ensure_accepting()?;
        self.grid.check(pos).map_err(SwapError::from)?;

        let other = self
            .grid
            .neighbor(pos, direction)
            .ok_or(SwapError::OffEdge { from: pos, direction })?;

        self.request_swap(pos, other)
    }

    /// Swap, resolve the cascade, and return all events since the last drain.
    pub fn swap_and_resolve(&mut self, a: Position, b: Position) -> Result<Vec<BoardEvent>, EngineError> {
        self.request_swap(a, b)?;
        self.resolve();
        Ok(self.drain_events())
    }

    // === Resolution ===

    /// Run one cascade pass.
    ///
    /// Returns `Complete` once the board is stable (immediately, if it
    /// already was).
    pub fn step(&mut self) -> ResolutionStatus {
        match self.advance() {
            Some(pass) if pass.next_matches > 0 => ResolutionStatus::Processing,
            _ => ResolutionStatus::Complete,
        }
    }

    /// Run passes until the board is stable.
    pub fn resolve(&mut self) -> ResolutionReport {
        let mut report = ResolutionReport::default();
        while let Some(pass) = self.advance() {
            report.record(&pass);
        }
        report
    }

    fn advance(&mut self) -> Option<PassSummary> {
        if self.phase != Phase::Resolving {
            return None;
        }

        let pass = self.run_pass();
        if pass.next_matches == 0 {
            self.phase = Phase::AcceptingInput;
            self.events.push(BoardEvent::BoardStable);
            debug!(passes = self.passes, "board stable");
        }
        Some(pass)
    }

    /// clear -> compact -> refill -> detect.
    fn run_pass(&mut self) -> PassSummary {
        self.passes += 1;
        if self.passes == self.config.cell_count() {
            warn!(
                passes = self.passes,
                palette = self.config.palette_size,
                "cascade is unusually long"
            );
        }

        let cleared = self.clear_matched();

        let falls = GravityCompactor::compact(&mut self.grid);
        self.events
            .extend(falls.iter().map(|fall| BoardEvent::TokenMoved { from: fall.from, to: fall.to }));

        let refill = self.planner.refill(&mut self.grid, &mut self.source, true);
        self.record_spawns(&refill);

        let matches = MatchDetector::detect(&mut self.grid);

        let pass = PassSummary {
            cleared,
            moved: falls.len(),
            spawned: refill.spawned.len(),
            next_matches: matches.len(),
        };
        debug!(pass = self.passes, ?pass, "cascade pass");
        pass
    }

    fn clear_matched(&mut self) -> usize {
        let mut cleared = 0;
        for pos in self.grid.matched_positions() {
            if let Some(token) = self.grid[pos].clear() {
                self.events.push(BoardEvent::TokenCleared { pos, token });
                cleared += 1;
            }
        }
        cleared
    }

    /// Fill empty cells without immediate matches, then resolve anything
    /// the fill could not avoid.
    fn settle(&mut self) {
        let refill = self.planner.refill(&mut self.grid, &mut self.source, false);
        if refill.used_fallback() {
            debug!(cells = refill.fallbacks.len(), "initial fill left matches");
        }
        self.record_spawns(&refill);

        self.passes = 0;
        if MatchDetector::detect(&mut self.grid).is_empty() {
            self.phase = Phase::AcceptingInput;
            self.events.push(BoardEvent::BoardStable);
        } else {
            self.phase = Phase::Resolving;
            self.resolve();
        }
    }

    fn record_spawns(&mut self, refill: &RefillReport) {
        self.events.extend(
            refill
                .spawned
                .iter()
                .map(|&(pos, token)| BoardEvent::TokenSpawned { pos, token }),
        );
    }

    fn ensure_accepting(&self) -> Result<(), EngineError> {
        match self.phase {
            Phase::AcceptingInput => Ok(()),
            Phase::Resolving => Err(EngineError::Busy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, TokenType};
    use crate::refill::ScriptedSource;

    /// Rows listed top to bottom; letters are tokens starting at `A`.
    fn grid_from(rows: &[&str]) -> Grid {
        let height = rows.len();
        Grid::from_fn(rows[0].len(), height, |pos| {
            let c = rows[height - 1 - pos.row].as_bytes()[pos.column];
            Cell::with_token(TokenType::new(c - b'A'))
        })
    }

    #[test]
    fn test_initialize_is_full_and_stable() {
        let mut engine = Engine::initialize(8, 8, 5, 42).unwrap();

        assert!(engine.grid().is_full());
        assert!(engine.is_accepting_input());
        assert!(MatchDetector::find(engine.grid()).is_empty());

        let events = engine.drain_events();
        assert_eq!(events.last(), Some(&BoardEvent::BoardStable));
        assert!(engine.events().is_empty());
    }

    #[test]
    fn test_initialize_rejects_bad_config() {
        assert_eq!(
            Engine::initialize(2, 8, 5, 0).unwrap_err(),
            EngineError::Config(ConfigError::TooSmall { width: 2, height: 8 })
        );
        assert!(matches!(
            Engine::initialize(6, 6, 1, 0),
            Err(EngineError::Config(ConfigError::PaletteTooSmall(1)))
        ));
        assert!(matches!(
            Engine::initialize(12, 12, 2, 0),
            Err(EngineError::Config(ConfigError::PaletteTooSmall(2)))
        ));
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = Engine::initialize(7, 9, 4, 1234).unwrap();
        let b = Engine::initialize(7, 9, 4, 1234).unwrap();
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.rng_state(), b.rng_state());
    }

    #[test]
    fn test_from_grid_dimension_mismatch() {
        let config = BoardConfig::new(4, 4, 3, 0);
        let err = Engine::from_grid(config, Grid::new(3, 4), ScriptedSource::new(vec![0])).unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::GridMismatch { .. })));
    }

    #[test]
    fn test_busy_while_resolving() {
        let grid = grid_from(&["CBA", "BCA", "AAB"]);
        let config = BoardConfig::new(3, 3, 3, 0);
        let mut engine = Engine::from_grid(config, grid, ScriptedSource::new(vec![1, 2, 0])).unwrap();

        let outcome = engine.request_swap(Position::new(2, 0), Position::new(2, 1)).unwrap();
        assert_eq!(outcome, SwapOutcome::Applied);
        assert_eq!(engine.phase(), Phase::Resolving);

        assert_eq!(
            engine.request_swap(Position::new(0, 1), Position::new(0, 2)),
            Err(EngineError::Busy)
        );
        assert_eq!(
            engine.set_bomb_flag(Position::new(0, 0), BombKind::Row),
            Err(EngineError::Busy)
        );
        assert_eq!(engine.reset(), Err(EngineError::Busy));

        engine.resolve();
        assert!(engine.is_accepting_input());
    }

    #[test]
    fn test_step_on_stable_board_is_complete() {
        let mut engine = Engine::initialize(5, 5, 4, 9).unwrap();
        engine.drain_events();

        assert_eq!(engine.step(), ResolutionStatus::Complete);
        assert!(engine.events().is_empty());
        assert_eq!(engine.resolve(), ResolutionReport::default());
    }

    #[test]
    fn test_set_bomb_flag() {
        let mut engine = Engine::initialize(4, 4, 4, 5).unwrap();
        engine.drain_events();
        let pos = Position::new(1, 2);

        engine.set_bomb_flag(pos, BombKind::Column).unwrap();

        assert!(engine.grid()[pos].is_column_bomb());
        assert_eq!(
            engine.drain_events(),
            vec![BoardEvent::BombSet { pos, kind: BombKind::Column }]
        );
        assert!(matches!(
            engine.set_bomb_flag(Position::new(4, 0), BombKind::Row),
            Err(EngineError::Bounds(_))
        ));
    }

    #[test]
    fn test_request_move_off_edge() {
        let mut engine = Engine::initialize(4, 4, 4, 5).unwrap();
        let before = engine.grid().clone();

        let err = engine.request_move(Position::new(0, 3), Direction::Up).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidSwap(SwapError::OffEdge {
                from: Position::new(0, 3),
                direction: Direction::Up,
            })
        );
        assert!(matches!(
            engine.request_move(Position::new(9, 0), Direction::Left),
            Err(EngineError::InvalidSwap(SwapError::OutOfBounds(_)))
        ));
        assert_eq!(engine.grid(), &before);
    }

    #[test]
    fn test_reset_rebuilds_board() {
        let mut engine = Engine::initialize(5, 5, 4, 77).unwrap();
        engine.drain_events();

        engine.reset().unwrap();
        let events = engine.drain_events();

        let cleared = events
            .iter()
            .filter(|e| matches!(e, BoardEvent::TokenCleared { .. }))
            .count();
        let spawned = events
            .iter()
            .filter(|e| matches!(e, BoardEvent::TokenSpawned { .. }))
            .count();
        assert_eq!(cleared, 25);
        assert!(spawned >= 25);
        assert!(engine.grid().is_full());
        assert_eq!(events.last(), Some(&BoardEvent::BoardStable));
    }
}
