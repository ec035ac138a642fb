//! The set of positions tagged by one detection pass.

use rustc_hash::FxHashSet;

use crate::core::Position;

/// Positions matched in a single detection pass.
///
/// Unordered and duplicate-free. Use [`MatchSet::sorted`] when a stable
/// order is needed (e.g. for events or comparisons in tests).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchSet {
    positions: FxHashSet<Position>,
    triggered_bombs: Vec<Position>,
}

impl MatchSet {
    /// Create an empty match set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a position. Returns false if it was already present.
    pub fn insert(&mut self, pos: Position) -> bool {
        self.positions.insert(pos)
    }

    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Iterate positions in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    /// Positions in `(column, row)` order.
    #[must_use]
    pub fn sorted(&self) -> Vec<Position> {
        let mut positions: Vec<_> = self.iter().collect();
        positions.sort_unstable();
        positions
    }

    /// Bombs whose line sweep fed this set, in `(column, row)` order.
    #[must_use]
    pub fn triggered_bombs(&self) -> &[Position] {
        &self.triggered_bombs
    }

    pub(crate) fn record_bomb(&mut self, pos: Position) {
        if let Err(index) = self.triggered_bombs.binary_search(&pos) {
            self.triggered_bombs.insert(index, pos);
        }
    }
}

impl Extend<Position> for MatchSet {
    fn extend<I: IntoIterator<Item = Position>>(&mut self, iter: I) {
        self.positions.extend(iter);
    }
}

impl FromIterator<Position> for MatchSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
