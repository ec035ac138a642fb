//! Board events for presentation layers.

use serde::{Deserialize, Serialize};

use crate::board::{BombKind, TokenType};
use crate::core::Position;

/// A discrete, already-resolved state change.
///
/// Within one cascade pass the engine emits all `TokenCleared` events,
/// then all `TokenMoved` events, then all `TokenSpawned` events. A
/// resolution ends with exactly one `BoardStable`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Two tokens exchanged places.
    TokensSwapped { a: Position, b: Position },

    /// A swap produced no match and was undone.
    SwapReverted { a: Position, b: Position },

    /// A token was armed as a bomb.
    BombSet { pos: Position, kind: BombKind },

    /// A matched token was removed.
    TokenCleared { pos: Position, token: TokenType },

    /// A token fell from `from` to `to`.
    TokenMoved { from: Position, to: Position },

    /// A new token appeared in an empty cell.
    TokenSpawned { pos: Position, token: TokenType },

    /// No matches remain; the board accepts input.
    BoardStable,
}

impl BoardEvent {
    /// Check if this event ends a resolution.
    #[must_use]
    pub fn is_stable(&self) -> bool {
        matches!(self, BoardEvent::BoardStable)
    }
}
