//! Token types and cell contents.

use serde::{Deserialize, Serialize};

/// Token type identifier. Palette entries are `0..palette_size`.
///
/// The engine never interprets these beyond equality; presentation layers
/// map them to sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenType(pub u8);

impl TokenType {
    /// Create a new token type.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for TokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token({})", self.0)
    }
}

/// Which line a bomb clears when it takes part in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BombKind {
    /// Clears the bomb's entire row.
    Row,
    /// Clears the bomb's entire column.
    Column,
}

/// Contents of one grid slot.
///
/// `token == None` is the empty sentinel. A bomb is a property of the token
/// in the slot, so a cell is plain, a row bomb, or a column bomb, never more
/// than one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Token occupying the cell.
    pub token: Option<TokenType>,

    /// Bomb flag carried by the token.
    pub bomb: Option<BombKind>,

    /// Tagged by the most recent detection pass.
    pub matched: bool,
}

impl Cell {
    /// An empty cell.
    pub const EMPTY: Cell = Cell {
        token: None,
        bomb: None,
        matched: false,
    };

    /// A plain, unmatched token.
    #[must_use]
    pub const fn with_token(token: TokenType) -> Self {
        Self {
            token: Some(token),
            bomb: None,
            matched: false,
        }
    }

    /// The same cell carrying a bomb (builder pattern).
    #[must_use]
    pub const fn with_bomb(mut self, kind: BombKind) -> Self {
        self.bomb = Some(kind);
        self
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.token.is_none()
    }

    #[must_use]
    pub fn is_row_bomb(&self) -> bool {
        self.bomb == Some(BombKind::Row)
    }

    #[must_use]
    pub fn is_column_bomb(&self) -> bool {
        self.bomb == Some(BombKind::Column)
    }

    /// Check if this cell holds `token`.
    #[must_use]
    pub fn holds(&self, token: TokenType) -> bool {
        self.token == Some(token)
    }

    /// Empty the cell, resetting all flags.
    ///
    /// Returns the token that was removed.
    pub fn clear(&mut self) -> Option<TokenType> {
        std::mem::take(self).token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Cell::default(), Cell::EMPTY);
        assert!(Cell::EMPTY.is_empty());
    }

    #[test]
    fn test_bomb_flags_are_exclusive() {
        let cell = Cell::with_token(TokenType::new(2)).with_bomb(BombKind::Row);
        assert!(cell.is_row_bomb());
        assert!(!cell.is_column_bomb());

        let cell = cell.with_bomb(BombKind::Column);
        assert!(cell.is_column_bomb());
        assert!(!cell.is_row_bomb());
    }

    #[test]
    fn test_clear_resets_flags() {
        let mut cell = Cell::with_token(TokenType::new(1)).with_bomb(BombKind::Column);
        cell.matched = true;

        assert_eq!(cell.clear(), Some(TokenType::new(1)));
        assert_eq!(cell, Cell::EMPTY);
        assert_eq!(cell.clear(), None);
    }

    #[test]
    fn test_holds() {
        let cell = Cell::with_token(TokenType::new(3));
        assert!(cell.holds(TokenType::new(3)));
        assert!(!cell.holds(TokenType::new(0)));
        assert!(!Cell::EMPTY.holds(TokenType::new(3)));
    }
}
