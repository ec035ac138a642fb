//! Pluggable token generation.

use crate::board::TokenType;
use crate::core::GameRng;

/// Supplies new tokens for refills.
///
/// Implementations must return a token in `0..palette_size`, treating a
/// palette of 0 as 1. The engine is deterministic given its starting grid
/// and the sequence this yields.
pub trait TokenSource {
    /// Produce the next token.
    fn next_token(&mut self, palette_size: u8) -> TokenType;
}

impl TokenSource for GameRng {
    fn next_token(&mut self, palette_size: u8) -> TokenType {
        TokenType::new(self.gen_range_usize(0..palette_size.max(1) as usize) as u8)
    }
}

impl<T: TokenSource + ?Sized> TokenSource for &mut T {
    fn next_token(&mut self, palette_size: u8) -> TokenType {
        (**self).next_token(palette_size)
    }
}

impl<T: TokenSource + ?Sized> TokenSource for Box<T> {
    fn next_token(&mut self, palette_size: u8) -> TokenType {
        (**self).next_token(palette_size)
    }
}

/// Replays a fixed sequence of token ids, cycling when exhausted.
///
/// Ids are reduced modulo the palette size, so a script written for a
/// larger palette still yields valid tokens.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script: Vec<u8>,
    cursor: usize,
}

impl ScriptedSource {
    /// Create a source from raw token ids.
    ///
    /// An empty script yields token 0 forever.
    #[must_use]
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// How many tokens have been drawn.
    #[must_use]
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl TokenSource for ScriptedSource {
    fn next_token(&mut self, palette_size: u8) -> TokenType {
        let id = match self.script.len() {
            0 => 0,
            len => self.script[self.cursor % len],
        };
        self.cursor += 1;
        TokenType::new(id % palette_size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_source_stays_in_palette() {
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            assert!(rng.next_token(4).raw() < 4);
        }
    }

    #[test]
    fn test_rng_source_zero_palette() {
        let mut rng = GameRng::new(3);
        assert_eq!(rng.next_token(0), TokenType::new(0));
        assert_eq!(ScriptedSource::new(vec![4]).next_token(0), TokenType::new(0));
    }

    #[test]
    fn test_scripted_source_cycles() {
        let mut source = ScriptedSource::new(vec![0, 2, 1]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_token(3).raw()).collect();
        assert_eq!(drawn, vec![0, 2, 1, 0, 2]);
        assert_eq!(source.drawn(), 5);
    }

    #[test]
    fn test_scripted_source_wraps_palette() {
        let mut source = ScriptedSource::new(vec![7]);
        assert_eq!(source.next_token(3), TokenType::new(1));
    }

    #[test]
    fn test_empty_script() {
        let mut source = ScriptedSource::new(Vec::new());
        assert_eq!(source.next_token(5), TokenType::new(0));
    }

    #[test]
    fn test_source_by_reference() {
        fn draw<S: TokenSource>(mut source: S) -> TokenType {
            source.next_token(3)
        }

        let mut source = ScriptedSource::new(vec![1]);
        assert_eq!(draw(&mut source), TokenType::new(1));
        assert!(draw(Box::new(GameRng::new(0))).raw() < 3);
        assert_eq!(source.drawn(), 1);
    }
}
