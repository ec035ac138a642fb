//! Shared fixtures for integration tests.
#![allow(dead_code)]

use match3_engine::{BombKind, Cell, GameRng, Grid, TokenType};

/// Build a grid from rows listed top to bottom.
///
/// Letters are tokens (`A` = 0, `B` = 1, ...), `.` is an empty cell.
pub fn grid_from(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows[0].len();
    assert!(rows.iter().all(|r| r.len() == width), "ragged rows");

    Grid::from_fn(width, height, |pos| {
        match rows[height - 1 - pos.row].as_bytes()[pos.column] {
            b'.' => Cell::EMPTY,
            c => Cell::with_token(TokenType::new(c - b'A')),
        }
    })
}

/// A fully occupied grid of random tokens, roughly one in `bomb_every`
/// cells carrying a bomb (0 = no bombs).
pub fn random_grid(seed: u64, width: usize, height: usize, palette: u8, bomb_every: usize) -> Grid {
    let mut rng = GameRng::new(seed);
    Grid::from_fn(width, height, |_| {
        let cell = Cell::with_token(TokenType::new(rng.gen_range_usize(0..palette as usize) as u8));
        if bomb_every == 0 {
            return cell;
        }
        match rng.gen_range_usize(0..bomb_every * 2) {
            0 => cell.with_bomb(BombKind::Row),
            1 => cell.with_bomb(BombKind::Column),
            _ => cell,
        }
    })
}

/// Six-by-six board, palette {A, B, C}, no matches. Row 2 is
/// `A A B A B B`; swapping (2,2) and (3,2) turns it into `A A A B B B`.
pub const SIX_BY_SIX: [&str; 6] = [
    "CBCBCA",
    "BCACAC",
    "CBCBCA",
    "AABABB",
    "BCACAC",
    "CBCBCA",
];

/// Tokens only, ignoring flags.
pub fn tokens(grid: &Grid) -> Vec<Option<TokenType>> {
    grid.positions().map(|pos| grid[pos].token).collect()
}
