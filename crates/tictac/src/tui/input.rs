//! Keyboard mapping for the board.

use crossterm::event::KeyCode;
use tictac_core::Tile;

/// Moves the cursor one tile with the arrow keys, stopping at the edges.
pub fn move_cursor(cursor: Tile, key: KeyCode) -> Tile {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Tile::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to tiles.
pub fn digit_tile(key: KeyCode) -> Option<Tile> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Tile::from_index),
        _ => None,
    }
}
