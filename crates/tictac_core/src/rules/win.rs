//! Win detection over the eight fixed triples.

use crate::{Occupancy, Player, Tile};
use tracing::instrument;

/// The eight lines that decide a game: rows, columns, diagonals.
pub const TRIPLES: [[Tile; 3]; 8] = [
    // Rows
    [Tile::T1, Tile::T2, Tile::T3],
    [Tile::T4, Tile::T5, Tile::T6],
    [Tile::T7, Tile::T8, Tile::T9],
    // Columns
    [Tile::T1, Tile::T4, Tile::T7],
    [Tile::T2, Tile::T5, Tile::T8],
    [Tile::T3, Tile::T6, Tile::T9],
    // Diagonals
    [Tile::T1, Tile::T5, Tile::T9],
    [Tile::T3, Tile::T5, Tile::T7],
];

/// Returns the first triple fully owned by one player, with that player.
#[instrument(skip(occupancy))]
fn owned_triple(occupancy: &Occupancy) -> Option<([Tile; 3], Player)> {
    let grid = occupancy.grid();
    let at = |tile: Tile| grid[tile.row()][tile.col()];

    TRIPLES.iter().find_map(|&[a, b, c]| match (at(a), at(b), at(c)) {
        (Some(pa), Some(pb), Some(pc)) if pa == pb && pb == pc => Some(([a, b, c], pa)),
        _ => None,
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player owns all three tiles of any
/// triple, `None` otherwise.
#[instrument(skip(occupancy))]
pub fn check_winner(occupancy: &Occupancy) -> Option<Player> {
    owned_triple(occupancy).map(|(_, player)| player)
}

/// The triple that won the game, for highlighting.
#[instrument(skip(occupancy))]
pub fn winning_triple(occupancy: &Occupancy) -> Option<[Tile; 3]> {
    owned_triple(occupancy).map(|(triple, _)| triple)
}
