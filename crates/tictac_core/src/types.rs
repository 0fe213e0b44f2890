//! Core domain types: players and tile occupancy.

use super::action::MoveError;
use super::tile::Tile;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{instrument, warn};

/// One of the two sides.
///
/// Player one places X pieces and always opens a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First to move, places X.
    One,
    /// Second to move, places O.
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Display label ("Player 1" / "Player 2").
    pub fn label(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }

    /// The piece this player places.
    pub fn piece(self) -> char {
        match self {
            Player::One => 'X',
            Player::Two => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Which player holds which tile.
///
/// At most nine entries. Entries are only ever added; the whole map is
/// cleared on reset, never individual tiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    tiles: BTreeMap<Tile, Player>,
}

impl Occupancy {
    /// Creates an empty occupancy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the player on `tile`, if any.
    pub fn get(&self, tile: Tile) -> Option<Player> {
        self.tiles.get(&tile).copied()
    }

    /// Checks whether `tile` holds a piece.
    pub fn is_occupied(&self, tile: Tile) -> bool {
        self.tiles.contains_key(&tile)
    }

    /// Number of occupied tiles.
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// True when no tile is occupied.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// True when all nine tiles are occupied.
    pub fn is_full(&self) -> bool {
        self.tiles.len() == Tile::ALL.len()
    }

    /// Iterates occupied tiles in board order.
    pub fn iter(&self) -> impl Iterator<Item = (Tile, Player)> + '_ {
        self.tiles.iter().map(|(tile, player)| (*tile, *player))
    }

    /// Records `player` on `tile`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::TileOccupied`] if the tile already holds a piece.
    #[instrument(skip(self))]
    pub fn occupy(&mut self, tile: Tile, player: Player) -> Result<(), MoveError> {
        if let Some(holder) = self.get(tile) {
            warn!(%tile, ?holder, "Tile is already occupied");
            return Err(MoveError::TileOccupied(tile));
        }
        self.tiles.insert(tile, player);
        Ok(())
    }

    /// Unoccupied tiles in board order.
    #[instrument(skip(self))]
    pub fn unoccupied(&self) -> Vec<Tile> {
        Tile::ALL
            .iter()
            .copied()
            .filter(|tile| !self.is_occupied(*tile))
            .collect()
    }

    /// Rebuilds the 3x3 grid, indexed `[row][col]`.
    pub fn grid(&self) -> [[Option<Player>; 3]; 3] {
        let mut grid = [[None; 3]; 3];
        for (tile, player) in self.iter() {
            grid[tile.row()][tile.col()] = Some(player);
        }
        grid
    }

    /// Removes every piece.
    pub(crate) fn clear(&mut self) {
        self.tiles.clear();
    }

    /// Renders the board as text, empty tiles showing their number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.grid().iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Some(player) => result.push(player.piece()),
                    None => result.push_str(&(row * 3 + col + 1).to_string()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl FromIterator<(Tile, Player)> for Occupancy {
    /// Builds an occupancy; a tile listed twice keeps its first player.
    fn from_iter<I: IntoIterator<Item = (Tile, Player)>>(iter: I) -> Self {
        let mut occupancy = Self::new();
        for (tile, player) in iter {
            occupancy.tiles.entry(tile).or_insert(player);
        }
        occupancy
    }
}
