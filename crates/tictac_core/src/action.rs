//! Placement actions and the reasons a placement is refused.

use super::tile::Tile;
use super::types::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player placing their piece on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player placing the piece.
    pub player: Player,
    /// The tile receiving the piece.
    pub tile: Tile,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, tile: Tile) -> Self {
        Self { player, tile }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.tile)
    }
}

/// Why a placement was not applied.
///
/// The front-end treats all of these as "ignore the click"; none of
/// them leave the session in a different state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The tile already holds a piece.
    #[display("Tile {} is already occupied", _0)]
    TileOccupied(Tile),

    /// The game has reached a win or a draw.
    #[display("Game is already over")]
    GameOver,

    /// The session is paused.
    #[display("Game is paused")]
    Paused,

    /// Input is locked while the board settles after resume or restart.
    #[display("Input is locked")]
    InputLocked,

    /// A session invariant failed after the move (debug builds only).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
