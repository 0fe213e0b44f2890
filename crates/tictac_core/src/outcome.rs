//! Terminal results of a game.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player owns a full triple.
    Winner(Player),
    /// All nine tiles are filled and nobody owns a triple.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Banner text for the end-of-game menu.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Winner(Player::One) => "Player 1 Wins!",
            Outcome::Winner(Player::Two) => "Player 2 Wins!",
            Outcome::Draw => "It's a Draw!",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
