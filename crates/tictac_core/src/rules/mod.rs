//! Game rules for tic-tac-toe.
//!
//! Pure functions over an [`Occupancy`](crate::Occupancy). Rules are kept
//! apart from the session so the computer player, the invariant checks and
//! the front-end can all evaluate a board without owning a game.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{TRIPLES, check_winner, winning_triple};

use crate::{Occupancy, Outcome};
use tracing::instrument;

/// Evaluates a board: a winner, a draw, or `None` while play continues.
#[instrument(skip(occupancy))]
pub fn evaluate(occupancy: &Occupancy) -> Option<Outcome> {
    if let Some(player) = check_winner(occupancy) {
        Some(Outcome::Winner(player))
    } else if is_full(occupancy) {
        Some(Outcome::Draw)
    } else {
        None
    }
}
