//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::Occupancy;
use tracing::instrument;

/// Checks if every tile is occupied.
#[instrument(skip(occupancy))]
pub fn is_full(occupancy: &Occupancy) -> bool {
    occupancy.is_full()
}

/// A full board with no winner.
#[instrument(skip(occupancy))]
pub fn is_draw(occupancy: &Occupancy) -> bool {
    is_full(occupancy) && check_winner(occupancy).is_none()
}
