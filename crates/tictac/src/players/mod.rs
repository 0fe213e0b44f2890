//! Player trait and implementations.

mod computer;

pub use computer::ComputerPlayer;

use tictac_core::{Occupancy, Tile};

/// Something that picks tiles on its own, without keyboard input.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Chooses a tile for the current board.
    ///
    /// `None` means there is nothing left to play.
    async fn choose_tile(&mut self, occupancy: &Occupancy) -> Option<Tile>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
