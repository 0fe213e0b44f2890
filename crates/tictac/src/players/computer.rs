//! The random computer player.

use super::Player;
use std::time::Duration;
use tictac_core::{Occupancy, RandomOpponent, Tile};
use tracing::{debug, instrument};

/// Computer player that waits a moment, then plays a random free tile.
pub struct ComputerPlayer {
    name: String,
    opponent: RandomOpponent,
    think_delay: Duration,
}

impl ComputerPlayer {
    /// Creates a computer player.
    pub fn new(name: impl Into<String>, opponent: RandomOpponent, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            opponent,
            think_delay,
        }
    }

    /// Seeded when `seed` is given, otherwise from entropy.
    pub fn with_seed(name: impl Into<String>, seed: Option<u64>, think_delay: Duration) -> Self {
        let opponent = match seed {
            Some(seed) => RandomOpponent::seeded(seed),
            None => RandomOpponent::from_entropy(),
        };
        Self::new(name, opponent, think_delay)
    }
}

#[async_trait::async_trait]
impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, delay = ?self.think_delay))]
    async fn choose_tile(&mut self, occupancy: &Occupancy) -> Option<Tile> {
        if !self.think_delay.is_zero() {
            tokio::time::sleep(self.think_delay).await;
        }

        let tile = self.opponent.choose(occupancy);
        debug!(?tile, "Computer chose tile");
        tile
    }

    fn name(&self) -> &str {
        &self.name
    }
}
