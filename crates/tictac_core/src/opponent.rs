//! Random move selection for the computer player.

use super::tile::Tile;
use super::types::Occupancy;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument};

/// Picks a uniformly random unoccupied tile.
///
/// Returns `None` only when every tile is taken. That is the end of the
/// game, not a failure.
#[instrument(skip(occupancy, rng), fields(occupied = occupancy.len()))]
pub fn pick_random_move<R: Rng + ?Sized>(occupancy: &Occupancy, rng: &mut R) -> Option<Tile> {
    let available = occupancy.unoccupied();
    let choice = available.choose(rng).copied();

    match choice {
        Some(tile) => debug!(%tile, available = available.len(), "Selected tile"),
        None => debug!("No available moves"),
    }

    choice
}

/// Computer opponent that plays random legal tiles.
#[derive(Debug, Clone)]
pub struct RandomOpponent<R = ChaCha8Rng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    /// Creates an opponent drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Chooses a tile for the current board.
    #[instrument(skip_all)]
    pub fn choose(&mut self, occupancy: &Occupancy) -> Option<Tile> {
        pick_random_move(occupancy, &mut self.rng)
    }
}

impl RandomOpponent<ChaCha8Rng> {
    /// Reproducible opponent: the same seed plays the same game.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Opponent seeded from OS entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_empty_board_yields_some_tile() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let tile = pick_random_move(&Occupancy::new(), &mut rng);
        assert!(tile.is_some());
    }

    #[test]
    fn test_full_board_yields_none() {
        let occupancy: Occupancy = Tile::ALL.into_iter().map(|t| (t, Player::One)).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(pick_random_move(&occupancy, &mut rng), None);
    }

    #[test]
    fn test_single_free_tile_is_forced() {
        let occupancy: Occupancy = Tile::ALL
            .into_iter()
            .filter(|t| *t != Tile::T6)
            .map(|t| (t, Player::Two))
            .collect();
        let mut opponent = RandomOpponent::seeded(7);
        assert_eq!(opponent.choose(&occupancy), Some(Tile::T6));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let occupancy: Occupancy = [(Tile::T1, Player::One)].into_iter().collect();
        let mut a = RandomOpponent::seeded(99);
        let mut b = RandomOpponent::seeded(99);
        for _ in 0..10 {
            assert_eq!(a.choose(&occupancy), b.choose(&occupancy));
        }
    }

    #[test]
    fn test_every_free_tile_is_reachable() {
        let occupancy: Occupancy = [(Tile::T5, Player::One)].into_iter().collect();
        let mut opponent = RandomOpponent::seeded(3);
        let mut seen = std::collections::BTreeSet::new();
        for _ in 0..500 {
            if let Some(tile) = opponent.choose(&occupancy) {
                seen.insert(tile);
            }
        }
        assert_eq!(seen.len(), 8);
        assert!(!seen.contains(&Tile::T5));
    }
}
