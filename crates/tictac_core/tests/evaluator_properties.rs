//! Property-based tests for win/draw evaluation and random selection.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictac_core::{
    Occupancy, Outcome, Player, Tile, check_winner, evaluate, is_draw, pick_random_move,
};

// =============================================================================
// Strategies
// =============================================================================

/// Any assignment of players to tiles, including boards no real game reaches.
fn arb_occupancy() -> impl Strategy<Value = Occupancy> {
    prop::collection::vec(prop::option::of(prop::bool::ANY), 9).prop_map(|cells| {
        Tile::ALL
            .into_iter()
            .zip(cells)
            .filter_map(|(tile, cell)| {
                cell.map(|first| (tile, if first { Player::One } else { Player::Two }))
            })
            .collect()
    })
}

/// Whether `player` owns a full line, computed from the grid directly.
fn owns_line(occupancy: &Occupancy, player: Player) -> bool {
    let grid = occupancy.grid();
    let owned = |r: usize, c: usize| grid[r][c] == Some(player);

    let row = (0..3).any(|r| (0..3).all(|c| owned(r, c)));
    let col = (0..3).any(|c| (0..3).all(|r| owned(r, c)));
    let diag = (0..3).all(|i| owned(i, i));
    let anti = (0..3).all(|i| owned(i, 2 - i));
    row || col || diag || anti
}

proptest! {
    #[test]
    fn winner_iff_some_triple_owned(occupancy in arb_occupancy()) {
        let someone_owns = owns_line(&occupancy, Player::One) || owns_line(&occupancy, Player::Two);
        match check_winner(&occupancy) {
            Some(player) => prop_assert!(owns_line(&occupancy, player)),
            None => prop_assert!(!someone_owns),
        }
    }

    #[test]
    fn draw_iff_full_and_no_triple(occupancy in arb_occupancy()) {
        let someone_owns = owns_line(&occupancy, Player::One) || owns_line(&occupancy, Player::Two);
        let full = occupancy.len() == 9;
        prop_assert_eq!(is_draw(&occupancy), full && !someone_owns);
        prop_assert_eq!(evaluate(&occupancy) == Some(Outcome::Draw), full && !someone_owns);
    }

    #[test]
    fn random_move_is_always_free(occupancy in arb_occupancy(), seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        match pick_random_move(&occupancy, &mut rng) {
            Some(tile) => {
                prop_assert!(!occupancy.is_occupied(tile));
                prop_assert!(Tile::ALL.contains(&tile));
            }
            None => prop_assert!(occupancy.is_full()),
        }
    }
}

#[test]
fn example_row_owned_by_player_one() {
    let occupancy: Occupancy = [
        (Tile::T1, Player::One),
        (Tile::T2, Player::One),
        (Tile::T3, Player::One),
    ]
    .into_iter()
    .collect();
    assert_eq!(check_winner(&occupancy), Some(Player::One));
}

#[test]
fn example_full_board_without_triple_is_draw() {
    use Player::{One as X, Two as O};
    // X O X / X O O / O X X
    let occupancy: Occupancy = Tile::ALL
        .into_iter()
        .zip([X, O, X, X, O, O, O, X, X])
        .collect();
    assert_eq!(evaluate(&occupancy), Some(Outcome::Draw));
}

#[test]
fn example_empty_board_offers_all_nine() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let tile = pick_random_move(&Occupancy::new(), &mut rng).expect("free tile");
    assert!(Tile::ALL.contains(&tile));
}
