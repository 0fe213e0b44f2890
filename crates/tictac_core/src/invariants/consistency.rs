//! Invariants tying a session's history, board and turn together.

use super::Invariant;
use crate::{GameSession, Occupancy, Player, rules};

/// Tiles are never reassigned: replaying the history onto an empty board
/// succeeds move by move and reproduces the occupancy.
pub struct MonotonicOccupancy;

impl Invariant<GameSession> for MonotonicOccupancy {
    fn holds(session: &GameSession) -> bool {
        let mut replayed = Occupancy::new();
        for mv in session.history() {
            if replayed.occupy(mv.tile, mv.player).is_err() {
                return false;
            }
        }
        replayed == *session.occupancy()
    }

    fn description() -> &'static str {
        "Occupied tiles are never reassigned"
    }
}

/// Move count, history length and occupied tiles agree.
pub struct MoveCountConsistent;

impl Invariant<GameSession> for MoveCountConsistent {
    fn holds(session: &GameSession) -> bool {
        let count = session.move_count();
        count == session.occupancy().len() && count == session.history().len()
    }

    fn description() -> &'static str {
        "Move count equals the number of occupied tiles"
    }
}

/// Player one opens and the players alternate; while the game is live the
/// turn marker points at the player due next.
pub struct AlternatingTurns;

impl Invariant<GameSession> for AlternatingTurns {
    fn holds(session: &GameSession) -> bool {
        let alternates = session
            .history()
            .iter()
            .enumerate()
            .all(|(i, mv)| mv.player == if i % 2 == 0 { Player::One } else { Player::Two });

        if !alternates {
            return false;
        }

        match session.history().last() {
            _ if !session.is_active() => true,
            Some(last) => session.current_player() == last.player.opponent(),
            None => session.current_player() == Player::One,
        }
    }

    fn description() -> &'static str {
        "Players alternate starting with player one"
    }
}

/// The recorded outcome is exactly what the board evaluates to.
pub struct OutcomeMatchesBoard;

impl Invariant<GameSession> for OutcomeMatchesBoard {
    fn holds(session: &GameSession) -> bool {
        session.outcome() == rules::evaluate(session.occupancy())
    }

    fn description() -> &'static str {
        "Outcome matches the board"
    }
}
