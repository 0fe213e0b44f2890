//! The in-memory record of one game.
//!
//! A [`GameSession`] owns the occupancy, whose turn it is and the
//! pause/input flags the front-end drives. It is the only place pieces
//! get placed, so the placement rules live here:
//!
//! - a tile, once occupied, is never reassigned;
//! - the move count always equals the number of occupied tiles;
//! - a game turns terminal (win or draw) exactly once, after which no
//!   placement is accepted until [`GameSession::reset`].

use super::action::{Move, MoveError};
#[cfg(debug_assertions)]
use super::invariants::{InvariantSet, SessionInvariants};
use super::mode::GameMode;
use super::outcome::Outcome;
use super::rules;
use super::tile::Tile;
use super::types::{Occupancy, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// The move that was applied.
    pub action: Move,
    /// Set when this move ended the game.
    pub outcome: Option<Outcome>,
}

/// What [`GameSession::resume`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResumeAction {
    /// The paused game continues once input unlocks.
    Resumed,
    /// The game was over, so resuming started a fresh one.
    Restarted,
}

/// A single game between two players.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    pub(crate) mode: GameMode,
    pub(crate) occupancy: Occupancy,
    pub(crate) current_player: Player,
    pub(crate) move_count: usize,
    pub(crate) history: Vec<Move>,
    pub(crate) paused: bool,
    pub(crate) accepting_input: bool,
    pub(crate) outcome: Option<Outcome>,
}

impl GameSession {
    /// Creates a session ready for player one's first move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(%mode, "Creating new game session");
        Self {
            mode,
            occupancy: Occupancy::new(),
            current_player: Player::One,
            move_count: 0,
            history: Vec::new(),
            paused: false,
            accepting_input: true,
            outcome: None,
        }
    }

    /// Places the current player's piece on `tile`.
    ///
    /// On success the turn passes to the other player, unless the move
    /// won or drew the game.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has an outcome.
    /// - [`MoveError::Paused`] while paused.
    /// - [`MoveError::InputLocked`] until [`unlock_input`](Self::unlock_input).
    /// - [`MoveError::TileOccupied`] if the tile already holds a piece.
    #[instrument(skip(self), fields(player = ?self.current_player, moves = self.move_count))]
    pub fn place(&mut self, tile: Tile) -> Result<Placement, MoveError> {
        if self.outcome.is_some() {
            debug!("Ignoring placement after game end");
            return Err(MoveError::GameOver);
        }
        if self.paused {
            debug!("Ignoring placement while paused");
            return Err(MoveError::Paused);
        }
        if !self.accepting_input {
            debug!("Ignoring placement while input is locked");
            return Err(MoveError::InputLocked);
        }

        let mut next = self.clone();
        let action = Move::new(next.current_player, tile);
        next.occupancy.occupy(tile, action.player)?;
        next.move_count += 1;
        next.history.push(action);

        let outcome = rules::check_winner(&next.occupancy)
            .map(Outcome::Winner)
            .or_else(|| (next.move_count == Tile::ALL.len()).then_some(Outcome::Draw));

        match outcome {
            Some(result) => next.outcome = Some(result),
            None => next.current_player = next.current_player.opponent(),
        }

        #[cfg(debug_assertions)]
        SessionInvariants::check_all(&next).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            tracing::warn!(%descriptions, "Session invariants violated");
            MoveError::InvariantViolation(descriptions)
        })?;

        *self = next;
        info!(%action, "Piece placed");
        if let Some(result) = outcome {
            info!(%result, moves = self.move_count, "Game over");
        }

        Ok(Placement { action, outcome })
    }

    /// Pauses the game and stops accepting placements.
    #[instrument(skip(self))]
    pub fn pause(&mut self) {
        debug!("Pausing session");
        self.paused = true;
        self.accepting_input = false;
    }

    /// Leaves the pause menu.
    ///
    /// A finished game restarts instead. Either way input stays locked
    /// until [`unlock_input`](Self::unlock_input). A running game that
    /// is not paused is left as it is.
    #[instrument(skip(self))]
    pub fn resume(&mut self) -> ResumeAction {
        if self.outcome.is_some() {
            self.reset();
            return ResumeAction::Restarted;
        }
        if !self.paused {
            debug!("Resume without pause");
            return ResumeAction::Resumed;
        }
        debug!("Resuming session");
        self.paused = false;
        self.accepting_input = false;
        ResumeAction::Resumed
    }

    /// Accepts placements again after a resume or restart.
    ///
    /// Has no effect while paused.
    #[instrument(skip(self))]
    pub fn unlock_input(&mut self) {
        if self.paused {
            return;
        }
        self.accepting_input = true;
    }

    /// Clears the board for a new game in the same mode.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(mode = %self.mode, "Game reset");
        self.occupancy.clear();
        self.history.clear();
        self.move_count = 0;
        self.current_player = Player::One;
        self.outcome = None;
        self.paused = false;
        self.accepting_input = false;
    }

    /// Switches mode and starts a new game.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }

    /// The player whose piece goes down next.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Tiles and the players holding them.
    pub fn occupancy(&self) -> &Occupancy {
        &self.occupancy
    }

    /// Number of pieces placed this game.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Moves in the order they were played.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Whether the pause menu is up.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the game is still being played.
    pub fn is_active(&self) -> bool {
        self.outcome.is_none()
    }

    /// Whether a placement would currently be considered.
    pub fn accepts_input(&self) -> bool {
        self.accepting_input && !self.paused && self.is_active()
    }

    /// The selected mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The result, once the game has one.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the computer should move now.
    pub fn is_computer_turn(&self) -> bool {
        self.is_active() && self.mode.is_computer(self.current_player)
    }

    /// The tiles forming the winning line, if the game was won.
    pub fn winning_triple(&self) -> Option<[Tile; 3]> {
        rules::winning_triple(&self.occupancy)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}
