//! Game orchestration between two self-driving players.

use crate::players::Player;
use anyhow::{Context, Result};
use std::fmt;
use tictac_core::{GameSession, Move, Outcome, Player as Side};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the orchestrator to an observer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was applied.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// The applied move.
        action: Move,
    },
    /// The game ended.
    GameOver {
        /// Name of the winner, `None` for a draw.
        winner: Option<String>,
    },
}

/// Runs a session to completion, asking each side's player in turn.
pub struct Orchestrator {
    player_one: Box<dyn Player>,
    player_two: Box<dyn Player>,
    event_tx: Option<mpsc::UnboundedSender<GameEvent>>,
}

impl Orchestrator {
    /// Creates a new orchestrator.
    pub fn new(player_one: Box<dyn Player>, player_two: Box<dyn Player>) -> Self {
        Self {
            player_one,
            player_two,
            event_tx: None,
        }
    }

    /// Reports every move and the result on `event_tx`.
    pub fn with_events(mut self, event_tx: mpsc::UnboundedSender<GameEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.event_tx {
            // A dropped observer does not stop the game.
            let _ = tx.send(event);
        }
    }

    fn player_name(&self, side: Side) -> &str {
        match side {
            Side::One => self.player_one.name(),
            Side::Two => self.player_two.name(),
        }
    }

    /// Plays `session` until it has an outcome.
    #[instrument(skip_all, fields(moves = session.move_count()))]
    pub async fn run(&mut self, session: &mut GameSession) -> Result<Outcome> {
        info!("Starting game orchestration");

        loop {
            if let Some(outcome) = session.outcome() {
                let winner = outcome.winner().map(|side| self.player_name(side).to_string());
                self.emit(GameEvent::GameOver { winner });
                return Ok(outcome);
            }

            let side = session.current_player();
            let player = match side {
                Side::One => &mut self.player_one,
                Side::Two => &mut self.player_two,
            };

            debug!(player = %player.name(), "Waiting for move");
            let tile = player
                .choose_tile(session.occupancy())
                .await
                .with_context(|| format!("{} has no move on an unfinished board", player.name()))?;

            let placement = session
                .place(tile)
                .with_context(|| format!("{} chose an illegal tile {}", player.name(), tile))?;

            let name = player.name().to_string();
            self.emit(GameEvent::MoveMade {
                player: name,
                action: placement.action,
            });
        }
    }
}

/// Tally of finished games.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationReport {
    /// Games won by player one.
    pub player_one_wins: usize,
    /// Games won by player two.
    pub player_two_wins: usize,
    /// Drawn games.
    pub draws: usize,
}

impl SimulationReport {
    /// Counts one finished game.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Side::One) => self.player_one_wins += 1,
            Outcome::Winner(Side::Two) => self.player_two_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Total games counted.
    pub fn games(&self) -> usize {
        self.player_one_wins + self.player_two_wins + self.draws
    }
}

impl fmt::Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} games: Player 1 won {}, Player 2 won {}, {} drawn",
            self.games(),
            self.player_one_wins,
            self.player_two_wins,
            self.draws
        )
    }
}

/// Plays `games` back-to-back games on one session.
#[instrument(skip(orchestrator, session))]
pub async fn simulate(
    orchestrator: &mut Orchestrator,
    session: &mut GameSession,
    games: usize,
) -> Result<SimulationReport> {
    let mut report = SimulationReport::default();
    for game in 0..games {
        session.reset();
        session.unlock_input();
        let outcome = orchestrator.run(session).await?;
        debug!(game, %outcome, board = %session.occupancy().display(), "Simulated game finished");
        report.record(outcome);
    }
    info!(%report, "Simulation complete");
    Ok(report)
}
