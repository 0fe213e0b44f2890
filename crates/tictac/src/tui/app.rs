//! Application state and key handling.

use super::input::{digit_tile, move_cursor};
use crate::config::GameConfig;
use crate::players::{ComputerPlayer, Player};
use anyhow::{Context, Result};
use crossterm::event::KeyCode;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use tictac_core::{GameSession, Placement, ResumeAction, Skin, SkinCatalog, Tile};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

/// Answer from a computer move running in the background.
pub struct ComputerReply {
    generation: u64,
    tile: Option<Tile>,
    player: ComputerPlayer,
}

/// Main application state.
pub struct App {
    session: GameSession,
    catalog: SkinCatalog,
    skin: Skin,
    cursor: Tile,
    /// Bumped on every new game; replies from an older game are dropped.
    generation: u64,
    computer: Option<ComputerPlayer>,
    computer_busy: bool,
    pending_computer: Option<Tile>,
    input_cooldown: Duration,
    unlock_at: Option<Instant>,
    status: String,
    should_quit: bool,
}

impl App {
    /// Builds the app from configuration.
    ///
    /// Fails only if `catalog` has no skins.
    #[instrument(skip_all, fields(mode = %config.mode(), skin = %config.skin()))]
    pub fn new(config: &GameConfig, catalog: SkinCatalog) -> Result<Self> {
        let chosen = if *config.random_skin() {
            let mut rng = match config.seed() {
                Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                None => ChaCha8Rng::from_entropy(),
            };
            catalog.random(&mut rng)
        } else {
            catalog.get(config.skin())
        };
        let skin = chosen.cloned().context("Skin catalog is empty")?;

        info!(skin = %skin.name(), "Starting app");
        let computer = ComputerPlayer::with_seed("Computer", *config.seed(), config.think_delay());

        Ok(Self {
            session: GameSession::new(*config.mode()),
            catalog,
            skin,
            cursor: Tile::T5,
            generation: 0,
            computer: Some(computer),
            computer_busy: false,
            pending_computer: None,
            input_cooldown: config.input_cooldown(),
            unlock_at: None,
            status: "Player 1's turn".to_string(),
            should_quit: false,
        })
    }

    /// The running game.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The active skin.
    pub fn skin(&self) -> &Skin {
        &self.skin
    }

    /// The highlighted tile.
    pub fn cursor(&self) -> Tile {
        self.cursor
    }

    /// The status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Whether the computer is working out its move.
    pub fn is_thinking(&self) -> bool {
        self.session.is_computer_turn() && (self.computer_busy || self.pending_computer.is_some())
    }

    /// Handles one key press.
    #[instrument(skip(self, now))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) {
        if key == KeyCode::Char('q') {
            info!("User quit");
            self.should_quit = true;
            return;
        }

        if self.session.is_paused() {
            match key {
                KeyCode::Char('r') | KeyCode::Esc => self.resume(now),
                KeyCode::Char('n') => self.restart(now),
                _ => debug!("Ignoring key while paused"),
            }
            return;
        }

        match key {
            KeyCode::Char('p') | KeyCode::Esc => self.pause(),
            KeyCode::Char('n') => self.restart(now),
            KeyCode::Char('r') if !self.session.is_active() => self.restart(now),
            KeyCode::Char('m') => self.toggle_mode(now),
            KeyCode::Char('s') => self.cycle_skin(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.place_human(self.cursor),
            _ => {
                if let Some(tile) = digit_tile(key) {
                    self.cursor = tile;
                    self.place_human(tile);
                }
            }
        }
    }

    /// Advances timers: ends the input cooldown and plays a held
    /// computer move once input is accepted again.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.unlock_at
            && now >= at
        {
            self.unlock_at = None;
            self.session.unlock_input();
        }

        if self.session.accepts_input()
            && self.session.is_computer_turn()
            && let Some(tile) = self.pending_computer.take()
        {
            self.apply(tile);
        }
    }

    /// Whether a computer move should be requested now.
    pub fn needs_computer_move(&self) -> bool {
        self.session.is_computer_turn()
            && self.session.accepts_input()
            && !self.computer_busy
            && self.pending_computer.is_none()
            && self.computer.is_some()
    }

    /// Starts the computer's move on a background task.
    ///
    /// The answer arrives on `reply_tx` and goes to
    /// [`on_computer_reply`](Self::on_computer_reply).
    #[instrument(skip_all, fields(generation = self.generation))]
    pub fn request_computer_move(&mut self, reply_tx: mpsc::UnboundedSender<ComputerReply>) {
        let Some(mut player) = self.computer.take() else {
            warn!("Computer move requested while one is in flight");
            return;
        };

        self.computer_busy = true;
        self.status = format!("{} is thinking...", player.name());
        let generation = self.generation;
        let occupancy = self.session.occupancy().clone();

        tokio::spawn(async move {
            let tile = player.choose_tile(&occupancy).await;
            // The receiver only goes away on quit.
            let _ = reply_tx.send(ComputerReply {
                generation,
                tile,
                player,
            });
        });
    }

    /// Applies a finished computer move.
    ///
    /// A reply from an earlier game is dropped. One that lands while the
    /// game is paused or locked is held until [`tick`](Self::tick) finds
    /// input accepted again.
    #[instrument(skip_all, fields(generation = reply.generation, tile = ?reply.tile))]
    pub fn on_computer_reply(&mut self, reply: ComputerReply) {
        self.computer = Some(reply.player);
        self.computer_busy = false;

        if reply.generation != self.generation {
            debug!(current = self.generation, "Dropping stale computer move");
            return;
        }

        match reply.tile {
            Some(tile) if self.session.accepts_input() => self.apply(tile),
            Some(tile) => {
                debug!("Holding computer move until input unlocks");
                self.pending_computer = Some(tile);
            }
            None => warn!("Computer found no free tile"),
        }
    }

    fn place_human(&mut self, tile: Tile) {
        if self.session.is_computer_turn() {
            self.status = "Wait for the computer".to_string();
            return;
        }
        self.apply(tile);
    }

    fn apply(&mut self, tile: Tile) {
        match self.session.place(tile) {
            Ok(placement) => self.status = self.describe(placement),
            Err(e) => {
                debug!(%tile, error = %e, "Placement rejected");
                self.status = e.to_string();
            }
        }
    }

    fn describe(&self, placement: Placement) -> String {
        match placement.outcome {
            Some(outcome) => outcome.message().to_string(),
            None => format!(
                "{} played {}. {}'s turn",
                placement.action.player,
                placement.action.tile,
                self.session.current_player()
            ),
        }
    }

    fn pause(&mut self) {
        self.session.pause();
        self.status = "Game paused".to_string();
    }

    fn resume(&mut self, now: Instant) {
        match self.session.resume() {
            ResumeAction::Resumed => self.status = format!("{}'s turn", self.session.current_player()),
            ResumeAction::Restarted => self.new_game(),
        }
        self.lock_for_cooldown(now);
    }

    fn restart(&mut self, now: Instant) {
        self.session.reset();
        self.new_game();
        self.lock_for_cooldown(now);
    }

    fn toggle_mode(&mut self, now: Instant) {
        let mode = self.session.mode().toggle();
        self.session.set_mode(mode);
        self.new_game();
        self.status = format!("{mode}. Player 1's turn");
        self.lock_for_cooldown(now);
    }

    fn new_game(&mut self) {
        self.generation += 1;
        self.pending_computer = None;
        self.cursor = Tile::T5;
        self.status = "New game. Player 1's turn".to_string();
    }

    fn cycle_skin(&mut self) {
        if let Some(next) = self.catalog.next_after(self.skin.name()) {
            info!(skin = %next.name(), "Skin changed");
            self.skin = next.clone();
            self.status = format!("Skin: {}", self.skin.name());
        }
    }

    fn lock_for_cooldown(&mut self, now: Instant) {
        self.unlock_at = Some(now + self.input_cooldown);
        self.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictac_core::{GameMode, Outcome, Player as Side};

    fn app(mode: GameMode) -> App {
        let config = GameConfig::default()
            .with_mode(mode)
            .with_input_cooldown_ms(0)
            .with_think_delay_ms(0)
            .with_seed(Some(7));
        App::new(&config, SkinCatalog::builtin()).unwrap()
    }

    fn press(app: &mut App, key: KeyCode) {
        app.handle_key(key, Instant::now());
    }

    #[test]
    fn test_digits_place_pieces() {
        let mut app = app(GameMode::HumanVsHuman);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.session().outcome(), Some(Outcome::Winner(Side::One)));
        assert_eq!(app.status(), "Player 1 Wins!");
    }

    #[test]
    fn test_enter_places_at_cursor() {
        let mut app = app(GameMode::HumanVsHuman);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session().occupancy().get(Tile::T2), Some(Side::One));
    }

    #[test]
    fn test_occupied_tile_reports_error() {
        let mut app = app(GameMode::HumanVsHuman);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().move_count(), 1);
        assert!(app.status().contains("T5"));
    }

    #[test]
    fn test_pause_blocks_moves() {
        let mut app = app(GameMode::HumanVsHuman);
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().move_count(), 0);

        press(&mut app, KeyCode::Char('r'));
        assert!(!app.session().is_paused());
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.session().move_count(), 1);
    }

    #[test]
    fn test_cooldown_locks_input_until_tick() {
        let config = GameConfig::default()
            .with_mode(GameMode::HumanVsHuman)
            .with_input_cooldown_ms(250);
        let mut app = App::new(&config, SkinCatalog::builtin()).unwrap();
        let start = Instant::now();

        app.handle_key(KeyCode::Char('n'), start);
        app.handle_key(KeyCode::Char('5'), start);
        assert_eq!(app.session().move_count(), 0);

        app.tick(start + Duration::from_millis(300));
        app.handle_key(KeyCode::Char('5'), start + Duration::from_millis(300));
        assert_eq!(app.session().move_count(), 1);
    }

    #[test]
    fn test_resume_after_game_over_restarts() {
        let mut app = app(GameMode::HumanVsHuman);
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Char('r'));
        assert!(app.session().is_active());
        assert_eq!(app.session().move_count(), 0);
    }

    #[test]
    fn test_human_cannot_play_computer_turn() {
        let mut app = app(GameMode::HumanVsComputer);
        press(&mut app, KeyCode::Char('1'));
        assert!(app.needs_computer_move());

        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.session().move_count(), 1);
        assert_eq!(app.status(), "Wait for the computer");
    }

    #[test]
    fn test_mode_toggle_starts_new_game() {
        let mut app = app(GameMode::HumanVsComputer);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('m'));
        assert_eq!(app.session().mode(), GameMode::HumanVsHuman);
        assert_eq!(app.session().move_count(), 0);
        assert!(!app.needs_computer_move());
    }

    #[test]
    fn test_skin_cycles() {
        let mut app = app(GameMode::HumanVsHuman);
        assert_eq!(app.skin().name(), "Classic");
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.skin().name(), "Game Night");
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.skin().name(), "Classic");
    }

    #[test]
    fn test_random_skin_is_from_catalog() {
        let config = GameConfig::default().with_random_skin(true).with_seed(Some(3));
        let app = App::new(&config, SkinCatalog::builtin()).unwrap();
        assert!(SkinCatalog::builtin().contains(app.skin().name()));
    }

    #[test]
    fn test_empty_catalog_fails() {
        let result = App::new(&GameConfig::default(), SkinCatalog::from_skins(Vec::new()));
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_computer_reply_is_applied() {
        let mut app = app(GameMode::HumanVsComputer);
        let (tx, mut rx) = mpsc::unbounded_channel();
        press(&mut app, KeyCode::Char('5'));

        app.request_computer_move(tx);
        assert!(app.is_thinking());
        let reply = rx.recv().await.unwrap();
        app.on_computer_reply(reply);

        assert_eq!(app.session().move_count(), 2);
        assert_eq!(app.session().current_player(), Side::One);
    }

    #[tokio::test]
    async fn test_stale_computer_reply_is_dropped() {
        let mut app = app(GameMode::HumanVsComputer);
        let (tx, mut rx) = mpsc::unbounded_channel();
        press(&mut app, KeyCode::Char('5'));

        app.request_computer_move(tx);
        press(&mut app, KeyCode::Char('n'));
        let reply = rx.recv().await.unwrap();
        app.on_computer_reply(reply);

        assert_eq!(app.session().move_count(), 0);
        assert_eq!(app.session().current_player(), Side::One);
    }

    #[tokio::test]
    async fn test_computer_reply_held_while_paused() {
        let mut app = app(GameMode::HumanVsComputer);
        let (tx, mut rx) = mpsc::unbounded_channel();
        press(&mut app, KeyCode::Char('5'));

        app.request_computer_move(tx);
        press(&mut app, KeyCode::Char('p'));
        let reply = rx.recv().await.unwrap();
        app.on_computer_reply(reply);
        assert_eq!(app.session().move_count(), 1);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session().move_count(), 2);
    }
}
