//! Command-line interface for tictac.

use crate::config::GameConfig;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac_core::GameMode;
use tracing::{debug, instrument};

/// Tictac - tic-tac-toe on nine named tiles, with skins
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Tic-tac-toe with skins and a random computer player", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults to $TICTAC_CONFIG or tictac.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play(PlayArgs),

    /// List the available skins
    Skins {
        /// Print the catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play computer-vs-computer games without a UI and report the tallies
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: usize,

        /// Seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Flags for `play`; each overrides the config file when given.
#[derive(Args, Debug, Default, Clone)]
pub struct PlayArgs {
    /// Game mode: human-vs-human or human-vs-computer
    #[arg(short, long)]
    pub mode: Option<GameMode>,

    /// Skin to start with
    #[arg(short, long)]
    pub skin: Option<String>,

    /// Start with a random skin
    #[arg(long)]
    pub random_skin: bool,

    /// Seed for the computer player and random skin
    #[arg(long)]
    pub seed: Option<u64>,

    /// Computer thinking delay in milliseconds
    #[arg(long)]
    pub think_delay_ms: Option<u64>,

    /// Log file for the terminal UI
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    /// Layers these flags over `config`.
    #[instrument(skip(config))]
    pub fn apply(&self, config: GameConfig) -> GameConfig {
        let mut config = config;
        if let Some(mode) = self.mode {
            config = config.with_mode(mode);
        }
        if let Some(skin) = &self.skin {
            config = config.with_skin(skin.clone());
        }
        if self.random_skin {
            config = config.with_random_skin(true);
        }
        if self.seed.is_some() {
            config = config.with_seed(self.seed);
        }
        if let Some(delay) = self.think_delay_ms {
            config = config.with_think_delay_ms(delay);
        }
        if let Some(path) = &self.log_file {
            config = config.with_log_file(path.clone());
        }
        debug!(?config, "Applied command-line overrides");
        config
    }
}
