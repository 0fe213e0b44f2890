//! Tictac - terminal tic-tac-toe with skins
//!
//! The front-end for [`tictac_core`]: it owns configuration, logging,
//! the terminal UI and headless orchestration, and leaves every rule to
//! the core crate.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with CLI overrides
//! - **Players**: self-driving players (the random computer)
//! - **Orchestrator**: runs whole games between two players
//! - **TUI**: interactive board, pause menu and skin switching
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use tictac::{ComputerPlayer, Orchestrator};
//! use tictac_core::{GameMode, GameSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(ComputerPlayer::with_seed("CPU 1", Some(1), Duration::ZERO)),
//!     Box::new(ComputerPlayer::with_seed("CPU 2", Some(2), Duration::ZERO)),
//! );
//! let mut session = GameSession::new(GameMode::HumanVsHuman);
//! let outcome = orchestrator.run(&mut session).await?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod logging;
mod orchestrator;
mod players;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{CONFIG_ENV, ConfigError, DEFAULT_CONFIG_PATH, GameConfig};

// Crate-level exports - Logging
pub use logging::{DEFAULT_FILTER, init_file_logging, init_stderr_logging};

// Crate-level exports - Orchestration
pub use orchestrator::{GameEvent, Orchestrator, SimulationReport, simulate};

// Crate-level exports - Players
pub use players::{ComputerPlayer, Player};
