//! Game configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tictac_core::{DEFAULT_SKIN, GameMode};
use tracing::{debug, info, instrument};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "TICTAC_CONFIG";

/// Config file used when neither the CLI nor the environment names one.
pub const DEFAULT_CONFIG_PATH: &str = "tictac.toml";

/// Settings for a play session.
///
/// Every field has a default, so a partial (or missing) file is fine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default)]
#[setters(prefix = "with_")]
pub struct GameConfig {
    /// Human-vs-human or human-vs-computer.
    mode: GameMode,

    /// Skin to start with.
    skin: String,

    /// Start with a random skin instead of `skin`.
    random_skin: bool,

    /// How long the computer "thinks" before placing, in milliseconds.
    think_delay_ms: u64,

    /// Input lock after resume or restart, in milliseconds.
    input_cooldown_ms: u64,

    /// Seed for the computer player and random skin; entropy when unset.
    seed: Option<u64>,

    /// Where the terminal UI writes its log.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            skin: DEFAULT_SKIN.to_string(),
            random_skin: false,
            think_delay_ms: 500,
            input_cooldown_ms: 250,
            seed: None,
            log_file: PathBuf::from("tictac.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(mode = %config.mode, skin = %config.skin, "Config loaded successfully");
        Ok(config)
    }

    /// Resolves and loads the config file.
    ///
    /// `explicit` wins over `TICTAC_CONFIG`, which wins over
    /// `tictac.toml`. A file that does not exist yields the defaults.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

        if path.exists() {
            Self::from_file(&path)
        } else {
            info!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// The computer's thinking delay.
    pub fn think_delay(&self) -> Duration {
        Duration::from_millis(self.think_delay_ms)
    }

    /// The input lock after resume or restart.
    pub fn input_cooldown(&self) -> Duration {
        Duration::from_millis(self.input_cooldown_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
