//! Tests for loading config files and layering CLI flags.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

use clap::Parser;
use tictac::{CONFIG_ENV, Cli, Command, DEFAULT_CONFIG_PATH, GameConfig, PlayArgs};
use tictac_core::GameMode;

/// Writes `content` to `tictac.toml` in `dir` and returns its path.
fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("tictac.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_partial_file_keeps_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"mode = "human-vs-human"
skin = "Under Water"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(config.skin(), "Under Water");
    assert_eq!(config.think_delay(), Duration::from_millis(500));
    assert_eq!(config.input_cooldown(), Duration::from_millis(250));
    assert_eq!(*config.seed(), None);
}

#[test]
fn test_full_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"mode = "human-vs-computer"
skin = "Game Night"
random_skin = true
think_delay_ms = 0
input_cooldown_ms = 100
seed = 42
log_file = "game.log"
"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.mode(), GameMode::HumanVsComputer);
    assert!(*config.random_skin());
    assert_eq!(config.think_delay(), Duration::ZERO);
    assert_eq!(config.input_cooldown(), Duration::from_millis(100));
    assert_eq!(*config.seed(), Some(42));
    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("absent.toml");

    let config = GameConfig::load(Some(path.as_path())).expect("Load failed");
    assert_eq!(config, GameConfig::default());
}

/// `--config`, then `TICTAC_CONFIG`, then `tictac.toml`.
#[test]
fn test_resolution_order() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let from_env = dir.path().join("env.toml");
    fs::write(&from_env, r#"skin = "Game Night""#).expect("Failed to write TOML");
    let explicit = write_config(&dir, r#"skin = "Under Water""#);

    // SAFETY: no other test in this binary reads or writes this variable.
    unsafe { std::env::set_var(CONFIG_ENV, &from_env) };
    let env_config = GameConfig::load(None);
    let explicit_config = GameConfig::load(Some(explicit.as_path()));
    // SAFETY: as above.
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(env_config.expect("Load failed").skin(), "Game Night");
    assert_eq!(explicit_config.expect("Load failed").skin(), "Under Water");

    // Neither set: falls back to tictac.toml, absent in the crate root.
    assert!(!std::path::Path::new(DEFAULT_CONFIG_PATH).exists());
    let fallback = GameConfig::load(None).expect("Load failed");
    assert_eq!(fallback, GameConfig::default());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "this is not valid toml !!!@@@");

    let err = GameConfig::load(Some(path.as_path())).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unknown_mode_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, r#"mode = "computer-vs-computer""#);

    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_play_flags_override_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        r#"mode = "human-vs-computer"
skin = "Game Night"
think_delay_ms = 900
"#,
    );
    let config = GameConfig::from_file(&path).expect("Load failed");

    let args = PlayArgs {
        mode: Some(GameMode::HumanVsHuman),
        think_delay_ms: Some(0),
        ..PlayArgs::default()
    };
    let config = args.apply(config);

    assert_eq!(*config.mode(), GameMode::HumanVsHuman);
    assert_eq!(config.skin(), "Game Night");
    assert_eq!(config.think_delay(), Duration::ZERO);
}

#[test]
fn test_cli_parses_play() {
    let cli = Cli::try_parse_from([
        "tictac",
        "--config",
        "custom.toml",
        "play",
        "--mode",
        "human-vs-human",
        "--skin",
        "Under Water",
        "--log-file",
        "play.log",
    ])
    .expect("Parse failed");

    assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    let Command::Play(args) = cli.command else {
        panic!("expected play");
    };
    assert_eq!(args.mode, Some(GameMode::HumanVsHuman));
    assert_eq!(args.skin.as_deref(), Some("Under Water"));
    assert_eq!(args.log_file, Some(PathBuf::from("play.log")));
}

#[test]
fn test_cli_parses_simulate() {
    let cli = Cli::try_parse_from(["tictac", "simulate", "--games", "5", "--seed", "9"])
        .expect("Parse failed");

    match cli.command {
        Command::Simulate { games, seed } => {
            assert_eq!(games, 5);
            assert_eq!(seed, Some(9));
        }
        other => panic!("unexpected command {other:?}"),
    }
}
