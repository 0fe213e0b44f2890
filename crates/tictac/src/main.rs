//! Tictac - Unified CLI
//!
//! Interactive play, skin listing and headless simulation.

use anyhow::Result;
use clap::Parser;
use std::time::Duration;
use tictac::{
    Cli, Command, ComputerPlayer, GameConfig, Orchestrator, PlayArgs, init_file_logging,
    init_stderr_logging, simulate,
};
use tictac_core::{GameMode, GameSession, SkinCatalog};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play(args) => run_play(config, args).await,
        Command::Skins { json } => run_skins(json),
        Command::Simulate { games, seed } => run_simulate(games, seed.or(*config.seed())).await,
    }
}

/// Run the interactive terminal game
async fn run_play(config: GameConfig, args: PlayArgs) -> Result<()> {
    let config = args.apply(config);
    init_file_logging(config.log_file())?;
    info!(?config, "Starting play");
    tictac::tui::run_tui(config).await
}

/// Print the skin catalog
fn run_skins(json: bool) -> Result<()> {
    init_stderr_logging();
    let catalog = SkinCatalog::builtin();

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog)?);
        return Ok(());
    }

    for skin in catalog.skins() {
        println!("{}", skin.name());
        println!("  bounds:  {}", skin.bounds());
        println!("  tiles:   {}", skin.tiles());
        println!("  X piece: {}", skin.x_piece());
        println!("  O piece: {}", skin.o_piece());
    }
    Ok(())
}

/// Play computer-vs-computer games and print the tallies
#[instrument]
async fn run_simulate(games: usize, seed: Option<u64>) -> Result<()> {
    init_stderr_logging();

    let mut orchestrator = Orchestrator::new(
        Box::new(ComputerPlayer::with_seed(
            "Computer 1",
            seed,
            Duration::ZERO,
        )),
        Box::new(ComputerPlayer::with_seed(
            "Computer 2",
            seed.map(|s| s.wrapping_add(1)),
            Duration::ZERO,
        )),
    );
    let mut session = GameSession::new(GameMode::HumanVsHuman);

    let report = simulate(&mut orchestrator, &mut session, games).await?;
    println!("{report}");
    Ok(())
}
