//! Headless 2048 driver
//!
//! Plays seeded sessions through the core engine with a move advisor and
//! prints one summary line per session.
//!
//! Usage: t48 [--size 4] [--seed 42] [--games 10] [--show-board]

mod runner;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use t48_core::{
    ConstantAdvisor, Direction, EngineConfig, GameLoop, GameRng, GameStatus, GridEngine, Tile,
};

use crate::runner::Runner;

/// Play 2048 sessions without a terminal UI
#[derive(Parser, Debug)]
#[command(name = "t48")]
#[command(about = "Autoplay seeded 2048 sessions", long_about = None)]
struct Args {
    /// JSON engine configuration; the flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    size: Option<usize>,

    /// Tile value that wins the game
    #[arg(long)]
    win_target: Option<Tile>,

    /// Values a spawned tile is drawn from, e.g. "2,4"
    #[arg(long, value_delimiter = ',')]
    spawn: Option<Vec<Tile>>,

    /// Random seed (drawn from entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sessions to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Board-changing moves allowed per session
    #[arg(long, default_value_t = 100_000)]
    max_moves: u64,

    /// Direction the advisor recommends: left, right, up or down
    #[arg(long, default_value_t = Direction::Left)]
    advisor: Direction,

    /// Tracing filter, e.g. "info", "t48_core=debug"
    #[arg(long, default_value = "info")]
    log: String,

    /// Print the final board after each summary
    #[arg(long)]
    show_board: bool,
}

fn engine_config(args: &Args) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::default(),
    };

    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    if let Some(target) = args.win_target {
        config = config.with_win_target(target);
    }
    if let Some(values) = &args.spawn {
        config = config.with_spawn_values(values.clone());
    }

    config.validate().context("invalid engine configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    tracing_subscriber::registry()
        .with(EnvFilter::new(args.log.clone()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = engine_config(&args)?;
    let rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    info!(size = config.size, win_target = config.win_target, seed = rng.seed(), "engine configured");

    let engine = GridEngine::new(config, rng).context("failed to create engine")?;
    let game = GameLoop::new(engine, Box::new(ConstantAdvisor::new(args.advisor)));
    let mut runner = Runner::new(game, args.max_moves);

    let mut won = 0u64;
    let mut best_score = 0;
    for _ in 0..args.games {
        let summary = runner.play_session();
        println!("{summary}");
        if args.show_board {
            println!("{}", summary.final_grid);
        }
        if summary.status == GameStatus::Won {
            won += 1;
        }
        best_score = best_score.max(summary.score);
    }

    info!(games = runner.sessions(), won, best_score, "all sessions finished");
    Ok(())
}
