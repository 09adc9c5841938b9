//! Lane Rush headless runner
//!
//! Plays runs with the autopilot at fixed timestep and prints a summary.
//! A windowed front end drives the same `Session` API with real input.
//!
//! Usage:
//!   lane-rush --mode roaming --seed 42 --runs 3
//!   RUST_LOG=debug lane-rush --config game.json --json

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use lane_rush::platform::SpriteSet;
use lane_rush::sim::{GamePhase, TickInput};
use lane_rush::{GameConfig, GameMode, Session};

#[derive(Parser)]
#[command(name = "lane-rush")]
#[command(about = "Play Lane Rush headlessly with the autopilot")]
struct Args {
    /// JSON config file (fields not given use defaults)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Game mode: pursuit or roaming
    #[arg(long)]
    mode: Option<String>,
    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,
    /// Maximum ticks per run
    #[arg(long, default_value_t = 20_000)]
    frames: u64,
    /// Number of runs (restarting in between)
    #[arg(long, default_value_t = 1)]
    runs: u32,
    /// Directory holding player.png / enemy.png / police.png
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Print the final frame of each run as JSON
    #[arg(long)]
    json: bool,
}

fn build_config(args: &Args) -> Result<GameConfig> {
    let mode = args
        .mode
        .as_deref()
        .map(|m| GameMode::parse(m).ok_or_else(|| anyhow!("unknown mode '{m}'")))
        .transpose()?;

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::for_mode(mode.unwrap_or_default()),
    };
    if let Some(mode) = mode {
        if mode != config.mode {
            config.mode = mode;
            config.enemy_count = mode.default_enemy_count();
        }
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();

    let args = Args::parse();
    if args.frames == 0 {
        return Err(anyhow!("--frames must be > 0"));
    }
    let config = build_config(&args)?;

    if let Some(dir) = &args.assets {
        let sprites = SpriteSet::resolve(dir);
        log::info!("Sprites: {:?}", sprites);
    }

    let mut session = Session::new(config.clone());
    session.autopilot = true;

    for run in 1..=args.runs {
        while session.state().time_ticks < args.frames && session.is_running() {
            session.step(TickInput {
                events: Vec::new(),
                autopilot: true,
            });
        }

        let frame = session.snapshot();
        let outcome = match frame.phase {
            GamePhase::GameOver { cause } => format!("{cause:?}"),
            _ => "time limit".to_string(),
        };
        println!(
            "run {run}: score {} level {} ticks {} ({outcome})",
            frame.score, frame.level, frame.tick
        );
        if args.json {
            let json = serde_json::to_string_pretty(&frame).context("failed to encode frame")?;
            println!("{json}");
        }

        if run < args.runs {
            // Same layout every restart would replay the same run
            let next = config.clone().with_seed(config.seed.wrapping_add(run as u64));
            session.restart_with(next);
        }
    }

    let best = session.high_scores();
    if !best.is_empty() {
        println!();
        println!("=== SESSION BEST ===");
        for (i, entry) in best.entries.iter().enumerate() {
            println!(
                "  #{:<2} score {:>5}  level {:>3}  ticks {:>6}  {:?}",
                i + 1,
                entry.score,
                entry.level,
                entry.ticks,
                entry.cause
            );
        }
    }

    Ok(())
}
