//! Self-play CLI
//!
//! Plays two engines against each other and prints a JSON summary.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use alphabeta_engine::{AlphaBetaEngine, EngineConfig};
use minichess_core::Engine;
use random_engine::RandomEngine;
use selfplay::{MatchConfig, MatchRunner};
use tracing::{error, info};

fn print_usage() {
    println!("Minichess self-play runner");
    println!();
    println!("Usage:");
    println!("  selfplay <engine1> <engine2> [options]");
    println!();
    println!("Engines:");
    println!("  alphabeta     - Alpha-beta search with heuristic evaluation");
    println!("  random        - Uniformly random legal moves");
    println!();
    println!("Options:");
    println!("  --games N       games to play (default 10)");
    println!("  --depth D       maximum search depth (default from config, else 3)");
    println!("  --move-time MS  time budget per move in milliseconds");
    println!("  --max-moves N   plies before a game is drawn (default 200)");
    println!("  --config PATH   alpha-beta engine configuration (TOML)");
    println!("  --output PATH   write the JSON summary to a file");
}

struct Options {
    engine1: String,
    engine2: String,
    games: u32,
    depth: Option<u8>,
    move_time: Option<u64>,
    max_moves: u32,
    config: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    if args.len() < 2 {
        return Err("two engine names are required".to_string());
    }
    let mut opts = Options {
        engine1: args[0].clone(),
        engine2: args[1].clone(),
        games: 10,
        depth: None,
        move_time: None,
        max_moves: 200,
        config: None,
        output: None,
    };

    let mut i = 2;
    while i < args.len() {
        let flag = args[i].as_str();
        let value = args
            .get(i + 1)
            .ok_or_else(|| format!("{flag} needs a value"))?;
        let bad = |_| format!("invalid value '{value}' for {flag}");
        match flag {
            "--games" | "-g" => opts.games = value.parse().map_err(bad)?,
            "--depth" | "-d" => opts.depth = Some(value.parse().map_err(bad)?),
            "--move-time" | "-t" => opts.move_time = Some(value.parse().map_err(bad)?),
            "--max-moves" => opts.max_moves = value.parse().map_err(bad)?,
            "--config" | "-c" => opts.config = Some(PathBuf::from(value)),
            "--output" | "-o" => opts.output = Some(PathBuf::from(value)),
            other => return Err(format!("unknown option {other}")),
        }
        i += 2;
    }
    Ok(opts)
}

fn create_engine(name: &str, config: &EngineConfig) -> Result<Box<dyn Engine>, String> {
    match name.to_lowercase().as_str() {
        "alphabeta" | "ab" => Ok(Box::new(AlphaBetaEngine::new(config.clone()))),
        "random" => Ok(Box::new(RandomEngine::new())),
        other => Err(format!("unknown engine: {other}")),
    }
}

fn run(opts: Options) -> Result<(), String> {
    let engine_config = match &opts.config {
        Some(path) => EngineConfig::load(path).map_err(|e| format!("{}: {e}", path.display()))?,
        None => EngineConfig::default(),
    };

    let mut engine1 = create_engine(&opts.engine1, &engine_config)?;
    let mut engine2 = create_engine(&opts.engine2, &engine_config)?;

    let config = MatchConfig {
        num_games: opts.games,
        depth: opts.depth.unwrap_or(engine_config.max_depth),
        time_per_move: opts
            .move_time
            .or(engine_config.move_time_ms)
            .map(Duration::from_millis),
        max_moves: opts.max_moves,
        ..Default::default()
    };
    info!(
        engine1 = %opts.engine1,
        engine2 = %opts.engine2,
        games = config.num_games,
        depth = config.depth,
        "starting match"
    );

    let summary = MatchRunner::new(config)
        .run_match(engine1.as_mut(), engine2.as_mut())
        .map_err(|e| e.to_string())?;
    info!("{}", summary.report());

    match &opts.output {
        Some(path) => {
            summary.save(path).map_err(|e| e.to_string())?;
            info!(path = %path.display(), "summary written");
        }
        None => println!("{}", summary.to_json().map_err(|e| e.to_string())?),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.first().is_some_and(|a| a == "help" || a == "--help" || a == "-h") {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = parse_args(&args).and_then(run);
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            error!("{msg}");
            print_usage();
            ExitCode::FAILURE
        }
    }
}
