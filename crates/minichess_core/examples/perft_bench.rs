//! Perft benchmark for profiling move generation.
//!
//! Usage:
//!   cargo run --release --example perft_bench -p minichess_core -- [depth] [layout]
//!
//!   # Default: depth 4 over the built-in positions
//!   cargo run --release --example perft_bench -p minichess_core
//!
//!   # Custom depth and layout
//!   cargo run --release --example perft_bench -p minichess_core -- 5 "rnbqk/ppppp/5/PPPPP/RNBQK w"

use minichess_core::{perft, Board, STANDARD_LAYOUT};
use std::env;
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    ("Standard layout", STANDARD_LAYOUT),
    ("Open middle", "rnbqk/p1p1p/1p1p1/PP3/RNBQK b"),
    ("Queen endgame", "4k/1q3/5/3B1/K4 w"),
];

fn main() {
    let args: Vec<String> = env::args().collect();

    let depth: u8 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(4);

    match args.get(2) {
        Some(layout) => match Board::from_layout(layout) {
            Ok(board) => run_single_position(layout, &board, depth),
            Err(e) => eprintln!("Bad layout '{layout}': {e}"),
        },
        None => run_all_positions(depth),
    }
}

fn nps(nodes: u64, elapsed: Duration) -> f64 {
    if elapsed.as_secs_f64() > 0.0 {
        nodes as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    }
}

fn run_single_position(layout: &str, board: &Board, depth: u8) {
    println!("Layout: {layout}");
    println!("Depth: {depth}");
    println!();

    let start = Instant::now();
    let nodes = perft(board, depth);
    let elapsed = start.elapsed();

    println!("Nodes: {nodes}");
    println!("Time: {elapsed:.3?}");
    println!("NPS: {:.0}", nps(nodes, elapsed));
}

fn run_all_positions(depth: u8) {
    println!("=== Perft Benchmark Suite ===");
    println!("Depth: {depth}");
    println!();

    let mut total_nodes = 0u64;
    let mut total_time = Duration::ZERO;

    for (name, layout) in TEST_POSITIONS {
        let Ok(board) = Board::from_layout(layout) else {
            eprintln!("Skipping {name}: bad layout");
            continue;
        };

        print!("{name:.<30}");
        let start = Instant::now();
        let nodes = perft(&board, depth);
        let elapsed = start.elapsed();

        total_nodes += nodes;
        total_time += elapsed;
        println!(" {nodes:>12} nodes in {elapsed:>8.3?} ({:>10.0} nps)", nps(nodes, elapsed));
    }

    println!();
    println!("{:=<70}", "");
    println!(
        "TOTAL: {total_nodes} nodes in {total_time:.3?} ({:.0} nps)",
        nps(total_nodes, total_time)
    );
}
