//! Goban: command-line front end for the Go rules core.
//!
//! ## Usage
//!
//! - `goban` - Same as `goban demo`
//! - `goban demo` - Play a random game and score it
//! - `goban replay D4 E5 ...` - Replay moves alternately (Black first)
//! - `goban score "XX./.O./..."` - Score a board diagram
//!
//! Set `RUST_LOG=debug` to see captures as they happen.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use goban::constants::{DEFAULT_SEED, DEFAULT_SIZE};
use goban::geometry::{format_vertex, parse_vertex};
use goban::playout::{max_game_len, random_playout};
use goban::rules::play_detailed;
use goban::{Board, Color};

/// Goban: a Go rules core
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a random self-play game on an empty board and score it
    Demo {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: i32,
        /// Seed for the random move choice
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Maximum number of moves (defaults to three times the board area)
        #[arg(long)]
        moves: Option<usize>,
    },
    /// Replay a sequence of vertices, alternating Black and White
    Replay {
        /// Board size (NxN)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: i32,
        /// Vertices such as D4; `pass` skips a turn
        vertices: Vec<String>,
    },
    /// Print the area score of a board diagram (rows separated by `/`)
    Score {
        /// Diagram using X for Black, O for White and . for empty
        diagram: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Demo { size, seed, moves }) => run_demo(size, seed, moves),
        Some(Commands::Replay { size, vertices }) => run_replay(size, &vertices),
        Some(Commands::Score { diagram }) => run_score(&diagram),
        None => run_demo(DEFAULT_SIZE, DEFAULT_SEED, None),
    }
}

fn run_demo(size: i32, seed: u64, moves: Option<usize>) -> Result<()> {
    println!("Goban: random self-play on {size}x{size} (seed {seed})\n");

    let board = Board::new(size)?;
    let limit = moves.unwrap_or_else(|| max_game_len(size));
    let mut rng = fastrand::Rng::with_seed(seed);
    let playout = random_playout(&board, Color::Black, &mut rng, limit);

    let played = playout.moves.iter().filter(|(_, m)| m.is_some()).count();
    println!("{} moves ({played} stones placed)", playout.moves.len());
    println!("{}", playout.board);
    println!("Score: {}", playout.score());
    Ok(())
}

fn run_replay(size: i32, vertices: &[String]) -> Result<()> {
    let mut board = Board::new(size)?;
    let mut color = Color::Black;

    for (i, vertex) in vertices.iter().enumerate() {
        if !vertex.eq_ignore_ascii_case("pass") {
            let coord = parse_vertex(size, vertex)
                .with_context(|| format!("move {} ({color})", i + 1))?;
            let placement = play_detailed(&board, color, coord)
                .with_context(|| format!("move {} ({color} {vertex})", i + 1))?;
            if !placement.captured.is_empty() {
                let removed = placement
                    .captured
                    .iter()
                    .map(|&c| format_vertex(size, c))
                    .collect::<goban::Result<Vec<_>>>()?;
                let whose = if placement.self_capture { "own" } else { "opponent" };
                println!("{color} {vertex} removes {whose} stones: {}", removed.join(" "));
            }
            board = placement.board;
        }
        color = color.opponent();
    }

    println!("{board}");
    println!("Score: {}", board.area_score());
    Ok(())
}

fn run_score(diagram: &str) -> Result<()> {
    let board: Board = diagram.parse().context("parsing board diagram")?;
    println!("{board}");
    println!("Score: {}", board.area_score());
    Ok(())
}
