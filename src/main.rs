//! tictactoe_match - terminal tic-tac-toe
//!
//! Runs the interactive UI or replays a move list headlessly.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use tictactoe_match::{Board, GameState, Lifecycle, MatchConfig, Move, RoundOutcome, Scoreboard};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play { config: None }) {
        Command::Play { config } => {
            let config = MatchConfig::load(config.as_deref()).context("Failed to load config")?;
            tictactoe_match::run_tui(config)
        }
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Final state of a replayed move list.
#[derive(Debug, Serialize)]
struct ReplayReport<'a> {
    board: &'a Board,
    moves: Vec<Move>,
    outcome: RoundOutcome,
    lifecycle: &'a Lifecycle,
    scoreboard: &'a Scoreboard,
}

/// Replay moves through the game state and print the result
#[instrument(skip(moves), fields(count = moves.len()))]
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let game = GameState::replay(moves);
    info!(applied = game.moves().len(), "Replay finished");

    let report = ReplayReport {
        board: game.board(),
        moves: game.moves(),
        outcome: game.outcome(),
        lifecycle: game.lifecycle(),
        scoreboard: game.scoreboard(),
    };

    if json {
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", text);
    } else {
        println!("{}\n", report.board.display());
        for (i, action) in report.moves.iter().enumerate() {
            println!("{}. {}", i + 1, action);
        }
        println!("\n{}", report.outcome);
    }

    Ok(())
}
