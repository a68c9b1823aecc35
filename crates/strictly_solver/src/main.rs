//! Strictly Solver - perfect-play tic-tac-toe from the command line
//!
//! Loads an engine configuration, then answers queries about a board.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::path::Path;
use strictly_minimax::{
    Action, ActionVerdict, Board, Engine, EngineConfig, Player, is_terminal, player_to_move, result,
    utility, winner,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

/// Answer to `best`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct BestMove {
    board: Board,
    to_move: Option<Player>,
    action: Option<Action>,
    value: i8,
}

impl BestMove {
    fn render(&self) -> String {
        match (self.to_move, self.action) {
            (Some(player), Some(action)) => {
                format!("{} plays {} (value {})", player, action, self.value)
            }
            _ => format!("Game over: {}", outcome(&self.board)),
        }
    }
}

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config, cli.seed)?;
    let mut engine = Engine::new(config)?;

    match cli.command {
        Command::Best { board, json } => {
            let answer = best_move(&mut engine, board)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&answer)?);
            } else {
                println!("{}", answer.render());
            }
        }
        Command::Analyze { board } => print!("{}", analyze(&engine, &board)?),
    }
    Ok(())
}

/// Reads the config file when present, defaults otherwise.
#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn load_config(config_path: &Path, seed_override: Option<u64>) -> Result<EngineConfig> {
    let config = if config_path.exists() {
        EngineConfig::from_file(config_path)?
    } else {
        info!("Config file not found, using defaults");
        EngineConfig::default()
    };

    Ok(match seed_override {
        Some(seed) => {
            info!(seed, "Overriding opening seed");
            config.with_seed(seed)
        }
        None => config,
    })
}

/// The optimal move and the value it secures.
#[instrument(skip(engine, board), fields(board = %board))]
fn best_move(engine: &mut Engine, board: Board) -> Result<BestMove> {
    let to_move = if is_terminal(&board) {
        None
    } else {
        Some(player_to_move(&board)?)
    };

    let action = engine.best_action(&board)?;
    let value = match action {
        Some(action) => *engine.search(&result(&board, action)?)?.value(),
        None => utility(&board),
    };

    Ok(BestMove {
        board,
        to_move,
        action,
        value,
    })
}

/// Every legal move with its verdict, one per line.
#[instrument(skip(engine, board), fields(board = %board))]
fn analyze(engine: &Engine, board: &Board) -> Result<String> {
    if is_terminal(board) {
        return Ok(format!("Game over: {}\n", outcome(board)));
    }

    let mover = player_to_move(board)?;
    let lines = engine
        .evaluate_actions(board)?
        .iter()
        .map(verdict_line)
        .collect::<String>();
    Ok(format!("{} to move\n{}", mover, lines))
}

fn verdict_line(verdict: &ActionVerdict) -> String {
    format!(
        "  {} -> {} (value {})\n",
        verdict.action, verdict.verdict, verdict.value
    )
}

fn outcome(board: &Board) -> String {
    match winner(board) {
        Some(player) => format!("{} wins", player),
        None => "draw".to_string(),
    }
}
