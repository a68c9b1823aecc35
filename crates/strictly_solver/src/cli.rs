//! Command-line interface for strictly_solver.

use clap::{Parser, Subcommand};
use strictly_minimax::Board;

/// Strictly Solver - perfect-play tic-tac-toe analysis
#[derive(Parser, Debug)]
#[command(name = "strictly_solver")]
#[command(about = "Reports optimal tic-tac-toe moves", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to engine configuration file
    #[arg(short, long, default_value = "strictly_solver.toml")]
    pub config: std::path::PathBuf,

    /// Seed for the random opening (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the optimal move for the side to move
    Best {
        /// Board rows separated by '/', e.g. "X.O/.X./..O"
        #[arg(short, long)]
        board: Board,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print every legal move with its outcome under optimal play
    Analyze {
        /// Board rows separated by '/', e.g. "X.O/.X./..O"
        #[arg(short, long)]
        board: Board,
    },
}
