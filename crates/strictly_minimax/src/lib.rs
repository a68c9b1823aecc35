//! Strictly Minimax - perfect play for tic-tac-toe
//!
//! Pure rules over an immutable n×n board and an exhaustive minimax
//! search with alpha-beta pruning that returns the optimal move for the
//! side to move.
//!
//! # Architecture
//!
//! - **Board**: immutable grid of squares; transitions return new boards
//! - **Rules**: turn inference, legal actions, win detection, utility
//! - **Search**: alpha-beta minimax, an unpruned reference, opening strategies
//! - **Engine**: configured facade combining the opening shortcut with search
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, is_terminal, minimax, result, utility};
//!
//! # fn example() -> Result<(), strictly_minimax::EngineError> {
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board)? {
//!     board = result(&board, action)?;
//! }
//! assert!(is_terminal(&board));
//! assert_eq!(utility(&board), 0);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod error;
pub mod invariants;
pub mod rules;
pub mod search;
mod types;

// Crate-level exports - Board types
pub use action::Action;
pub use types::{Board, DEFAULT_SIZE, Player, Square};

// Crate-level exports - Errors
pub use error::{BoardShapeError, ConfigError, EngineError, IllegalMoveError, InvalidBoardError};

// Crate-level exports - Rules
pub use rules::{initial_state, is_terminal, legal_actions, player_to_move, result, utility, winner};

// Crate-level exports - Search
pub use search::{SearchReport, SearchStats, minimax, plain};

// Crate-level exports - Engine
pub use config::{EngineConfig, OpeningPolicy, SearchAlgorithm};
pub use engine::{ActionVerdict, Engine, MoveVerdict};
