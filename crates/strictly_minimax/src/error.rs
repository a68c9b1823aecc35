//! Error types for board construction, transitions and search.

use crate::Action;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// A move that cannot be applied to the board it was issued against.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IllegalMoveError {
    /// The action lies outside the grid.
    #[display("Action {} is outside the {}x{} grid", _0, _1, _1)]
    OutOfBounds(Action, usize),

    /// The target square already holds a mark.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Action),
}

impl std::error::Error for IllegalMoveError {}

/// The board violates the alternating-turn invariant.
///
/// X moves first and the players alternate, so the mark counts of a
/// reachable board never differ by more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Invalid board: {} X marks against {} O marks", x_count, o_count)]
pub struct InvalidBoardError {
    /// Number of squares holding X.
    pub x_count: usize,
    /// Number of squares holding O.
    pub o_count: usize,
}

/// Board input that does not describe a square grid.
#[derive(Debug, Clone, Display, Error)]
#[display("Board shape error: {} at {}:{}", message, file, line)]
pub struct BoardShapeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardShapeError {
    /// Creates a new shape error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Any failure of a rules or search operation.
#[derive(Debug, Clone, PartialEq, Eq, Display, From)]
pub enum EngineError {
    /// An action was rejected by the transition function.
    #[display("{}", _0)]
    IllegalMove(IllegalMoveError),

    /// The board cannot have arisen from alternating play.
    #[display("{}", _0)]
    InvalidBoard(InvalidBoardError),
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::IllegalMove(err) => Some(err),
            EngineError::InvalidBoard(err) => Some(err),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
