//! Terminal test and utility.

use super::{draw::is_full, win::winner};
use crate::{Board, Player};
use tracing::instrument;

/// Utility of a win for X.
pub const X_WINS: i8 = 1;
/// Utility of a win for O.
pub const O_WINS: i8 = -1;
/// Utility of a draw, and of any board without a winner.
pub const DRAW: i8 = 0;

/// True once someone has completed a line or no empty square remains.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Signed score from X's perspective: `+1` X won, `-1` O won, `0` otherwise.
///
/// Only meaningful on terminal boards.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i8 {
    match winner(board) {
        Some(Player::X) => X_WINS,
        Some(Player::O) => O_WINS,
        None => DRAW,
    }
}
