//! Board transitions: the starting position, legal actions and the
//! result of applying one.

use super::turn::player_to_move;
use crate::invariants::{InvariantSet, Transition, TransitionInvariants};
use crate::{Action, Board, EngineError, IllegalMoveError, Square};
use tracing::instrument;

/// Returns the all-empty 3×3 board.
///
/// Other sizes come from [`Board::new`], which rejects a zero side.
pub fn initial_state() -> Board {
    Board::default()
}

/// Every empty coordinate, in row-major order.
///
/// Search iterates in this order, so it also fixes which of several
/// equally good actions is reported. Empty iff the board is full.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    let size = board.size();
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .map(|(i, _)| Action::new(i / size, i % size))
        .collect()
}

/// Returns the board that results from the side to move marking `action`.
///
/// The input board is left untouched. Fails if the action is off the grid
/// or targets an occupied square, or if the board's mark counts make the
/// side to move undefined.
#[instrument(level = "trace", skip(board), fields(board = %board))]
pub fn result(board: &Board, action: Action) -> Result<Board, EngineError> {
    let index = board
        .index(action)
        .ok_or(IllegalMoveError::OutOfBounds(action, board.size()))?;

    if board.squares()[index] != Square::Empty {
        return Err(IllegalMoveError::SquareOccupied(action).into());
    }

    let player = player_to_move(board)?;
    let next = board.with_square(index, Square::Occupied(player));

    debug_assert!(
        TransitionInvariants::check_all(&Transition::new(board, &next)).is_ok(),
        "Transition postcondition failed for {} at {}",
        board,
        action
    );

    Ok(next)
}
