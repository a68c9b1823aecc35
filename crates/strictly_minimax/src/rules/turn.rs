//! Turn inference from mark counts.

use crate::invariants::BalancedMarks;
use crate::{Board, InvalidBoardError, Player};
use tracing::{instrument, warn};

/// Returns the player whose turn it is.
///
/// X moves first, so equal counts mean X is to move and one extra X
/// means O. Any other balance cannot arise from alternating play and is
/// rejected rather than guessed at. That includes O leading by one, which
/// a bare "X if equal, else O" count would hand to O.
#[instrument(level = "trace", skip(board))]
pub fn player_to_move(board: &Board) -> Result<Player, InvalidBoardError> {
    let x_count = board.count(Player::X);
    let o_count = board.count(Player::O);

    if !BalancedMarks::counts_hold(x_count, o_count) {
        warn!(x_count, o_count, "Board consistency violated");
        return Err(InvalidBoardError { x_count, o_count });
    }

    Ok(if x_count == o_count { Player::X } else { Player::O })
}
