//! Plain minimax without pruning.
//!
//! Visits every node of the game tree. Kept as the reference the pruned
//! search is checked against; it breaks ties the same way, so on boards
//! with a single optimal action both return the same one.

use super::{SearchReport, SearchStats, Side};
use crate::rules::{is_terminal, legal_actions, player_to_move, result, utility};
use crate::{Action, Board, EngineError};
use tracing::{debug, instrument};

/// Optimal action for the side to move, `None` if the game is over.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Result<Option<Action>, EngineError> {
    Ok(*search(board)?.action())
}

/// Exhaustive unpruned search.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Result<SearchReport, EngineError> {
    let mut stats = SearchStats::default();

    if is_terminal(board) {
        stats.nodes = 1;
        return Ok(SearchReport::new(None, utility(board), stats));
    }

    let side = Side::from(player_to_move(board)?);
    let (value, action) = value(board, side, &mut stats)?;

    debug!(?action, value, nodes = stats.nodes, "Plain minimax complete");
    Ok(SearchReport::new(action, value, stats))
}

fn value(
    board: &Board,
    side: Side,
    stats: &mut SearchStats,
) -> Result<(i8, Option<Action>), EngineError> {
    stats.nodes += 1;

    if is_terminal(board) {
        return Ok((utility(board), None));
    }

    let mut best = side.sentinel();
    let mut best_action = None;

    for action in legal_actions(board) {
        let child = result(board, action)?;
        let (child_value, _) = value(&child, side.opponent(), stats)?;
        if side.improves(child_value, best) {
            best = child_value;
            best_action = Some(action);
        }
    }

    Ok((best, best_action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::O_WINS;

    #[test]
    fn test_plain_finds_o_win() {
        let board: Board = "XX./OO./X..".parse().unwrap();
        let report = search(&board).unwrap();
        assert_eq!(*report.action(), Some(Action::new(1, 2)));
        assert_eq!(*report.value(), O_WINS);
        assert_eq!(report.stats().cutoffs, 0);
    }

    #[test]
    fn test_plain_terminal() {
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(minimax(&board), Ok(None));
    }
}
