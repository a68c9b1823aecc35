//! Minimax with alpha-beta pruning.
//!
//! One recursive procedure handles both sides: the [`Side`] argument
//! decides whether a node maximizes or minimizes, which bound it raises
//! and which bound cuts it off.

use super::{ALPHA_FLOOR, BETA_CEILING, SearchReport, SearchStats, Side};
use crate::rules::{is_terminal, legal_actions, player_to_move, result, utility};
use crate::{Action, Board, EngineError};
use tracing::{debug, instrument};

/// Returns the optimal action for the side to move, `None` if the game
/// is over.
///
/// Among equally good actions the first in row-major order wins.
#[instrument(skip(board), fields(board = %board))]
pub fn minimax(board: &Board) -> Result<Option<Action>, EngineError> {
    Ok(*search(board)?.action())
}

/// Runs a full alpha-beta search and reports the value and statistics
/// along with the action.
#[instrument(skip(board), fields(board = %board))]
pub fn search(board: &Board) -> Result<SearchReport, EngineError> {
    let mut searcher = AlphaBeta::default();

    if is_terminal(board) {
        searcher.stats.nodes = 1;
        return Ok(SearchReport::new(None, utility(board), searcher.stats));
    }

    let side = Side::from(player_to_move(board)?);
    let (value, action) = searcher.value(board, side, ALPHA_FLOOR, BETA_CEILING)?;
    debug_assert!(
        action.is_some(),
        "non-terminal board {} produced no action",
        board
    );

    debug!(
        ?action,
        value,
        nodes = searcher.stats.nodes,
        cutoffs = searcher.stats.cutoffs,
        "Alpha-beta search complete"
    );
    Ok(SearchReport::new(action, value, searcher.stats))
}

/// Per-search state.
#[derive(Debug, Default)]
struct AlphaBeta {
    stats: SearchStats,
}

impl AlphaBeta {
    /// Value of `board` for `side` within the window `(alpha, beta)`, with
    /// the action that achieves it.
    fn value(
        &mut self,
        board: &Board,
        side: Side,
        mut alpha: i8,
        mut beta: i8,
    ) -> Result<(i8, Option<Action>), EngineError> {
        self.stats.nodes += 1;

        if is_terminal(board) {
            return Ok((utility(board), None));
        }

        let mut best = side.sentinel();
        let mut best_action = None;

        for action in legal_actions(board) {
            let child = result(board, action)?;
            let (value, _) = self.value(&child, side.opponent(), alpha, beta)?;

            if side.improves(value, best) {
                best = value;
                best_action = Some(action);
            }

            match side {
                Side::Maximizing => {
                    if best >= beta {
                        self.stats.cutoffs += 1;
                        return Ok((best, best_action));
                    }
                    alpha = alpha.max(best);
                }
                Side::Minimizing => {
                    if best <= alpha {
                        self.stats.cutoffs += 1;
                        return Ok((best, best_action));
                    }
                    beta = beta.min(best);
                }
            }
        }

        Ok((best, best_action))
    }
}
