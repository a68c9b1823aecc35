//! Opening strategies for the empty board.
//!
//! Every first move on an empty board is optimal, so the engine may hand
//! the choice to a strategy instead of searching the whole tree. A
//! strategy answering `None` sends the engine back to full search.

use crate::{Action, Board};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

/// Picks the first move on an empty board.
pub trait OpeningStrategy: std::fmt::Debug {
    /// Chooses one of `actions`, or defers to full search with `None`.
    fn choose(&mut self, board: &Board, actions: &[Action]) -> Option<Action>;
}

/// Always defers; the engine searches every position including the first.
#[derive(Debug, Clone, Copy, Default)]
pub struct FullSearch;

impl OpeningStrategy for FullSearch {
    fn choose(&mut self, _board: &Board, _actions: &[Action]) -> Option<Action> {
        None
    }
}

/// Uniformly random opening move.
#[derive(Debug, Clone)]
pub struct RandomOpening {
    rng: SmallRng,
}

impl RandomOpening {
    /// Seeds from the operating system.
    #[instrument]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Reproducible sequence of openings.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpening {
    fn default() -> Self {
        Self::new()
    }
}

impl OpeningStrategy for RandomOpening {
    #[instrument(skip(self, board, actions), fields(choices = actions.len()))]
    fn choose(&mut self, board: &Board, actions: &[Action]) -> Option<Action> {
        let action = actions.choose(&mut self.rng).copied();
        debug!(?action, size = board.size(), "Random opening chosen");
        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::legal_actions;

    #[test]
    fn test_full_search_defers() {
        let board = Board::default();
        assert_eq!(FullSearch.choose(&board, &legal_actions(&board)), None);
    }

    #[test]
    fn test_random_opening_is_legal() {
        let board = Board::default();
        let actions = legal_actions(&board);
        let mut strategy = RandomOpening::new();
        for _ in 0..20 {
            let action = strategy.choose(&board, &actions).unwrap();
            assert!(board.is_empty(action));
        }
    }

    #[test]
    fn test_same_seed_same_openings() {
        let board = Board::default();
        let actions = legal_actions(&board);
        let mut a = RandomOpening::with_seed(7);
        let mut b = RandomOpening::with_seed(7);
        for _ in 0..10 {
            assert_eq!(a.choose(&board, &actions), b.choose(&board, &actions));
        }
    }

    #[test]
    fn test_no_actions_no_choice() {
        let board = Board::default();
        assert_eq!(RandomOpening::with_seed(1).choose(&board, &[]), None);
    }
}
