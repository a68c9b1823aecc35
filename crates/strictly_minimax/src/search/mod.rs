//! Exhaustive adversarial search.
//!
//! # Features
//!
//! - Alpha-beta minimax over the full game tree (no depth limit, no
//!   heuristic evaluation)
//! - Plain minimax as an unpruned reference with identical tie-breaking
//! - Injectable opening strategy for the empty-board shortcut
//!
//! Both searches are exponential in the number of empty squares. They are
//! instant on 3×3 and only practical on slightly larger grids with few
//! empty squares left.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{initial_state, search::minimax};
//!
//! let board = initial_state();
//! let action = minimax(&board).unwrap();
//! assert!(action.is_some());
//! ```

pub mod alphabeta;
pub mod opening;
pub mod plain;

pub use alphabeta::{minimax, search};
pub use opening::{FullSearch, OpeningStrategy, RandomOpening};

use crate::Action;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Lower search bound, strictly below every attainable utility.
pub const ALPHA_FLOOR: i8 = -2;

/// Upper search bound, strictly above every attainable utility.
pub const BETA_CEILING: i8 = 2;

/// Which way a node's value is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// X's nodes: pick the largest child value.
    Maximizing,
    /// O's nodes: pick the smallest child value.
    Minimizing,
}

impl Side {
    /// Value a node starts from before any child is seen.
    pub fn sentinel(self) -> i8 {
        match self {
            Side::Maximizing => ALPHA_FLOOR,
            Side::Minimizing => BETA_CEILING,
        }
    }

    /// True if `value` is strictly better than `best` for this side.
    ///
    /// Ties return false, so the first action found keeps its place.
    pub fn improves(self, value: i8, best: i8) -> bool {
        match self {
            Side::Maximizing => value > best,
            Side::Minimizing => value < best,
        }
    }

    /// The side that moves next.
    pub fn opponent(self) -> Self {
        match self {
            Side::Maximizing => Side::Minimizing,
            Side::Minimizing => Side::Maximizing,
        }
    }
}

impl From<crate::Player> for Side {
    fn from(player: crate::Player) -> Self {
        match player {
            crate::Player::X => Side::Maximizing,
            crate::Player::O => Side::Minimizing,
        }
    }
}

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Boards visited, including the root.
    pub nodes: u64,
    /// Alpha and beta cutoffs taken.
    pub cutoffs: u64,
}

/// Outcome of one top-level search.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal action, `None` on a terminal board.
    action: Option<Action>,
    /// Value of the position under optimal play, from X's perspective.
    value: i8,
    /// Work done.
    stats: SearchStats,
}

impl SearchReport {
    pub(crate) fn new(action: Option<Action>, value: i8, stats: SearchStats) -> Self {
        Self {
            action,
            value,
            stats,
        }
    }
}
