//! Actions: the coordinate of the square the side to move marks next.

use derive_new::new;
use serde::{Deserialize, Serialize};

/// A `(row, col)` coordinate, 0-indexed from the top-left square.
///
/// An action only has meaning relative to the board it was generated
/// from. Applying it to a board where the square is occupied or out of
/// range is rejected with [`IllegalMoveError`](crate::IllegalMoveError).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, new,
)]
pub struct Action {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub col: usize,
}

impl From<(usize, usize)> for Action {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
