//! Core domain types: players, squares and the n×n board.

use crate::{Action, BoardShapeError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Conventional board size.
pub const DEFAULT_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            '.' | '-' | '_' => Some(Square::Empty),
            'X' | 'x' => Some(Square::Occupied(Player::X)),
            'O' | 'o' => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

/// Immutable n×n board.
///
/// There are no public mutators: transitions go through
/// [`rules::result`](crate::rules::result), which returns a fresh board.
/// Serializes as its text form (`"X.O/.X./..O"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Board {
    size: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    #[instrument]
    pub fn new(size: usize) -> Result<Self, BoardShapeError> {
        Self::from_squares(size, vec![Square::Empty; size * size])
    }

    /// Builds a board from row-major squares.
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: usize, squares: Vec<Square>) -> Result<Self, BoardShapeError> {
        if size == 0 {
            return Err(BoardShapeError::new("Board size must be at least 1"));
        }
        if squares.len() != size * size {
            return Err(BoardShapeError::new(format!(
                "Expected {} squares for a {}x{} board, got {}",
                size * size,
                size,
                size,
                squares.len()
            )));
        }
        Ok(Self { size, squares })
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major index of an action, if it lies on the grid.
    pub fn index(&self, action: Action) -> Option<usize> {
        (action.row < self.size && action.col < self.size)
            .then(|| action.row * self.size + action.col)
    }

    /// Gets the square at the given coordinate.
    pub fn get(&self, action: Action) -> Option<Square> {
        self.index(action).map(|i| self.squares[i])
    }

    /// Checks if the square at the coordinate exists and is empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.get(action), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size)
    }

    /// Number of squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// True if no square has been marked yet.
    pub fn is_blank(&self) -> bool {
        self.empty_count() == self.squares.len()
    }

    /// Returns a copy with `square` written at `index`.
    ///
    /// Callers validate the index; this never touches `self`.
    pub(crate) fn with_square(&self, index: usize, square: Square) -> Self {
        let mut squares = self.squares.clone();
        squares[index] = square;
        Self {
            size: self.size,
            squares,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            squares: vec![Square::Empty; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                write!(f, "/")?;
            }
            for square in row {
                write!(f, "{}", square.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardShapeError;

    /// Parses rows separated by `/` or newlines.
    ///
    /// `X` and `O` are marks; `.`, `-` and `_` are empty squares.
    /// Spaces inside a row are ignored.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .collect();
        let size = rows.len();
        let mut squares = Vec::with_capacity(size * size);

        for (r, row) in rows.iter().enumerate() {
            let before = squares.len();
            for c in row.chars().filter(|c| !c.is_whitespace()) {
                let square = Square::from_symbol(c).ok_or_else(|| {
                    BoardShapeError::new(format!("Unexpected symbol {:?} in row {}", c, r))
                })?;
                squares.push(square);
            }
            let width = squares.len() - before;
            if width != size {
                return Err(BoardShapeError::new(format!(
                    "Row {} has {} squares, expected {}",
                    r, width, size
                )));
            }
        }

        Self::from_squares(size, squares)
    }
}

impl TryFrom<String> for Board {
    type Error = BoardShapeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Board> for String {
    fn from(board: Board) -> Self {
        board.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new(4).expect("Valid size");
        assert_eq!(board.size(), 4);
        assert_eq!(board.squares().len(), 16);
        assert!(board.is_blank());
    }

    #[test]
    fn test_zero_size_rejected() {
        let err = Board::new(0).unwrap_err();
        assert!(err.message.contains("at least 1"));
    }

    #[test]
    fn test_blank_boards_round_trip_through_text() {
        for size in 1..=4 {
            let board = Board::new(size).unwrap();
            let text = board.to_string();
            assert_eq!(text.parse::<Board>().unwrap(), board, "size {}", size);
        }
        assert_eq!(Board::default(), Board::new(DEFAULT_SIZE).unwrap());
    }

    #[test]
    fn test_parse_and_display_agree() {
        let board: Board = "X.O/.X./..O".parse().expect("Valid board");
        assert_eq!(board.get(Action::new(0, 0)), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(Action::new(0, 2)), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(Action::new(1, 0)), Some(Square::Empty));
        assert_eq!(board.to_string(), "X.O/.X./..O");
    }

    #[test]
    fn test_parse_accepts_newlines_and_spaces() {
        let board: Board = "X . O\n_ X -\n. . O\n".parse().expect("Valid board");
        assert_eq!(board.to_string(), "X.O/.X./..O");
    }

    #[test]
    fn test_parse_rejects_ragged_rows() {
        assert!("XO/X/...".parse::<Board>().is_err());
        assert!("XO./...".parse::<Board>().is_err());
        assert!("".parse::<Board>().is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_symbols() {
        let err = "X?O/.../...".parse::<Board>().unwrap_err();
        assert!(err.message.contains("Unexpected symbol"));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::default();
        assert_eq!(board.get(Action::new(3, 0)), None);
        assert!(!board.is_empty(Action::new(0, 3)));
    }

    #[test]
    fn test_counts() {
        let board: Board = "XXO/O../...".parse().expect("Valid board");
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.empty_count(), 5);
    }

    #[test]
    fn test_with_square_leaves_original() {
        let board = Board::default();
        let next = board.with_square(4, Square::Occupied(Player::X));
        assert!(board.is_blank());
        assert_eq!(next.get(Action::new(1, 1)), Some(Square::Occupied(Player::X)));
    }
}
