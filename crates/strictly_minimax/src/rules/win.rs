//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Player, Square};
use tracing::instrument;

/// One winning configuration: `n` collinear coordinates.
pub type Line = Vec<Action>;

/// Enumerates the `2n + 2` winning lines of an `n`×`n` grid.
///
/// Order is fixed: rows top to bottom, columns left to right, the main
/// diagonal, then the anti-diagonal.
pub fn win_lines(size: usize) -> impl Iterator<Item = Line> {
    let rows = (0..size).map(move |r| (0..size).map(|c| Action::new(r, c)).collect::<Line>());
    let cols = (0..size).map(move |c| (0..size).map(|r| Action::new(r, c)).collect::<Line>());
    let main = std::iter::once_with(move || (0..size).map(|i| Action::new(i, i)).collect::<Line>());
    let anti = std::iter::once_with(move || {
        (0..size)
            .map(|i| Action::new(i, size - 1 - i))
            .collect::<Line>()
    });
    rows.chain(cols).chain(main).chain(anti)
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first line whose squares all hold the same
/// mark, `None` otherwise.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    win_lines(board.size()).find_map(|line| line_owner(board, &line))
}

fn line_owner(board: &Board, line: &[Action]) -> Option<Player> {
    let (first, rest) = line.split_first()?;
    match board.get(*first)? {
        Square::Occupied(player)
            if rest
                .iter()
                .all(|a| board.get(*a) == Some(Square::Occupied(player))) =>
        {
            Some(player)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::default()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "XO./XO./.O.".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "OX./XO./X.O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "OOX/.X./X..".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./O../O..".parse().unwrap();
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_line_count_and_order() {
        let lines: Vec<Line> = win_lines(3).collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)]);
        assert_eq!(lines[3], vec![Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)]);
        assert_eq!(lines[6], vec![Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)]);
        assert_eq!(lines[7], vec![Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)]);
    }

    #[test]
    fn test_four_by_four_lines() {
        assert_eq!(win_lines(4).count(), 10);
        let board: Board = "O.../.O../..O./...O".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_single_square_board() {
        let board: Board = "X".parse().unwrap();
        assert_eq!(winner(&board), Some(Player::X));
    }
}
