//! Tests for optimal play: forced draws, immediate wins, and agreement
//! between the pruned and unpruned searches on every reachable board.

use std::collections::{HashMap, HashSet};

use strictly_minimax::search::{self, plain};
use strictly_minimax::{
    Action, Board, Player, initial_state, is_terminal, legal_actions, minimax, player_to_move,
    result, utility,
};

/// Plays `minimax` against itself until the game ends.
fn play_out(mut board: Board) -> Board {
    while let Some(action) = minimax(&board).expect("Search failed") {
        assert!(board.is_empty(action), "minimax chose occupied {}", action);
        board = result(&board, action).expect("Search chose an illegal move");
    }
    board
}

/// Every board reachable from the empty 3×3 grid, terminal ones included.
fn reachable_boards() -> HashSet<Board> {
    let mut seen = HashSet::new();
    let mut stack = vec![initial_state()];
    while let Some(board) = stack.pop() {
        if !seen.insert(board.clone()) || is_terminal(&board) {
            continue;
        }
        for action in legal_actions(&board) {
            stack.push(result(&board, action).unwrap());
        }
    }
    seen
}

/// Memoized game values, independent of either search.
fn solve(board: &Board, memo: &mut HashMap<Board, i8>) -> i8 {
    if let Some(value) = memo.get(board) {
        return *value;
    }
    let value = if is_terminal(board) {
        utility(board)
    } else {
        let children = legal_actions(board)
            .into_iter()
            .map(|a| solve(&result(board, a).unwrap(), memo));
        match player_to_move(board).unwrap() {
            Player::X => children.max().unwrap(),
            Player::O => children.min().unwrap(),
        }
    };
    memo.insert(board.clone(), value);
    value
}

#[test]
fn test_perfect_play_from_start_is_draw() {
    let first = minimax(&initial_state()).unwrap();
    assert!(first.is_some());

    let end = play_out(initial_state());
    assert!(is_terminal(&end));
    assert_eq!(utility(&end), 0, "perfect play should draw: {}", end);
    assert_eq!(end.empty_count(), 0);
}

#[test]
fn test_every_opening_draws_under_perfect_play() {
    let start = initial_state();
    for action in legal_actions(&start) {
        let end = play_out(result(&start, action).unwrap());
        assert_eq!(utility(&end), 0, "opening {} should draw", action);
    }
}

#[test]
fn test_o_takes_immediate_win_over_block() {
    // X threatens the top row; O completes the middle row instead.
    let board: Board = "XX./OO./X..".parse().unwrap();
    let action = minimax(&board).unwrap().unwrap();
    assert_eq!(action, Action::new(1, 2));
    assert_eq!(utility(&result(&board, action).unwrap()), -1);
}

#[test]
fn test_o_converts_winning_position() {
    // O can win on the diagonal now, or fork first; either forces the win.
    let board: Board = "OXX/.O./X..".parse().unwrap();
    let report = search::search(&board).unwrap();
    assert_eq!(*report.value(), -1);

    let action = report.action().unwrap();
    let end = play_out(result(&board, action).unwrap());
    assert_eq!(utility(&end), -1, "O should win after {}", action);
}

#[test]
fn test_x_forks_without_immediate_win() {
    let board: Board = "XO./.X./..O".parse().unwrap();
    let report = search::search(&board).unwrap();
    assert_eq!(*report.value(), 1);

    // (0, 2) only makes one threat; (1, 0) makes two.
    assert_eq!(*report.action(), Some(Action::new(1, 0)));
    let end = play_out(result(&board, Action::new(1, 0)).unwrap());
    assert_eq!(utility(&end), 1);
}

#[test]
fn test_pruning_visits_fewer_nodes() {
    let board = initial_state();
    let pruned = search::search(&board).unwrap();
    let full = plain::search(&board).unwrap();

    assert_eq!(full.stats().nodes, 549_946);
    assert!(pruned.stats().nodes < full.stats().nodes);
    assert_eq!(pruned.value(), full.value());
    assert_eq!(pruned.action(), full.action());
}

#[test]
fn test_searches_agree_on_every_reachable_board() {
    let boards = reachable_boards();
    assert_eq!(boards.len(), 5478);

    let mut memo = HashMap::new();
    for board in &boards {
        solve(board, &mut memo);
    }

    for board in boards.iter().filter(|b| !is_terminal(b)) {
        let expected = memo[board];
        let pruned = search::search(board).unwrap();
        let full = plain::search(board).unwrap();

        assert_eq!(*pruned.value(), expected, "alpha-beta value on {}", board);
        assert_eq!(*full.value(), expected, "plain value on {}", board);

        for report in [&pruned, &full] {
            let action = report.action().expect("non-terminal board needs an action");
            let child = result(board, action).unwrap();
            assert_eq!(memo[&child], expected, "{} is not optimal on {}", action, board);
        }
    }
}
