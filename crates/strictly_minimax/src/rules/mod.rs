//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Every function takes a board by
//! reference and never mutates it; search composes them freely.

pub mod draw;
pub mod terminal;
pub mod transition;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use terminal::{DRAW, O_WINS, X_WINS, is_terminal, utility};
pub use transition::{initial_state, legal_actions, result};
pub use turn::player_to_move;
pub use win::{Line, win_lines, winner};
