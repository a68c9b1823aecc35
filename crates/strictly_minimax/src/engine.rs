//! Configured entry point: opening shortcut plus full search.

use crate::config::{EngineConfig, OpeningPolicy, SearchAlgorithm};
use crate::rules::{is_terminal, legal_actions, player_to_move, result};
use crate::search::{self, FullSearch, OpeningStrategy, RandomOpening, SearchReport, plain};
use crate::{Action, Board, ConfigError, EngineError, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// How an action turns out for the player making it, under optimal play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum MoveVerdict {
    /// Forces a win.
    Winning,
    /// Best play from both sides draws.
    Neutral,
    /// The opponent can force a win.
    Losing,
}

impl MoveVerdict {
    /// Classifies an X-perspective value for `mover`.
    pub fn for_player(mover: Player, value: i8) -> Self {
        let signed = match mover {
            Player::X => value,
            Player::O => -value,
        };
        match signed {
            v if v > 0 => MoveVerdict::Winning,
            0 => MoveVerdict::Neutral,
            _ => MoveVerdict::Losing,
        }
    }
}

/// One legal action with its optimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ActionVerdict {
    /// The action.
    pub action: Action,
    /// Value of the resulting board, from X's perspective.
    pub value: i8,
    /// The value as seen by the player making the action.
    pub verdict: MoveVerdict,
}

/// Tic-tac-toe engine.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    opening: Box<dyn OpeningStrategy>,
    start: Board,
}

impl Engine {
    /// Creates an engine whose opening strategy follows the config.
    #[instrument]
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let opening: Box<dyn OpeningStrategy> = match (config.opening(), config.seed()) {
            (OpeningPolicy::FullSearch, _) => Box::new(FullSearch),
            (OpeningPolicy::Random, Some(seed)) => Box::new(RandomOpening::with_seed(*seed)),
            (OpeningPolicy::Random, None) => Box::new(RandomOpening::new()),
        };
        Self::with_opening(config, opening)
    }

    /// Creates an engine with an explicit opening strategy.
    ///
    /// Fails if the config describes an impossible board.
    #[instrument(skip(opening))]
    pub fn with_opening(
        config: EngineConfig,
        opening: Box<dyn OpeningStrategy>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let start = Board::new(*config.board_size())
            .map_err(|e| ConfigError::new(format!("Invalid board_size: {}", e.message)))?;
        Ok(Self {
            config,
            opening,
            start,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Empty board of the configured size.
    pub fn initial_state(&self) -> Board {
        self.start.clone()
    }

    /// Full search with the configured algorithm, no opening shortcut.
    #[instrument(skip(self, board), fields(board = %board, algorithm = %self.config.algorithm()))]
    pub fn search(&self, board: &Board) -> Result<SearchReport, EngineError> {
        match self.config.algorithm() {
            SearchAlgorithm::AlphaBeta => search::search(board),
            SearchAlgorithm::Plain => plain::search(board),
        }
    }

    /// Optimal action for the side to move, `None` once the game is over.
    ///
    /// On an empty board the opening strategy answers first; full search
    /// runs when it declines.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn best_action(&mut self, board: &Board) -> Result<Option<Action>, EngineError> {
        if is_terminal(board) {
            debug!("Board is terminal");
            return Ok(None);
        }

        if board.is_blank() {
            let actions = legal_actions(board);
            if let Some(action) = self.opening.choose(board, &actions) {
                info!(%action, "Opening move chosen without search");
                return Ok(Some(action));
            }
        }

        let report = self.search(board)?;
        info!(
            action = ?report.action(),
            value = report.value(),
            nodes = report.stats().nodes,
            "Search complete"
        );
        Ok(*report.action())
    }

    /// Every legal action with its value and verdict for the side to move.
    ///
    /// Empty on terminal boards.
    #[instrument(skip(self, board), fields(board = %board))]
    pub fn evaluate_actions(&self, board: &Board) -> Result<Vec<ActionVerdict>, EngineError> {
        if is_terminal(board) {
            return Ok(Vec::new());
        }

        let mover = player_to_move(board)?;
        legal_actions(board)
            .into_iter()
            .map(|action| -> Result<ActionVerdict, EngineError> {
                let child = result(board, action)?;
                let value = *self.search(&child)?.value();
                Ok(ActionVerdict::new(
                    action,
                    value,
                    MoveVerdict::for_player(mover, value),
                ))
            })
            .collect()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            config: EngineConfig::default(),
            opening: Box::new(FullSearch),
            start: Board::default(),
        }
    }
}
