//! High-level game management

use serde::{Deserialize, Serialize};

use super::{Action, Board, Player, minimax::Minimax};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// Outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Outcome of a terminal board, `None` while play continues.
    pub fn of(board: &Board) -> Option<Self> {
        if let Some(winner) = board.winner() {
            Some(GameOutcome::Win(winner))
        } else if board.is_terminal() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

/// A game with its move history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub initial: Board,
    pub moves: Vec<Move>,
    pub outcome: Option<GameOutcome>,
}

impl Game {
    /// Create a new game from the empty board
    pub fn new() -> Self {
        Self::from_board(Board::new())
    }

    /// Create a game continuing from `initial`
    pub fn from_board(initial: Board) -> Self {
        Game {
            initial,
            moves: Vec::new(),
            outcome: GameOutcome::of(&initial),
        }
    }

    /// Play a move for whoever is to move
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GameOver`] once the game has an outcome, or
    /// [`crate::Error::InvalidAction`] for an illegal action.
    pub fn play(&mut self, action: Action) -> Result<(), crate::Error> {
        if self.outcome.is_some() {
            return Err(crate::Error::GameOver);
        }

        let current = self.current_state()?;
        let next = current.result(action)?;

        self.moves.push(Move {
            action,
            player: current.player(),
        });
        self.outcome = GameOutcome::of(&next);

        Ok(())
    }

    /// Get current board state
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// was played on, which indicates corrupted game data.
    pub fn current_state(&self) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .try_fold(self.initial, |board, m| board.result(m.action))
    }

    /// Every board from the initial one to the current one
    ///
    /// # Errors
    ///
    /// Same as [`Game::current_state`].
    pub fn state_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        let mut states = Vec::with_capacity(self.moves.len() + 1);
        let mut board = self.initial;
        states.push(board);
        for m in &self.moves {
            board = board.result(m.action)?;
            states.push(board);
        }
        Ok(states)
    }

    /// Play minimax against itself from `initial` until the game ends.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Game::play`]; none occur for boards whose
    /// piece counts are consistent.
    pub fn self_play(initial: Board) -> Result<Self, crate::Error> {
        let mut game = Self::from_board(initial);
        let mut search = Minimax::new();
        let mut board = initial;

        while game.outcome.is_none() {
            let Some(action) = search.best_action(&board) else {
                break;
            };
            game.play(action)?;
            board = board.result(action)?;
        }

        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
