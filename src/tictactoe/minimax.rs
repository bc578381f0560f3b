//! Exhaustive minimax search
//!
//! X maximizes the terminal utility and O minimizes it. The search visits
//! every line of play below the given board with no pruning or caching;
//! the game tree is at most nine plies deep.

use super::{Action, Board, Player};

/// Minimax searcher that counts the positions it visits.
#[derive(Debug, Default)]
pub struct Minimax {
    nodes_visited: usize,
}

impl Minimax {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions evaluated since creation, including terminal leaves.
    pub fn nodes_visited(&self) -> usize {
        self.nodes_visited
    }

    /// Optimal action for the player to move, or `None` on a terminal board.
    pub fn best_action(&mut self, board: &Board) -> Option<Action> {
        if board.is_terminal() {
            return None;
        }
        self.solve(board).1
    }

    /// Game-theoretic value of `board` under perfect play.
    pub fn value(&mut self, board: &Board) -> i32 {
        self.solve(board).0
    }

    /// Value and optimal action for the player to move.
    ///
    /// On a terminal board this is the utility and no action.
    pub fn solve(&mut self, board: &Board) -> (i32, Option<Action>) {
        match board.player() {
            Player::X => self.best_for_maximizer(board),
            Player::O => self.best_for_minimizer(board),
        }
    }

    /// Highest value X can force from `board`, with the first action in
    /// row-major order that achieves it.
    pub fn best_for_maximizer(&mut self, board: &Board) -> (i32, Option<Action>) {
        self.nodes_visited += 1;
        if board.is_terminal() {
            return (board.utility(), None);
        }

        let mut best = (i32::MIN, None);
        for (action, next) in board.successors() {
            let (value, _) = self.best_for_minimizer(&next);
            if value > best.0 {
                best = (value, Some(action));
            }
        }
        best
    }

    /// Lowest value O can force from `board`, with the first action in
    /// row-major order that achieves it.
    pub fn best_for_minimizer(&mut self, board: &Board) -> (i32, Option<Action>) {
        self.nodes_visited += 1;
        if board.is_terminal() {
            return (board.utility(), None);
        }

        let mut best = (i32::MAX, None);
        for (action, next) in board.successors() {
            let (value, _) = self.best_for_maximizer(&next);
            if value < best.0 {
                best = (value, Some(action));
            }
        }
        best
    }

    /// Every action that reaches the optimal value, in row-major order.
    ///
    /// Empty on a terminal board.
    pub fn optimal_actions(&mut self, board: &Board) -> Vec<Action> {
        if board.is_terminal() {
            return Vec::new();
        }

        let mover = board.player();
        let scored: Vec<(Action, i32)> = board
            .successors()
            .map(|(action, next)| (action, self.value(&next)))
            .collect();

        let best = match mover {
            Player::X => scored.iter().map(|&(_, v)| v).max(),
            Player::O => scored.iter().map(|&(_, v)| v).min(),
        };
        scored
            .into_iter()
            .filter(|&(_, v)| Some(v) == best)
            .map(|(action, _)| action)
            .collect()
    }
}

/// Optimal action for the player to move, or `None` if the game is over.
///
/// # Examples
///
/// ```
/// use rankmax::tictactoe::{Action, Board, minimax};
///
/// // X to move completes the top row
/// let board = Board::from_string("XX. OO. ...").unwrap();
/// assert_eq!(minimax(&board), Some(Action::new(0, 2)));
/// ```
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::new().best_action(board)
}

/// Value of `board` under perfect play from both sides.
pub fn minimax_value(board: &Board) -> i32 {
    Minimax::new().value(board)
}

/// All optimal actions for the player to move.
pub fn optimal_actions(board: &Board) -> Vec<Action> {
    Minimax::new().optimal_actions(board)
}
