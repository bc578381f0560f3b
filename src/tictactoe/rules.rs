//! Stateless rule functions over [`Board`] values
//!
//! Thin free-function surface over the [`Board`] methods, for callers that
//! drive the game one rule at a time (e.g. a front-end loop).

use std::collections::BTreeSet;

use super::{Action, Board, Player};
use crate::{Result, error::InvalidActionReason};

/// Empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Player to move; X on equal counts.
pub fn player(board: &Board) -> Player {
    board.player()
}

/// All empty cells. Callers must not rely on the iteration order.
pub fn actions(board: &Board) -> BTreeSet<Action> {
    board.actions()
}

/// Board after the player to move takes `action`. The input is untouched.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidAction`] when `action` is `None`, out of
/// bounds, or targets an occupied cell.
///
/// # Examples
///
/// ```
/// use rankmax::tictactoe::{Action, Cell, rules};
///
/// let board = rules::initial_state();
/// let next = rules::result(&board, Some(Action::new(0, 0))).unwrap();
/// assert_eq!(next.cells[0][0], Cell::X);
/// assert_eq!(board.cells[0][0], Cell::Empty);
/// assert!(rules::result(&board, None).is_err());
/// ```
pub fn result(board: &Board, action: Option<Action>) -> Result<Board> {
    let action =
        action.ok_or_else(|| crate::Error::invalid_action(InvalidActionReason::Missing, None))?;
    board.result(action)
}

/// Owner of a complete line, if any.
pub fn winner(board: &Board) -> Option<Player> {
    board.winner()
}

/// Game over by a win or a full grid.
pub fn terminal(board: &Board) -> bool {
    board.is_terminal()
}

/// `1` for an X win, `-1` for an O win, `0` otherwise.
pub fn utility(board: &Board) -> i32 {
    board.utility()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn missing_action_is_invalid() {
        let err = result(&initial_state(), None).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidAction {
                reason: InvalidActionReason::Missing,
                cell: None
            }
        ));
    }

    #[test]
    fn terminal_needs_winner_or_full_grid() {
        let board = initial_state();
        assert!(!terminal(&board));
        let won = Board::from_string("XXX OO. ...").unwrap();
        assert!(terminal(&won));
        assert_eq!(winner(&won), Some(Player::X));
        assert_eq!(utility(&won), 1);
    }
}
