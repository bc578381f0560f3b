//! Tic-Tac-Toe rules and exact minimax solver

pub mod board;
pub mod game;
pub mod lines;
pub mod minimax;
pub mod rules;

pub use board::{Action, BOARD_SIZE, Board, Cell, PieceCount, Player};
pub use game::{Game, GameOutcome, Move};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::{Minimax, minimax, minimax_value, optimal_actions};
