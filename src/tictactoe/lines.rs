//! Winning line analysis for Tic-Tac-Toe

use super::{Cell, Player, board::BOARD_SIZE};

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// Winning lines as `(row, col)` triples, in scan order: rows, columns,
/// then the two diagonals.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)], // diagonals
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Player filling `line` entirely, if any
    pub fn line_owner(cells: &Grid, line: &[(usize, usize); 3]) -> Option<Player> {
        let (r, c) = line[0];
        let first = cells[r][c];
        if line.iter().all(|&(r, c)| cells[r][c] == first) {
            first.to_player()
        } else {
            None
        }
    }

    /// Owner of the first complete line in [`WINNING_LINES`] order.
    ///
    /// On a malformed board where both players hold a line, whichever line
    /// comes first in scan order decides.
    pub fn winner(cells: &Grid) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }
}
