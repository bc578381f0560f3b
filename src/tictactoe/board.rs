//! Board representation and the game rules over it

use std::{collections::BTreeSet, fmt};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;
use crate::error::InvalidActionReason;

/// Side length of the grid.
pub const BOARD_SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Player owning this mark, if any.
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first and maximizes utility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A move target: zero-based row and column of a cell.
///
/// Fields are public so callers can express any coordinate; range and
/// vacancy are checked when the action is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether both indices address a cell of the grid.
    pub fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }
}

/// Signed coordinates, e.g. straight from user input.
///
/// Negative indices cannot form an [`Action`] and are rejected as out of
/// bounds; indices of 3 or more are rejected too.
impl TryFrom<(isize, isize)> for Action {
    type Error = crate::Error;

    fn try_from((row, col): (isize, isize)) -> Result<Self, Self::Error> {
        let in_range = |v: isize| (0..BOARD_SIZE as isize).contains(&v);
        if in_range(row) && in_range(col) {
            Ok(Action::new(row as usize, col as usize))
        } else {
            Err(crate::Error::invalid_action(
                InvalidActionReason::OutOfBounds,
                Some((row, col)),
            ))
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A 3x3 grid of marks.
///
/// `Board` is a small `Copy` value: applying an action returns a new board
/// and never touches the original. The player to move is derived from the
/// mark counts rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceCount {
    pub x: usize,
    pub o: usize,
    pub empty: usize,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Create a board from rows of cells without validating piece counts.
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { cells }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order;
    /// whitespace is filtered out so rows may be separated by spaces or
    /// newlines. `.`, `-` and `_` mark empty cells.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not have exactly 9 non-whitespace characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are invalid (X must equal O or lead by one)
    ///
    /// # Examples
    ///
    /// ```
    /// use rankmax::tictactoe::{Board, Player};
    ///
    /// let board = Board::from_string("XO. .X. ..O").unwrap();
    /// assert_eq!(board.player(), Player::X);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_SIZE * BOARD_SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_SIZE * BOARD_SIZE,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / BOARD_SIZE][i % BOARD_SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let board = Board { cells };
        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }
        Ok(board)
    }

    /// Count the marks of each kind and the empty cells.
    pub fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Get the cell at an in-bounds action
    pub fn get(&self, action: Action) -> Cell {
        self.cells[action.row][action.col]
    }

    /// Player whose turn it is: X when the counts are equal, otherwise O.
    pub fn player(&self) -> Player {
        let count = self.count_pieces();
        if count.x == count.o {
            Player::X
        } else {
            Player::O
        }
    }

    /// Every empty cell, in row-major order.
    ///
    /// Empty cells are listed even when the game is already won.
    pub fn actions(&self) -> BTreeSet<Action> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Action::new(row, col)))
            .filter(|&action| self.get(action) == Cell::Empty)
            .collect()
    }

    /// Board after the player to move marks `action`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] if the action is out of bounds
    /// or targets an occupied cell.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        let cell = Some((action.row as isize, action.col as isize));
        if !action.in_bounds() {
            return Err(crate::Error::invalid_action(
                InvalidActionReason::OutOfBounds,
                cell,
            ));
        }
        if self.get(action) != Cell::Empty {
            return Err(crate::Error::invalid_action(
                InvalidActionReason::Occupied,
                cell,
            ));
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        Ok(next)
    }

    /// Every legal action paired with the board it leads to, in row-major
    /// order.
    ///
    /// Each action targets an empty cell, so unlike [`Board::result`] this
    /// cannot fail.
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> {
        let board = *self;
        let mark = board.player().to_cell();
        board.actions().into_iter().map(move |action| {
            let mut next = board;
            next.cells[action.row][action.col] = mark;
            (action, next)
        })
    }

    /// Owner of the first complete line, scanning rows, columns, then diagonals.
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Whether the game is over: someone won or no empty cell is left.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.count_pieces().empty == 0
    }

    /// `1` if X won, `-1` if O won, `0` otherwise.
    ///
    /// Only meaningful on terminal boards.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Compact row-major encoding, e.g. `"X...O...."`.
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
