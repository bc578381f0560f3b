//! Error types for the rankmax crate

use thiserror::Error;

/// Why a game action was rejected by [`crate::tictactoe::rules::result`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidActionReason {
    /// No action was supplied
    Missing,
    /// Row or column outside `0..3`
    OutOfBounds,
    /// Target cell already holds a mark
    Occupied,
}

impl std::fmt::Display for InvalidActionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            InvalidActionReason::Missing => "no action was chosen",
            InvalidActionReason::OutOfBounds => "cell is out of bounds",
            InvalidActionReason::Occupied => "cell is already occupied",
        };
        f.write_str(text)
    }
}

/// Main error type for the rankmax crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid action{}: {reason}", .cell.map(|(r, c)| format!(" ({r}, {c})")).unwrap_or_default())]
    InvalidAction {
        reason: InvalidActionReason,
        cell: Option<(isize, isize)>,
    },

    #[error("game already over")]
    GameOver,

    #[error("wrong board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("page '{page}' is not part of the corpus")]
    UnknownPage { page: String },

    #[error("corpus contains no pages")]
    EmptyCorpus,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("iteration did not converge after {iterations} rounds (last change {residual:.6})")]
    NotConverged { iterations: usize, residual: f64 },

    #[error("invalid link pattern: {0}")]
    InvalidLinkPattern(#[from] regex::Error),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn invalid_action(reason: InvalidActionReason, cell: Option<(isize, isize)>) -> Self {
        Error::InvalidAction { reason, cell }
    }

    pub(crate) fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
