//! Subcommands of the `rankmax` binary

pub mod pagerank;
pub mod tictactoe;
