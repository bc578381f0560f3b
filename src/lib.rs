//! Link-graph ranking and exact game search
//!
//! This crate provides:
//! - A random-surfer link corpus built from crawled HTML pages
//! - PageRank estimated by sampling a Markov chain and by fixed-point iteration
//! - Complete Tic-Tac-Toe rules over immutable boards
//! - Exhaustive minimax search for the optimal move
//!
//! The two subsystems share no code beyond the error type.

pub mod cli;
pub mod error;
pub mod identifiers;
pub mod pagerank;
pub mod ports;
pub mod tictactoe;
pub mod utils;

pub use error::{Error, InvalidActionReason, Result};
pub use identifiers::PageId;
