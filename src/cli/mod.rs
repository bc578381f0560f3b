//! CLI infrastructure for the rankmax toolkit
//!
//! This module provides the command-line interface for ranking a crawled
//! corpus and for solving Tic-Tac-Toe positions.

pub mod commands;
pub mod output;
