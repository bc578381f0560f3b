//! rankmax CLI - link-graph ranking and Tic-Tac-Toe solving
//!
//! This CLI provides:
//! - PageRank of a directory of HTML pages, by sampling and by iteration
//! - Minimax analysis and self-play for Tic-Tac-Toe positions

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "rankmax")]
#[command(version, about = "PageRank estimation and exact Tic-Tac-Toe search", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank the pages of a corpus directory
    Pagerank(rankmax::cli::commands::pagerank::PagerankArgs),

    /// Solve or self-play Tic-Tac-Toe positions
    Tictactoe(rankmax::cli::commands::tictactoe::TictactoeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Pagerank(args) => rankmax::cli::commands::pagerank::execute(args),
        Commands::Tictactoe(args) => rankmax::cli::commands::tictactoe::execute(args),
    }
}
