//! Tic-Tac-Toe command - Solve positions with exhaustive minimax

use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::to_writer_pretty;

use crate::{
    cli::output::{format_number, print_board, print_kv, print_section},
    tictactoe::{Action, Board, Game, GameOutcome, Minimax},
};

#[derive(Parser, Debug)]
#[command(about = "Solve Tic-Tac-Toe positions with minimax")]
pub struct TictactoeArgs {
    #[command(subcommand)]
    pub command: TictactoeCommand,
}

#[derive(Subcommand, Debug)]
pub enum TictactoeCommand {
    /// Find the optimal move for the player to move
    Solve {
        /// Board as 9 cells in row-major order, e.g. "X.O......" (defaults to empty)
        #[arg(long, short = 'b')]
        board: Option<String>,

        /// List every optimal move instead of the first one
        #[arg(long)]
        all: bool,

        /// Export the analysis to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },

    /// Let minimax play both sides until the game ends
    SelfPlay {
        /// Starting board (defaults to empty)
        #[arg(long, short = 'b')]
        board: Option<String>,

        /// Export the game record to a JSON file
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct SolveExport {
    board: String,
    to_move: String,
    value: i32,
    best: Option<Action>,
    optimal: Vec<Action>,
    nodes_visited: usize,
}

pub fn execute(args: TictactoeArgs) -> Result<()> {
    match args.command {
        TictactoeCommand::Solve { board, all, export } => solve(board.as_deref(), all, export),
        TictactoeCommand::SelfPlay { board, export } => self_play(board.as_deref(), export),
    }
}

fn parse_board(board: Option<&str>) -> Result<Board> {
    match board {
        Some(s) => Board::from_string(s).with_context(|| format!("Invalid board '{s}'")),
        None => Ok(Board::new()),
    }
}

fn solve(board: Option<&str>, all: bool, export: Option<PathBuf>) -> Result<()> {
    let board = parse_board(board)?;
    print_section("Minimax Analysis");
    print_board("Board", &board);

    let mut search = Minimax::new();
    let (value, best) = search.solve(&board);
    let optimal = if all {
        search.optimal_actions(&board)
    } else {
        best.into_iter().collect()
    };

    match GameOutcome::of(&board) {
        Some(GameOutcome::Win(player)) => print_kv("Result", &format!("{player} has won")),
        Some(GameOutcome::Draw) => print_kv("Result", "draw"),
        None => {
            print_kv("To move", &board.player().to_string());
            print_kv("Value", &describe_value(value));
            if let Some(action) = best {
                print_kv("Optimal move", &action.to_string());
            }
            if all {
                let listed: Vec<String> = optimal.iter().map(Action::to_string).collect();
                print_kv("All optimal", &listed.join(" "));
            }
            print_kv("Positions", &format_number(search.nodes_visited()));
        }
    }

    if let Some(path) = export {
        let report = SolveExport {
            board: board.encode(),
            to_move: board.player().to_string(),
            value,
            best,
            optimal,
            nodes_visited: search.nodes_visited(),
        };
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        to_writer_pretty(file, &report)?;
        println!("\nAnalysis exported to: {}", path.display());
    }

    Ok(())
}

fn self_play(board: Option<&str>, export: Option<PathBuf>) -> Result<()> {
    let board = parse_board(board)?;
    let game = Game::self_play(board)?;

    print_section("Minimax Self-Play");
    let states = game.state_sequence()?;
    print_board("Start", &states[0]);
    for (m, state) in game.moves.iter().zip(states.iter().skip(1)) {
        println!();
        print_board(&format!("{} plays {}", m.player, m.action), state);
    }

    println!();
    let outcome = match game.outcome {
        Some(GameOutcome::Win(player)) => format!("{player} wins"),
        Some(GameOutcome::Draw) => "draw".to_string(),
        None => "unfinished".to_string(),
    };
    print_kv("Outcome", &outcome);

    if let Some(path) = export {
        let file =
            File::create(&path).with_context(|| format!("Failed to create {}", path.display()))?;
        to_writer_pretty(file, &game)?;
        println!("\nGame exported to: {}", path.display());
    }

    Ok(())
}

fn describe_value(value: i32) -> String {
    match value {
        1 => "X wins with perfect play".to_string(),
        -1 => "O wins with perfect play".to_string(),
        _ => "draw with perfect play".to_string(),
    }
}
