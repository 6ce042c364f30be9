use clap::Parser;
use reversed_tictactoe::engine::{mover_from_counts, Board, Game, Outcome, BOARD_SIZE};
use reversed_tictactoe::policy::Difficulty;
use reversed_tictactoe::utils::board_from_rows;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the tiers' random choices, so reruns print the same moves
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Path to a board file: up to 3 lines of 'X', 'O', '.' (or space) cells
    board_file: PathBuf,
}

fn read_board_file(path: &PathBuf) -> Result<Board, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    // Only trailing whitespace is stripped; leading spaces are empty cells
    // and a blank line is an empty row.
    let mut lines: Vec<&str> = content.lines().map(|line| line.trim_end()).collect();
    while lines.last().map_or(false, |line| line.is_empty()) {
        lines.pop();
    }

    if lines.len() > BOARD_SIZE {
        return Err(format!(
            "Expected at most {} lines in board file, found {}",
            BOARD_SIZE,
            lines.len()
        ));
    }

    board_from_rows(&lines).map_err(|e| format!("Invalid board format: {}", e))
}

fn main() {
    let args = Args::parse();

    let board = match read_board_file(&args.board_file) {
        Ok(board) => board,
        Err(e) => {
            eprintln!(
                "Failed to load board from {}: {}",
                args.board_file.display(),
                e
            );
            process::exit(1);
        }
    };

    println!("Loaded board from {}", args.board_file.display());
    println!("{}", board);
    println!();

    match board.outcome() {
        Outcome::Win(player) => {
            println!("Outcome: {} has already won.", player);
            return;
        }
        Outcome::Draw => {
            println!("Outcome: draw, the board is full.");
            return;
        }
        Outcome::InProgress => {}
    }

    let (x_count, o_count) = board.mark_counts();
    let mover = match mover_from_counts(x_count, o_count) {
        Ok(mover) => mover,
        Err(e) => {
            eprintln!("Cannot analyze this position: {}", e);
            process::exit(1);
        }
    };
    println!("Outcome: in progress, {} to move.", mover);
    println!();

    for difficulty in Difficulty::ALL {
        let mut game = Game::from_board_with_seed(board.clone(), difficulty, args.seed)
            .expect("the mark counts were already validated");
        if let Some((r, c)) = game.select_move() {
            println!("{:<8} plays ({}, {})", difficulty, r, c);
        }
    }
}
