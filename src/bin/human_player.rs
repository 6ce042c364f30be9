use clap::Parser;
use reversed_tictactoe::engine::{Game, Outcome, Player};
use reversed_tictactoe::policy::Difficulty;
use std::io::{self, Write}; // For input/output

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Opponent difficulty: easy, medium or hard
    #[clap(short, long, default_value = "easy")]
    difficulty: Difficulty,

    /// Seed for the opponent's random choices; omit for a fresh game each run
    #[clap(short, long)]
    seed: Option<u64>,
}

fn new_game(args: &Args) -> Game {
    match args.seed {
        Some(seed) => Game::with_seed(args.difficulty, seed),
        None => Game::new(args.difficulty),
    }
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Win(Player::X) => println!("🎉 You win! The computer completed three in a row."),
        Outcome::Win(Player::O) => println!("The computer wins! You completed three in a row."),
        Outcome::Draw => println!("Draw: the board is full with no line completed."),
        Outcome::InProgress => {}
    }
}

fn main() {
    let args = Args::parse();
    let mut game = new_game(&args);

    println!("Welcome to Reversed Tic-Tac-Toe!");
    println!("Three in a row LOSES. You are X, the computer is O.");
    println!("Difficulty: {}", game.difficulty());

    loop {
        println!("---------------------");
        println!("{}", game.board()); // Display the board

        if game.is_over() {
            println!("");
            println!("---------------------");
            announce(game.outcome());
            println!("---------------------");
            print!("Enter 'n' for a new game, anything else to quit: ");
            io::stdout().flush().unwrap();

            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() || input.trim() != "n" {
                println!("Thanks for playing!");
                break;
            }
            game = new_game(&args);
            continue;
        }

        print!("Enter your move (row col), or 'n' for a new game, 'q' to quit: ");
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "n" {
            game = new_game(&args);
            println!("Started a new game.");
            continue;
        }

        // Try to parse as coordinates
        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() == 2 {
            if let (Ok(r), Ok(c)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                match game.apply_move((r, c)) {
                    Ok(()) => {
                        // The human move may have ended the game; the
                        // computer only answers while it is still open.
                        if let Some(reply) = game.select_move() {
                            println!("Computer plays ({}, {}).", reply.0, reply.1);
                            if let Err(e) = game.apply_move(reply) {
                                eprintln!("Internal error applying the computer's move: {}", e);
                                break;
                            }
                        }
                    }
                    Err(e) => println!("Invalid move! Please try again. ({})", e),
                }
            } else {
                println!("Invalid input: Please enter numbers for row and column (e.g., '0 2'), 'n', or 'q'.");
            }
        } else {
            println!("Invalid input format. Use 'row col', 'n', or 'q'.");
        }
    }
}
