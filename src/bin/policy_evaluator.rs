use rand::rngs::SmallRng;
use rand::SeedableRng;
use reversed_tictactoe::engine::{Game, Outcome, Player};
use reversed_tictactoe::policy::{self, Difficulty};

const NUM_GAMES_PER_TIER: usize = 1000;
const START_SEED: u64 = 0;
// Offsets the stand-in's seed stream away from the session seeds.
const STAND_IN_SEED_OFFSET: u64 = 0x5eed;

#[derive(Default)]
struct Tally {
    wins: u32,
    draws: u32,
    losses: u32,
}

fn main() {
    println!(
        "Evaluating {} games per tier against a uniformly random opponent...",
        NUM_GAMES_PER_TIER
    );

    let mut tallies: Vec<(Difficulty, Tally)> = Vec::new();

    for difficulty in Difficulty::ALL {
        let mut tally = Tally::default();

        for game_idx in 0..NUM_GAMES_PER_TIER {
            let seed = START_SEED + game_idx as u64;
            let mut game = Game::with_seed(difficulty, seed);
            let mut stand_in_rng = SmallRng::seed_from_u64(STAND_IN_SEED_OFFSET + seed);

            while !game.is_over() {
                // The stand-in plays X with uniformly random legal moves;
                // the evaluated tier answers as O through the session.
                let mv = if game.current_player() == Player::X {
                    policy::select_move(
                        game.board(),
                        Player::X,
                        Difficulty::Easy,
                        &mut stand_in_rng,
                    )
                } else {
                    game.select_move()
                };

                let mv = match mv {
                    Some(mv) => mv,
                    None => break,
                };

                if let Err(e) = game.apply_move(mv) {
                    eprintln!(
                        "Error: tier {} produced a rejected move on seed {}: {}",
                        difficulty, seed, e
                    );
                    break;
                }
            }

            match game.outcome() {
                Outcome::Win(Player::O) => tally.wins += 1,
                Outcome::Win(Player::X) => tally.losses += 1,
                Outcome::Draw => tally.draws += 1,
                Outcome::InProgress => {}
            }
        }

        println!(
            "  Tier: {:<8}, Wins: {:<6}, Draws: {:<6}, Losses: {}",
            difficulty, tally.wins, tally.draws, tally.losses
        );
        tallies.push((difficulty, tally));
    }

    println!("\n--- Evaluation Complete ---");
    println!("Games per tier: {}", NUM_GAMES_PER_TIER);
    println!(
        "Tiers evaluated: {}",
        Difficulty::ALL
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<String>>()
            .join(", ")
    );
    println!("\n--- Win Rates ---");

    for (difficulty, tally) in &tallies {
        let win_rate = tally.wins as f64 * 100.0 / NUM_GAMES_PER_TIER as f64;
        println!("Tier {:<8}: Win rate = {:.1}%", difficulty, win_rate);
    }
}
