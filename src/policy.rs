//! Scripted opponent policies.
//!
//! Three difficulty tiers share one entry point, `select_move`. Easy plays
//! uniformly at random. Medium and Hard run a one-move line scan first: a
//! cell completing their own line, then a cell completing the opponent's.
//! Medium falls back to a random cell, Hard to a fixed positional
//! preference. The same scan order means both tiers can be led into
//! finishing their own line, which loses under the reversed rule.

use crate::engine::{Board, Player, BOARD_SIZE};
use crate::error::Error;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Opponent strength, fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Line completion and blocking, random otherwise.
    Medium,
    /// Line completion and blocking, positional preference otherwise.
    Hard,
}

impl Difficulty {
    /// All tiers, weakest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];
}

impl FromStr for Difficulty {
    type Err = Error;

    /// Parses a tier name, case-insensitively.
    ///
    /// # Examples
    /// ```
    /// use reversed_tictactoe::policy::Difficulty;
    /// assert_eq!("medium".parse::<Difficulty>().unwrap(), Difficulty::Medium);
    /// assert!("expert".parse::<Difficulty>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::ParseDifficulty {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.pad(name)
    }
}

/// Hard's positional preference once the line scan finds nothing: corners
/// first, then the centre, then the edges.
const FALLBACK_ORDER: [(usize, usize); 9] = [
    (0, 0),
    (2, 2),
    (0, 2),
    (2, 0),
    (1, 1),
    (0, 1),
    (1, 0),
    (1, 2),
    (2, 1),
];

/// Selects a move for `player` on `board` at the given difficulty.
///
/// Returns `None` only when the board has no empty cell; otherwise the
/// returned move targets an empty cell. The same board, player, difficulty
/// and RNG state always produce the same move.
///
/// # Arguments
/// * `board`: The position to move in.
/// * `player`: The mark the policy plays.
/// * `difficulty`: The tier to apply.
/// * `rng`: Randomness source for the Easy tier and the Medium fallback.
///
/// # Examples
/// ```
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
/// use reversed_tictactoe::engine::{Board, Player};
/// use reversed_tictactoe::policy::{self, Difficulty};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let mv = policy::select_move(&Board::new_empty(), Player::O, Difficulty::Hard, &mut rng);
/// assert_eq!(mv, Some((0, 0)));
/// ```
pub fn select_move(
    board: &Board,
    player: Player,
    difficulty: Difficulty,
    rng: &mut impl Rng,
) -> Option<(usize, usize)> {
    if board.is_full() {
        return None;
    }
    let mv = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => select_move_medium(board, player, rng),
        Difficulty::Hard => select_move_hard(board, player),
    };
    Some(mv)
}

/// Draws `(row, col)` uniformly from the whole grid until an empty cell is
/// hit. The caller must ensure at least one cell is empty.
fn random_move(board: &Board, rng: &mut impl Rng) -> (usize, usize) {
    loop {
        let r = rng.gen_range(0..BOARD_SIZE);
        let c = rng.gen_range(0..BOARD_SIZE);
        if board.is_empty(r, c) {
            return (r, c);
        }
    }
}

/// Completes the mover's own line if one is open, then the opponent's, then
/// plays randomly. The first step concedes the game whenever it fires: an
/// opponent can bait this tier by leaving two of its marks on an open line.
fn select_move_medium(board: &Board, player: Player, rng: &mut impl Rng) -> (usize, usize) {
    if let Some(mv) = board.completing_move(player) {
        return mv;
    }
    if let Some(mv) = board.completing_move(player.opponent()) {
        return mv;
    }
    random_move(board, rng)
}

/// Same line scan as medium, but the fallback walks `FALLBACK_ORDER` instead
/// of sampling. On an empty board this always opens at (0, 0).
fn select_move_hard(board: &Board, player: Player) -> (usize, usize) {
    if let Some(mv) = board.completing_move(player) {
        return mv;
    }
    if let Some(mv) = board.completing_move(player.opponent()) {
        return mv;
    }
    for &(r, c) in &FALLBACK_ORDER {
        if board.is_empty(r, c) {
            return (r, c);
        }
    }
    unreachable!("no empty cell left for the positional fallback")
}
