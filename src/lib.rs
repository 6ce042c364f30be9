//! # Reversed Tic-Tac-Toe
//!
//! Core game logic for reversed tic-tac-toe, a 3x3 variant where completing
//! three in a row LOSES, together with a scripted computer opponent offered
//! in three difficulty tiers.
//!
//! It is used by three binaries:
//! - `human_player`: interactive play against the computer via the command
//!   line.
//! - `position_analyzer`: loads a board from a file and reports the outcome
//!   and the move each tier would pick.
//! - `policy_evaluator`: plays batches of seeded games to compare the tiers.
//!
//! ## Modules
//! - `engine`: the board representation (`Board`), cell and player types,
//!   outcome evaluation under the reversed rule, and session management
//!   (`Game`).
//! - `policy`: the difficulty tiers and move selection for the computer
//!   opponent.
//! - `utils`: parsing board configurations from strings.
//! - `error`: the crate-wide error type, re-exported at the top level.

pub mod engine;
pub mod error;
pub mod policy;
pub mod utils;

pub use error::{Error, Result};
