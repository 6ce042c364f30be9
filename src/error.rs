//! Error types for the reversed tic-tac-toe crate.

use thiserror::Error;

/// Main error type for the crate.
///
/// The move-rejection variants (`OutOfBounds`, `CellOccupied`, `GameOver`)
/// are recoverable: the game state is untouched and the session continues
/// once the caller picks a different move.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cell ({row}, {col}) is out of bounds (rows and columns run 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("too many rows: expected at most {expected}, got {got}")]
    TooManyRows { expected: usize, got: usize },

    #[error("row {row} is too long: expected at most {expected} characters, got {got}")]
    RowTooLong {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("invalid character '{character}' at row {row} col {col}")]
    InvalidCellCharacter {
        character: char,
        row: usize,
        col: usize,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (counts must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("invalid difficulty '{input}' (expected one of: easy, medium, hard)")]
    ParseDifficulty { input: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
