use crate::engine::{Board, Cell, BOARD_SIZE};
use crate::error::{Error, Result};

/// Parses an array of string slices into a `Board`.
///
/// Each string slice in the input array represents a row on the board,
/// starting from row 0. If fewer than `BOARD_SIZE` rows are provided, the
/// remaining rows are filled with `Cell::Empty`. Similarly, if a row string
/// is shorter than `BOARD_SIZE` characters, the rest of that row is filled
/// with `Cell::Empty`.
///
/// Valid characters for cells are:
/// - 'X': `Cell::X`
/// - 'O': `Cell::O`
/// - '.' or ' ': `Cell::Empty`
///
/// Any other character will result in an error.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of the
///   board, starting from the top (row 0).
///
/// # Errors
/// * `Error::TooManyRows` if the number of rows in `s` exceeds `BOARD_SIZE`.
/// * `Error::RowTooLong` if any row's character length exceeds `BOARD_SIZE`.
/// * `Error::InvalidCellCharacter` for any unrecognized character.
///
/// # Examples
/// ```
/// use reversed_tictactoe::engine::Cell;
/// use reversed_tictactoe::utils::board_from_rows;
///
/// let board = board_from_rows(&[
///     "XO", // Row 0
///     ".X", // Row 1
/// ]).unwrap();
/// assert_eq!(board.get_cell(0, 0), Cell::X);
/// assert_eq!(board.get_cell(0, 1), Cell::O);
/// assert_eq!(board.get_cell(1, 0), Cell::Empty);
/// assert_eq!(board.get_cell(1, 1), Cell::X);
/// assert_eq!(board.get_cell(2, 2), Cell::Empty); // Row 2 stays empty
///
/// assert!(board_from_rows(&["XZ."]).is_err());
/// ```
pub fn board_from_rows(s: &[&str]) -> Result<Board> {
    if s.len() > BOARD_SIZE {
        return Err(Error::TooManyRows {
            expected: BOARD_SIZE,
            got: s.len(),
        });
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > BOARD_SIZE {
            return Err(Error::RowTooLong {
                row: r,
                expected: BOARD_SIZE,
                got: row_str.chars().count(),
            });
        }

        // Cells left unspecified by a short row keep their Empty default.
        for (c, ch) in row_str.chars().enumerate() {
            grid[r][c] = match ch {
                'X' => Cell::X,
                'O' => Cell::O,
                '.' | ' ' => Cell::Empty,
                _ => {
                    return Err(Error::InvalidCellCharacter {
                        character: ch,
                        row: r,
                        col: c,
                    })
                }
            };
        }
    }
    Ok(Board::from_grid(grid))
}
