//! Core game engine for reversed tic-tac-toe.
//!
//! This module defines the game's fundamental components:
//! - `Cell` and `Player`: the board marks and the two sides.
//! - `Board`: the 3x3 grid, with line scanning (completed lines, completing
//!   moves) and outcome evaluation under the reversed rule, where completing
//!   three in a row loses.
//! - `Game`: a full session, tracking the board, the player to move, the
//!   difficulty and the RNG that drives the computer opponent's random
//!   choices.

use crate::error::{Error, Result};
use crate::policy::{self, Difficulty};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::fmt;

/// State of a single cell on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// No mark yet.
    Empty,
    /// A mark placed by the X player.
    X,
    /// A mark placed by the O player.
    O,
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// This is primarily used for text-based display of the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use reversed_tictactoe::engine::Cell;
    /// assert_eq!(Cell::X.to_char(), 'X');
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }
}

/// One of the two players. `X` always opens a fresh game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the cell state this player's marks occupy.
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Defines the size of the game board (width and height).
/// The board is always square.
pub const BOARD_SIZE: usize = 3;

/// All eight lines that decide the game, in the order they are scanned:
/// rows top to bottom, columns left to right, the main diagonal, then the
/// anti-diagonal.
const LINES: [[(usize, usize); BOARD_SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Result of evaluating a board position.
///
/// Under the reversed rule a completed line loses for its owner, so a
/// completed X line means `Win(O)` and a completed O line means `Win(X)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No line is complete and at least one cell is still empty.
    InProgress,
    /// The named player has won.
    Win(Player),
    /// The board filled up without a completed line.
    Draw,
}

/// Represents the game board as a 2D grid of `Cell`s.
///
/// The board stores the state of each cell and provides the line scanning
/// that the rules and the opponent policy are built on: completed lines,
/// cells that would complete a line, and outcome evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new board with all cells set to `Cell::Empty`.
    ///
    /// # Examples
    /// ```
    /// use reversed_tictactoe::engine::{Board, Cell};
    /// let board = Board::new_empty();
    /// assert_eq!(board.get_cell(0, 0), Cell::Empty);
    /// ```
    pub fn new_empty() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific scenarios.
    pub fn from_grid(initial_grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid: initial_grid }
    }

    /// Returns the cell at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn get_cell(&self, r: usize, c: usize) -> Cell {
        self.grid[r][c]
    }

    /// Sets the cell at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions.
    pub fn set_cell(&mut self, r: usize, c: usize, cell: Cell) {
        self.grid[r][c] = cell;
    }

    /// Returns `true` if `(r, c)` is on the board and currently empty.
    /// Out-of-bounds coordinates report `false` rather than panicking.
    pub fn is_empty(&self, r: usize, c: usize) -> bool {
        r < BOARD_SIZE && c < BOARD_SIZE && self.grid[r][c] == Cell::Empty
    }

    /// Returns `true` when no cell is empty.
    pub fn is_full(&self) -> bool {
        self.grid.iter().flatten().all(|&cell| cell != Cell::Empty)
    }

    /// Returns the coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                if self.grid[r][c] == Cell::Empty {
                    cells.push((r, c));
                }
            }
        }
        cells
    }

    /// Counts the marks on the board, returned as `(x_count, o_count)`.
    pub fn mark_counts(&self) -> (usize, usize) {
        let mut x_count = 0;
        let mut o_count = 0;
        for row in &self.grid {
            for cell in row {
                match cell {
                    Cell::X => x_count += 1,
                    Cell::O => o_count += 1,
                    Cell::Empty => {}
                }
            }
        }
        (x_count, o_count)
    }

    /// Returns `true` if `player` holds all three cells of any line.
    pub fn has_completed_line(&self, player: Player) -> bool {
        let mark = player.to_cell();
        LINES
            .iter()
            .any(|line| line.iter().all(|&(r, c)| self.grid[r][c] == mark))
    }

    /// Finds the first cell that would complete a line for `player`.
    ///
    /// Lines are scanned in a fixed order (rows top to bottom, columns left
    /// to right, main diagonal, anti-diagonal). A line qualifies when exactly
    /// one of its cells is empty and the other two hold `player`'s mark; the
    /// empty cell of the first qualifying line is returned. Note that under
    /// the reversed rule, playing the returned cell as `player` concedes the
    /// game, while playing it as the opponent denies the line.
    ///
    /// # Examples
    /// ```
    /// use reversed_tictactoe::engine::Player;
    /// use reversed_tictactoe::utils::board_from_rows;
    ///
    /// let board = board_from_rows(&["XX."]).unwrap();
    /// assert_eq!(board.completing_move(Player::X), Some((0, 2)));
    /// assert_eq!(board.completing_move(Player::O), None);
    /// ```
    pub fn completing_move(&self, player: Player) -> Option<(usize, usize)> {
        let mark = player.to_cell();
        for line in &LINES {
            let mut own = 0;
            let mut empty = None;
            for &(r, c) in line {
                match self.grid[r][c] {
                    cell if cell == mark => own += 1,
                    Cell::Empty => empty = Some((r, c)),
                    _ => {}
                }
            }
            if own == 2 {
                if let Some(cell) = empty {
                    return Some(cell);
                }
            }
        }
        None
    }

    /// Evaluates the position under the reversed three-in-a-row rule.
    ///
    /// A completed line loses for its owner. O's lines are checked before
    /// X's, so a completed O line yields `Win(X)` even on a board where both
    /// players hold a line. A full board with no completed line is a `Draw`;
    /// anything else is `InProgress`.
    pub fn outcome(&self) -> Outcome {
        if self.has_completed_line(Player::O) {
            return Outcome::Win(Player::X);
        }
        if self.has_completed_line(Player::X) {
            return Outcome::Win(Player::O);
        }
        if self.is_full() {
            return Outcome::Draw;
        }
        Outcome::InProgress
    }
}

impl fmt::Display for Board {
    /// Formats the board with column and row headers, one character per cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c in 0..BOARD_SIZE {
            write!(f, "{} ", c)?;
        }
        writeln!(f)?;
        for r in 0..BOARD_SIZE {
            write!(f, "{} ", r)?;
            for c in 0..BOARD_SIZE {
                write!(f, "{} ", self.grid[r][c].to_char())?;
            }
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Infers whose turn it is from a position's mark counts.
///
/// `X` opens every game and the turn passes after each move, so the counts
/// can only be equal (`X` to move) or show one extra `X` (`O` to move).
///
/// # Errors
/// `Error::InvalidPieceCounts` for any other combination.
pub fn mover_from_counts(x_count: usize, o_count: usize) -> Result<Player> {
    if x_count == o_count {
        Ok(Player::X)
    } else if x_count == o_count + 1 {
        Ok(Player::O)
    } else {
        Err(Error::InvalidPieceCounts { x_count, o_count })
    }
}

/// Manages the state and progression of one game session.
///
/// A session tracks the board, the player to move, the cached outcome and
/// the difficulty of the computer opponent. It also owns a small seeded RNG,
/// so sessions created with `with_seed` replay identically.
///
/// # Examples
/// ```
/// use reversed_tictactoe::engine::{Game, Outcome, Player};
/// use reversed_tictactoe::policy::Difficulty;
///
/// let mut game = Game::with_seed(Difficulty::Hard, 7);
/// assert_eq!(game.current_player(), Player::X);
///
/// // The human takes the centre, then the computer answers.
/// game.apply_move((1, 1)).unwrap();
/// let reply = game.select_move().unwrap();
/// game.apply_move(reply).unwrap();
///
/// assert_eq!(game.outcome(), Outcome::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Game {
    /// Creates a fresh session: an empty board with `X` to move and an
    /// entropy-seeded RNG, so every run plays out differently.
    pub fn new(difficulty: Difficulty) -> Self {
        Game {
            board: Board::new_empty(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            difficulty,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Creates a fresh session whose random choices replay identically for
    /// the same seed.
    ///
    /// # Arguments
    /// * `difficulty`: The opponent tier, fixed for the session lifetime.
    /// * `seed`: Seed for the session RNG.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Game {
            board: Board::new_empty(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Adopts an existing position.
    ///
    /// The player to move is inferred from the mark counts, and the outcome
    /// is evaluated immediately, so adopting a finished position yields a
    /// session that refuses further moves.
    ///
    /// # Errors
    /// `Error::InvalidPieceCounts` if the counts match no reachable position.
    pub fn from_board(board: Board, difficulty: Difficulty) -> Result<Self> {
        Self::build_from_board(board, difficulty, SmallRng::from_entropy())
    }

    /// Adopts an existing position with a seeded RNG, for reproducible
    /// analysis of the same board.
    ///
    /// # Errors
    /// `Error::InvalidPieceCounts` if the counts match no reachable position.
    pub fn from_board_with_seed(board: Board, difficulty: Difficulty, seed: u64) -> Result<Self> {
        Self::build_from_board(board, difficulty, SmallRng::seed_from_u64(seed))
    }

    fn build_from_board(board: Board, difficulty: Difficulty, rng: SmallRng) -> Result<Self> {
        let (x_count, o_count) = board.mark_counts();
        let current_player = mover_from_counts(x_count, o_count)?;
        let outcome = board.outcome();
        Ok(Game {
            board,
            current_player,
            outcome,
            difficulty,
            rng,
        })
    }

    /// Returns an immutable reference to the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the session difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the cached outcome of the current position.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns `true` once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.outcome != Outcome::InProgress
    }

    /// Applies a move for the current player.
    ///
    /// Rejections are checked in a fixed order: a finished game refuses every
    /// move, then the coordinates must be on the board, then the target cell
    /// must be empty. On success the mark is placed, the turn passes to the
    /// other player (also when the move ends the game) and the outcome is
    /// re-evaluated.
    ///
    /// # Errors
    /// `Error::GameOver`, `Error::OutOfBounds` or `Error::CellOccupied`. The
    /// game state is untouched when an error is returned.
    pub fn apply_move(&mut self, mv: (usize, usize)) -> Result<()> {
        let (r, c) = mv;
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if r >= BOARD_SIZE || c >= BOARD_SIZE {
            return Err(Error::OutOfBounds { row: r, col: c });
        }
        if self.board.get_cell(r, c) != Cell::Empty {
            return Err(Error::CellOccupied { row: r, col: c });
        }

        self.board.set_cell(r, c, self.current_player.to_cell());
        self.current_player = self.current_player.opponent();
        self.outcome = self.board.outcome();
        Ok(())
    }

    /// Asks the session's opponent policy for a move for the current player.
    ///
    /// Returns `None` once the game is over. While the game is in progress
    /// the board has at least one empty cell, so a move targeting an empty
    /// cell is always returned.
    pub fn select_move(&mut self) -> Option<(usize, usize)> {
        if self.is_over() {
            return None;
        }
        policy::select_move(
            &self.board,
            self.current_player,
            self.difficulty,
            &mut self.rng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::board_from_rows;
    use rand::Rng;

    #[test]
    fn test_new_empty_board() {
        let board = Board::new_empty();
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                assert_eq!(board.get_cell(r, c), Cell::Empty);
            }
        }
        assert!(!board.is_full());
        assert_eq!(board.mark_counts(), (0, 0));
    }

    #[test]
    fn test_board_from_grid() {
        let mut initial_grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        initial_grid[0][0] = Cell::X;
        let board = Board::from_grid(initial_grid);
        assert_eq!(board.get_cell(0, 0), Cell::X);
        assert_eq!(board.get_cell(0, 1), Cell::Empty);
    }

    #[test]
    fn test_cell_to_char() {
        assert_eq!(Cell::Empty.to_char(), '.');
        assert_eq!(Cell::X.to_char(), 'X');
        assert_eq!(Cell::O.to_char(), 'O');
    }

    #[test]
    fn test_player_opponent_and_cell() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.to_cell(), Cell::X);
        assert_eq!(Player::O.to_cell(), Cell::O);
    }

    #[test]
    fn test_is_empty_bounds_checked() {
        let board = board_from_rows(&["X"]).unwrap();
        assert!(!board.is_empty(0, 0));
        assert!(board.is_empty(0, 1));
        assert!(!board.is_empty(BOARD_SIZE, 0));
        assert!(!board.is_empty(0, BOARD_SIZE));
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = board_from_rows(&["XO.", ".X.", "OOX"]).unwrap();
        assert_eq!(board.empty_cells(), vec![(0, 2), (1, 0), (1, 2)]);
    }

    #[test]
    fn test_display_board_formatting() {
        let board = board_from_rows(&["X.O", ".X."]).unwrap();
        let display_str = format!("{}", board);

        assert!(
            display_str.contains("  0 1 2"),
            "Missing or incorrect column numbers"
        );
        assert!(display_str.contains("0 X . O"), "Missing row 0 content");
        assert!(display_str.contains("2 . . ."), "Missing last row content");
        assert_eq!(
            display_str.trim_end().lines().count(),
            BOARD_SIZE + 1,
            "Incorrect number of lines in display output"
        );
    }

    #[test]
    fn test_completing_move_basic_row() {
        let board = board_from_rows(&["XX."]).unwrap();
        assert_eq!(board.completing_move(Player::X), Some((0, 2)));
        assert_eq!(board.completing_move(Player::O), None);
    }

    #[test]
    fn test_completing_move_scans_rows_before_columns() {
        // Row 0 and column 0 both qualify; the row scan comes first.
        let board = board_from_rows(&["XX.", "X..", "..."]).unwrap();
        assert_eq!(board.completing_move(Player::X), Some((0, 2)));
    }

    #[test]
    fn test_completing_move_diagonal_with_middle_gap() {
        let board = board_from_rows(&["X..", "...", "..X"]).unwrap();
        assert_eq!(board.completing_move(Player::X), Some((1, 1)));

        let board = board_from_rows(&["..O", ".O.", "..."]).unwrap();
        assert_eq!(board.completing_move(Player::O), Some((2, 0)));
    }

    #[test]
    fn test_completing_move_ignores_mixed_lines() {
        // Two X on a line blocked by an O do not qualify for either player.
        let board = board_from_rows(&["XO.", "X..", "O.."]).unwrap();
        assert_eq!(board.completing_move(Player::X), None);
        assert_eq!(board.completing_move(Player::O), None);
    }

    #[test]
    fn test_completed_x_diagonal_awards_win_to_o() {
        let board = board_from_rows(&["XXO", "OXO", "XOX"]).unwrap();
        assert!(board.has_completed_line(Player::X));
        assert!(!board.has_completed_line(Player::O));
        assert_eq!(board.outcome(), Outcome::Win(Player::O));
    }

    #[test]
    fn test_completed_o_row_awards_win_to_x() {
        let board = board_from_rows(&["OOO", "XX.", "X.."]).unwrap();
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_outcome_checks_o_line_before_x_line() {
        // Unreachable in play; the evaluation order still decides it.
        let board = board_from_rows(&["XXX", "...", "OOO"]).unwrap();
        assert_eq!(board.outcome(), Outcome::Win(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_rows(&["XXO", "OOX", "XXO"]).unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_open_board_is_in_progress() {
        let board = board_from_rows(&["XO.", "...", "..."]).unwrap();
        assert_eq!(board.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_mover_from_counts() {
        assert_eq!(mover_from_counts(0, 0).unwrap(), Player::X);
        assert_eq!(mover_from_counts(1, 0).unwrap(), Player::O);
        assert_eq!(mover_from_counts(3, 3).unwrap(), Player::X);
        assert!(matches!(
            mover_from_counts(0, 1),
            Err(Error::InvalidPieceCounts {
                x_count: 0,
                o_count: 1
            })
        ));
        assert!(matches!(
            mover_from_counts(3, 1),
            Err(Error::InvalidPieceCounts { .. })
        ));
    }

    #[test]
    fn test_new_game_is_fresh() {
        let game = Game::new(Difficulty::Medium);
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(!game.is_over());
        assert_eq!(game.difficulty(), Difficulty::Medium);
    }

    #[test]
    fn test_apply_move_places_mark_and_toggles_mover() {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.apply_move((0, 0)).unwrap();
        assert_eq!(game.board().get_cell(0, 0), Cell::X);
        assert_eq!(game.current_player(), Player::O);

        game.apply_move((1, 1)).unwrap();
        assert_eq!(game.board().get_cell(1, 1), Cell::O);
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        let err = game.apply_move((0, BOARD_SIZE)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 0, col: BOARD_SIZE }));
        assert_eq!(game.board(), &Board::new_empty());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let mut game = Game::with_seed(Difficulty::Easy, 0);
        game.apply_move((1, 1)).unwrap();
        let board_before = game.board().clone();

        let err = game.apply_move((1, 1)).unwrap_err();
        assert!(matches!(err, Error::CellOccupied { row: 1, col: 1 }));
        assert_eq!(game.board(), &board_before);
        assert_eq!(game.current_player(), Player::O);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_apply_move_rejects_finished_game() {
        let board = board_from_rows(&["XXX", "OO.", "..."]).unwrap();
        let mut game = Game::from_board(board, Difficulty::Hard).unwrap();
        assert_eq!(game.outcome(), Outcome::Win(Player::O));

        // The game-over check comes before bounds and occupancy.
        assert!(matches!(game.apply_move((1, 2)), Err(Error::GameOver)));
        assert!(matches!(game.apply_move((0, 0)), Err(Error::GameOver)));
        assert!(matches!(game.apply_move((5, 5)), Err(Error::GameOver)));
    }

    #[test]
    fn test_from_board_infers_mover() {
        let game = Game::from_board(Board::new_empty(), Difficulty::Easy).unwrap();
        assert_eq!(game.current_player(), Player::X);

        let board = board_from_rows(&["X.."]).unwrap();
        let game = Game::from_board(board, Difficulty::Easy).unwrap();
        assert_eq!(game.current_player(), Player::O);

        let board = board_from_rows(&["X.O"]).unwrap();
        let game = Game::from_board(board, Difficulty::Easy).unwrap();
        assert_eq!(game.current_player(), Player::X);
    }

    #[test]
    fn test_from_board_rejects_unreachable_counts() {
        let board = board_from_rows(&["XXX", "X.."]).unwrap();
        let err = Game::from_board(board, Difficulty::Easy).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidPieceCounts {
                x_count: 4,
                o_count: 0
            }
        ));
    }

    #[test]
    fn test_from_board_recognizes_terminal_positions() {
        let board = board_from_rows(&["XXO", "OXO", "XOX"]).unwrap();
        let game = Game::from_board(board, Difficulty::Medium).unwrap();
        assert!(game.is_over());
        assert_eq!(game.outcome(), Outcome::Win(Player::O));
    }

    #[test]
    fn test_select_move_returns_none_when_over() {
        let board = board_from_rows(&["XXX", "OO.", "..."]).unwrap();
        let mut game = Game::from_board(board, Difficulty::Hard).unwrap();
        assert_eq!(game.select_move(), None);
    }

    #[test]
    fn test_with_seed_replays_identically() {
        let mut game1 = Game::with_seed(Difficulty::Easy, 123);
        let mut game2 = Game::with_seed(Difficulty::Easy, 123);
        // Four plies cannot finish a game, so every selection is Some.
        for _ in 0..4 {
            let mv1 = game1.select_move().unwrap();
            let mv2 = game2.select_move().unwrap();
            assert_eq!(mv1, mv2);
            game1.apply_move(mv1).unwrap();
            game2.apply_move(mv2).unwrap();
        }
    }

    #[test]
    fn test_new_session_starts_fresh_after_terminal_session() {
        let board = board_from_rows(&["XXX", "OO.", "..."]).unwrap();
        let finished = Game::from_board(board, Difficulty::Easy).unwrap();
        assert!(finished.is_over());

        let fresh = Game::with_seed(Difficulty::Easy, 3);
        assert_eq!(fresh.board(), &Board::new_empty());
        assert_eq!(fresh.current_player(), Player::X);
        assert!(!fresh.is_over());
    }

    #[test]
    fn test_mark_counts_stay_balanced_under_random_play() {
        let mut rng = rand::rngs::SmallRng::seed_from_u64(7);
        for seed in 0..50u64 {
            let mut game = Game::with_seed(Difficulty::Easy, seed);
            let mut expected_mover = Player::X;
            while !game.is_over() {
                assert_eq!(game.current_player(), expected_mover);
                let empties = game.board().empty_cells();
                let (r, c) = empties[rng.gen_range(0..empties.len())];
                game.apply_move((r, c)).unwrap();
                expected_mover = expected_mover.opponent();

                let (x_count, o_count) = game.board().mark_counts();
                assert!(
                    x_count == o_count || x_count == o_count + 1,
                    "counts drifted apart: X={}, O={}",
                    x_count,
                    o_count
                );
            }
        }
    }

    #[test]
    fn test_full_session_against_each_tier_terminates() {
        for difficulty in Difficulty::ALL {
            for seed in 0..20u64 {
                let mut game = Game::with_seed(difficulty, seed);
                let mut moves = 0;
                while !game.is_over() {
                    let mv = game
                        .select_move()
                        .expect("in-progress game must yield a move");
                    game.apply_move(mv).expect("selected move must be legal");
                    moves += 1;
                    assert!(moves <= BOARD_SIZE * BOARD_SIZE, "session did not terminate");
                }
                assert_ne!(game.outcome(), Outcome::InProgress);
            }
        }
    }
}
