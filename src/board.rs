//! Board state representation and basic operations

use std::{collections::HashSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub(crate) fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target: the (row, column) coordinates of a cell.
///
/// Coordinates are only meaningful in [0, 2]. An out-of-range action is
/// never contained in [`Board::actions`], so [`Board::result`] rejects it
/// like any other illegal move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub const fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

/// A 3x3 board, row-major.
///
/// The player to move is not stored; it is derived from the piece counts
/// (X moves first, moves alternate). This type implements `Copy` since it
/// is only 9 bytes, and every operation that "changes" the board returns a
/// new value instead of mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [[Cell; 3]; 3],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PieceCount {
    pub(crate) x: usize,
    pub(crate) o: usize,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Get cell at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub(crate) fn piece_counts(&self) -> PieceCount {
        let mut count = PieceCount { x: 0, o: 0 };
        for row in &self.cells {
            for cell in row {
                match cell {
                    Cell::X => count.x += 1,
                    Cell::O => count.o += 1,
                    Cell::Empty => {}
                }
            }
        }
        count
    }

    /// Whose turn it is on this board.
    ///
    /// X moves whenever the piece counts are equal (including the empty
    /// board), O moves when X is ahead by one. Total over any board; a
    /// board unreachable by legal play still yields an answer by the same
    /// counting rule.
    pub fn player(&self) -> Player {
        let count = self.piece_counts();
        if count.x > count.o {
            Player::O
        } else {
            Player::X
        }
    }

    /// The set of legal actions: coordinates of every empty cell.
    ///
    /// Iteration order is unspecified. Empty when the board is full.
    pub fn actions(&self) -> HashSet<Action> {
        let mut open = HashSet::new();
        for row in 0..3 {
            for col in 0..3 {
                if self.cells[row][col] == Cell::Empty {
                    open.insert(Action::new(row, col));
                }
            }
        }
        open
    }

    /// Apply an action for the current player, returning the new board.
    ///
    /// The input board is unchanged. Legality is re-derived from
    /// [`Board::actions`] on every call; the O(9) cost is negligible at
    /// this board size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidAction`] when the action does not
    /// name a currently-empty cell, including out-of-range coordinates.
    #[must_use = "result returns a new board; the original is unchanged"]
    pub fn result(&self, action: Action) -> Result<Board, crate::Error> {
        if !self.actions().contains(&action) {
            return Err(crate::Error::InvalidAction {
                row: action.row,
                col: action.col,
            });
        }

        let mut next = *self;
        next.cells[action.row][action.col] = self.player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one.
    ///
    /// Lines are scanned in a fixed order (rows, columns, diagonals); the
    /// first complete line found determines the answer. See
    /// [`crate::lines::WINNING_LINES`].
    pub fn winner(&self) -> Option<Player> {
        lines::first_winner(&self.cells)
    }

    /// Check if a player has three in a row
    pub fn has_won(&self, player: Player) -> bool {
        lines::has_won(&self.cells, player)
    }

    /// Check if every cell is occupied
    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    /// Check if the game is over: someone has won, or the board is full.
    ///
    /// A board with a winner is terminal even when empty cells remain.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Outcome of the game, or `None` while it is still in progress
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Win(winner))
        } else if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Score a terminal board from X's perspective: 1 if X has won, -1 if
    /// O has won, 0 for a draw.
    ///
    /// Intended for terminal boards. A non-terminal board has no winner
    /// yet and evaluates to 0; no check is performed.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters in row-major order;
    /// whitespace is filtered out first. `.` marks an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters remain
    /// - Any character is not a valid cell representation
    /// - The piece counts are impossible (X not equal to O or ahead by 1)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().take(9).enumerate() {
            board.cells[i / 3][i % 3] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        let count = board.piece_counts();
        if !(count.x == count.o || count.x == count.o + 1) {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Get a compact string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells
            .iter()
            .flatten()
            .map(|&cell| cell.to_char())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for &cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i < 2 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}
