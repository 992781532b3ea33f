//! Exhaustive minimax engine for 3x3 Tic-Tac-Toe
//!
//! This crate provides:
//! - Board representation with legality queries and turn derivation
//! - Win, draw, and terminal-state detection
//! - Full-depth minimax search returning the optimal move
//! - Opt-in validation for boards constructed by hand
//!
//! All operations are pure: a board is a small `Copy` value and applying a
//! move produces a new board. Whose turn it is falls out of the piece
//! counts, so a board alone is a complete game state.
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{Board, Player, minimax};
//!
//! let board = Board::new();
//! assert_eq!(board.player(), Player::X);
//!
//! // Perfect play from the empty board ends in a draw.
//! let opening = minimax(&board).expect("empty board is not terminal");
//! let board = board.result(opening)?;
//! assert_eq!(board.player(), Player::O);
//! # Ok::<(), tictactoe_minimax::Error>(())
//! ```

pub mod board;
pub mod error;
pub mod lines;
pub mod search;
pub mod validation;

pub use board::{Action, Board, Cell, GameOutcome, Player};
pub use error::{Error, Result};
pub use lines::WINNING_LINES;
pub use search::{Evaluation, evaluate, minimax};
