//! Exhaustive minimax search over the game tree
//!
//! Two mutually recursive evaluators walk the full tree depth-first: X
//! maximizes the utility, O minimizes it. No depth limiting is needed
//! since the tree has at most 9! nodes, and recursion depth is bounded by
//! the number of empty cells. The only pruning is an early exit once a
//! player finds a child worth the extremal utility for their side, which
//! is sound because 1 and -1 bound the utility range.

use serde::{Deserialize, Serialize};

use crate::board::{Action, Board, Player};

/// Best achievable utility for the maximizing player (X)
const MAX_UTILITY: i32 = 1;
/// Best achievable utility for the minimizing player (O)
const MIN_UTILITY: i32 = -1;

/// Result of evaluating a position: the utility the mover can guarantee
/// under optimal play on both sides, and a move achieving it.
///
/// `best_move` is `None` on terminal boards. When several moves share the
/// optimal value, which one is reported depends on action iteration order
/// and is unspecified; the value is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub value: i32,
    pub best_move: Option<Action>,
}

impl Evaluation {
    fn terminal(board: &Board) -> Self {
        Evaluation {
            value: board.utility(),
            best_move: None,
        }
    }
}

/// Evaluate a position for whichever player is to move.
pub fn evaluate(board: &Board) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::terminal(board);
    }

    match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    }
}

/// Compute the optimal move for the current player.
///
/// Returns `None` when the board is already terminal; callers should not
/// request a move on a finished game.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }
    evaluate(board).best_move
}

fn max_value(board: &Board) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::terminal(board);
    }

    let mut best = Evaluation {
        value: i32::MIN,
        best_move: None,
    };

    for action in board.actions() {
        let next = board
            .result(action)
            .expect("legal action generation should not fail");
        let child = min_value(&next);

        if child.value > best.value {
            best = Evaluation {
                value: child.value,
                best_move: Some(action),
            };
        }

        if best.value == MAX_UTILITY {
            break;
        }
    }

    best
}

fn min_value(board: &Board) -> Evaluation {
    if board.is_terminal() {
        return Evaluation::terminal(board);
    }

    let mut best = Evaluation {
        value: i32::MAX,
        best_move: None,
    };

    for action in board.actions() {
        let next = board
            .result(action)
            .expect("legal action generation should not fail");
        let child = max_value(&next);

        if child.value < best.value {
            best = Evaluation {
                value: child.value,
                best_move: Some(action),
            };
        }

        if best.value == MIN_UTILITY {
            break;
        }
    }

    best
}
