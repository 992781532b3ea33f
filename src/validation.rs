//! Board state validation logic
//!
//! The core operations never validate their inputs; boards that cannot
//! arise from legal play are out of contract. This module offers an
//! opt-in check for callers that construct boards directly.

use crate::{
    board::{Board, Player},
    lines,
};

impl Board {
    /// Check if the board could have arisen from legal play.
    ///
    /// Verified conditions:
    /// - X's piece count equals O's or exceeds it by exactly one
    /// - Both players do not hold winning lines at once
    /// - A winner's piece count shows they moved last (X ahead by one for
    ///   an X win, counts equal for an O win)
    /// - Multiple winning lines for one player all share a cell, since
    ///   they must have been completed by a single move
    pub fn is_valid(&self) -> bool {
        let count = self.piece_counts();

        if !(count.x == count.o || count.x == count.o + 1) {
            return false;
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);

        if x_wins && o_wins {
            return false;
        }

        if x_wins && count.x != count.o + 1 {
            return false;
        }
        if o_wins && count.x != count.o {
            return false;
        }

        if x_wins && !winning_lines_share_cell(self, Player::X) {
            return false;
        }
        if o_wins && !winning_lines_share_cell(self, Player::O) {
            return false;
        }

        true
    }
}

/// Check if all winning lines for a player share at least one cell.
/// Necessary for multiple lines to be completed by a single move.
fn winning_lines_share_cell(board: &Board, player: Player) -> bool {
    let winning = lines::filled_lines(&board.cells, player);
    if winning.len() < 2 {
        return true;
    }

    for row in 0..3 {
        for col in 0..3 {
            if winning.iter().all(|line| line.contains(&(row, col))) {
                return true;
            }
        }
    }

    false
}
