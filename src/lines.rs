//! Winning line scanning for the 3x3 board

use crate::board::{Cell, Player};

/// Row-major coordinates of the 8 winning lines.
///
/// The order is part of the winner-detection contract: rows top to bottom,
/// then columns left to right, then the two diagonals. [`first_winner`]
/// returns the mark of the first fully-filled line in this order.
pub const WINNING_LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)], // diagonals
];

/// Find the winner by scanning lines in the fixed order above.
///
/// Returns the player holding the first fully-filled, non-empty line, or
/// `None` when no line is complete. Boards with multiple winning lines
/// (impossible in a legally played game) resolve to the first match.
pub(crate) fn first_winner(cells: &[[Cell; 3]; 3]) -> Option<Player> {
    for line in &WINNING_LINES {
        let (row, col) = line[0];
        let mark = cells[row][col];
        if mark != Cell::Empty && line.iter().all(|&(r, c)| cells[r][c] == mark) {
            return mark.to_player();
        }
    }
    None
}

/// Collect every winning line fully held by the player.
pub(crate) fn filled_lines(cells: &[[Cell; 3]; 3], player: Player) -> Vec<[(usize, usize); 3]> {
    let target = player.to_cell();
    WINNING_LINES
        .iter()
        .filter(|line| line.iter().all(|&(r, c)| cells[r][c] == target))
        .copied()
        .collect()
}

/// Check if a player holds three in a row
pub(crate) fn has_won(cells: &[[Cell; 3]; 3], player: Player) -> bool {
    !filled_lines(cells, player).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_cells() -> [[Cell; 3]; 3] {
        [[Cell::Empty; 3]; 3]
    }

    #[test]
    fn test_first_winner_horizontal() {
        let mut cells = empty_cells();
        cells[0][0] = Cell::X;
        cells[0][1] = Cell::X;
        cells[0][2] = Cell::X;

        assert_eq!(first_winner(&cells), Some(Player::X));
        assert!(has_won(&cells, Player::X));
        assert!(!has_won(&cells, Player::O));
    }

    #[test]
    fn test_first_winner_vertical() {
        let mut cells = empty_cells();
        cells[0][1] = Cell::O;
        cells[1][1] = Cell::O;
        cells[2][1] = Cell::O;

        assert_eq!(first_winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_first_winner_diagonal() {
        let mut cells = empty_cells();
        cells[0][0] = Cell::X;
        cells[1][1] = Cell::X;
        cells[2][2] = Cell::X;

        assert_eq!(first_winner(&cells), Some(Player::X));

        let mut anti = empty_cells();
        anti[0][2] = Cell::O;
        anti[1][1] = Cell::O;
        anti[2][0] = Cell::O;

        assert_eq!(first_winner(&anti), Some(Player::O));
    }

    #[test]
    fn test_no_winner() {
        let mut cells = empty_cells();
        cells[0][0] = Cell::X;
        cells[1][1] = Cell::O;

        assert_eq!(first_winner(&cells), None);
    }

    #[test]
    fn test_scan_order_rows_top_to_bottom() {
        // Two complete rows with different owners: the top one is reported.
        // Only reachable through invalid play, but the scan order is fixed.
        let mut cells = empty_cells();
        cells[0] = [Cell::O; 3];
        cells[2] = [Cell::X; 3];

        assert_eq!(first_winner(&cells), Some(Player::O));
    }

    #[test]
    fn test_scan_order_columns_left_to_right() {
        let mut cells = empty_cells();
        for row in 0..3 {
            cells[row][0] = Cell::X;
            cells[row][2] = Cell::O;
        }

        assert_eq!(first_winner(&cells), Some(Player::X));
    }

    #[test]
    fn test_filled_lines_multiple() {
        // X holds the top row and the left column, sharing the corner.
        let mut cells = empty_cells();
        cells[0] = [Cell::X; 3];
        cells[1][0] = Cell::X;
        cells[2][0] = Cell::X;

        let lines = filled_lines(&cells, Player::X);
        assert_eq!(lines.len(), 2);
    }
}
