//! Optimality guarantees of the minimax search

use tictactoe_minimax::{Board, GameOutcome, Player, evaluate, minimax};

#[test]
fn perfect_play_from_empty_board_is_a_draw() {
    assert_eq!(evaluate(&Board::new()).value, 0);

    let mut board = Board::new();
    while !board.is_terminal() {
        let action = minimax(&board).expect("non-terminal board has a move");
        board = board.result(action).expect("engine move should be legal");
    }

    assert_eq!(board.outcome(), Some(GameOutcome::Draw));
}

/// Play X with minimax against every possible O response, recursively.
/// X must never lose, whatever O does.
fn x_never_loses(board: Board) {
    if board.is_terminal() {
        assert_ne!(
            board.outcome(),
            Some(GameOutcome::Win(Player::O)),
            "optimal X lost:\n{board}"
        );
        return;
    }

    match board.player() {
        Player::X => {
            let action = minimax(&board).expect("non-terminal board has a move");
            x_never_loses(board.result(action).expect("engine move should be legal"));
        }
        Player::O => {
            for action in board.actions() {
                x_never_loses(board.result(action).expect("legal action should apply"));
            }
        }
    }
}

#[test]
fn optimal_x_never_loses_against_any_opponent() {
    x_never_loses(Board::new());
}

#[test]
fn optimal_o_never_loses_against_any_opponent() {
    fn o_never_loses(board: Board) {
        if board.is_terminal() {
            assert_ne!(
                board.outcome(),
                Some(GameOutcome::Win(Player::X)),
                "optimal O lost:\n{board}"
            );
            return;
        }

        match board.player() {
            Player::O => {
                let action = minimax(&board).expect("non-terminal board has a move");
                o_never_loses(board.result(action).expect("engine move should be legal"));
            }
            Player::X => {
                for action in board.actions() {
                    o_never_loses(board.result(action).expect("legal action should apply"));
                }
            }
        }
    }

    o_never_loses(Board::new());
}

#[test]
fn x_takes_the_winning_move_over_the_block() {
    // X X .
    // O O .
    // . . .
    // Two X and two O means X is to move. Completing the top row at
    // (0, 2) is X's only move that does not lose to O at (1, 2).
    let board = Board::from_string("XX.OO....").unwrap();
    assert_eq!(board.player(), Player::X);

    let action = minimax(&board).expect("position is not terminal");
    assert_eq!((action.row, action.col), (0, 2));

    let finished = board.result(action).unwrap();
    assert_eq!(finished.outcome(), Some(GameOutcome::Win(Player::X)));
}

#[test]
fn evaluation_value_is_stable_under_move_ties() {
    // Symmetric opening position: several moves tie for optimal, so the
    // chosen move is unspecified but the value is pinned.
    let board = Board::from_string("....X....").unwrap();
    assert_eq!(board.player(), Player::O);
    assert_eq!(evaluate(&board).value, 0);

    let reply = minimax(&board).expect("position is not terminal");
    let after = board.result(reply).unwrap();
    assert_eq!(evaluate(&after).value, 0, "O's reply must hold the draw");
}
