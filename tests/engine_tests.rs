//! Game engine integration tests: turn order, moves, terminal scoring.

use tictactoe_minimax::core::{Board, Cell, EngineError, IllegalMoveReason, Move, Player};
use tictactoe_minimax::rules::{
    apply_move, current_player, game_result, initial_board, is_terminal, legal_moves, utility,
    winner, GameResult, WINNING_LINES,
};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

// =============================================================================
// Initial Board
// =============================================================================

#[test]
fn test_initial_board() {
    let start = initial_board();

    assert!(start.cells().iter().all(|&c| c == Cell::Empty));
    assert!(!is_terminal(&start));
    assert_eq!(legal_moves(&start).len(), 9);
    assert_eq!(current_player(&start), Ok(Player::X));
    assert_eq!(winner(&start), None);
}

#[test]
fn test_utility_on_initial_board_is_not_terminal() {
    assert_eq!(utility(&initial_board()), Err(EngineError::NotTerminal));
}

// =============================================================================
// Turn Order
// =============================================================================

#[test]
fn test_players_alternate() {
    let moves = [
        Move::new(1, 1),
        Move::new(0, 0),
        Move::new(2, 2),
        Move::new(0, 2),
        Move::new(0, 1),
    ];

    let mut b = initial_board();
    let mut expected = Player::X;
    for mv in moves {
        assert_eq!(current_player(&b), Ok(expected));
        b = apply_move(&b, mv).unwrap();
        assert_eq!(b.get(mv.row, mv.col), Some(Cell::from(expected)));
        expected = expected.opponent();
    }
}

#[test]
fn test_two_x_one_o_is_o_to_move() {
    let b = board("XO./.X./...");
    assert_eq!(current_player(&b), Ok(Player::O));
}

#[test]
fn test_unreachable_counts_fail() {
    for text in ["O........", "OOX......", "XXX.O....", "XX......."] {
        assert!(
            matches!(
                current_player(&board(text)),
                Err(EngineError::InvalidState { .. })
            ),
            "{text} should be rejected"
        );
    }
}

// =============================================================================
// Transitions
// =============================================================================

#[test]
fn test_apply_move_leaves_input_untouched() {
    let before = board("X...O....");
    let snapshot = before;

    let after = apply_move(&before, Move::new(2, 2)).unwrap();

    assert_eq!(before, snapshot);
    assert_ne!(before, after);
    assert_eq!(after.get(2, 2), Some(Cell::X));
}

#[test]
fn test_apply_move_errors() {
    let b = board("X...O....");

    assert_eq!(
        apply_move(&b, Move::new(1, 1)),
        Err(EngineError::IllegalMove {
            row: 1,
            col: 1,
            reason: IllegalMoveReason::Occupied,
        })
    );
    assert_eq!(
        apply_move(&b, Move::new(5, 0)),
        Err(EngineError::IllegalMove {
            row: 5,
            col: 0,
            reason: IllegalMoveReason::OutOfRange,
        })
    );
}

#[test]
fn test_legal_moves_shrink_by_one() {
    let mut b = initial_board();
    for expected in (0..9).rev() {
        let moves = legal_moves(&b);
        let mv = moves[moves.len() / 2];
        b = apply_move(&b, mv).unwrap();
        assert_eq!(legal_moves(&b).len(), expected);
        assert!(!legal_moves(&b).contains(&mv));
    }
    assert!(b.is_full());
    assert!(is_terminal(&b));
}

// =============================================================================
// Terminal Scoring
// =============================================================================

#[test]
fn test_x_row_win() {
    let b = board("XXX/OO./...");

    assert_eq!(winner(&b), Some(Player::X));
    assert!(is_terminal(&b));
    assert_eq!(utility(&b), Ok(1));
}

#[test]
fn test_full_board_draw() {
    let b = board("XOX/XXO/OXO");

    assert_eq!(winner(&b), None);
    assert!(is_terminal(&b));
    assert_eq!(utility(&b), Ok(0));
    assert_eq!(game_result(&b), Some(GameResult::Draw));
}

#[test]
fn test_o_diagonal_win() {
    let b = board("OXX/XO./X.O");

    assert_eq!(winner(&b), Some(Player::O));
    assert_eq!(utility(&b), Ok(-1));
    assert!(GameResult::Winner(Player::O).is_winner(Player::O));
}

#[test]
fn test_every_line_is_detected() {
    for line in WINNING_LINES {
        let mut cells = [Cell::Empty; 9];
        for i in line {
            cells[i] = Cell::O;
        }
        let b = Board::from_cells(cells);
        assert_eq!(winner(&b), Some(Player::O), "line {line:?}");
        assert!(is_terminal(&b));
    }
}

#[test]
fn test_won_board_with_empty_cells_still_lists_moves() {
    let b = board("XXX/OO./...");
    assert_eq!(legal_moves(&b).len(), 4);
    assert!(is_terminal(&b));
}

#[test]
fn test_malformed_double_win_does_not_panic() {
    let b = board("XXX/OOO/...");
    assert_eq!(winner(&b), Some(Player::X));
    assert_eq!(utility(&b), Ok(1));
}
