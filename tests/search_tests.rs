//! Minimax integration tests.

use tictactoe_minimax::agents::{Agent, MinimaxAgent, RandomAgent};
use tictactoe_minimax::core::{Board, EngineError, Move, Player};
use tictactoe_minimax::games::play_match;
use tictactoe_minimax::rules::{
    apply_move, current_player, initial_board, is_terminal, legal_moves, utility, GameResult,
};
use tictactoe_minimax::search::{minimax, Minimax, MoveOrder, SearchConfig};

fn board(s: &str) -> Board {
    s.parse().expect("test board should parse")
}

/// Play minimax against itself from `start` and return the final board.
fn self_play(start: Board) -> Board {
    let mut b = start;
    while let Some(mv) = minimax(&b).unwrap() {
        assert!(legal_moves(&b).contains(&mv));
        b = apply_move(&b, mv).unwrap();
    }
    b
}

// =============================================================================
// Optimal Play
// =============================================================================

#[test]
fn test_perfect_play_is_a_draw() {
    let end = self_play(initial_board());
    assert!(is_terminal(&end));
    assert_eq!(utility(&end), Ok(0));
}

#[test]
fn test_perfect_play_draws_after_any_opening() {
    for mv in legal_moves(&initial_board()) {
        let end = self_play(apply_move(&initial_board(), mv).unwrap());
        assert_eq!(utility(&end), Ok(0), "opening {mv} should draw");
    }
}

#[test]
fn test_minimax_move_is_legal() {
    let b = board("XO./.X./...");
    assert_eq!(current_player(&b), Ok(Player::O));

    let mv = minimax(&b).unwrap().expect("board is not terminal");
    assert!(legal_moves(&b).contains(&mv));
}

#[test]
fn test_completes_own_line() {
    // X to move with two in the top row.
    assert_eq!(minimax(&board("XX./OO./...")), Ok(Some(Move::new(0, 2))));
}

#[test]
fn test_blocks_forced_loss() {
    // X threatens the main diagonal; O's only drawing move is the corner.
    let b = board("X../.X./O..");
    assert_eq!(current_player(&b), Ok(Player::O));
    assert_eq!(minimax(&b), Ok(Some(Move::new(2, 2))));
}

#[test]
fn test_terminal_board_returns_none() {
    assert_eq!(minimax(&board("XXX/OO./...")), Ok(None));
    assert_eq!(minimax(&board("XOX/XXO/OXO")), Ok(None));
}

#[test]
fn test_invalid_board_is_rejected() {
    assert!(matches!(
        minimax(&board("O........")),
        Err(EngineError::InvalidState { x_count: 0, o_count: 1 })
    ));
}

// =============================================================================
// Tie-Breaking
// =============================================================================

#[test]
fn test_row_major_tie_break_is_deterministic() {
    let first = minimax(&initial_board()).unwrap();
    for _ in 0..3 {
        assert_eq!(minimax(&initial_board()).unwrap(), first);
    }
    assert_eq!(first, Some(Move::new(0, 0)));
}

#[test]
fn test_move_order_only_changes_ties() {
    let mut row_major = Minimax::default();
    let mut center_first =
        Minimax::new(SearchConfig::default().with_move_order(MoveOrder::CenterFirst));

    let b = board("....X....");
    assert_eq!(row_major.best_move(&b), Ok(Some(Move::new(0, 0))));
    assert_eq!(center_first.best_move(&b), Ok(Some(Move::new(0, 0))));
    assert_eq!(row_major.value(&b), center_first.value(&b));

    assert_eq!(center_first.best_move(&initial_board()), Ok(Some(Move::new(1, 1))));
}

#[test]
fn test_scored_moves_cover_all_legal_moves() {
    let b = board("X...O....");
    let scored = Minimax::default().scored_moves(&b).unwrap();

    let moves: Vec<Move> = scored.iter().map(|s| s.mv).collect();
    assert_eq!(moves, legal_moves(&b).to_vec());
    assert!(scored.iter().all(|s| s.score == 0));
}

// =============================================================================
// Against a Random Opponent
// =============================================================================

#[test]
fn test_minimax_never_loses_as_o() {
    for seed in 0..30 {
        let mut x = RandomAgent::new(seed);
        let mut o = MinimaxAgent::default();
        let record = play_match(&mut x, &mut o, initial_board()).unwrap();
        assert!(
            !record.result.is_winner(Player::X),
            "random X beat minimax with seed {seed}"
        );
    }
}

#[test]
fn test_minimax_never_loses_as_x() {
    // Start after X's optimal opening to keep the search small.
    let opened = apply_move(&initial_board(), Move::new(0, 0)).unwrap();
    for seed in 0..30 {
        let mut x = MinimaxAgent::default();
        let mut o = RandomAgent::new(seed);
        let record = play_match(&mut x, &mut o, opened).unwrap();
        assert!(
            !record.result.is_winner(Player::O),
            "random O beat minimax with seed {seed}"
        );
    }
}

#[test]
fn test_minimax_punishes_blunders() {
    // After X corner, O edge, X can force a win.
    let b = board("XO./.../...");
    let mut agent = MinimaxAgent::default();
    let record = play_match(&mut agent, &mut RandomAgent::new(5), b).unwrap();
    assert_eq!(record.result, GameResult::Winner(Player::X));
    assert_eq!(agent.name(), "minimax");
}
