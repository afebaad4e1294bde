//! Integration tests for full player/engine turns.

use plychess_core::Board;
use plychess_session::{Game, Outcome, SessionConfig, SessionError};

fn config(depth: u8) -> SessionConfig {
    SessionConfig { depth }
}

#[test]
fn capturing_the_king_wins_for_the_player() {
    let mut game = Game::from_placement(config(2), "4k3/8/8/8/8/8/4Q3/4K3 -").unwrap();
    let turn = game.play("e2e8").unwrap();
    assert_eq!(turn.outcome, Outcome::PlayerWins);
    assert_eq!(turn.reply, None);
    assert!(game.board().is_terminal());

    assert!(matches!(game.play("e1e2"), Err(SessionError::GameOver)));
}

#[test]
fn engine_takes_an_exposed_king() {
    let mut game = Game::from_placement(config(2), "4k3/8/8/8/8/8/3q3P/4K3 -").unwrap();
    let turn = game.play("h2h3").unwrap();
    assert_eq!(turn.reply.map(|m| m.to_coordinate()).as_deref(), Some("d2e1"));
    assert_eq!(turn.outcome, Outcome::EngineWins);
    assert!(matches!(game.play("h3h4"), Err(SessionError::GameOver)));
}

#[test]
fn engine_without_moves_is_stalemate() {
    // Black's king and pawns are all blocked by each other.
    let mut game = Game::from_placement(config(3), "K7/8/8/8/8/8/6pp/6pk -").unwrap();
    let turn = game.play("a8b8").unwrap();
    assert_eq!(turn.reply, None);
    assert_eq!(turn.outcome, Outcome::Stalemate);
    assert_eq!(game.outcome(), Outcome::Stalemate);
}

#[test]
fn castling_through_the_session_moves_the_rook() {
    let mut game = Game::from_placement(config(1), "r3k2r/pppppppp/8/8/8/8/PPPPPPPP/R3K2R KQkq").unwrap();
    let turn = game.play("e1g1").unwrap();
    assert_eq!(turn.outcome, Outcome::InProgress);
    let cells = game.snapshot();
    assert_eq!(cells[7][6], Some('K'));
    assert_eq!(cells[7][5], Some('R'));
    assert_eq!(cells[7][7], None);
}

#[test]
fn promotion_through_the_session() {
    let mut game = Game::from_placement(config(1), "4k3/P7/8/8/8/8/8/4K3 -").unwrap();
    let turn = game.play("a7a8").unwrap();
    assert!(turn.player_move.is_promotion());
    assert_eq!(game.snapshot()[0][0], Some('Q'));
}

#[test]
fn several_turns_keep_the_game_going() {
    let mut game = Game::new(config(2));
    for mv in ["e2e4", "g1f3", "f1c4"] {
        let turn = match game.play(mv) {
            Ok(turn) => turn,
            // The engine's reply may have blocked or taken the piece.
            Err(SessionError::IllegalMove { .. }) => continue,
            Err(e) => panic!("{mv}: {e}"),
        };
        assert!(turn.reply.is_some());
        if turn.outcome.is_over() {
            break;
        }
    }
    assert_ne!(*game.board(), Board::starting_position());
}

#[test]
fn malformed_placement_is_reported() {
    let err = Game::from_placement(config(1), "8/8/8").unwrap_err();
    assert!(matches!(err, SessionError::Placement { .. }));
}
