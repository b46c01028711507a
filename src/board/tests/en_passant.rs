//! En passant tests.

use super::{play, sq};
use crate::board::{Board, Color, MoveList};

#[test]
fn test_double_push_grants_one_capture() {
    let mut board = Board::try_from_fen("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1").unwrap();
    let before = board.legal_moves(Color::Black).unwrap();
    assert_eq!(before.len(), 6);

    play(&mut board, "d2d4");
    let after = board.legal_moves(Color::Black).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    let extra: Vec<_> = after.iter().filter(|m| m.en_passant).collect();
    assert_eq!(extra.len(), 1);
    assert_eq!(extra[0].from, sq("e4"));
    assert_eq!(extra[0].to, sq("d3"));
    assert_eq!(extra[0].en_passant_victim(), sq("d4"));
}

#[test]
fn test_eligibility_lasts_one_ply() {
    let mut board = Board::try_from_fen("4k3/8/8/8/4p3/8/3P4/4K3 w - - 0 1").unwrap();
    play(&mut board, "d2d4");
    play(&mut board, "e8d8");
    play(&mut board, "e1e2");
    let moves = board.legal_moves(Color::Black).unwrap();
    assert!(moves.iter().all(|m| !m.en_passant));
    assert_eq!(board.en_passant_files(Color::White), 0);
}

#[test]
fn test_single_push_grants_nothing() {
    let mut board = Board::try_from_fen("4k3/8/8/8/8/4p3/3P4/4K3 w - - 0 1").unwrap();
    play(&mut board, "d2d3");
    assert_eq!(board.en_passant_files(Color::White), 0);
    let moves = board.legal_moves(Color::Black).unwrap();
    assert!(moves.iter().all(|m| !m.en_passant));
}

#[test]
fn test_capture_is_applied() {
    let mut board = Board::new();
    for mv in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        play(&mut board, mv);
    }
    let mv = play(&mut board, "e5d6");
    assert!(mv.en_passant);
    assert!(board.is_empty(sq("d5")));
    assert!(board.is_empty(sq("e5")));
    assert_eq!(board.piece_count(Color::Black), 15);
}

#[test]
fn test_capture_exposing_king_on_rank_is_illegal() {
    let mut board = Board::try_from_fen("8/8/8/KPp4r/8/8/8/4k3 w - c6 0 1").unwrap();
    let mut pseudo = MoveList::new();
    board.generate_pseudo_legal_into(Color::White, &mut pseudo);
    assert!(pseudo.iter().any(|m| m.en_passant));

    let legal = board.legal_moves(Color::White).unwrap();
    assert!(legal.iter().all(|m| !m.en_passant));
}

#[test]
fn test_flag_without_adjacent_pawn_grants_nothing() {
    // The flag says d-file, but no black pawn stands on d5
    let mut board = Board::try_from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1").unwrap();
    let moves = board.legal_moves(Color::White).unwrap();
    assert!(moves.iter().all(|m| !m.en_passant));
}
