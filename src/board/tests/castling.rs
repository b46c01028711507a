//! Castling tests.

use super::{has_move, play};
use crate::board::{Board, Color, CASTLE_RULES};

const CASTLES: &str = "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1";

#[test]
fn test_all_four_castles_available() {
    let mut board = Board::try_from_fen(CASTLES).unwrap();
    assert!(has_move(&mut board, Color::White, "e1g1"));
    assert!(has_move(&mut board, Color::White, "e1c1"));
    assert!(has_move(&mut board, Color::Black, "e8g8"));
    assert!(has_move(&mut board, Color::Black, "e8c8"));

    let moves = board.legal_moves(Color::White).unwrap();
    assert_eq!(moves.iter().filter(|m| m.is_castle()).count(), 2);
    for rule in CASTLE_RULES.iter().filter(|r| r.color == Color::White) {
        assert!(board.castle_allowed(rule));
    }
}

#[test]
fn test_attacked_transit_square_forbids_castle() {
    let mut board = Board::try_from_fen("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(!has_move(&mut board, Color::White, "e1g1"));
    assert!(has_move(&mut board, Color::White, "e1c1"));
}

#[test]
fn test_attacked_destination_forbids_castle() {
    let mut board = Board::try_from_fen("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(has_move(&mut board, Color::White, "e1g1"));
    assert!(!has_move(&mut board, Color::White, "e1c1"));
}

#[test]
fn test_attacked_b1_does_not_matter() {
    let mut board = Board::try_from_fen("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert!(has_move(&mut board, Color::White, "e1c1"));
    assert!(has_move(&mut board, Color::White, "e1g1"));
}

#[test]
fn test_occupied_path_forbids_castle() {
    let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/RN2K1NR w KQ - 0 1").unwrap();
    assert!(!has_move(&mut board, Color::White, "e1g1"));
    assert!(!has_move(&mut board, Color::White, "e1c1"));

    // b1 must be empty too, even though the king never crosses it
    let mut board = Board::try_from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
    assert!(!has_move(&mut board, Color::White, "e1c1"));
    assert!(has_move(&mut board, Color::White, "e1g1"));
}

#[test]
fn test_no_castling_out_of_check() {
    let mut board = Board::try_from_fen("4k3/8/8/4r3/8/8/8/R3K2R w KQ - 0 1").unwrap();
    assert_eq!(board.is_in_check(Color::White), Ok(true));
    let moves = board.legal_moves(Color::White).unwrap();
    assert!(moves.iter().all(|m| !m.is_castle()));
}

#[test]
fn test_moved_rooks_lose_their_castle() {
    let mut board = Board::try_from_fen(CASTLES).unwrap();
    play(&mut board, "h1h2");
    play(&mut board, "a8a7");
    play(&mut board, "h2h1");
    play(&mut board, "a7a8");

    assert!(!has_move(&mut board, Color::White, "e1g1"));
    assert!(has_move(&mut board, Color::White, "e1c1"));
    assert!(has_move(&mut board, Color::Black, "e8g8"));
    assert!(!has_move(&mut board, Color::Black, "e8c8"));
}

#[test]
fn test_moved_king_loses_both_castles() {
    let mut board = Board::try_from_fen(CASTLES).unwrap();
    play(&mut board, "e1f1");
    play(&mut board, "e8d8");
    play(&mut board, "f1e1");
    play(&mut board, "d8e8");

    let moves = board.legal_moves(Color::White).unwrap();
    assert!(moves.iter().all(|m| !m.is_castle()));
    let moves = board.legal_moves(Color::Black).unwrap();
    assert!(moves.iter().all(|m| !m.is_castle()));
    assert!(board.castling_rights().king_moved(Color::White));
    assert!(board.to_fen().contains(" w - - "));
}

#[test]
fn test_missing_rook_blocks_castle_even_with_flag() {
    let mut board = Board::try_from_fen("r3k3/8/8/8/8/8/8/R3K3 w KQq - 0 1").unwrap();
    assert!(!has_move(&mut board, Color::White, "e1g1"));
    assert!(has_move(&mut board, Color::White, "e1c1"));
}
