//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece generation and the legality filter
//! - `castling.rs` - Castle preconditions and flag tracking
//! - `en_passant.rs` - En passant eligibility lifecycle
//! - `game_state.rs` - Checkmate, stalemate and insufficient material
//! - `make_unmake.rs` - Simulate/revert and apply over whole games
//! - `perft.rs` - Node counts for standard positions
//! - `proptest.rs` - Property-based tests over random playouts

mod castling;
mod en_passant;
mod perft;

use crate::board::{Board, Color, Move, Square};

/// Play a coordinate move for the side to move, panicking if it is illegal.
pub(super) fn play(board: &mut Board, notation: &str) -> Move {
    let color = board.side_to_move();
    let mv = board
        .parse_move(color, notation)
        .unwrap_or_else(|err| panic!("{notation}: {err}"));
    board.apply_move(mv);
    mv
}

pub(super) fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

pub(super) fn destinations(board: &mut Board, from: &str) -> Vec<String> {
    board
        .legal_destinations(sq(from))
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

pub(super) fn has_move(board: &mut Board, color: Color, notation: &str) -> bool {
    board
        .legal_moves(color)
        .unwrap()
        .iter()
        .any(|mv| mv.to_string() == notation)
}
