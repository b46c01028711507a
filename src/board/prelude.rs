//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_movegen::board::prelude::*;
//!
//! let mut board = Board::new();
//! assert_eq!(board.legal_moves(Color::White).unwrap().len(), 20);
//! assert_eq!(board.game_state(), GameState::Ongoing);
//! ```

pub use super::{
    Board, BoardBuilder, BoardError, CastlingRights, Color, FenError, GameState, Move, MoveList,
    MoveParseError, Piece, SetupError, Square, SquareError, ThreatMap,
};
