//! Chess position, legal move generation and game-state classification.
//!
//! The position is a 64-entry mailbox. Every query runs the same pipeline:
//! threat map, pseudo-legal generation, simulate-and-revert legality filter,
//! then classification of the resulting game state.
//!
//! # Example
//! ```
//! use chess_movegen::board::{Board, Color};
//!
//! let mut board = Board::new();
//! let moves = board.legal_moves(Color::White).unwrap();
//! assert_eq!(moves.len(), 20);
//! ```

mod attack_tables;
mod builder;
mod display;
mod error;
mod eval;
mod fen;
mod make_unmake;
mod movegen;
pub mod prelude;
pub mod setup;
mod state;
mod threats;
mod types;

#[cfg(test)]
mod tests;

pub use builder::BoardBuilder;
pub use error::{BoardError, FenError, MoveParseError, SetupError, SquareError};
pub use make_unmake::SimulatedMove;
pub use setup::{parse_piece_list, PieceListSetup};
pub use state::Board;
pub use threats::ThreatMap;
pub use types::{
    Bitboard, BitboardIter, CastleRule, CastlingRights, Color, GameState, Move, MoveList, Piece,
    Square, CASTLE_RULES, MAX_MOVES,
};

pub(crate) use types::bit_for_square;
