//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - (rank, file) square with algebraic notation
//! - `Bitboard` - 64-bit square set used by the threat map
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` and `CastleRule` - castling state and fixed transitions
//! - `GameState` - classification of a generated position

mod bitboard;
mod castling;
mod game_state;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastleRule, CastlingRights, CASTLE_RULES};
pub use game_state::GameState;
pub use moves::{Move, MoveList, MAX_MOVES};
pub use piece::{Color, Piece};
pub use square::Square;

pub(crate) use bitboard::bit_for_square;
