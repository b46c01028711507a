pub mod board;
pub mod logging;

pub use board::{Board, BoardError, Color, GameState, Move, MoveList, Piece, Square, ThreatMap};
