//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_movegen::board::{BoardBuilder, Color, Piece, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! assert_eq!(board.piece_count(Color::White), 2);
//! ```

use super::error::SetupError;
use super::{Board, CastlingRights, Color, Piece, Square};

/// Home squares that carry a castling flag and the piece expected there.
const CASTLING_HOMES: [(Square, Color, Piece); 6] = [
    (Square(0, 4), Color::White, Piece::King),
    (Square(7, 4), Color::Black, Piece::King),
    (Square(0, 0), Color::White, Piece::Rook),
    (Square(0, 7), Color::White, Piece::Rook),
    (Square(7, 0), Color::Black, Piece::Rook),
    (Square(7, 7), Color::Black, Piece::Rook),
];

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling: CastlingRights,
    castling_from_placement: bool,
    en_passant_target: Option<Square>,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder. No castling is available.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling: CastlingRights::none(),
            castling_from_placement: false,
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let board = Board::new();
        let mut builder = Self::new();
        builder.pieces = board.pieces().collect();
        builder.castling = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing whatever stood there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set the castling flags explicitly.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling = rights;
        self.castling_from_placement = false;
        self
    }

    /// Treat any king or rook standing on its home square as unmoved.
    #[must_use]
    pub const fn castling_from_placement(mut self) -> Self {
        self.castling_from_placement = true;
        self
    }

    /// The square a pawn skipped on the previous ply (`e3` after `e2e4`).
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Validate the kings and assemble the board with its threat map.
    pub fn build(self) -> Result<Board, SetupError> {
        for color in Color::BOTH {
            let count = self
                .pieces
                .iter()
                .filter(|(_, c, p)| *c == color && *p == Piece::King)
                .count();
            match count {
                0 => return Err(SetupError::MissingKing { color }),
                1 => {}
                _ => return Err(SetupError::TooManyKings { color, count }),
            }
        }

        let mut board = Board::empty();
        for &(square, color, piece) in &self.pieces {
            board.set_piece(square, color, piece);
        }

        board.castling = if self.castling_from_placement {
            let mut rights = CastlingRights::all();
            for (sq, color, piece) in CASTLING_HOMES {
                if board.piece_at(sq) != Some((color, piece)) {
                    rights.touch(sq);
                }
            }
            rights
        } else {
            self.castling
        };

        if let Some(target) = self.en_passant_target {
            // Rank 3 means White just double-pushed, rank 6 means Black did
            match target.rank() {
                2 => board.en_passant_files[Color::White.index()] |= 1 << target.file(),
                5 => board.en_passant_files[Color::Black.index()] |= 1 << target.file(),
                _ => log::warn!("ignoring en passant target {target} off ranks 3 and 6"),
            }
        }

        board.side_to_move = self.side_to_move;
        board.rebuild_threats();
        Ok(board)
    }
}
