use super::error::{BoardError, SquareError};
use super::threats::ThreatMap;
use super::{CastlingRights, Color, GameState, Piece, Square};

/// The position of record: a 64-square mailbox plus castling and en passant
/// state, the last classification and the threat map built from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) castling: CastlingRights,
    /// Per color, bit `f` is set when a pawn of that color advanced two
    /// squares on file `f` during the previous ply.
    pub(crate) en_passant_files: [u8; 2],
    pub(crate) side_to_move: Color,
    pub(crate) game_state: GameState,
    pub(crate) threats: ThreatMap,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Board {
    /// The standard starting position with White to move.
    pub fn new() -> Self {
        let mut board = Board::empty();
        for (file, piece) in BACK_RANK.iter().enumerate() {
            board.set_piece(Square(0, file), Color::White, *piece);
            board.set_piece(Square(7, file), Color::Black, *piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }
        board.castling = CastlingRights::all();
        board.rebuild_threats();
        board
    }

    /// An empty board with every castle forbidden. Callers place pieces and
    /// must rebuild the threat map before querying.
    pub(crate) fn empty() -> Self {
        Board {
            squares: [None; 64],
            castling: CastlingRights::none(),
            en_passant_files: [0; 2],
            side_to_move: Color::White,
            game_state: GameState::Ongoing,
            threats: ThreatMap::default(),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.as_index()] = Some((color, piece));
    }

    pub(crate) fn rebuild_threats(&mut self) {
        self.threats = ThreatMap::from_board(self);
        log::trace!(
            "threat map rebuilt: white {:#018x} black {:#018x}",
            self.threats.attacks(Color::White).0,
            self.threats.attacks(Color::Black).0
        );
    }

    /// Contents of a square, `None` when empty.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.as_index()]
    }

    /// Contents of the square at (file, rank), `None` when empty or off the board.
    #[must_use]
    pub fn piece_at_coords(&self, file: usize, rank: usize) -> Option<(Color, Piece)> {
        Square::new(rank, file).and_then(|sq| self.piece_at(sq))
    }

    /// Get just the piece kind on a square (without color)
    #[inline]
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[inline]
    #[must_use]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.as_index()].is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_color(&self, sq: Square, color: Color) -> bool {
        self.color_at(sq) == Some(color)
    }

    /// Classification recorded by the most recent generation call.
    #[must_use]
    pub fn game_state(&self) -> GameState {
        self.game_state
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling
    }

    /// En passant file mask for pawns of `color` (bit `f` = file `f`).
    #[must_use]
    pub fn en_passant_files(&self, color: Color) -> u8 {
        self.en_passant_files[color.index()]
    }

    #[inline]
    pub(crate) fn en_passant_open(&self, color: Color, file: usize) -> bool {
        self.en_passant_files[color.index()] & (1 << file) != 0
    }

    /// Attack bitmaps for the current position.
    #[must_use]
    pub fn threats(&self) -> &ThreatMap {
        &self.threats
    }

    /// Iterate over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(idx, sq)| sq.map(|(color, piece)| (Square::from_index(idx), color, piece)))
    }

    #[must_use]
    pub fn piece_count(&self, color: Color) -> usize {
        self.pieces().filter(|(_, c, _)| *c == color).count()
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, c, p)| *c == color && *p == Piece::King)
            .map(|(sq, _, _)| sq)
    }

    /// Square of the king of `color`, scanning a1..h8.
    pub fn king_square(&self, color: Color) -> Result<Square, BoardError> {
        self.find_king(color).ok_or_else(|| {
            log::error!("no {color} king on the board");
            BoardError::MissingKing { color }
        })
    }

    /// Only the two kings remain.
    #[must_use]
    pub fn is_insufficient_material(&self) -> bool {
        self.piece_count(Color::White) == 1 && self.piece_count(Color::Black) == 1
    }

    /// Algebraic name of a square index, `a1`..`h8`.
    pub fn algebraic(index: usize) -> Result<String, SquareError> {
        Square::try_from((index / 8, index % 8)).map(|sq| sq.to_string())
    }

    /// Algebraic name of (file, rank), both 0-based.
    pub fn algebraic_coords(file: usize, rank: usize) -> Result<String, SquareError> {
        Square::try_from((rank, file)).map(|sq| sq.to_string())
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
