//! Error types for board construction and queries.

use std::fmt;

use super::{Color, Piece, Square};

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few parts (needs at least 4)
    TooFewParts { found: usize },
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
    /// Invalid rank in position string
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Placement parsed but the position is unusable
    Setup(SetupError),
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 parts, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}' in FEN")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::Setup(err) => write!(f, "Invalid FEN position: {err}"),
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::Setup(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SetupError> for FenError {
    fn from(err: SetupError) -> Self {
        FenError::Setup(err)
    }
}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for building a position from pieces or the piece-list grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A color has no king
    MissingKing { color: Color },
    /// A color has more than one king
    TooManyKings { color: Color, count: usize },
    /// Two pieces were placed on the same square
    DuplicateSquare { square: Square },
    /// A piece token such as `Rf1` could not be read
    InvalidToken { token: String },
    /// A required `WHITE:` / `BLACK:` / `PIECE TO MOVE:` section is absent
    MissingSection { section: &'static str },
    /// The piece to move is not on the board
    PieceToMoveNotFound { piece: Piece, square: Square },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::MissingKing { color } => write!(f, "{color} has no king"),
            SetupError::TooManyKings { color, count } => {
                write!(f, "{color} has {count} kings, expected exactly one")
            }
            SetupError::DuplicateSquare { square } => {
                write!(f, "Square {square} is occupied twice")
            }
            SetupError::InvalidToken { token } => write!(f, "Invalid piece token '{token}'"),
            SetupError::MissingSection { section } => {
                write!(f, "Missing '{section}' section")
            }
            SetupError::PieceToMoveNotFound { piece, square } => {
                write!(f, "No {piece} on {square} to move")
            }
        }
    }
}

impl std::error::Error for SetupError {}

/// Invariant faults detected while querying a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The king of `color` is not on the board, so check cannot be decided
    MissingKing { color: Color },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::MissingKing { color } => {
                write!(f, "No {color} king on the board")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// Error type for coordinate move parsing (`e2e4`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has wrong length (must be 4 or 5)
    InvalidLength { len: usize },
    /// Invalid square notation
    InvalidSquare { notation: String },
    /// Well formed, but not a legal move in this position
    IllegalMove { notation: String },
    /// Legal moves could not be generated
    Board(BoardError),
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, got {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square in move '{notation}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "Illegal move '{notation}'")
            }
            MoveParseError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for MoveParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveParseError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for MoveParseError {
    fn from(err: BoardError) -> Self {
        MoveParseError::Board(err)
    }
}
