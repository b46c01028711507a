//! Move type and move list.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastleRule;
use super::piece::{Color, Piece};
use super::square::Square;

/// A move: origin, destination, the piece being moved and the en passant flag.
///
/// Castling and promotion are not stored; they are derived from the
/// (piece, from, to) triple. Promotion is always to a queen.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub color: Color,
    pub piece: Piece,
    pub en_passant: bool,
}

impl Move {
    #[inline]
    #[must_use]
    pub const fn new(from: Square, to: Square, color: Color, piece: Piece) -> Self {
        Move {
            from,
            to,
            color,
            piece,
            en_passant: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn en_passant(from: Square, to: Square, color: Color) -> Self {
        Move {
            from,
            to,
            color,
            piece: Piece::Pawn,
            en_passant: true,
        }
    }

    /// The castle rule this move performs, if it is one of the four king transitions
    #[inline]
    #[must_use]
    pub fn castle_rule(self) -> Option<&'static CastleRule> {
        if self.piece != Piece::King {
            return None;
        }
        CastleRule::matching(self.color, self.from, self.to)
    }

    /// Returns true if this move is castling (kingside or queenside)
    #[inline]
    #[must_use]
    pub fn is_castle(self) -> bool {
        self.castle_rule().is_some()
    }

    /// Returns true if a pawn reaches the far rank (auto-queen)
    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        matches!(self.piece, Piece::Pawn) && self.to.0 == self.color.pawn_promotion_rank()
    }

    /// Returns true if a pawn advances two squares from its starting rank
    #[inline]
    #[must_use]
    pub const fn is_double_push(self) -> bool {
        matches!(self.piece, Piece::Pawn)
            && self.from.0 == self.color.pawn_start_rank()
            && self.from.1 == self.to.1
            && self.to.0.abs_diff(self.from.0) == 2
    }

    /// Square of the pawn removed by an en passant capture: the origin rank,
    /// the destination file.
    #[inline]
    #[must_use]
    pub const fn en_passant_victim(self) -> Square {
        Square(self.from.0, self.to.1)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} {} {}{}", self.color, self.piece, self.from, self.to)?;
        if self.is_castle() {
            write!(f, " castle")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        if self.is_promotion() {
            write!(f, "=Q")?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Initial reservation for a move list; orthodox chess peaks at 218 legal moves.
pub const MAX_MOVES: usize = 256;

/// Growable list of moves. Generation reuses one across calls via `clear`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    #[must_use]
    pub fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(MAX_MOVES),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.moves.get(idx).copied()
    }

    /// Find a move by its origin and destination squares
    #[must_use]
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.moves
            .iter()
            .copied()
            .find(|m| m.from == from && m.to == to)
    }

    #[must_use]
    pub fn contains(&self, mv: &Move) -> bool {
        self.moves.contains(mv)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}
