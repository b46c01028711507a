//! Threat map: the squares each color attacks in the current position.
//!
//! Two entry points exist. [`ThreatMap::from_board`] materialises both
//! bitmaps and is rebuilt whenever the position of record changes; king steps
//! and castling are checked against it. The greedy scan walks the attacker's
//! pieces and stops at the first one that reaches the target, which is what
//! the legality filter uses after every simulated move.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::attack_tables::{
    BISHOP_DIRECTIONS, KING_ATTACKS, KNIGHT_ATTACKS, PAWN_ATTACKS, ROOK_DIRECTIONS,
};
use super::error::BoardError;
use super::{bit_for_square, Bitboard, Board, Color, Piece, Square};

/// Per-color attack bitmaps. A bit is set when at least one piece of that
/// color attacks the square, whether or not a friendly piece stands there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThreatMap {
    white: u64,
    black: u64,
}

impl ThreatMap {
    /// Build both bitmaps from scratch.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut map = ThreatMap::default();
        for (from, color, piece) in board.pieces() {
            let attacks = piece_attacks(board, from, color, piece).0;
            match color {
                Color::White => map.white |= attacks,
                Color::Black => map.black |= attacks,
            }
        }
        map
    }

    #[inline]
    #[must_use]
    pub fn attacks(&self, color: Color) -> Bitboard {
        match color {
            Color::White => Bitboard(self.white),
            Color::Black => Bitboard(self.black),
        }
    }

    /// True when `color` attacks `sq`.
    #[inline]
    #[must_use]
    pub fn is_attacked_by(&self, color: Color, sq: Square) -> bool {
        self.attacks(color).contains(sq)
    }

    #[inline]
    #[must_use]
    pub fn is_white_threat(&self, sq: Square) -> bool {
        self.is_attacked_by(Color::White, sq)
    }

    #[inline]
    #[must_use]
    pub fn is_black_threat(&self, sq: Square) -> bool {
        self.is_attacked_by(Color::Black, sq)
    }
}

/// Squares attacked by one piece. Pawns attack only their two forward
/// diagonals; slider rays include the first occupied square and stop there.
pub(crate) fn piece_attacks(board: &Board, from: Square, color: Color, piece: Piece) -> Bitboard {
    let idx = from.as_index();
    match piece {
        Piece::Pawn => Bitboard(PAWN_ATTACKS[color.index()][idx]),
        Piece::Knight => Bitboard(KNIGHT_ATTACKS[idx]),
        Piece::King => Bitboard(KING_ATTACKS[idx]),
        Piece::Bishop | Piece::Rook | Piece::Queen => {
            let mut attacks = Bitboard::EMPTY;
            for (dr, df) in slider_directions(piece) {
                let mut sq = from;
                while let Some(next) = sq.offset(dr, df) {
                    attacks.set(next);
                    if !board.is_empty(next) {
                        break;
                    }
                    sq = next;
                }
            }
            attacks
        }
    }
}

pub(crate) fn slider_directions(piece: Piece) -> impl Iterator<Item = (isize, isize)> {
    let straight: &[(isize, isize)] = if piece.slides_straight() {
        &ROOK_DIRECTIONS
    } else {
        &[]
    };
    let diagonal: &[(isize, isize)] = if piece.slides_diagonally() {
        &BISHOP_DIRECTIONS
    } else {
        &[]
    };
    straight.iter().chain(diagonal.iter()).copied()
}

impl Board {
    /// Greedy check test: scan the opponent's pieces and return as soon as one
    /// of them attacks the king of `color`.
    pub fn is_in_check_greedy(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        Ok(self.is_attacked_greedy(king, color.opponent()))
    }

    /// `is_in_check_greedy(Color::White)`
    pub fn is_white_in_check(&self) -> Result<bool, BoardError> {
        self.is_in_check_greedy(Color::White)
    }

    /// `is_in_check_greedy(Color::Black)`
    pub fn is_black_in_check(&self) -> Result<bool, BoardError> {
        self.is_in_check_greedy(Color::Black)
    }

    /// Check status from the threat map of the current position.
    pub fn is_in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king = self.king_square(color)?;
        Ok(self.threats.is_attacked_by(color.opponent(), king))
    }

    /// True when any piece of `attacker` reaches `target`, without building
    /// a threat map. Reads only the squares, so it stays valid while a move
    /// is being simulated.
    pub(crate) fn is_attacked_greedy(&self, target: Square, attacker: Color) -> bool {
        let target_bit = bit_for_square(target).0;
        for (from, color, piece) in self.pieces() {
            if color != attacker {
                continue;
            }
            let idx = from.as_index();
            let hit = match piece {
                Piece::Pawn => PAWN_ATTACKS[color.index()][idx] & target_bit != 0,
                Piece::Knight => KNIGHT_ATTACKS[idx] & target_bit != 0,
                Piece::King => KING_ATTACKS[idx] & target_bit != 0,
                Piece::Bishop | Piece::Rook | Piece::Queen => self.ray_reaches(from, target, piece),
            };
            if hit {
                return true;
            }
        }
        false
    }

    fn ray_reaches(&self, from: Square, target: Square, piece: Piece) -> bool {
        for (dr, df) in slider_directions(piece) {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, df) {
                if next == target {
                    return true;
                }
                if !self.is_empty(next) {
                    break;
                }
                sq = next;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardBuilder;

    #[test]
    fn test_start_position_threats() {
        let board = Board::new();
        let threats = board.threats();
        // Every third-rank square is covered by White's pawns
        for file in 0..8 {
            assert!(threats.is_white_threat(Square(2, file)));
            assert!(threats.is_black_threat(Square(5, file)));
        }
        // Pawn pushes are not attacks and nothing reaches the middle
        assert!(!threats.is_white_threat(Square(3, 4)));
        assert!(!threats.is_black_threat(Square(4, 4)));
        // Pieces defend their own neighbours
        assert!(threats.is_white_threat(Square(1, 4)));
        assert!(!threats.is_white_threat(Square(0, 0)));
    }

    #[test]
    fn test_ray_includes_blocker_then_stops() {
        let board = BoardBuilder::new()
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(0, 3), Color::Black, Piece::Knight)
            .piece(Square(0, 7), Color::White, Piece::King)
            .piece(Square(7, 7), Color::Black, Piece::King)
            .build()
            .unwrap();
        let white = board.threats().attacks(Color::White);
        assert!(white.contains(Square(0, 1)));
        assert!(white.contains(Square(0, 2)));
        assert!(white.contains(Square(0, 3)));
        assert!(!white.contains(Square(0, 4)));
        assert!(white.contains(Square(7, 0)));
    }

    #[test]
    fn test_greedy_scan_agrees_with_threat_map() {
        let board = Board::try_from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        )
        .unwrap();
        for color in Color::BOTH {
            for sq in Square::all() {
                assert_eq!(
                    board.is_attacked_greedy(sq, color),
                    board.threats().is_attacked_by(color, sq),
                    "{color} attack on {sq}"
                );
            }
        }
    }

    #[test]
    fn test_check_queries() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/4K2r w - - 0 1").unwrap();
        assert_eq!(board.is_in_check(Color::White), Ok(true));
        assert_eq!(board.is_white_in_check(), Ok(true));
        assert_eq!(board.is_black_in_check(), Ok(false));
        assert_eq!(board.is_in_check(Color::Black), Ok(false));
    }

    #[test]
    fn test_missing_king_is_a_fault_not_check() {
        let mut board = Board::new();
        board.squares[Square(7, 4).as_index()] = None;
        board.rebuild_threats();
        assert_eq!(
            board.is_in_check(Color::Black),
            Err(BoardError::MissingKing {
                color: Color::Black
            })
        );
        assert_eq!(
            board.is_black_in_check(),
            Err(BoardError::MissingKing {
                color: Color::Black
            })
        );
        assert_eq!(board.is_in_check(Color::White), Ok(false));
    }
}
