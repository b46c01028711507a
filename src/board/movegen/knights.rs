use super::super::attack_tables::KNIGHT_ATTACKS;
use super::super::{Bitboard, Board, Color, Move, MoveList, Piece, Square};

impl Board {
    pub(crate) fn generate_knight_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let targets = Bitboard(KNIGHT_ATTACKS[from.as_index()]);
        for to in targets.iter() {
            if !self.is_color(to, color) {
                moves.push(Move::new(from, to, color, Piece::Knight));
            }
        }
    }
}
