use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Pushes, captures and en passant for the pawn on `from`. Promotions are
    /// emitted as plain moves; the applicator turns them into queens.
    pub(crate) fn generate_pawn_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                moves.push(Move::new(from, one, color, Piece::Pawn));
                if from.rank() == color.pawn_start_rank() {
                    if let Some(two) = one.offset(dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::new(from, two, color, Piece::Pawn));
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            match self.color_at(target) {
                Some(c) if c != color => {
                    moves.push(Move::new(from, target, color, Piece::Pawn));
                }
                Some(_) => {}
                None => {
                    if self.can_capture_en_passant(from, target, color) {
                        moves.push(Move::en_passant(from, target, color));
                    }
                }
            }
        }
    }

    /// The opponent flagged a double push on the target file last ply and its
    /// pawn is still beside us.
    fn can_capture_en_passant(&self, from: Square, target: Square, color: Color) -> bool {
        let enemy = color.opponent();
        from.rank() == color.en_passant_rank()
            && self.en_passant_open(enemy, target.file())
            && self.piece_at(Square(from.rank(), target.file()))
                == Some((enemy, Piece::Pawn))
    }
}
