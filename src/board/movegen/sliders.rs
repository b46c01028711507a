use super::super::threats::slider_directions;
use super::super::{Board, Color, Move, MoveList, Piece, Square};

impl Board {
    /// Ray moves for a bishop, rook or queen. Each ray stops before a friendly
    /// piece and on an enemy one.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        piece: Piece,
        moves: &mut MoveList,
    ) {
        for (dr, df) in slider_directions(piece) {
            let mut sq = from;
            while let Some(next) = sq.offset(dr, df) {
                match self.color_at(next) {
                    None => moves.push(Move::new(from, next, color, piece)),
                    Some(c) => {
                        if c != color {
                            moves.push(Move::new(from, next, color, piece));
                        }
                        break;
                    }
                }
                sq = next;
            }
        }
    }
}
