use super::super::attack_tables::KING_ATTACKS;
use super::super::{Bitboard, Board, CastleRule, Color, Move, MoveList, Piece, Square};

impl Board {
    /// King steps onto squares the opponent does not attack, then castles.
    pub(crate) fn generate_king_moves(&self, from: Square, color: Color, moves: &mut MoveList) {
        let enemy_attacks = self.threats.attacks(color.opponent());
        let targets = Bitboard(KING_ATTACKS[from.as_index()]) & !enemy_attacks;
        for to in targets.iter() {
            if !self.is_color(to, color) {
                moves.push(Move::new(from, to, color, Piece::King));
            }
        }

        for rule in CastleRule::for_color(color) {
            if from == rule.king_from && self.castle_allowed(rule) {
                moves.push(Move::new(rule.king_from, rule.king_to, color, Piece::King));
            }
        }
    }

    /// Every castle precondition: flags, rook present, path clear and no
    /// attacked square on the king's walk (including where it starts).
    pub(crate) fn castle_allowed(&self, rule: &CastleRule) -> bool {
        let enemy = rule.color.opponent();
        self.castling.allows(rule)
            && self.piece_at(rule.king_from) == Some((rule.color, Piece::King))
            && self.piece_at(rule.rook_from) == Some((rule.color, Piece::Rook))
            && rule.between.iter().all(|&sq| self.is_empty(sq))
            && rule
                .king_path
                .iter()
                .all(|&sq| !self.threats.is_attacked_by(enemy, sq))
    }
}
