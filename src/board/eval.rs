use super::{Board, Color};

impl Board {
    /// Flat material count, White minus Black (P=1 N=3 B=3 R=5 Q=9 K=1000).
    #[must_use]
    pub fn material_balance(&self) -> i32 {
        self.pieces()
            .map(|(_, color, piece)| match color {
                Color::White => piece.value(),
                Color::Black => -piece.value(),
            })
            .sum()
    }

    /// Material total of one side, kings included.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.pieces()
            .filter(|(_, c, _)| *c == color)
            .map(|(_, _, piece)| piece.value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_balanced() {
        let board = Board::new();
        assert_eq!(board.material_balance(), 0);
        assert_eq!(board.material(Color::White), 8 + 6 + 6 + 10 + 9 + 1000);
    }

    #[test]
    fn test_extra_rook() {
        let board = Board::try_from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        assert_eq!(board.material_balance(), 5);
        assert_eq!(board.material(Color::Black), 1000);
    }
}
