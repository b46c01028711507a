use std::fmt;

use super::{Board, Color, Square, ThreatMap};

const BORDER: &str = "  +---+---+---+---+---+---+---+---+";
const FILES: &str = "    a   b   c   d   e   f   g   h";

/// Write an 8x8 grid, rank 8 on top, one character per square.
fn write_grid(f: &mut fmt::Formatter<'_>, cell: impl Fn(Square) -> char) -> fmt::Result {
    writeln!(f, "{BORDER}")?;
    for rank in (0..8).rev() {
        write!(f, "{} |", rank + 1)?;
        for file in 0..8 {
            write!(f, " {} |", cell(Square(rank, file)))?;
        }
        writeln!(f)?;
        writeln!(f, "{BORDER}")?;
    }
    write!(f, "{FILES}")
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |sq| {
            self.piece_at(sq)
                .map_or('.', |(color, piece)| piece.to_fen_char(color))
        })
    }
}

/// `W` white attacks only, `B` black only, `X` both.
impl fmt::Display for ThreatMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, |sq| {
            match (
                self.is_attacked_by(Color::White, sq),
                self.is_attacked_by(Color::Black, sq),
            ) {
                (true, true) => 'X',
                (true, false) => 'W',
                (false, true) => 'B',
                (false, false) => '.',
            }
        })
    }
}
