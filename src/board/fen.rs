use super::error::{FenError, MoveParseError};
use super::{Board, BoardBuilder, CastlingRights, Color, Move, Piece, Square, CASTLE_RULES};

const CASTLING_CHARS: [char; 4] = ['K', 'Q', 'k', 'q'];

impl Board {
    /// Parse a board position from FEN notation.
    ///
    /// Only placement, side to move, castling and en passant are read; the
    /// move counters are accepted and ignored. A missing castling letter marks
    /// that rook as moved, and a side with no letters at all has its king
    /// marked as moved.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut builder = BoardBuilder::new();

        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    file += skip as usize;
                    continue;
                }
                let color = if c.is_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                if file >= 8 {
                    return Err(FenError::TooManyFiles {
                        rank: rank_idx,
                        files: file + 1,
                    });
                }
                builder = builder.piece(Square(7 - rank_idx, file), color, piece);
                file += 1;
            }
        }

        builder = match parts[1] {
            "w" => builder.side_to_move(Color::White),
            "b" => builder.side_to_move(Color::Black),
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut present = [false; 4];
        for c in parts[2].chars() {
            match CASTLING_CHARS.iter().position(|&k| k == c) {
                Some(idx) => present[idx] = true,
                None if c == '-' => {}
                None => return Err(FenError::InvalidCastling { char: c }),
            }
        }
        let mut rights = CastlingRights::all();
        for (rule, &has) in CASTLE_RULES.iter().zip(present.iter()) {
            if !has {
                rights.revoke(rule);
            }
        }
        for color in Color::BOTH {
            if !rights.has(color, true) && !rights.has(color, false) {
                rights.revoke_king(color);
            }
        }
        builder = builder.castling(rights);

        if parts[3] != "-" {
            let invalid = || FenError::InvalidEnPassant {
                found: parts[3].to_string(),
            };
            let target: Square = parts[3].parse().map_err(|_| invalid())?;
            if target.rank() != 2 && target.rank() != 5 {
                return Err(invalid());
            }
            builder = builder.en_passant(target);
        }

        Ok(builder.build()?)
    }

    /// Convert the board position to FEN notation. Move counters are always
    /// written as `0 1`.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.piece_at(Square(rank, file)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling: String = CASTLE_RULES
            .iter()
            .zip(CASTLING_CHARS)
            .filter(|(rule, _)| self.castling.allows(rule))
            .map(|(_, c)| c)
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant_target()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!("{} {active} {castling} {ep} 0 1", rows.join("/"))
    }

    /// The square skipped by the double push of the side that just moved.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        let mover = self.side_to_move.opponent();
        let flags = self.en_passant_files(mover);
        if flags == 0 {
            return None;
        }
        let rank = match mover {
            Color::White => 2,
            Color::Black => 5,
        };
        Some(Square(rank, flags.trailing_zeros() as usize))
    }

    /// Find the legal move for `color` given in coordinate notation
    /// (`e2e4`). A trailing promotion letter is accepted only when it is `q`.
    ///
    /// # Example
    /// ```
    /// use chess_movegen::board::{Board, Color};
    ///
    /// let mut board = Board::new();
    /// let mv = board.parse_move(Color::White, "e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, color: Color, notation: &str) -> Result<Move, MoveParseError> {
        if notation.len() != 4 && notation.len() != 5 {
            return Err(MoveParseError::InvalidLength {
                len: notation.len(),
            });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: notation.to_string(),
        };
        let from: Square = notation
            .get(0..2)
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;
        let to: Square = notation
            .get(2..4)
            .ok_or_else(invalid)?
            .parse()
            .map_err(|_| invalid())?;

        let moves = self.legal_moves(color)?;
        let mv = moves.find(from, to).ok_or_else(|| MoveParseError::IllegalMove {
            notation: notation.to_string(),
        })?;

        match notation.get(4..) {
            Some("") | None => Ok(mv),
            Some("q") | Some("Q") if mv.is_promotion() => Ok(mv),
            Some(_) => Err(MoveParseError::IllegalMove {
                notation: notation.to_string(),
            }),
        }
    }
}
