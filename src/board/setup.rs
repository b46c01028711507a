//! Position setup from a plain piece list.
//!
//! ```text
//! WHITE: Rf1, Kg1, Pf2, Ph2, Pg3 BLACK: Kb8, Ne8, Pa7, Pb7, Pc7, Ra5 PIECE TO MOVE: Rf1
//! ```
//!
//! Each token is a piece letter (`K Q R B N P`) followed by a square. Section
//! markers are matched case-insensitively and may appear in any order.
//! Kings and rooks on their home squares may still castle; there is no en
//! passant.

use super::error::{BoardError, SetupError};
use super::{Board, BoardBuilder, Color, Piece, Square};

const WHITE: &str = "WHITE:";
const BLACK: &str = "BLACK:";
const PIECE_TO_MOVE: &str = "PIECE TO MOVE:";

/// A parsed piece list: the position plus the piece whose moves are wanted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceListSetup {
    pub board: Board,
    pub color: Color,
    pub piece: Piece,
    pub square: Square,
}

impl PieceListSetup {
    /// `LEGAL MOVES FOR Rf1: e1, d1, c1, b1, a1`
    pub fn legal_moves_line(&mut self) -> Result<String, BoardError> {
        let targets = self.board.legal_destinations(self.square)?;
        let list: Vec<String> = targets.iter().map(ToString::to_string).collect();
        Ok(format!(
            "LEGAL MOVES FOR {}{}: {}",
            self.piece.to_char().to_ascii_uppercase(),
            self.square,
            list.join(", ")
        ))
    }
}

/// Parse the piece-list grammar. The side of the piece to move is also the
/// side to move.
pub fn parse_piece_list(input: &str) -> Result<PieceListSetup, SetupError> {
    let white = section(input, WHITE)?;
    let black = section(input, BLACK)?;
    let target = section(input, PIECE_TO_MOVE)?;

    let mut builder = BoardBuilder::new().castling_from_placement();
    let mut seen: Vec<Square> = Vec::new();
    for (color, body) in [(Color::White, white), (Color::Black, black)] {
        for token in tokens(body) {
            let (piece, square) = parse_token(token)?;
            if seen.contains(&square) {
                return Err(SetupError::DuplicateSquare { square });
            }
            seen.push(square);
            builder = builder.piece(square, color, piece);
        }
    }

    let mut target_tokens = tokens(target);
    let token = target_tokens.next().ok_or(SetupError::MissingSection {
        section: PIECE_TO_MOVE,
    })?;
    if let Some(extra) = target_tokens.next() {
        return Err(SetupError::InvalidToken {
            token: extra.to_string(),
        });
    }
    let (piece, square) = parse_token(token)?;

    let mut board = builder.build()?;
    let color = match board.piece_at(square) {
        Some((color, found)) if found == piece => color,
        _ => return Err(SetupError::PieceToMoveNotFound { piece, square }),
    };

    board.side_to_move = color;
    log::debug!("piece list parsed: {} pieces, {piece} on {square} to move", seen.len());

    Ok(PieceListSetup {
        board,
        color,
        piece,
        square,
    })
}

/// Text after `marker` up to the next marker or the end of input.
fn section<'a>(input: &'a str, marker: &'static str) -> Result<&'a str, SetupError> {
    let upper = input.to_ascii_uppercase();
    let begin = upper
        .find(marker)
        .map(|at| at + marker.len())
        .ok_or(SetupError::MissingSection { section: marker })?;
    let end = [WHITE, BLACK, PIECE_TO_MOVE]
        .iter()
        .filter_map(|m| upper[begin..].find(m).map(|at| begin + at))
        .min()
        .unwrap_or(input.len());
    Ok(&input[begin..end])
}

fn tokens(body: &str) -> impl Iterator<Item = &str> {
    body.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn parse_token(token: &str) -> Result<(Piece, Square), SetupError> {
    let invalid = || SetupError::InvalidToken {
        token: token.to_string(),
    };
    let mut chars = token.chars();
    let piece = chars.next().and_then(Piece::from_char).ok_or_else(invalid)?;
    let square = chars.as_str().parse().map_err(|_| invalid())?;
    Ok((piece, square))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "WHITE: Rf1, Kg1, Pf2, Ph2, Pg3 BLACK: Kb8, Ne8, Pa7, Pb7, Pc7, Ra5 PIECE TO MOVE: Rf1";

    #[test]
    fn test_sample_position() {
        let mut setup = parse_piece_list(SAMPLE).unwrap();
        assert_eq!(setup.color, Color::White);
        assert_eq!(setup.piece, Piece::Rook);
        assert_eq!(setup.square, Square(0, 5));
        assert_eq!(setup.board.piece_count(Color::White), 5);
        assert_eq!(setup.board.piece_count(Color::Black), 6);
        assert_eq!(
            setup.legal_moves_line().unwrap(),
            "LEGAL MOVES FOR Rf1: e1, d1, c1, b1, a1"
        );
    }

    #[test]
    fn test_black_piece_to_move() {
        let mut setup = parse_piece_list(
            "white: Ke1 black: Ke8, Nb8 piece to move: Nb8",
        )
        .unwrap();
        assert_eq!(setup.color, Color::Black);
        assert_eq!(setup.board.side_to_move(), Color::Black);
        assert_eq!(
            setup.legal_moves_line().unwrap(),
            "LEGAL MOVES FOR Nb8: a6, c6, d7"
        );
    }

    #[test]
    fn test_castling_from_home_squares() {
        let mut setup =
            parse_piece_list("WHITE: Ke1, Rh1 BLACK: Ke8 PIECE TO MOVE: Ke1").unwrap();
        let targets = setup.board.legal_destinations(Square(0, 4)).unwrap();
        assert!(targets.contains(&Square(0, 6)));
        assert!(!setup.board.castling_rights().has(Color::White, false));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            parse_piece_list("WHITE: Kg1 PIECE TO MOVE: Kg1"),
            Err(SetupError::MissingSection { section: BLACK })
        );
        assert_eq!(
            parse_piece_list("WHITE: Kg1, Xz9 BLACK: Kb8 PIECE TO MOVE: Kg1"),
            Err(SetupError::InvalidToken {
                token: "Xz9".to_string()
            })
        );
        assert_eq!(
            parse_piece_list("WHITE: Kg1, Rg1 BLACK: Kb8 PIECE TO MOVE: Kg1"),
            Err(SetupError::DuplicateSquare {
                square: Square(0, 6)
            })
        );
        assert_eq!(
            parse_piece_list("WHITE: Kg1 BLACK: Kb8 PIECE TO MOVE: Qd1"),
            Err(SetupError::PieceToMoveNotFound {
                piece: Piece::Queen,
                square: Square(0, 3)
            })
        );
        assert_eq!(
            parse_piece_list("WHITE: Rf1 BLACK: Kb8 PIECE TO MOVE: Rf1"),
            Err(SetupError::MissingKing {
                color: Color::White
            })
        );
    }
}
