use std::ops::Deref;

use super::{Board, CastleRule, Color, Move, Piece, Square};

type Contents = Option<(Color, Piece)>;

/// A move applied to the squares only, reverted when the guard drops.
///
/// Castling flags, en passant flags and the threat map are left untouched,
/// so only square-reading queries (such as the greedy check scan) are
/// meaningful while it is alive. Promotions stay pawns.
pub struct SimulatedMove<'a> {
    board: &'a mut Board,
    mv: Move,
    moved: Contents,
    captured: Contents,
    victim: Option<(Square, Contents)>,
    rook: Option<(&'static CastleRule, Contents, Contents)>,
}

impl<'a> SimulatedMove<'a> {
    fn new(board: &'a mut Board, mv: Move) -> Self {
        let from = mv.from.as_index();
        let to = mv.to.as_index();
        let moved = board.squares[from];
        let captured = board.squares[to];
        board.squares[to] = moved;
        board.squares[from] = None;

        let victim = if mv.en_passant {
            let sq = mv.en_passant_victim();
            let contents = board.squares[sq.as_index()].take();
            Some((sq, contents))
        } else {
            None
        };

        let rook = mv.castle_rule().map(|rule| {
            let rook_from = board.squares[rule.rook_from.as_index()];
            let rook_to = board.squares[rule.rook_to.as_index()];
            board.squares[rule.rook_to.as_index()] = rook_from;
            board.squares[rule.rook_from.as_index()] = None;
            (rule, rook_from, rook_to)
        });

        SimulatedMove {
            board,
            mv,
            moved,
            captured,
            victim,
            rook,
        }
    }

    /// The move being simulated.
    pub fn mv(&self) -> Move {
        self.mv
    }
}

impl Deref for SimulatedMove<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for SimulatedMove<'_> {
    fn drop(&mut self) {
        let squares = &mut self.board.squares;
        if let Some((rule, rook_from, rook_to)) = self.rook {
            squares[rule.rook_from.as_index()] = rook_from;
            squares[rule.rook_to.as_index()] = rook_to;
        }
        if let Some((sq, contents)) = self.victim {
            squares[sq.as_index()] = contents;
        }
        squares[self.mv.from.as_index()] = self.moved;
        squares[self.mv.to.as_index()] = self.captured;
    }
}

impl Board {
    /// Apply `mv` to the squares until the returned guard is dropped.
    pub fn simulate(&mut self, mv: Move) -> SimulatedMove<'_> {
        SimulatedMove::new(self, mv)
    }

    /// Permanently play a legal move: move the piece (and the rook when
    /// castling), remove an en passant victim, promote to a queen, update the
    /// castling and en passant flags, pass the turn and rebuild the threat map.
    pub fn apply_move(&mut self, mv: Move) {
        debug_assert_eq!(
            self.piece_at(mv.from),
            Some((mv.color, mv.piece)),
            "{mv:?} does not match the board"
        );

        if let Some(rule) = mv.castle_rule() {
            self.squares[rule.rook_from.as_index()] = None;
            self.set_piece(rule.rook_to, mv.color, Piece::Rook);
        }
        if mv.en_passant {
            self.squares[mv.en_passant_victim().as_index()] = None;
        }

        let landed = if mv.is_promotion() {
            Piece::Queen
        } else {
            mv.piece
        };
        self.squares[mv.from.as_index()] = None;
        self.set_piece(mv.to, mv.color, landed);

        self.castling.touch(mv.from);
        self.castling.touch(mv.to);

        let flags = &mut self.en_passant_files[mv.color.index()];
        *flags = 0;
        if mv.is_double_push() {
            *flags |= 1 << mv.from.file();
        }

        self.side_to_move = mv.color.opponent();
        self.game_state = Default::default();
        self.rebuild_threats();
        log::trace!("applied {mv:?}");
    }
}
