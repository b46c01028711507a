mod kings;
mod knights;
mod pawns;
mod sliders;

use std::time::Instant;

use super::error::BoardError;
use super::{Board, Color, GameState, MoveList, Piece, Square};

impl Board {
    /// Every move of `color` that obeys piece movement rules, in square order
    /// a1..h8. King steps and castles are already screened against the threat
    /// map; nothing else checks king safety.
    pub fn generate_pseudo_legal_into(&self, color: Color, moves: &mut MoveList) {
        moves.clear();
        for (from, c, piece) in self.pieces() {
            if c != color {
                continue;
            }
            self.generate_piece_moves(from, color, piece, moves);
        }
    }

    fn generate_piece_moves(&self, from: Square, color: Color, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.generate_pawn_moves(from, color, moves),
            Piece::Knight => self.generate_knight_moves(from, color, moves),
            Piece::Bishop | Piece::Rook | Piece::Queen => {
                self.generate_slider_moves(from, color, piece, moves)
            }
            Piece::King => self.generate_king_moves(from, color, moves),
        }
    }

    /// Full pipeline for `color` with caller-owned buffers: clear the mover's
    /// stale en passant flags, generate into `scratch`, keep the moves that
    /// leave the king safe in `legal`, then classify the position.
    ///
    /// Both buffers are cleared first. Returns the recorded game state.
    pub fn generate_legal_moves_into(
        &mut self,
        color: Color,
        scratch: &mut MoveList,
        legal: &mut MoveList,
    ) -> Result<GameState, BoardError> {
        let started = Instant::now();
        let king = self.king_square(color)?;

        self.en_passant_files[color.index()] = 0;
        self.generate_pseudo_legal_into(color, scratch);
        legal.clear();

        let enemy = color.opponent();
        for &mv in scratch.iter() {
            if mv.is_castle() {
                legal.push(mv);
                continue;
            }
            let sim = self.simulate(mv);
            let safe = sim
                .find_king(color)
                .is_some_and(|k| !sim.is_attacked_greedy(k, enemy));
            drop(sim);
            if safe {
                legal.push(mv);
            }
        }

        let in_check = self.threats.is_attacked_by(enemy, king);
        let state = self.classify(color, legal.len(), in_check);
        log::debug!(
            "{color}: {} pseudo-legal, {} legal, in check: {in_check}, {state} ({:?})",
            scratch.len(),
            legal.len(),
            started.elapsed()
        );
        Ok(state)
    }

    /// Legal moves for `color`. Records the game state as a side effect.
    pub fn legal_moves(&mut self, color: Color) -> Result<MoveList, BoardError> {
        let mut scratch = MoveList::new();
        let mut legal = MoveList::new();
        self.generate_legal_moves_into(color, &mut scratch, &mut legal)?;
        Ok(legal)
    }

    /// Legal moves for the side to move.
    pub fn generate_moves(&mut self) -> Result<MoveList, BoardError> {
        self.legal_moves(self.side_to_move)
    }

    /// Legal destinations of the piece on `from`, in generation order. Empty
    /// when the square is empty.
    pub fn legal_destinations(&mut self, from: Square) -> Result<Vec<Square>, BoardError> {
        let Some(color) = self.color_at(from) else {
            return Ok(Vec::new());
        };
        let moves = self.legal_moves(color)?;
        Ok(moves
            .iter()
            .filter(|mv| mv.from == from)
            .map(|mv| mv.to)
            .collect())
    }

    fn classify(&mut self, color: Color, legal_count: usize, in_check: bool) -> GameState {
        let mut state = match (legal_count, in_check) {
            (0, true) => GameState::checkmated(color),
            (0, false) => GameState::Draw,
            _ => GameState::Ongoing,
        };
        if self.is_insufficient_material() {
            state = GameState::Draw;
        }

        if state != self.game_state {
            match state {
                GameState::WhiteWins | GameState::BlackWins => {
                    log::info!("{color} is checkmated");
                }
                GameState::Draw if legal_count == 0 => log::info!("{color} is stalemated"),
                GameState::Draw => log::info!("draw: only the two kings remain"),
                GameState::Ongoing => {}
            }
        }
        self.game_state = state;
        state
    }

    /// Leaf count of the legal move tree below this position, `color` to move.
    /// Each child is a clone with the move applied.
    pub fn perft(&mut self, color: Color, depth: usize) -> Result<u64, BoardError> {
        if depth == 0 {
            return Ok(1);
        }

        let moves = self.legal_moves(color)?;
        if depth == 1 {
            return Ok(moves.len() as u64);
        }

        let mut nodes = 0;
        for &mv in moves.iter() {
            let mut child = self.clone();
            child.apply_move(mv);
            nodes += child.perft(color.opponent(), depth - 1)?;
        }
        Ok(nodes)
    }
}
