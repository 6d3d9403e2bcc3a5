//! Legal move filtering.
//!
//! Each candidate is played on a scratch copy of the board and kept only if
//! the mover's king is not attacked afterwards.

use crate::board::Board;
use crate::chess_move::Move;
use crate::make_move::play_on_board;
use crate::movegen::generate_candidates;
use crate::piece::{Color, PieceKind};
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Legal moves of the piece on `sq`, in generation order.
    ///
    /// An empty square has none. The piece need not belong to the side to
    /// move; its own colour decides which king must stay safe.
    pub fn legal_moves(&self, sq: Square) -> Vec<Move> {
        let mut moves = generate_candidates(self, sq);
        moves.retain(|&mv| self.keeps_king_safe(mv));
        moves
    }

    /// Legal moves of every piece of `color`.
    pub fn legal_moves_for(&self, color: Color) -> Vec<Move> {
        self.board()
            .squares_of(color)
            .flat_map(|sq| self.legal_moves(sq))
            .collect()
    }

    /// Legal moves of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        self.legal_moves_for(self.side_to_move())
    }

    /// Return `true` if any piece of `color` has a legal move.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.board()
            .squares_of(color)
            .any(|sq| !self.legal_moves(sq).is_empty())
    }

    /// Return `true` if `mv` is among the legal moves from its source square.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.legal_moves(mv.source()).contains(&mv)
    }

    fn keeps_king_safe(&self, mv: Move) -> bool {
        let mut scratch = *self.board();
        play_on_board(&mut scratch, mv);
        !scratch.is_in_check(mv.color()) && !kings_touch(&scratch, mv)
    }
}

/// A king may never step next to the other king. The attack check already
/// rejects such moves; this keeps the rule explicit for king moves.
fn kings_touch(board: &Board, mv: Move) -> bool {
    mv.piece() == PieceKind::King
        && board
            .king_square(!mv.color())
            .is_some_and(|enemy| enemy.distance(mv.dest()) <= 1)
}
