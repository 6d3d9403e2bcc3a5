//! Move execution via copy-make.

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;

impl Position {
    /// Apply a legal move and return the resulting position.
    ///
    /// The move must be one of [`Position::legal_moves`] for its source
    /// square. Anything else is rejected and `self` is left as it was.
    pub fn apply_move(&self, mv: Move) -> Result<Position, MoveError> {
        let Some(piece) = self.piece_at(mv.source()) else {
            tracing::debug!(%mv, "rejected move from empty square");
            return Err(MoveError::EmptySource { square: mv.source() });
        };
        if piece.color != self.side_to_move() {
            tracing::debug!(%mv, "rejected move for the side not on turn");
            return Err(MoveError::WrongSide {
                to_move: self.side_to_move(),
            });
        }
        if !self.is_legal(mv) {
            tracing::debug!(%mv, "rejected illegal move");
            return Err(MoveError::Illegal { mv });
        }
        if self.counter_exhausted(resets_clock(mv)) {
            tracing::debug!(%mv, "rejected move at the counter limit");
            return Err(MoveError::CounterOverflow { mv });
        }
        Ok(self.play_unchecked(mv))
    }

    /// Apply `mv` without checking it. Callers guarantee it came from the
    /// legal move list of this position.
    pub(crate) fn play_unchecked(&self, mv: Move) -> Position {
        let mut next = self.clone();

        let mut board = *self.board();
        play_on_board(&mut board, mv);
        next.set_board(board);

        let castling = self
            .castling()
            .touched(mv.source())
            .touched(mv.dest());

        let en_passant = match mv.kind() {
            MoveKind::DoublePawnPush => mv.source().offset(0, mv.color().forward()),
            _ => None,
        };

        next.advance(mv, castling, en_passant, resets_clock(mv));
        next
    }
}

/// Pawn moves and captures reset the half-move clock.
fn resets_clock(mv: Move) -> bool {
    mv.piece() == PieceKind::Pawn || mv.is_capture()
}

/// Update placement for `mv`: the mover, any captured piece (behind the
/// target for en passant), the promoted piece, and the castling rook.
pub(crate) fn play_on_board(board: &mut Board, mv: Move) {
    if let Some(captured) = mv.capture_square() {
        board.take(captured);
    }

    let moved = board.take(mv.source());
    let placed = match mv.promotion_piece() {
        Some(kind) => Some(Piece::new(kind, mv.color())),
        None => moved,
    };
    if let Some(piece) = placed {
        board.put(mv.dest(), piece);
    }

    if let Some(side) = mv.castle_side()
        && let Some(rook) = board.take(side.rook_home(mv.color()))
    {
        board.put(side.rook_target(mv.color()), rook);
    }
}
