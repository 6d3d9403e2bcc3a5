//! Candidate move generation, one module per piece family.
//!
//! Candidates follow piece geometry only. They may leave the mover's own king
//! in check; [`Position::legal_moves`](crate::Position::legal_moves) filters
//! those out. The one exception is castling, whose path-safety gates are
//! evaluated here because the filter only looks at the final position.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Generate the candidate moves of the piece on `sq`.
///
/// The piece's own colour decides the direction of play, so candidates exist
/// for either side regardless of whose turn it is. An empty square yields no
/// candidates.
pub fn generate_candidates(position: &Position, sq: Square) -> Vec<Move> {
    let Some(piece) = position.piece_at(sq) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => gen_pawn(position, sq, piece.color, &mut moves),
        PieceKind::Knight => gen_knight(position.board(), sq, piece, &mut moves),
        PieceKind::Bishop => gen_slider(position.board(), sq, piece, &BISHOP_DIRECTIONS, &mut moves),
        PieceKind::Rook => gen_slider(position.board(), sq, piece, &ROOK_DIRECTIONS, &mut moves),
        PieceKind::Queen => {
            gen_slider(position.board(), sq, piece, &ROOK_DIRECTIONS, &mut moves);
            gen_slider(position.board(), sq, piece, &BISHOP_DIRECTIONS, &mut moves);
        }
        PieceKind::King => gen_king(position, sq, piece, &mut moves),
    }
    moves
}

/// Push a move of `piece` to `to` unless a friendly piece stands there.
///
/// Returns `true` when `to` was empty, so a ray may continue past it.
fn push_step(board: &Board, piece: Piece, from: Square, to: Square, moves: &mut Vec<Move>) -> bool {
    match board.piece_at(to) {
        None => {
            moves.push(Move::quiet(piece, from, to));
            true
        }
        Some(other) => {
            if other.color != piece.color {
                moves.push(Move::capture(piece, from, to, other.kind));
            }
            false
        }
    }
}
