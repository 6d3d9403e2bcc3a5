//! Knight candidates.

use crate::attacks::KNIGHT_OFFSETS;
use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::push_step;

pub(super) fn gen_knight(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for (df, dr) in KNIGHT_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            push_step(board, piece, from, to, moves);
        }
    }
}
