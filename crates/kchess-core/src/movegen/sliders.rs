//! Bishop, rook and queen candidates by ray walking.

use crate::board::Board;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::square::Square;

use super::push_step;

/// Walk each direction until the edge or the first occupied square, which is
/// included as a capture when it holds an enemy piece.
pub(super) fn gen_slider(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(df, dr) in directions {
        let mut current = from.offset(df, dr);
        while let Some(to) = current {
            if !push_step(board, piece, from, to, moves) {
                break;
            }
            current = to.offset(df, dr);
        }
    }
}
