//! King steps and castling.

use crate::attacks::KING_OFFSETS;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

use super::push_step;

pub(super) fn gen_king(position: &Position, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for (df, dr) in KING_OFFSETS {
        if let Some(to) = from.offset(df, dr) {
            push_step(position.board(), piece, from, to, moves);
        }
    }

    for side in CastleSide::BOTH {
        if can_castle(position, piece.color, side, from) {
            moves.push(Move::castle(piece.color, side));
        }
    }
}

/// The right is held, king and rook stand at home, the squares between them
/// are empty, and the king neither starts on, crosses, nor lands on an
/// attacked square.
fn can_castle(position: &Position, color: Color, side: CastleSide, from: Square) -> bool {
    let board = position.board();
    let king_path = side.king_path(color);

    position.castling().has(color, side)
        && from == king_path[0]
        && board.piece_at(side.rook_home(color)) == Some(Piece::new(PieceKind::Rook, color))
        && side.empty_path(color).iter().all(|&sq| board.is_empty_at(sq))
        && !king_path.iter().any(|&sq| board.is_square_attacked(sq, !color))
}

#[cfg(test)]
mod tests {
    use crate::movegen::generate_candidates;
    use crate::position::Position;
    use crate::square::Square;

    fn castles(fen: &str, king: Square) -> Vec<String> {
        let pos: Position = fen.parse().unwrap();
        generate_candidates(&pos, king)
            .into_iter()
            .filter(|m| m.is_castle())
            .map(|m| m.to_uci())
            .collect()
    }

    #[test]
    fn both_wings_available() {
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Square::E1), vec!["e1g1", "e1c1"]);
        assert_eq!(castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Square::E8), vec!["e8g8", "e8c8"]);
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("4k3/8/8/8/8/8/4r3/R3K2R w KQ - 0 1", Square::E1).is_empty());
    }

    #[test]
    fn no_castling_through_attacked_square() {
        // Black rook on f8 covers f1: king-side is out, queen-side stays.
        assert_eq!(castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1), vec!["e1c1"]);
    }

    #[test]
    fn queen_side_b_file_may_be_attacked() {
        // b1 is attacked but the king never crosses it.
        assert_eq!(castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1", Square::E1), vec!["e1c1"]);
    }

    #[test]
    fn queen_side_b_file_must_be_empty() {
        assert!(castles("4k3/8/8/8/8/8/8/RN2K3 w Q - 0 1", Square::E1).is_empty());
    }

    #[test]
    fn no_castling_without_right() {
        assert!(castles("4k3/8/8/8/8/8/8/R3K2R w - - 0 1", Square::E1).is_empty());
    }
}
