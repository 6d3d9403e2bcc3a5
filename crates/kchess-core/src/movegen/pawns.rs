//! Pawn candidates: pushes, captures, en passant and promotions.

use crate::chess_move::Move;
use crate::piece::{Color, Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

pub(super) fn gen_pawn(position: &Position, from: Square, color: Color, moves: &mut Vec<Move>) {
    let board = position.board();
    let forward = color.forward();

    if let Some(one) = from.offset(0, forward)
        && board.is_empty_at(one)
    {
        push_pawn(color, from, one, None, moves);

        if from.rank() == color.pawn_rank()
            && let Some(two) = from.offset(0, 2 * forward)
            && board.is_empty_at(two)
        {
            moves.push(Move::double_push(color, from, two));
        }
    }

    for df in [-1, 1] {
        let Some(to) = from.offset(df, forward) else {
            continue;
        };
        match board.piece_at(to) {
            Some(victim) if victim.color != color => {
                push_pawn(color, from, to, Some(victim.kind), moves);
            }
            Some(_) => {}
            // The target belongs to the side to move: only its pawns may take.
            None if position.en_passant() == Some(to) && position.side_to_move() == color => {
                moves.push(Move::en_passant(color, from, to));
            }
            None => {}
        }
    }
}

/// Push a single-step or capturing pawn move, expanding it into the four
/// promotions on the last rank.
fn push_pawn(
    color: Color,
    from: Square,
    to: Square,
    victim: Option<PieceKind>,
    moves: &mut Vec<Move>,
) {
    if to.rank() == color.promotion_rank() {
        for kind in PieceKind::PROMOTIONS {
            moves.push(Move::promotion(color, from, to, victim, kind));
        }
        return;
    }

    let pawn = Piece::new(PieceKind::Pawn, color);
    moves.push(match victim {
        Some(kind) => Move::capture(pawn, from, to, kind),
        None => Move::quiet(pawn, from, to),
    });
}

#[cfg(test)]
mod tests {
    use crate::chess_move::MoveKind;
    use crate::movegen::generate_candidates;
    use crate::piece::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn home_rank_pushes() {
        let pos = Position::starting_position();
        let moves = generate_candidates(&pos, sq("e2"));
        assert_eq!(moves.len(), 2);
        assert_eq!(moves[0].kind(), MoveKind::Normal);
        assert_eq!(moves[1].kind(), MoveKind::DoublePawnPush);
        assert_eq!(moves[1].dest(), sq("e4"));
    }

    #[test]
    fn blocked_double_push() {
        // Knight on e3 blocks both pushes; knight on d4 blocks only the double push.
        let pos: Position = "4k3/8/8/8/3n4/4n3/3PP3/4K3 w - - 0 1".parse().unwrap();
        assert!(generate_candidates(&pos, sq("e2")).iter().all(|m| m.dest() != sq("e4")));
        assert!(generate_candidates(&pos, sq("e2")).iter().all(|m| m.dest() != sq("e3") || m.is_capture()));
        let d2: Vec<_> = generate_candidates(&pos, sq("d2"));
        assert!(d2.iter().any(|m| m.dest() == sq("d3")));
        assert!(d2.iter().all(|m| m.dest() != sq("d4")));
        assert!(d2.iter().any(|m| m.dest() == sq("e3") && m.captured() == Some(PieceKind::Knight)));
    }

    #[test]
    fn black_pawns_move_down() {
        let pos: Position = "4k3/3p4/8/8/8/8/8/4K3 b - - 0 1".parse().unwrap();
        let dests: Vec<Square> = generate_candidates(&pos, sq("d7")).iter().map(|m| m.dest()).collect();
        assert_eq!(dests, vec![sq("d6"), sq("d5")]);
    }

    #[test]
    fn en_passant_candidate() {
        let pos: Position = "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 2".parse().unwrap();
        let moves = generate_candidates(&pos, sq("e5"));
        let ep = moves.iter().find(|m| m.is_en_passant()).unwrap();
        assert_eq!(ep.dest(), sq("d6"));
        assert_eq!(ep.capture_square(), Some(sq("d5")));
    }

    #[test]
    fn promotions_expand_to_four() {
        let pos: Position = "1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = generate_candidates(&pos, sq("a7"));
        assert_eq!(moves.len(), 8);
        assert!(moves.iter().all(|m| m.is_promotion()));
        assert_eq!(moves.iter().filter(|m| m.is_capture()).count(), 4);
        assert_eq!(moves[0].promotion_piece(), Some(PieceKind::Queen));
    }
}
