//! Draw rules beyond stalemate: insufficient material, the fifty-move rule,
//! and threefold repetition.

use std::fmt;

use kchess_core::{Board, PieceKind, Position, RepetitionKey};

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_PLIES: u32 = 100;

/// Occurrences of one position that make a repetition draw.
pub const REPETITION_LIMIT: usize = 3;

/// Why a game ended drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawReason {
    Stalemate,
    InsufficientMaterial,
    FiftyMoveRule,
    ThreefoldRepetition,
}

impl fmt::Display for DrawReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DrawReason::Stalemate => "stalemate",
            DrawReason::InsufficientMaterial => "insufficient material",
            DrawReason::FiftyMoveRule => "fifty-move rule",
            DrawReason::ThreefoldRepetition => "threefold repetition",
        })
    }
}

/// Return `true` when neither side can possibly mate: K v K, K+B v K,
/// K+N v K, or K+B v K+B with both bishops on the same square colour.
pub fn is_insufficient_material(board: &Board) -> bool {
    let others: Vec<_> = board
        .occupied()
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .collect();

    match others.as_slice() {
        [] => true,
        [(_, piece)] => matches!(piece.kind, PieceKind::Bishop | PieceKind::Knight),
        [(sq_a, a), (sq_b, b)] => {
            a.kind == PieceKind::Bishop
                && b.kind == PieceKind::Bishop
                && a.color != b.color
                && sq_a.is_dark() == sq_b.is_dark()
        }
        _ => false,
    }
}

/// Return `true` once the half-move clock reaches 100.
pub fn is_fifty_move_rule(position: &Position) -> bool {
    position.halfmove_clock() >= FIFTY_MOVE_PLIES
}

/// Return `true` if the last key in `seen` occurs at least three times.
pub fn is_threefold_repetition(seen: &[RepetitionKey]) -> bool {
    match seen.last() {
        Some(current) => seen.iter().filter(|k| *k == current).count() >= REPETITION_LIMIT,
        None => false,
    }
}

/// Check the draw rules in fixed order: material, fifty moves, repetition.
///
/// `seen` holds the repetition key of every position of the game so far,
/// ending with `position` itself.
pub fn detect_draw(position: &Position, seen: &[RepetitionKey]) -> Option<DrawReason> {
    if is_insufficient_material(position.board()) {
        Some(DrawReason::InsufficientMaterial)
    } else if is_fifty_move_rule(position) {
        Some(DrawReason::FiftyMoveRule)
    } else if is_threefold_repetition(seen) {
        Some(DrawReason::ThreefoldRepetition)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(fen: &str) -> Board {
        *fen.parse::<Position>().unwrap().board()
    }

    #[test]
    fn bare_kings() {
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/4K3 w - - 0 1")));
    }

    #[test]
    fn single_minor_piece() {
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1")));
        assert!(is_insufficient_material(&board("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1")));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/8/R3K3 w - - 0 1")));
        assert!(!is_insufficient_material(&board("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1")));
    }

    #[test]
    fn opposing_bishops() {
        // c1 and f8 are both dark squares.
        assert!(is_insufficient_material(&board("5b1k/8/8/8/8/8/8/2B1K3 w - - 0 1")));
        // c1 dark, c8 light.
        assert!(!is_insufficient_material(&board("2b4k/8/8/8/8/8/8/2B1K3 w - - 0 1")));
        // Two bishops on one side can mate.
        assert!(!is_insufficient_material(&board("7k/8/8/8/8/8/8/2BBK3 w - - 0 1")));
    }

    #[test]
    fn two_knights_are_not_flagged() {
        assert!(!is_insufficient_material(&board("7k/8/8/8/8/8/8/1NN1K3 w - - 0 1")));
    }

    #[test]
    fn fifty_move_threshold() {
        let pos: Position = "4k3/8/8/8/8/8/8/R3K3 w - - 99 80".parse().unwrap();
        assert!(!is_fifty_move_rule(&pos));
        let pos: Position = "4k3/8/8/8/8/8/8/R3K3 w - - 100 80".parse().unwrap();
        assert!(is_fifty_move_rule(&pos));
        assert_eq!(detect_draw(&pos, &[pos.repetition_key()]), Some(DrawReason::FiftyMoveRule));
    }

    #[test]
    fn repetition_counts_the_current_key() {
        let a = Position::starting_position().repetition_key();
        let b: Position = "rnbqkbnr/pppppppp/8/8/8/5N2/PPPPPPPP/RNBQKB1R b KQkq - 1 1".parse().unwrap();
        let b = b.repetition_key();
        assert!(!is_threefold_repetition(&[a, b, a, b]));
        assert!(is_threefold_repetition(&[a, b, a, b, a]));
        assert!(!is_threefold_repetition(&[]));
    }

    #[test]
    fn material_outranks_fifty_moves() {
        let pos: Position = "4k3/8/8/8/8/8/8/4K3 w - - 120 90".parse().unwrap();
        assert_eq!(
            detect_draw(&pos, &[pos.repetition_key()]),
            Some(DrawReason::InsufficientMaterial)
        );
    }
}
