//! Perft (performance test) for move generation correctness verification.

use crate::position::Position;

/// Count the leaf nodes of the legal move tree at `depth`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(position: &Position, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = position.all_legal_moves();
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .into_iter()
        .map(|mv| perft(&position.play_unchecked(mv), depth - 1))
        .sum()
}

/// Run perft with a per-move breakdown.
///
/// Returns `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let mut results: Vec<(String, u64)> = position
        .all_legal_moves()
        .into_iter()
        .map(|mv| {
            let count = if depth <= 1 {
                1
            } else {
                perft(&position.play_unchecked(mv), depth - 1)
            };
            (mv.to_uci(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::{divide, perft};
    use crate::position::Position;

    #[test]
    fn depth_zero_is_one() {
        assert_eq!(perft(&Position::starting_position(), 0), 1);
    }

    #[test]
    fn divide_sums_to_perft() {
        let pos = Position::starting_position();
        let split = divide(&pos, 2);
        assert_eq!(split.len(), 20);
        assert_eq!(split.iter().map(|(_, n)| n).sum::<u64>(), perft(&pos, 2));
        assert_eq!(split[0], ("a2a3".to_string(), 20));
    }

    #[test]
    fn divide_depth_one_lists_moves() {
        let pos: Position = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert!(divide(&pos, 1).is_empty());
    }
}
