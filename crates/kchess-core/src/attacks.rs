//! Attack detection by reverse lookup from the target square.
//!
//! Nothing here consults move legality: a pawn attacks its two forward
//! diagonals whether or not they hold a piece, and a pinned piece still
//! gives check.

use crate::board::Board;
use crate::piece::{Color, PieceKind};
use crate::square::Square;

pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub(crate) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

pub(crate) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

impl Board {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Each attack pattern is cast outward from `sq` and checked for an
    /// attacker of the matching kind at the far end.
    pub fn is_square_attacked(&self, sq: Square, by_color: Color) -> bool {
        let holds = |target: Option<Square>, kinds: &[PieceKind]| {
            target
                .and_then(|t| self.piece_at(t))
                .is_some_and(|p| p.color == by_color && kinds.contains(&p.kind))
        };

        if KNIGHT_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceKind::Knight]))
        {
            return true;
        }

        if KING_OFFSETS
            .iter()
            .any(|&(df, dr)| holds(sq.offset(df, dr), &[PieceKind::King]))
        {
            return true;
        }

        // A pawn of `by_color` attacks `sq` from one rank behind it, seen from
        // that pawn's direction of travel.
        let behind = -by_color.forward();
        if [-1, 1]
            .iter()
            .any(|&df| holds(sq.offset(df, behind), &[PieceKind::Pawn]))
        {
            return true;
        }

        let straight = [PieceKind::Rook, PieceKind::Queen];
        if ROOK_DIRECTIONS
            .iter()
            .any(|&dir| holds(self.first_occupied(sq, dir), &straight))
        {
            return true;
        }

        let diagonal = [PieceKind::Bishop, PieceKind::Queen];
        BISHOP_DIRECTIONS
            .iter()
            .any(|&dir| holds(self.first_occupied(sq, dir), &diagonal))
    }

    /// Return `true` if the king of `color` is attacked.
    ///
    /// A board without that king is a broken invariant: debug builds panic,
    /// release builds log it and report check so no move is ever accepted
    /// on such a board.
    pub fn is_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, !color),
            None => {
                debug_assert!(false, "no {} king on the board", color.name());
                tracing::error!(color = color.name(), "no king on the board, treating as in check");
                true
            }
        }
    }

    /// Walk from `from` (exclusive) in direction `dir` and return the first
    /// occupied square.
    fn first_occupied(&self, from: Square, (df, dr): (i8, i8)) -> Option<Square> {
        let mut current = from.offset(df, dr);
        while let Some(sq) = current {
            if !self.is_empty_at(sq) {
                return Some(sq);
            }
            current = sq.offset(df, dr);
        }
        None
    }
}
