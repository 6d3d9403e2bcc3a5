//! Move representation.

use std::fmt;

use crate::castle_rights::CastleSide;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

/// The category of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A move to an empty square that is none of the special kinds below.
    Normal,
    /// A move onto an enemy piece (not en passant, not promotion).
    Capture,
    /// A pawn advancing two squares from its starting rank.
    DoublePawnPush,
    /// A pawn capturing the pawn that just passed it.
    EnPassant,
    CastleKingSide,
    CastleQueenSide,
    /// A pawn reaching the last rank, with or without a capture.
    Promotion,
}

/// A move: who moves what from where to where, and what it takes.
///
/// Moves are produced by the move generators and never change afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    piece: PieceKind,
    color: Color,
    kind: MoveKind,
    captured: Option<PieceKind>,
    promotion: Option<PieceKind>,
}

impl Move {
    /// A non-capturing move of `piece` to an empty square.
    pub const fn quiet(piece: Piece, source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            piece: piece.kind,
            color: piece.color,
            kind: MoveKind::Normal,
            captured: None,
            promotion: None,
        }
    }

    /// A move of `piece` onto the square of `victim`.
    pub const fn capture(piece: Piece, source: Square, dest: Square, victim: PieceKind) -> Move {
        Move {
            kind: MoveKind::Capture,
            captured: Some(victim),
            ..Move::quiet(piece, source, dest)
        }
    }

    /// A pawn's two-square advance.
    pub const fn double_push(color: Color, source: Square, dest: Square) -> Move {
        Move {
            kind: MoveKind::DoublePawnPush,
            ..Move::quiet(Piece::new(PieceKind::Pawn, color), source, dest)
        }
    }

    /// An en passant capture landing on the empty target square `dest`.
    pub const fn en_passant(color: Color, source: Square, dest: Square) -> Move {
        Move {
            kind: MoveKind::EnPassant,
            captured: Some(PieceKind::Pawn),
            ..Move::quiet(Piece::new(PieceKind::Pawn, color), source, dest)
        }
    }

    /// A pawn move to the last rank, becoming `promotion`.
    pub const fn promotion(
        color: Color,
        source: Square,
        dest: Square,
        victim: Option<PieceKind>,
        promotion: PieceKind,
    ) -> Move {
        Move {
            kind: MoveKind::Promotion,
            captured: victim,
            promotion: Some(promotion),
            ..Move::quiet(Piece::new(PieceKind::Pawn, color), source, dest)
        }
    }

    /// A castle, described by the king's move.
    pub const fn castle(color: Color, side: CastleSide) -> Move {
        let king = Piece::new(PieceKind::King, color);
        let source = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        let kind = match side {
            CastleSide::KingSide => MoveKind::CastleKingSide,
            CastleSide::QueenSide => MoveKind::CastleQueenSide,
        };
        Move {
            kind,
            ..Move::quiet(king, source, side.king_target(color))
        }
    }

    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Kind of the moving piece (a pawn for promotions).
    #[inline]
    pub const fn piece(self) -> PieceKind {
        self.piece
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub const fn captured(self) -> Option<PieceKind> {
        self.captured
    }

    #[inline]
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        self.promotion
    }

    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    /// The wing castled toward, or `None` for every other move.
    #[inline]
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::CastleKingSide => Some(CastleSide::KingSide),
            MoveKind::CastleQueenSide => Some(CastleSide::QueenSide),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        self.castle_side().is_some()
    }

    /// Square of the captured piece. Differs from `dest` only for en passant.
    pub fn capture_square(self) -> Option<Square> {
        match self.kind {
            MoveKind::EnPassant => self.dest.offset(0, -self.color.forward()),
            _ if self.captured.is_some() => Some(self.dest),
            _ => None,
        }
    }

    /// Coordinate form: `e2e4`, `e7e8q`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.letter().to_ascii_lowercase())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::castle_rights::CastleSide;
    use crate::piece::{Color, Piece, PieceKind};
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn quiet_move_accessors() {
        let knight = Piece::new(PieceKind::Knight, Color::White);
        let mv = Move::quiet(knight, Square::G1, sq("f3"));
        assert_eq!(mv.source(), Square::G1);
        assert_eq!(mv.dest(), sq("f3"));
        assert_eq!(mv.piece(), PieceKind::Knight);
        assert_eq!(mv.color(), Color::White);
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(!mv.is_capture());
        assert_eq!(mv.capture_square(), None);
    }

    #[test]
    fn en_passant_captures_behind_target() {
        let white = Move::en_passant(Color::White, sq("e5"), sq("d6"));
        assert_eq!(white.captured(), Some(PieceKind::Pawn));
        assert_eq!(white.capture_square(), Some(sq("d5")));

        let black = Move::en_passant(Color::Black, sq("d4"), sq("e3"));
        assert_eq!(black.capture_square(), Some(sq("e4")));
    }

    #[test]
    fn castle_moves_describe_the_king() {
        let mv = Move::castle(Color::Black, CastleSide::QueenSide);
        assert_eq!(mv.source(), Square::E8);
        assert_eq!(mv.dest(), Square::C8);
        assert_eq!(mv.piece(), PieceKind::King);
        assert_eq!(mv.castle_side(), Some(CastleSide::QueenSide));
        assert!(mv.is_castle());
        assert!(!mv.is_capture());
    }

    #[test]
    fn uci_text() {
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert_eq!(Move::quiet(pawn, sq("e2"), sq("e3")).to_uci(), "e2e3");
        assert_eq!(Move::double_push(Color::White, sq("e2"), sq("e4")).to_uci(), "e2e4");
        let promo = Move::promotion(Color::White, sq("b7"), sq("a8"), Some(PieceKind::Rook), PieceKind::Knight);
        assert_eq!(promo.to_uci(), "b7a8n");
        assert_eq!(promo.capture_square(), Some(sq("a8")));
        assert_eq!(format!("{promo:?}"), "Move(b7a8n Promotion)");
    }
}
