//! Castling rights: four independent flags packed into the low bits of a `u8`.

use std::fmt;

use crate::error::FenError;
use crate::piece::Color;
use crate::square::Square;

/// Which wing a castle goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const BOTH: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home square of the rook that castles on this wing.
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::H1,
            (Color::White, CastleSide::QueenSide) => Square::A1,
            (Color::Black, CastleSide::KingSide) => Square::H8,
            (Color::Black, CastleSide::QueenSide) => Square::A8,
        }
    }

    /// Square the king lands on.
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::G1,
            (Color::White, CastleSide::QueenSide) => Square::C1,
            (Color::Black, CastleSide::KingSide) => Square::G8,
            (Color::Black, CastleSide::QueenSide) => Square::C8,
        }
    }

    /// Square the rook lands on (the one the king passes over).
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::F1,
            (Color::White, CastleSide::QueenSide) => Square::D1,
            (Color::Black, CastleSide::KingSide) => Square::F8,
            (Color::Black, CastleSide::QueenSide) => Square::D8,
        }
    }

    /// Squares between king and rook that must be empty.
    pub const fn empty_path(self, color: Color) -> &'static [Square] {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => &[Square::F1, Square::G1],
            (Color::White, CastleSide::QueenSide) => &[Square::D1, Square::C1, Square::B1],
            (Color::Black, CastleSide::KingSide) => &[Square::F8, Square::G8],
            (Color::Black, CastleSide::QueenSide) => &[Square::D8, Square::C8, Square::B8],
        }
    }

    /// Squares the king stands on, crosses, or lands on. None may be attacked.
    pub const fn king_path(self, color: Color) -> [Square; 3] {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => [Square::E1, Square::F1, Square::G1],
            (Color::White, CastleSide::QueenSide) => [Square::E1, Square::D1, Square::C1],
            (Color::Black, CastleSide::KingSide) => [Square::E8, Square::F8, Square::G8],
            (Color::Black, CastleSide::QueenSide) => [Square::E8, Square::D8, Square::C8],
        }
    }
}

/// Castling rights: bit 0 = white king-side, 1 = white queen-side,
/// 2 = black king-side, 3 = black queen-side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    /// Rights as a bit set with one flag for `color` castling toward `side`.
    #[inline]
    pub const fn single(color: Color, side: CastleSide) -> CastleRights {
        let bit = match (color, side) {
            (Color::White, CastleSide::KingSide) => 0b0001,
            (Color::White, CastleSide::QueenSide) => 0b0010,
            (Color::Black, CastleSide::KingSide) => 0b0100,
            (Color::Black, CastleSide::QueenSide) => 0b1000,
        };
        CastleRights(bit)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if `color` may still castle toward `side`.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::single(color, side).0 != 0
    }

    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::single(color, side).0)
    }

    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::single(color, side).0)
    }

    /// Drop both rights of `color`.
    #[inline]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// Drop every right tied to `sq`: a king's home square clears both rights of
    /// that side, a rook's home square clears the matching wing. Applied to both
    /// the source and the destination of every move, which also covers a rook
    /// being captured at home.
    pub const fn touched(self, sq: Square) -> CastleRights {
        match sq.index() {
            4 => self.without_color(Color::White),
            60 => self.without_color(Color::Black),
            0 => self.without(Color::White, CastleSide::QueenSide),
            7 => self.without(Color::White, CastleSide::KingSide),
            56 => self.without(Color::Black, CastleSide::QueenSide),
            63 => self.without(Color::Black, CastleSide::KingSide),
            _ => self,
        }
    }

    /// Parse the FEN castling field (`"KQkq"`, `"Kq"`, `"-"`, ...).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        if s.is_empty() {
            return Err(FenError::InvalidCastlingChar { character: ' ' });
        }

        let mut rights = CastleRights::NONE;
        for c in s.chars() {
            rights = match c {
                'K' => rights.with(Color::White, CastleSide::KingSide),
                'Q' => rights.with(Color::White, CastleSide::QueenSide),
                'k' => rights.with(Color::Black, CastleSide::KingSide),
                'q' => rights.with(Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
        }
        Ok(rights)
    }

    /// Serialize to the FEN castling field, always in `KQkq` order.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let flags = [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ];
        flags
            .iter()
            .filter(|(color, side, _)| self.has(*color, *side))
            .map(|(_, _, c)| *c)
            .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::piece::Color;
    use crate::square::Square;

    #[test]
    fn fen_field_is_canonical() {
        assert_eq!(CastleRights::from_fen("qkQK").unwrap().to_fen(), "KQkq");
        assert_eq!(CastleRights::from_fen("kQ").unwrap().to_fen(), "Qk");
        assert_eq!(CastleRights::from_fen("-").unwrap(), CastleRights::NONE);
        assert_eq!(CastleRights::from_fen("KQkq").unwrap(), CastleRights::ALL);
    }

    #[test]
    fn fen_field_rejects_junk() {
        assert!(CastleRights::from_fen("KQxq").is_err());
        assert!(CastleRights::from_fen("").is_err());
        assert!(CastleRights::from_fen("1").is_err());
    }

    #[test]
    fn king_square_clears_both_wings() {
        let rights = CastleRights::ALL.touched(Square::E1);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
    }

    #[test]
    fn rook_square_clears_one_wing() {
        let rights = CastleRights::ALL.touched(Square::H8);
        assert_eq!(rights.to_fen(), "KQq");
        let rights = rights.touched(Square::A1);
        assert_eq!(rights.to_fen(), "Kq");
        let d4 = Square::from_algebraic("d4").unwrap();
        assert_eq!(rights.touched(d4), rights);
    }

    #[test]
    fn castle_geometry_is_consistent() {
        for color in Color::BOTH {
            for side in CastleSide::BOTH {
                let path = side.king_path(color);
                assert_eq!(path[2], side.king_target(color));
                assert_eq!(path[1], side.rook_target(color));
                assert!(side.empty_path(color).contains(&side.king_target(color)));
                assert_eq!(side.rook_home(color).rank(), color.back_rank());
            }
        }
    }
}
