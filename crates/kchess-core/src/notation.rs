//! Move text: coordinate form (`e2e4`, `e7e8q`) and the display notation
//! used in move lists (`Nf3`, `exd5`, `O-O`, `exd6 e.p.`, `e8=Q`).

use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

impl Move {
    /// Display notation. No check marks and no disambiguation.
    pub fn notation(self) -> String {
        if let Some(side) = self.castle_side() {
            return match side {
                CastleSide::KingSide => "O-O".to_string(),
                CastleSide::QueenSide => "O-O-O".to_string(),
            };
        }

        let mut text = String::new();
        if self.piece() == PieceKind::Pawn {
            if self.is_capture() {
                text.push((b'a' + self.source().file()) as char);
                text.push('x');
            }
        } else {
            text.push(self.piece().letter());
            if self.is_capture() {
                text.push('x');
            }
        }
        text.push_str(&self.dest().to_string());

        if let Some(kind) = self.promotion_piece() {
            text.push('=');
            text.push(kind.letter());
        }
        if self.is_en_passant() {
            text.push_str(" e.p.");
        }
        text
    }
}

impl Position {
    /// Resolve coordinate text such as `e2e4` or `e7e8n` to a legal move.
    ///
    /// A promotion without a piece letter promotes to a queen.
    pub fn parse_uci(&self, text: &str) -> Result<Move, MoveError> {
        let text = text.trim();
        let unparseable = || MoveError::Unparseable {
            text: text.to_string(),
        };
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(unparseable());
        }

        let source: Square = text[0..2].parse()?;
        let dest: Square = text[2..4].parse()?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => Some(
                PieceKind::from_letter(c)
                    .filter(|k| k.is_promotion_target())
                    .ok_or_else(unparseable)?,
            ),
        };

        let Some(piece) = self.piece_at(source) else {
            return Err(MoveError::EmptySource { square: source });
        };
        if piece.color != self.side_to_move() {
            return Err(MoveError::WrongSide {
                to_move: self.side_to_move(),
            });
        }

        let wanted = promotion.unwrap_or(PieceKind::Queen);
        self.legal_moves(source)
            .into_iter()
            .find(|mv| {
                mv.dest() == dest
                    && match mv.promotion_piece() {
                        Some(kind) => kind == wanted,
                        None => promotion.is_none(),
                    }
            })
            .ok_or(MoveError::Illegal {
                mv: Move::quiet(piece, source, dest),
            })
    }

    /// Resolve display notation produced by [`Move::notation`] back to the
    /// legal move it names. Trailing `+` and `#` are ignored.
    pub fn parse_notation(&self, text: &str) -> Result<Move, MoveError> {
        let wanted = text.trim().trim_end_matches(['+', '#']);
        if wanted.is_empty() {
            return Err(MoveError::Unparseable {
                text: text.to_string(),
            });
        }

        let matches: Vec<Move> = self
            .all_legal_moves()
            .into_iter()
            .filter(|mv| {
                let notation = mv.notation();
                notation == wanted || notation.strip_suffix(" e.p.") == Some(wanted)
            })
            .collect();

        match matches.as_slice() {
            [mv] => Ok(*mv),
            [] => Err(MoveError::UnknownNotation {
                text: wanted.to_string(),
            }),
            _ => Err(MoveError::AmbiguousNotation {
                text: wanted.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Accept either coordinate text or display notation.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        if looks_like_coordinates(text.trim()) {
            self.parse_uci(text)
        } else {
            self.parse_notation(text)
        }
    }
}

/// `[a-h][1-8][a-h][1-8]` with an optional promotion letter.
fn looks_like_coordinates(text: &str) -> bool {
    let bytes = text.as_bytes();
    let square = |f: u8, r: u8| (b'a'..=b'h').contains(&f) && (b'1'..=b'8').contains(&r);
    match bytes {
        [f1, r1, f2, r2] => square(*f1, *r1) && square(*f2, *r2),
        [f1, r1, f2, r2, p] => {
            square(*f1, *r1)
                && square(*f2, *r2)
                && Piece::from_fen_char(*p as char).is_some_and(|pc| pc.kind.is_promotion_target())
        }
        _ => false,
    }
}
