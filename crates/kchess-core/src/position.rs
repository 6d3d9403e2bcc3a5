//! The position model: placement plus the state a move depends on.

use crate::board::Board;
use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::Move;
use crate::error::PositionError;
use crate::piece::{Color, Piece, PieceKind};
use crate::square::Square;

/// A full game position.
///
/// Positions are values: [`Position::apply_move`] returns a new one and never
/// touches `self`. The move list records every move applied since the
/// position was created from FEN or from the starting placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<Move>,
}

/// The parts of a position that decide whether two positions repeat:
/// placement, side to move, castling rights and en passant target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RepetitionKey {
    board: Board,
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
}

impl Position {
    /// The standard starting position.
    pub fn starting_position() -> Position {
        Position {
            board: Board::starting(),
            side_to_move: Color::White,
            castling: CastleRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: Vec::new(),
        }
    }

    /// Assemble and validate a position from its parts.
    ///
    /// Castling rights whose king or rook is off its home square are dropped
    /// before validation, so `"KQkq"` on a board without rooks yields `"-"`.
    pub fn from_parts(
        board: Board,
        side_to_move: Color,
        castling: CastleRights,
        en_passant: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Result<Position, PositionError> {
        let position = Position {
            board,
            side_to_move,
            castling: reachable_rights(&board, castling),
            en_passant,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
        };
        position.validate()?;
        Ok(position)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    /// The square a pawn just passed over with a double push, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// Half-moves since the last pawn move or capture.
    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Moves applied since this position's root, oldest first.
    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    pub fn repetition_key(&self) -> RepetitionKey {
        RepetitionKey {
            board: self.board,
            side_to_move: self.side_to_move,
            castling: self.castling,
            en_passant: self.en_passant,
        }
    }

    /// Check the structural rules every playable position obeys.
    pub fn validate(&self) -> Result<(), PositionError> {
        for color in Color::BOTH {
            let count = self.board.count(Piece::new(PieceKind::King, color));
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        if let Some((square, _)) = self.board.occupied().find(|(sq, piece)| {
            piece.kind == PieceKind::Pawn && (sq.rank() == 0 || sq.rank() == 7)
        }) {
            return Err(PositionError::PawnOnBackRank { square });
        }

        if let (Some(white), Some(black)) = (
            self.board.king_square(Color::White),
            self.board.king_square(Color::Black),
        ) && white.distance(black) <= 1
        {
            return Err(PositionError::KingsAdjacent);
        }

        let waiting = !self.side_to_move;
        if self.board.is_in_check(waiting) {
            return Err(PositionError::OpponentInCheck { color: waiting });
        }

        if let Some(square) = self.en_passant
            && !self.en_passant_is_consistent(square)
        {
            return Err(PositionError::InconsistentEnPassant { square });
        }

        Ok(())
    }

    /// The target must sit on the third rank from the pusher's side, be
    /// empty, and have the pushed pawn directly in front of it.
    fn en_passant_is_consistent(&self, target: Square) -> bool {
        let pusher = !self.side_to_move;
        let expected_rank = match pusher {
            Color::White => 2,
            Color::Black => 5,
        };
        if target.rank() != expected_rank || !self.board.is_empty_at(target) {
            return false;
        }
        let pawn = Piece::new(PieceKind::Pawn, pusher);
        let in_front = target.offset(0, pusher.forward());
        let behind = target.offset(0, -pusher.forward());
        in_front.and_then(|sq| self.board.piece_at(sq)) == Some(pawn)
            && behind.is_some_and(|sq| self.board.is_empty_at(sq))
    }

    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    /// Return `true` if playing a move would push a counter past `u32::MAX`.
    pub(crate) fn counter_exhausted(&self, reset_clock: bool) -> bool {
        (!reset_clock && self.halfmove_clock == u32::MAX)
            || (self.side_to_move == Color::Black && self.fullmove_number == u32::MAX)
    }

    pub(crate) fn advance(
        &mut self,
        mv: Move,
        castling: CastleRights,
        en_passant: Option<Square>,
        reset_clock: bool,
    ) {
        self.castling = castling;
        self.en_passant = en_passant;
        self.halfmove_clock = if reset_clock {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = !self.side_to_move;
        self.history.push(mv);
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting_position()
    }
}

/// Keep only the rights whose king and rook still stand at home.
fn reachable_rights(board: &Board, rights: CastleRights) -> CastleRights {
    let mut kept = rights;
    for color in Color::BOTH {
        let king_home = match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        };
        let king_ok = board.piece_at(king_home) == Some(Piece::new(PieceKind::King, color));
        for side in CastleSide::BOTH {
            let rook_ok =
                board.piece_at(side.rook_home(color)) == Some(Piece::new(PieceKind::Rook, color));
            if !king_ok || !rook_ok {
                kept = kept.without(color, side);
            }
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::board::Board;
    use crate::castle_rights::CastleRights;
    use crate::error::PositionError;
    use crate::piece::{Color, Piece, PieceKind};
    use crate::square::Square;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn kings(white: &str, black: &str) -> Board {
        let mut board = Board::empty();
        board.put(sq(white), Piece::new(PieceKind::King, Color::White));
        board.put(sq(black), Piece::new(PieceKind::King, Color::Black));
        board
    }

    #[test]
    fn starting_position_is_valid() {
        let pos = Position::starting_position();
        assert_eq!(pos.validate(), Ok(()));
        assert_eq!(pos.side_to_move(), Color::White);
        assert_eq!(pos.castling(), CastleRights::ALL);
        assert_eq!(pos.fullmove_number(), 1);
        assert!(pos.history().is_empty());
    }

    #[test]
    fn rejects_missing_king() {
        let mut board = Board::empty();
        board.put(sq("e1"), Piece::new(PieceKind::King, Color::White));
        let err = Position::from_parts(board, Color::White, CastleRights::NONE, None, 0, 1);
        assert_eq!(
            err,
            Err(PositionError::InvalidKingCount {
                color: Color::Black,
                count: 0
            })
        );
    }

    #[test]
    fn rejects_adjacent_kings() {
        let err = Position::from_parts(kings("e4", "e5"), Color::White, CastleRights::NONE, None, 0, 1);
        assert_eq!(err, Err(PositionError::KingsAdjacent));
    }

    #[test]
    fn rejects_pawn_on_back_rank() {
        let mut board = kings("e1", "e8");
        board.put(sq("a8"), Piece::new(PieceKind::Pawn, Color::White));
        let err = Position::from_parts(board, Color::White, CastleRights::NONE, None, 0, 1);
        assert_eq!(err, Err(PositionError::PawnOnBackRank { square: sq("a8") }));
    }

    #[test]
    fn rejects_waiting_side_in_check() {
        let mut board = kings("e1", "e8");
        board.put(sq("e4"), Piece::new(PieceKind::Rook, Color::White));
        let err = Position::from_parts(board, Color::White, CastleRights::NONE, None, 0, 1);
        assert_eq!(err, Err(PositionError::OpponentInCheck { color: Color::Black }));
        assert!(Position::from_parts(board, Color::Black, CastleRights::NONE, None, 0, 1).is_ok());
    }

    #[test]
    fn drops_unreachable_castling_rights() {
        let mut board = kings("e1", "e8");
        board.put(sq("h1"), Piece::new(PieceKind::Rook, Color::White));
        let pos = Position::from_parts(board, Color::White, CastleRights::ALL, None, 0, 1).unwrap();
        assert_eq!(pos.castling().to_fen(), "K");
    }

    #[test]
    fn en_passant_needs_pushed_pawn() {
        let mut board = kings("e1", "e8");
        let err = Position::from_parts(board, Color::Black, CastleRights::NONE, Some(sq("d3")), 0, 1);
        assert_eq!(err, Err(PositionError::InconsistentEnPassant { square: sq("d3") }));

        board.put(sq("d4"), Piece::new(PieceKind::Pawn, Color::White));
        assert!(Position::from_parts(board, Color::Black, CastleRights::NONE, Some(sq("d3")), 0, 1).is_ok());
        // Wrong rank for the side to move.
        let err = Position::from_parts(board, Color::White, CastleRights::NONE, Some(sq("d3")), 0, 1);
        assert!(err.is_err());
    }

    #[test]
    fn repetition_key_ignores_counters() {
        let a = Position::from_parts(kings("a1", "h8"), Color::White, CastleRights::NONE, None, 0, 1).unwrap();
        let b = Position::from_parts(kings("a1", "h8"), Color::White, CastleRights::NONE, None, 40, 31).unwrap();
        assert_eq!(a.repetition_key(), b.repetition_key());
        let c = Position::from_parts(kings("a1", "h8"), Color::Black, CastleRights::NONE, None, 0, 1).unwrap();
        assert_ne!(a.repetition_key(), c.repetition_key());
    }
}
