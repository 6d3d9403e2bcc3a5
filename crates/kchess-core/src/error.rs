//! Error types for FEN parsing, position validation, and move input.

use crate::chess_move::Move;
use crate::piece::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// `rank_index` counts from the top of the board (0 = rank 8).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// `rank_index` counts from the top of the board (0 = rank 8).
    #[error("rank {rank_index} has two empty-square digits in a row")]
    ConsecutiveDigits { rank_index: usize },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    #[error("invalid position: {source}")]
    InvalidPosition {
        #[from]
        source: PositionError,
    },
}

/// Structural problems found when validating a [`Position`](crate::Position).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    #[error("expected 1 {} king, found {count}", .color.name())]
    InvalidKingCount { color: Color, count: usize },

    #[error("pawn on back rank at {square}")]
    PawnOnBackRank { square: Square },

    #[error("kings stand on adjacent squares")]
    KingsAdjacent,

    #[error("{} is in check but it is not {}'s turn", .color.name(), .color.name())]
    OpponentInCheck { color: Color },

    #[error("en passant target {square} does not follow a double pawn push")]
    InconsistentEnPassant { square: Square },
}

/// Errors from move input and move application.
///
/// A failed application never changes the position it was attempted on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("not a square: \"{text}\"")]
    InvalidSquare { text: String },

    #[error("no piece on {square}")]
    EmptySource { square: Square },

    #[error("it is {}'s turn, not {}'s", .to_move.name(), .to_move.opposite().name())]
    WrongSide { to_move: Color },

    #[error("illegal move: {mv}")]
    Illegal { mv: Move },

    #[error("move counter limit reached, {mv} cannot be recorded")]
    CounterOverflow { mv: Move },

    #[error("cannot parse move: \"{text}\"")]
    Unparseable { text: String },

    #[error("no legal move matches \"{text}\"")]
    UnknownNotation { text: String },

    #[error("\"{text}\" matches {count} legal moves")]
    AmbiguousNotation { text: String, count: usize },
}
