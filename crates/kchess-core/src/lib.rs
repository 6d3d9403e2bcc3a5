//! Chess rules core: position model, FEN, move generation, legality, and
//! game-state classification.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod error;
mod fen;
mod legal;
mod make_move;
pub mod movegen;
mod notation;
pub mod perft;
mod piece;
mod position;
mod square;
mod status;

pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use error::{FenError, MoveError, PositionError};
pub use fen::STARTING_FEN;
pub use piece::{Color, Piece, PieceKind};
pub use position::{Position, RepetitionKey};
pub use square::Square;
pub use status::Status;
