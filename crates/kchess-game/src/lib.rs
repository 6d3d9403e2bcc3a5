//! Game sessions on top of the rules core: move list, draw rules, results,
//! and undo.

pub mod draw;
mod error;
mod game;

pub use draw::DrawReason;
pub use error::GameError;
pub use game::{Game, GameResult, GameStatus, WinReason};
