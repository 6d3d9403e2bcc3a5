//! Errors from game-level actions.

use kchess_core::MoveError;

use crate::game::GameResult;

/// Errors that occur when acting on a [`Game`](crate::Game).
///
/// A failed action never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(transparent)]
    Move(#[from] MoveError),

    #[error("the game is over: {result}")]
    Finished { result: GameResult },

    #[error("no move to undo")]
    NothingToUndo,

    #[error("no draw can be claimed in this position")]
    NoDrawToClaim,
}
