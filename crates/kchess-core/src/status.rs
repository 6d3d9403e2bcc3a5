//! Check, checkmate and stalemate classification.

use std::fmt;

use crate::piece::Color;
use crate::position::Position;

/// Where the side to move stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// In check with no legal move. The side to move has lost.
    Checkmate,
    /// Not in check, no legal move. Drawn.
    Stalemate,
    /// In check with at least one legal move.
    Check,
    InProgress,
}

impl Status {
    /// Return `true` if play cannot continue.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
            Status::Check => "check",
            Status::InProgress => "in progress",
        })
    }
}

impl Position {
    /// Return `true` if the king of `color` is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        self.board().is_in_check(color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Classify the position for the side to move.
    ///
    /// Check is computed first and the move search second, so a mated side
    /// is never reported as stalemated.
    pub fn status(&self) -> Status {
        let color = self.side_to_move();
        let in_check = self.is_in_check(color);
        let can_move = self.has_any_legal_move(color);
        match (in_check, can_move) {
            (true, false) => Status::Checkmate,
            (false, false) => Status::Stalemate,
            (true, true) => Status::Check,
            (false, true) => Status::InProgress,
        }
    }
}
