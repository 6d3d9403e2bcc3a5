//! A game: a start position, the moves played from it, and how it ended.

use std::fmt;

use kchess_core::{Color, FenError, Move, Position, RepetitionKey, Square, Status};

use crate::draw::{DrawReason, detect_draw};
use crate::error::GameError;

/// How a decisive game was won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinReason {
    Checkmate,
    Resignation,
}

/// The outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    Win { winner: Color, reason: WinReason },
    Draw { reason: DrawReason },
}

impl GameResult {
    /// Score in the usual `1-0` / `0-1` / `1/2-1/2` form.
    pub fn score(self) -> &'static str {
        match self {
            GameResult::Win {
                winner: Color::White,
                ..
            } => "1-0",
            GameResult::Win {
                winner: Color::Black,
                ..
            } => "0-1",
            GameResult::Draw { .. } => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::Win { winner, reason } => {
                let how = match reason {
                    WinReason::Checkmate => "checkmate",
                    WinReason::Resignation => "resignation",
                };
                write!(f, "{} wins by {how}", winner.name())
            }
            GameResult::Draw { reason } => write!(f, "draw by {reason}"),
        }
    }
}

/// Where a game stands after the last action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    InProgress,
    /// The side to move is in check and has a way out.
    Check,
    /// A draw rule applies but automatic draws are off; play may continue.
    DrawClaimable(DrawReason),
    Over(GameResult),
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => f.write_str("in progress"),
            GameStatus::Check => f.write_str("check"),
            GameStatus::DrawClaimable(reason) => write!(f, "draw claimable ({reason})"),
            GameStatus::Over(result) => write!(f, "{result} ({})", result.score()),
        }
    }
}

/// A game in progress or finished.
///
/// Every accepted move is applied to a copy of the current position; a
/// rejected action leaves the game exactly as it was.
#[derive(Debug, Clone)]
pub struct Game {
    start: Position,
    current: Position,
    seen: Vec<RepetitionKey>,
    auto_draw: bool,
    ended: Option<GameResult>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new() -> Game {
        Game::from_position(Position::starting_position())
    }

    /// A game starting from a FEN position.
    pub fn from_fen(fen: &str) -> Result<Game, FenError> {
        Ok(Game::from_position(fen.parse()?))
    }

    /// A game starting from `position`.
    pub fn from_position(position: Position) -> Game {
        let seen = vec![position.repetition_key()];
        Game {
            start: position.clone(),
            current: position,
            seen,
            auto_draw: true,
            ended: None,
        }
    }

    /// Set whether draw rules end the game on their own (the default) or
    /// only make a draw claimable.
    pub fn with_auto_draw(mut self, auto_draw: bool) -> Game {
        self.auto_draw = auto_draw;
        self
    }

    pub fn set_auto_draw(&mut self, auto_draw: bool) {
        self.auto_draw = auto_draw;
    }

    pub fn auto_draw(&self) -> bool {
        self.auto_draw
    }

    /// The current position.
    pub fn position(&self) -> &Position {
        &self.current
    }

    pub fn start_position(&self) -> &Position {
        &self.start
    }

    pub fn side_to_move(&self) -> Color {
        self.current.side_to_move()
    }

    pub fn fen(&self) -> String {
        self.current.to_fen()
    }

    /// Moves played since the start position, oldest first.
    pub fn moves(&self) -> &[Move] {
        &self.current.history()[self.start.history().len()..]
    }

    /// Classify the game: checkmate, stalemate, draw rules, check, in
    /// progress, in that priority. A resignation or claimed draw comes first.
    pub fn status(&self) -> GameStatus {
        if let Some(result) = self.ended {
            return GameStatus::Over(result);
        }

        match self.current.status() {
            Status::Checkmate => {
                return GameStatus::Over(GameResult::Win {
                    winner: !self.current.side_to_move(),
                    reason: WinReason::Checkmate,
                });
            }
            Status::Stalemate => {
                return GameStatus::Over(GameResult::Draw {
                    reason: DrawReason::Stalemate,
                });
            }
            Status::Check | Status::InProgress => {}
        }

        if let Some(reason) = detect_draw(&self.current, &self.seen) {
            return if self.auto_draw {
                GameStatus::Over(GameResult::Draw { reason })
            } else {
                GameStatus::DrawClaimable(reason)
            };
        }

        if self.current.is_in_check(self.current.side_to_move()) {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }

    /// The result, once the game is over.
    pub fn result(&self) -> Option<GameResult> {
        match self.status() {
            GameStatus::Over(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    fn ensure_playing(&self) -> Result<(), GameError> {
        match self.result() {
            Some(result) => Err(GameError::Finished { result }),
            None => Ok(()),
        }
    }

    /// Play a move and return the new status.
    pub fn play(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        self.ensure_playing()?;
        let next = self.current.apply_move(mv)?;
        tracing::debug!(%mv, fen = %next, "move played");
        self.seen.push(next.repetition_key());
        self.current = next;

        let status = self.status();
        if let GameStatus::Over(result) = status {
            tracing::info!(%result, "game over");
        }
        Ok(status)
    }

    /// Play a move given in coordinate form (`e2e4`, `e7e8q`).
    pub fn play_uci(&mut self, text: &str) -> Result<GameStatus, GameError> {
        self.ensure_playing()?;
        let mv = self.current.parse_uci(text)?;
        self.play(mv)
    }

    /// Play a move given in display notation (`Nf3`, `exd5`, `O-O`).
    pub fn play_notation(&mut self, text: &str) -> Result<GameStatus, GameError> {
        self.ensure_playing()?;
        let mv = self.current.parse_notation(text)?;
        self.play(mv)
    }

    /// Play a move given in either form.
    pub fn play_text(&mut self, text: &str) -> Result<GameStatus, GameError> {
        self.ensure_playing()?;
        let mv = self.current.parse_move(text)?;
        self.play(mv)
    }

    /// `color` resigns; the other side wins.
    pub fn resign(&mut self, color: Color) -> Result<GameResult, GameError> {
        self.ensure_playing()?;
        let result = GameResult::Win {
            winner: !color,
            reason: WinReason::Resignation,
        };
        tracing::info!(%result, "game over");
        self.ended = Some(result);
        Ok(result)
    }

    /// End the game as a draw when a draw rule applies but was not applied
    /// automatically.
    pub fn claim_draw(&mut self) -> Result<GameResult, GameError> {
        self.ensure_playing()?;
        let reason = detect_draw(&self.current, &self.seen).ok_or(GameError::NoDrawToClaim)?;
        let result = GameResult::Draw { reason };
        tracing::info!(%result, "draw claimed");
        self.ended = Some(result);
        Ok(result)
    }

    /// Take back the last move by replaying every earlier move from the start
    /// position. Also reopens a game ended by resignation or a claimed draw.
    pub fn undo(&mut self) -> Result<Move, GameError> {
        let Some((&last, earlier)) = self.moves().split_last() else {
            return Err(GameError::NothingToUndo);
        };
        let earlier = earlier.to_vec();

        let mut position = self.start.clone();
        let mut seen = vec![position.repetition_key()];
        for mv in earlier {
            position = position.apply_move(mv)?;
            seen.push(position.repetition_key());
        }

        tracing::debug!(mv = %last, "move taken back");
        self.current = position;
        self.seen = seen;
        self.ended = None;
        Ok(last)
    }

    /// Display notation of every move played, oldest first.
    pub fn notation_history(&self) -> Vec<String> {
        self.moves().iter().map(|mv| mv.notation()).collect()
    }

    /// The move list as numbered text: `1. e4 e5 2. Nf3`.
    ///
    /// A game that starts with Black to move opens with `1...`.
    pub fn numbered_history(&self) -> String {
        let mut parts = Vec::new();
        let mut number = u64::from(self.start.fullmove_number());
        let mut color = self.start.side_to_move();

        for (index, notation) in self.notation_history().into_iter().enumerate() {
            match color {
                Color::White => parts.push(format!("{number}.")),
                Color::Black if index == 0 => parts.push(format!("{number}...")),
                Color::Black => {}
            }
            parts.push(notation);
            if color == Color::Black {
                number += 1;
            }
            color = !color;
        }
        parts.join(" ")
    }

    /// Target squares of the piece on `sq`, each listed once, for highlighting.
    /// Empty once the game is over.
    pub fn legal_destinations(&self, sq: Square) -> Vec<Square> {
        if self.is_over() {
            return Vec::new();
        }
        let mut targets: Vec<Square> = Vec::new();
        for mv in self.current.legal_moves(sq) {
            if !targets.contains(&mv.dest()) {
                targets.push(mv.dest());
            }
        }
        targets
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_display_and_score() {
        let mate = GameResult::Win {
            winner: Color::Black,
            reason: WinReason::Checkmate,
        };
        assert_eq!(mate.to_string(), "black wins by checkmate");
        assert_eq!(mate.score(), "0-1");
        let draw = GameResult::Draw {
            reason: DrawReason::ThreefoldRepetition,
        };
        assert_eq!(draw.to_string(), "draw by threefold repetition");
        assert_eq!(draw.score(), "1/2-1/2");
    }

    #[test]
    fn status_display() {
        assert_eq!(GameStatus::InProgress.to_string(), "in progress");
        let over = GameStatus::Over(GameResult::Win {
            winner: Color::White,
            reason: WinReason::Resignation,
        });
        assert_eq!(over.to_string(), "white wins by resignation (1-0)");
        assert!(over.is_over());
    }

    #[test]
    fn new_game_starts_clean() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.moves().is_empty());
        assert!(game.auto_draw());
        assert_eq!(game.result(), None);
    }

    #[test]
    fn numbered_history_from_black() {
        let mut game =
            Game::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1").unwrap();
        game.play_text("e5").unwrap();
        game.play_text("Nf3").unwrap();
        assert_eq!(game.numbered_history(), "1... e5 2. Nf3");
    }

    #[test]
    fn destinations_are_deduplicated() {
        let game = Game::from_fen("4k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let a8 = Square::from_algebraic("a8").unwrap();
        assert_eq!(game.legal_destinations(Square::from_algebraic("a7").unwrap()), vec![a8]);
    }
}
