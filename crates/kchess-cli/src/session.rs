//! The text session: reads one command per line, replies on the output.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use kchess_game::{Game, GameStatus};

use crate::command::{Command, parse_command};
use crate::config::SessionConfig;
use crate::error::CliError;

const HELP: &str = "\
commands:
  new                               start a new game
  position startpos|fen <FEN> [moves <m>...]
                                    set up a position and play moves
  fen                               print the current position
  board                             print the board
  moves <square>                    legal moves of the piece on <square>
  play <move>                       play e2e4, e7e8q, Nf3, O-O, exd6 e.p.
  undo                              take back the last move
  status                            check, mate, draw, or in progress
  history                           the numbered move list
  set <auto_draw|show_board> <on|off>
  resign                            the side to move resigns
  draw                              claim an available draw
  quit                              leave";

/// What the loop does after a command.
enum Flow {
    Continue,
    Quit,
}

/// A game plus the options it is played under.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a new game from the starting position.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: Game::new().with_auto_draw(config.auto_draw),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run until `quit` or end of input.
    ///
    /// A command that fails gets an `error: ...` reply and changes nothing;
    /// only I/O errors end the session early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<(), CliError> {
        info!("session started");
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let outcome = parse_command(trimmed).and_then(|cmd| self.execute(cmd, out));
            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(CliError::Io { source }) => return Err(CliError::Io { source }),
                Err(e) => {
                    warn!(error = %e, cmd = %trimmed, "command failed");
                    writeln!(out, "error: {e}")?;
                }
            }
            out.flush()?;
        }
        info!("session closed");
        Ok(())
    }

    fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<Flow, CliError> {
        match cmd {
            Command::New => {
                self.game = Game::new().with_auto_draw(self.config.auto_draw);
                writeln!(out, "ok")?;
            }
            Command::Fen => writeln!(out, "{}", self.game.fen())?,
            Command::Position { start, moves } => {
                let mut game = Game::from_position(start).with_auto_draw(self.config.auto_draw);
                for text in moves {
                    game.play_text(&text)
                        .map_err(|source| CliError::InvalidMove { text, source })?;
                }
                self.game = game;
                writeln!(out, "ok")?;
            }
            Command::Moves(square) => {
                let listed: Vec<String> = if self.game.is_over() {
                    Vec::new()
                } else {
                    self.game
                        .position()
                        .legal_moves(square)
                        .into_iter()
                        .map(|mv| mv.notation())
                        .collect()
                };
                if listed.is_empty() {
                    writeln!(out, "{square}: none")?;
                } else {
                    writeln!(out, "{square}: {}", listed.join(" "))?;
                }
            }
            Command::Play(text) => {
                let status = self
                    .game
                    .play_text(&text)
                    .map_err(|source| CliError::InvalidMove { text, source })?;
                if let Some(&mv) = self.game.moves().last() {
                    writeln!(out, "played {}", mv.notation())?;
                }
                if self.config.show_board {
                    self.write_board(out)?;
                }
                if status != GameStatus::InProgress {
                    writeln!(out, "{status}")?;
                }
            }
            Command::Undo => {
                let mv = self.game.undo()?;
                writeln!(out, "took back {}", mv.notation())?;
            }
            Command::Status => writeln!(out, "{}", self.game.status())?,
            Command::Board => self.write_board(out)?,
            Command::History => {
                let history = self.game.numbered_history();
                if history.is_empty() {
                    writeln!(out, "no moves")?;
                } else {
                    writeln!(out, "{history}")?;
                }
            }
            Command::Set { name, value } => {
                let mut config = self.config;
                config.set(&name, &value)?;
                self.config = config;
                self.game.set_auto_draw(config.auto_draw);
                debug!(%name, %value, "option set");
                writeln!(out, "ok")?;
            }
            Command::Resign => {
                let result = self.game.resign(self.game.side_to_move())?;
                writeln!(out, "{result} ({})", result.score())?;
            }
            Command::Draw => {
                let result = self.game.claim_draw()?;
                writeln!(out, "{result} ({})", result.score())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
            Command::Unknown(name) => return Err(CliError::UnknownCommand { name }),
        }
        Ok(Flow::Continue)
    }

    fn write_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let position = self.game.position();
        writeln!(out, "{}", position.board().pretty())?;
        writeln!(out, "{} to move", position.side_to_move().name())?;
        Ok(())
    }
}
