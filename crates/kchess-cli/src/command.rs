//! Session command parsing.

use kchess_core::{Position, Square};

use crate::error::CliError;

/// A parsed session command.
#[derive(Debug)]
pub enum Command {
    /// `new` -- start over from the standard position.
    New,
    /// `fen` -- print the current position as FEN.
    Fen,
    /// `position` -- start from a given position and play the listed moves.
    Position {
        start: Position,
        moves: Vec<String>,
    },
    /// `moves <square>` -- list the legal moves of one piece.
    Moves(Square),
    /// `play <move>` -- coordinate (`e2e4`) or notation (`Nf3`) form.
    Play(String),
    /// `undo` -- take back the last move.
    Undo,
    /// `status` -- check, mate, draw, or in progress.
    Status,
    /// `board` -- print the board.
    Board,
    /// `history` -- print the numbered move list.
    History,
    /// `set <name> <value>` -- change a session option.
    Set { name: String, value: String },
    /// `resign` -- the side to move resigns.
    Resign,
    /// `draw` -- claim a draw that was not applied automatically.
    Draw,
    /// `help` -- list the commands.
    Help,
    /// `quit` -- end the session.
    Quit,
    /// Unrecognized command, reported by the session.
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "fen" => Ok(Command::Fen),
        "undo" => Ok(Command::Undo),
        "status" => Ok(Command::Status),
        "board" => Ok(Command::Board),
        "history" => Ok(Command::History),
        "resign" => Ok(Command::Resign),
        "draw" => Ok(Command::Draw),
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "moves" => {
            let text = argument(&tokens, "moves", "square")?;
            let square = text.parse().map_err(|_| CliError::InvalidSquare {
                text: text.to_string(),
            })?;
            Ok(Command::Moves(square))
        }
        "play" => {
            // "play exd6 e.p." keeps the suffix
            argument(&tokens, "play", "move")?;
            Ok(Command::Play(tokens[1..].join(" ")))
        }
        "set" => {
            let name = argument(&tokens, "set", "option name")?;
            let value = tokens.get(2).ok_or(CliError::MissingArgument {
                command: "set",
                what: "option value",
            })?;
            Ok(Command::Set {
                name: name.to_string(),
                value: value.to_string(),
            })
        }
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn argument<'a>(
    tokens: &[&'a str],
    command: &'static str,
    what: &'static str,
) -> Result<&'a str, CliError> {
    tokens
        .get(1)
        .copied()
        .ok_or(CliError::MissingArgument { command, what })
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 e7e5 ...]`
/// - `position fen <fen-string> [moves e2e4 e7e5 ...]`
fn parse_position(tokens: &[&str]) -> Result<Command, CliError> {
    if tokens.is_empty() {
        return Err(CliError::MalformedPosition);
    }

    let (start, rest) = if tokens[0] == "startpos" {
        (Position::starting_position(), &tokens[1..])
    } else if tokens[0] == "fen" {
        let fields = &tokens[1..];
        let end = fields
            .iter()
            .position(|&t| t == "moves")
            .unwrap_or(fields.len());
        let fen = fields[..end].join(" ");
        let start: Position = fen.parse().map_err(|source| CliError::InvalidFen {
            fen: fen.clone(),
            source,
        })?;
        (start, &fields[end..])
    } else {
        return Err(CliError::MalformedPosition);
    };

    let moves = match rest.split_first() {
        None => Vec::new(),
        Some((&"moves", listed)) => listed.iter().map(|m| m.to_string()).collect(),
        Some(_) => return Err(CliError::MalformedPosition),
    };

    Ok(Command::Position { start, moves })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("new").unwrap(), Command::New));
        assert!(matches!(parse_command("fen").unwrap(), Command::Fen));
        assert!(matches!(parse_command("undo").unwrap(), Command::Undo));
        assert!(matches!(parse_command("  status  ").unwrap(), Command::Status));
        assert!(matches!(parse_command("draw").unwrap(), Command::Draw));
        assert!(matches!(parse_command("quit").unwrap(), Command::Quit));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Command::Position { start, moves } => {
                assert_eq!(start, Position::starting_position());
                assert_eq!(moves, vec!["e2e4", "e7e5"]);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let fen = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1";
        match parse_command(&format!("position fen {fen} moves e5")).unwrap() {
            Command::Position { start, moves } => {
                assert_eq!(start.to_fen(), fen);
                assert_eq!(moves, vec!["e5"]);
            }
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position"), Err(CliError::MalformedPosition)));
        assert!(matches!(parse_command("position here"), Err(CliError::MalformedPosition)));
        assert!(matches!(
            parse_command("position fen invalid"),
            Err(CliError::InvalidFen { .. })
        ));
        assert!(matches!(
            parse_command("position startpos e2e4"),
            Err(CliError::MalformedPosition)
        ));
    }

    #[test]
    fn parse_moves_square() {
        match parse_command("moves g1").unwrap() {
            Command::Moves(sq) => assert_eq!(sq.to_string(), "g1"),
            other => panic!("expected Moves, got {other:?}"),
        }
        assert!(matches!(parse_command("moves z9"), Err(CliError::InvalidSquare { .. })));
        assert!(matches!(parse_command("moves"), Err(CliError::MissingArgument { .. })));
    }

    #[test]
    fn parse_play_keeps_suffix() {
        match parse_command("play exd6 e.p.").unwrap() {
            Command::Play(text) => assert_eq!(text, "exd6 e.p."),
            other => panic!("expected Play, got {other:?}"),
        }
        assert!(matches!(parse_command("play"), Err(CliError::MissingArgument { .. })));
    }

    #[test]
    fn parse_set() {
        match parse_command("set auto_draw off").unwrap() {
            Command::Set { name, value } => {
                assert_eq!(name, "auto_draw");
                assert_eq!(value, "off");
            }
            other => panic!("expected Set, got {other:?}"),
        }
        assert!(matches!(parse_command("set auto_draw"), Err(CliError::MissingArgument { .. })));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert!(matches!(parse_command("foobar").unwrap(), Command::Unknown(name) if name == "foobar"));
        assert!(matches!(parse_command("").unwrap(), Command::Unknown(name) if name.is_empty()));
    }
}
