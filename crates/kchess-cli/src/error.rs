//! Text session errors.

use kchess_core::FenError;
use kchess_game::GameError;

/// Errors that can occur while reading or running a session command.
///
/// Everything except [`CliError::Io`] is reported to the user and the
/// session carries on.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The word that was not recognised.
        name: String,
    },

    /// A command was given without an argument it needs.
    #[error("{command}: missing {what}")]
    MissingArgument {
        /// The command name.
        command: &'static str,
        /// What was expected.
        what: &'static str,
    },

    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: missing startpos or fen keyword")]
    MalformedPosition,

    /// A square argument could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The text that is not a square.
        text: String,
    },

    /// Failed to parse a FEN string.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN string that failed to parse.
        fen: String,
        /// Why it was rejected.
        source: FenError,
    },

    /// A move was rejected by the game.
    #[error("invalid move {text}: {source}")]
    InvalidMove {
        /// The move text as typed.
        text: String,
        /// Why it was rejected.
        source: GameError,
    },

    /// A game action other than a move failed.
    #[error(transparent)]
    Game(#[from] GameError),

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// An option or flag value could not be parsed.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: String,
        /// The rejected value.
        value: String,
    },

    /// A command-line flag that is not recognised.
    #[error("unknown flag: {flag}")]
    UnknownFlag {
        /// The flag as given.
        flag: String,
    },

    /// An I/O error occurred while reading commands or writing replies.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
