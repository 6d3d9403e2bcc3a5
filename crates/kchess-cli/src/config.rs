//! Session options: startup flags, the `KCHESS_LOG` variable, and `set`.

use tracing::Level;

use crate::error::CliError;

/// Environment variable holding the default log level.
pub const LOG_ENV: &str = "KCHESS_LOG";

/// Configuration knobs for a text session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum level written to stderr.
    pub log_level: Level,
    /// Draw rules end the game on their own instead of becoming claimable.
    pub auto_draw: bool,
    /// Print the board after every move.
    pub show_board: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            log_level: Level::WARN,
            auto_draw: true,
            show_board: false,
        }
    }
}

impl SessionConfig {
    /// Build the startup configuration. Later sources win: defaults, then
    /// the `KCHESS_LOG` value, then command-line flags.
    pub fn from_sources<I>(env_level: Option<&str>, args: I) -> Result<SessionConfig, CliError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut config = SessionConfig::default();

        if let Some(value) = env_level {
            config.log_level = value.trim().parse().map_err(|_| CliError::InvalidOptionValue {
                name: LOG_ENV.to_string(),
                value: value.to_string(),
            })?;
        }

        for arg in args {
            match arg.as_ref() {
                "--debug" => config.log_level = Level::DEBUG,
                "--quiet" => config.log_level = Level::ERROR,
                "--no-auto-draw" => config.auto_draw = false,
                "--show-board" => config.show_board = true,
                other => {
                    return Err(CliError::UnknownFlag {
                        flag: other.to_string(),
                    });
                }
            }
        }

        Ok(config)
    }

    /// Change an option at runtime (`set auto_draw off`).
    ///
    /// The log level is fixed once the subscriber is installed, so only
    /// `auto_draw` and `show_board` can be set.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), CliError> {
        let slot = match name {
            "auto_draw" => &mut self.auto_draw,
            "show_board" => &mut self.show_board,
            _ => {
                return Err(CliError::UnknownOption {
                    name: name.to_string(),
                });
            }
        };
        *slot = parse_switch(value).ok_or_else(|| CliError::InvalidOptionValue {
            name: name.to_string(),
            value: value.to_string(),
        })?;
        Ok(())
    }
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: [&str; 0] = [];

    #[test]
    fn defaults() {
        let config = SessionConfig::from_sources(None, NO_ARGS).unwrap();
        assert_eq!(config, SessionConfig::default());
        assert!(config.auto_draw);
        assert!(!config.show_board);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn env_sets_the_level() {
        let config = SessionConfig::from_sources(Some("info"), NO_ARGS).unwrap();
        assert_eq!(config.log_level, Level::INFO);
        assert!(SessionConfig::from_sources(Some("loud"), NO_ARGS).is_err());
    }

    #[test]
    fn flags_override_env() {
        let config =
            SessionConfig::from_sources(Some("error"), ["--debug", "--no-auto-draw"]).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(!config.auto_draw);

        let config = SessionConfig::from_sources(Some("trace"), ["--quiet", "--show-board"]).unwrap();
        assert_eq!(config.log_level, Level::ERROR);
        assert!(config.show_board);
    }

    #[test]
    fn unknown_flag() {
        let err = SessionConfig::from_sources(None, ["--fast"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownFlag { flag } if flag == "--fast"));
    }

    #[test]
    fn set_at_runtime() {
        let mut config = SessionConfig::default();
        config.set("auto_draw", "off").unwrap();
        config.set("show_board", "true").unwrap();
        assert!(!config.auto_draw);
        assert!(config.show_board);

        assert!(matches!(config.set("hash", "16"), Err(CliError::UnknownOption { .. })));
        assert!(matches!(
            config.set("auto_draw", "maybe"),
            Err(CliError::InvalidOptionValue { .. })
        ));
        assert!(config.show_board, "a rejected value changes nothing");
    }
}
