//! Player commands.

use crate::rooms::Direction;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for command parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Invalid command: {0:?}")]
    InvalidCommand(String),
}

/// Something the player asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    Back,
    Review,
    Help,
    Quit,
}

impl Command {
    /// Usage text listing every command and its short forms.
    pub const HELP: &'static str = "\
Commands:
  left   (l, e)        - go to the room on the left
  right  (r, d)        - go to the room on the right
  back   (b, u)        - return to the previous room
  review (v)           - list clues and suspects so far
  help   (h, ?)        - show this help
  quit   (q, s, exit)  - end the investigation and name a suspect";

    /// Parse one line of player input. Case and surrounding space are ignored.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        match input.trim().to_lowercase().as_str() {
            "left" | "l" | "e" => Ok(Command::Move(Direction::Left)),
            "right" | "r" | "d" => Ok(Command::Move(Direction::Right)),
            "back" | "b" | "up" | "u" => Ok(Command::Back),
            "review" | "v" => Ok(Command::Review),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "s" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::InvalidCommand(input.trim().to_string())),
        }
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Move(direction) => write!(f, "{direction}"),
            Command::Back => write!(f, "back"),
            Command::Review => write!(f, "review"),
            Command::Help => write!(f, "help"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_and_short_forms() {
        assert_eq!(Command::parse("left"), Ok(Command::Move(Direction::Left)));
        assert_eq!(Command::parse("e"), Ok(Command::Move(Direction::Left)));
        assert_eq!(Command::parse("d"), Ok(Command::Move(Direction::Right)));
        assert_eq!(Command::parse("v"), Ok(Command::Review));
        assert_eq!(Command::parse("b"), Ok(Command::Back));
        assert_eq!(Command::parse("up"), Ok(Command::Back));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("s"), Ok(Command::Quit));
        assert_eq!(Command::parse("exit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_ignores_case_and_whitespace() {
        assert_eq!(
            "  RIGHT \n".parse::<Command>(),
            Ok(Command::Move(Direction::Right))
        );
        assert_eq!("Review".parse::<Command>(), Ok(Command::Review));
    }

    #[test]
    fn test_invalid_command() {
        assert_eq!(
            Command::parse(" dance "),
            Err(CommandError::InvalidCommand("dance".to_string()))
        );
        assert!(Command::parse("").is_err());
        assert_eq!(
            Command::parse("upstairs").unwrap_err().to_string(),
            "Invalid command: \"upstairs\""
        );
    }

    #[test]
    fn test_display_round_trips() {
        for command in [
            Command::Move(Direction::Left),
            Command::Move(Direction::Right),
            Command::Back,
            Command::Review,
            Command::Help,
            Command::Quit,
        ] {
            assert_eq!(Command::parse(&command.to_string()), Ok(command));
        }
    }
}
