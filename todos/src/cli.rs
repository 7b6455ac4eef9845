//! Commands understood by the terminal front end.

use crate::actions::{ActionDecodeError, TodoAction};
use crate::types::{Filter, TodoId};
use std::str::FromStr;

/// One line of user input
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `add <text>`
    Add(String),
    /// `toggle <id>`
    Toggle(TodoId),
    /// `show all|active|completed`
    Show(Filter),
    /// `clear`: delete completed todos
    Clear,
    /// `dispatch <json>`: send a raw action
    Dispatch(TodoAction),
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Errors raised while parsing a command line
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The line was empty
    #[error("empty command")]
    Empty,

    /// The first word is not a command
    #[error("unknown command \"{0}\", try \"help\"")]
    Unknown(String),

    /// A required argument is missing
    #[error("usage: {0}")]
    Usage(&'static str),

    /// `toggle` was given something other than a number
    #[error("invalid todo id \"{0}\"")]
    InvalidId(String),

    /// `show` was given an unknown filter name
    #[error("unknown filter \"{0}\", expected all, active or completed")]
    InvalidFilter(String),

    /// `dispatch` was given an undecodable action
    #[error(transparent)]
    Decode(#[from] ActionDecodeError),
}

/// Help text printed by the `help` command
pub const HELP: &str = "\
commands:
  add <text>                   add a todo
  toggle <id>                  toggle a todo
  show all|active|completed    change the filter
  clear                        delete completed todos
  dispatch <json>              send a raw action, e.g. {\"type\":\"SHOW_ACTIVE\"}
  help                         show this help
  quit                         exit";

fn parse_filter(name: &str) -> Option<Filter> {
    match name.to_ascii_lowercase().as_str() {
        "all" => Some(Filter::ShowAll),
        "active" => Some(Filter::ShowActive),
        "completed" => Some(Filter::ShowCompleted),
        _ => name.parse().ok(),
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        match word {
            "" => Err(CommandError::Empty),
            "add" => Ok(Self::Add(rest.to_string())),
            "toggle" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("toggle <id>"));
                }
                rest.parse::<u64>()
                    .map(|id| Self::Toggle(TodoId::new(id)))
                    .map_err(|_| CommandError::InvalidId(rest.to_string()))
            },
            "show" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("show all|active|completed"));
                }
                parse_filter(rest)
                    .map(Self::Show)
                    .ok_or_else(|| CommandError::InvalidFilter(rest.to_string()))
            },
            "clear" => Ok(Self::Clear),
            "dispatch" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("dispatch <json>"));
                }
                Ok(Self::Dispatch(TodoAction::from_json(rest)?))
            },
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
