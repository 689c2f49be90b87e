/***************************************/
/*        3rd party libraries          */
/***************************************/
use std::num::ParseIntError;
use std::str::FromStr;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::OutputFormat;
use crate::shared::{Direction, ParseDirectionError};

/***************************************/
/*               Enums                 */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add {
        floor: i32,
        direction: Direction,
        priority: i32,
    },
    Run,
    /// `None` uses the configured output format.
    Status { format: Option<OutputFormat> },
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("invalid number: {0}")]
    InvalidNumber(#[from] ParseIntError),
    #[error(transparent)]
    InvalidDirection(#[from] ParseDirectionError),
}

pub const ADD_USAGE: &str = "add <floor> <up|down> <priority>";
pub const STATUS_USAGE: &str = "status [text|json]";

pub const HELP: &str = "\
Commands:
  add <floor> <up|down> <priority>   queue a request
  run                                serve all pending requests
  status [text|json]                 show elevator and queue
  help                               show this text
  quit                               leave the console
";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?;
        let lowered: Vec<String> = words.map(|word| word.to_ascii_lowercase()).collect();
        let args: Vec<&str> = lowered.iter().map(String::as_str).collect();

        match keyword.to_ascii_lowercase().as_str() {
            "add" => match args.as_slice() {
                [floor, direction, priority] => Ok(Command::Add {
                    floor: floor.parse()?,
                    direction: direction.parse()?,
                    priority: priority.parse()?,
                }),
                _ => Err(CommandError::Usage(ADD_USAGE)),
            },
            "run" => Ok(Command::Run),
            "status" => match args.as_slice() {
                [] => Ok(Command::Status { format: None }),
                ["text"] => Ok(Command::Status {
                    format: Some(OutputFormat::Text),
                }),
                ["json"] => Ok(Command::Status {
                    format: Some(OutputFormat::Json),
                }),
                _ => Err(CommandError::Usage(STATUS_USAGE)),
            },
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
