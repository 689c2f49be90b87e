pub mod command;
pub mod console;

pub use command::{Command, CommandError};
pub use console::{execute, run_console};
