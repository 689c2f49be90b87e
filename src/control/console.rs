/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use super::command::{Command, CommandError, HELP};
use crate::config::OutputFormat;
use crate::dispatcher::Dispatcher;

/**
 * Line based front end for a dispatcher.
 *
 * Reads one command per line from `input` and writes traces, status reports and
 * error messages to `output`. A bare `status` is printed in `format`. Stops at
 * end of input or on `quit`.
 */
pub fn run_console<R: BufRead, W: Write>(
    dispatcher: &mut Dispatcher,
    input: R,
    output: &mut W,
    format: OutputFormat,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!("Rejected console input '{}': {}", line.trim(), e);
                writeln!(output, "error: {}", e)?;
                continue;
            }
        };

        debug!("Console command: {:?}", command);
        if !execute(dispatcher, command, format, output)? {
            break;
        }
    }
    output.flush()
}

/// Runs a single command. Returns `false` when the console should stop.
pub fn execute<W: Write>(
    dispatcher: &mut Dispatcher,
    command: Command,
    format: OutputFormat,
    output: &mut W,
) -> io::Result<bool> {
    match command {
        Command::Add {
            floor,
            direction,
            priority,
        } => dispatcher.add_request(floor, direction, priority),
        Command::Run => write!(output, "{}", dispatcher.process_requests())?,
        Command::Status { format: requested } => match requested.unwrap_or(format) {
            OutputFormat::Text => write!(output, "{}", dispatcher.status())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *output, &dispatcher.snapshot())?;
                writeln!(output)?;
            }
        },
        Command::Help => write!(output, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}
