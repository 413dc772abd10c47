use crate::commands::{dispatch, parse_line, Flow, Parsed, Session};
use crate::error::{recoverable_message, CliError};
use anyhow::{Context as _, Result};
use std::io::{self, BufRead, Write};
use tracing::debug;

pub const WELCOME: &str = "Welcome! This is your assistant.";

/// Reads commands until `close`/`exit` or end of input. Command failures are
/// printed and the loop continues; I/O failures end it.
pub fn run<R: BufRead>(session: &mut Session<'_>, input: R, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "{WELCOME}")?;
    let mut lines = input.lines();
    loop {
        write!(out, "{}", session.config.prompt)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            debug!("end of input");
            writeln!(out)?;
            writeln!(out, "Goodbye!")?;
            return Ok(());
        };
        let line = match line {
            Ok(line) => line,
            // The undecodable line has already been consumed.
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                debug!(error = %err, "unreadable line skipped");
                writeln!(out, "{}", CliError::UnreadableLine)?;
                continue;
            }
            Err(err) => return Err(err).with_context(|| "read command"),
        };

        match handle_line(session, &line, out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => return Ok(()),
            Err(err) => match recoverable_message(&err) {
                Some(message) => {
                    let command = err
                        .chain()
                        .find_map(|cause| cause.downcast_ref::<CliError>())
                        .and_then(CliError::command)
                        .unwrap_or("-");
                    debug!(command, error = %err, "command rejected");
                    writeln!(out, "{message}")?;
                }
                None => return Err(err),
            },
        }
    }
}

pub fn handle_line(session: &mut Session<'_>, line: &str, out: &mut dyn Write) -> Result<Flow> {
    match parse_line(line)? {
        Parsed::Help(help) => {
            writeln!(out, "{help}")?;
            Ok(Flow::Continue)
        }
        Parsed::Command(command) => {
            debug!(?command, "dispatch");
            dispatch(session, command, out)
        }
    }
}
