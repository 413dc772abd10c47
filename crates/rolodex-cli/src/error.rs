use anyhow::Error;
use rolodex_config::ConfigError;
use rolodex_core::time::TimeParseError;
use rolodex_store::{StoreError, StoreErrorKind};
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INVALID_INPUT: u8 = 3;

/// Failures of a single command line. The loop prints them and keeps going;
/// only [`CliError::InvalidNow`] is raised before the loop starts.
#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("No input.")]
    NoInput,
    #[error("Invalid command.")]
    UnknownCommand(String),
    #[error("Invalid input.")]
    UnreadableLine,
    #[error("{usage}")]
    MalformedCommand {
        command: &'static str,
        usage: &'static str,
    },
    #[error("Contact was not added. {}", rejection_message(.0))]
    NotAdded(#[source] StoreError),
    #[error("{}", rejection_message(.0))]
    Rejected(#[source] StoreError),
    #[error("invalid --now value: {0}")]
    InvalidNow(#[source] TimeParseError),
}

impl CliError {
    pub fn command(&self) -> Option<&str> {
        match self {
            CliError::UnknownCommand(command) => Some(command),
            CliError::MalformedCommand { command, .. } => Some(command),
            _ => None,
        }
    }

    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CliError::InvalidNow(_))
    }
}

pub fn not_found_message(name: &str) -> String {
    format!("No contact found with the name {name}.")
}

pub fn rejection_message(err: &StoreError) -> String {
    match (err.kind(), err) {
        (StoreErrorKind::InvalidName, _) => "Name cannot be empty.".to_string(),
        (StoreErrorKind::InvalidPhone, _) => "Phone number must be 10 digits.".to_string(),
        (StoreErrorKind::InvalidBirthday, _) => {
            "Wrong input. Make sure you use the format DD.MM.YYYY.".to_string()
        }
        (StoreErrorKind::NotFound, StoreError::NotFound(name)) => not_found_message(name),
        _ => err.to_string(),
    }
}

/// The line to show for a command that failed without ending the session.
pub fn recoverable_message(err: &Error) -> Option<String> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .filter(|cli_err| cli_err.is_recoverable())
        .map(ToString::to_string)
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidNow(_) => EXIT_INVALID_INPUT,
                _ => EXIT_FAILURE,
            });
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidWindowDays(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
