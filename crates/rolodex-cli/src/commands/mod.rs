use crate::error::CliError;
use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand};
use rolodex_config::AppConfig;
use rolodex_store::ContactStore;
use serde::Serialize;
use std::io::Write;

pub mod birthdays;
pub mod contacts;


const NO_ARGUMENTS: &str = "This command takes no arguments.";
const NAME_TO_SEARCH: &str = "Please provide a name to search for.";

/// Command names accepted at the prompt, with the message shown when the
/// arguments don't fit.
const COMMANDS: [(&str, &str); 10] = [
    ("hello", NO_ARGUMENTS),
    (
        "add",
        "Invalid number of arguments. Please provide name and phone (and optional birthday).",
    ),
    (
        "change",
        "Invalid number of arguments. Please provide name and new phone.",
    ),
    ("all", NO_ARGUMENTS),
    ("phone", NAME_TO_SEARCH),
    (
        "add-birthday",
        "Invalid number of arguments. Please provide name and birthday.",
    ),
    ("show-birthday", NAME_TO_SEARCH),
    ("birthdays", NO_ARGUMENTS),
    ("close", NO_ARGUMENTS),
    ("exit", NO_ARGUMENTS),
];

pub struct Session<'a> {
    pub store: ContactStore,
    pub config: &'a AppConfig,
    pub json: bool,
    /// Pinned reference instant for `birthdays`; local time when unset.
    pub now: Option<NaiveDateTime>,
}

impl<'a> Session<'a> {
    pub fn new(config: &'a AppConfig, json: bool, now: Option<NaiveDateTime>) -> Self {
        Self {
            store: ContactStore::new(),
            config,
            json,
            now,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "rolodex",
    no_binary_name = true,
    help_template = "Commands:\n{subcommands}"
)]
struct Line {
    #[command(subcommand)]
    command: LineCommand,
}

#[derive(Debug, Subcommand)]
pub enum LineCommand {
    /// Say hello
    Hello,
    /// Add a contact, replacing any contact with the same name
    Add(contacts::AddArgs),
    /// Replace a contact's phone number
    Change(contacts::ChangeArgs),
    /// List every contact
    All,
    /// Show a contact's phone number
    Phone(contacts::NameArgs),
    /// Set a contact's birthday (DD.MM.YYYY)
    AddBirthday(birthdays::AddBirthdayArgs),
    /// Show a contact's birthday
    ShowBirthday(contacts::NameArgs),
    /// Show upcoming birthdays grouped by weekday
    Birthdays,
    /// Leave the assistant
    #[command(alias = "exit")]
    Close,
}

#[derive(Debug)]
pub enum Parsed {
    Command(LineCommand),
    Help(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Splits a prompt line on whitespace. The command name is matched
/// case-insensitively; arguments are kept as typed.
pub fn parse_line(line: &str) -> Result<Parsed, CliError> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let Some(first) = tokens.first_mut() else {
        return Err(CliError::NoInput);
    };
    *first = first.to_lowercase();

    if first.as_str() == "help" {
        let help = Line::command().render_help().to_string();
        return Ok(Parsed::Help(help.trim_end().to_string()));
    }

    let (command, usage) = COMMANDS
        .iter()
        .copied()
        .find(|(name, _)| *name == first.as_str())
        .ok_or_else(|| CliError::UnknownCommand(first.clone()))?;

    Line::try_parse_from(tokens)
        .map(|line| Parsed::Command(line.command))
        .map_err(|_| CliError::MalformedCommand { command, usage })
}

pub fn dispatch(
    session: &mut Session<'_>,
    command: LineCommand,
    out: &mut dyn Write,
) -> Result<Flow> {
    match command {
        LineCommand::Hello => writeln!(out, "How can I help you?")?,
        LineCommand::Add(args) => contacts::add_contact(session, out, args)?,
        LineCommand::Change(args) => contacts::change_phone(session, out, args)?,
        LineCommand::All => contacts::list_contacts(session, out)?,
        LineCommand::Phone(args) => contacts::show_phone(session, out, args)?,
        LineCommand::AddBirthday(args) => birthdays::add_birthday(session, out, args)?,
        LineCommand::ShowBirthday(args) => birthdays::show_birthday(session, out, args)?,
        LineCommand::Birthdays => birthdays::upcoming(session, out)?,
        LineCommand::Close => {
            writeln!(out, "Goodbye!")?;
            return Ok(Flow::Exit);
        }
    }
    Ok(Flow::Continue)
}

pub fn write_json<T: Serialize + ?Sized>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
