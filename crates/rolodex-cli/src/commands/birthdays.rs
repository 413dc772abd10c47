use crate::commands::contacts::NameArgs;
use crate::commands::{write_json, Session};
use crate::error::{not_found_message, CliError};
use anyhow::Result;
use clap::Args;
use rolodex_core::time::now_local;
use rolodex_store::StoreError;
use serde_json::json;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddBirthdayArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(allow_hyphen_values = true)]
    pub birthday: String,
}

pub fn add_birthday(
    session: &mut Session<'_>,
    out: &mut dyn Write,
    args: AddBirthdayArgs,
) -> Result<()> {
    match session.store.add_birthday(&args.name, &args.birthday) {
        Ok(_) => writeln!(out, "Birthday added for {}.", args.name)?,
        Err(StoreError::NotFound(_)) => writeln!(out, "{}", not_found_message(&args.name))?,
        Err(err) => return Err(CliError::Rejected(err).into()),
    }
    Ok(())
}

pub fn show_birthday(session: &Session<'_>, out: &mut dyn Write, args: NameArgs) -> Result<()> {
    let lookup = session.store.show_birthday(&args.name);
    if session.json {
        let value = match lookup {
            Some(birthday) => json!({ "name": args.name, "birthday": birthday }),
            None => json!({ "name": args.name, "found": false }),
        };
        return write_json(out, &value);
    }

    match lookup {
        Some(Some(birthday)) => writeln!(out, "Birthday for {}: {}", args.name, birthday)?,
        Some(None) => writeln!(out, "No birthday found for {}.", args.name)?,
        None => writeln!(out, "{}", not_found_message(&args.name))?,
    }
    Ok(())
}

pub fn upcoming(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    let now = session.now.unwrap_or_else(now_local);
    let report = session.store.upcoming_birthdays(now, session.config.birthdays);
    debug!(
        %now,
        window_days = session.config.birthdays.window_days,
        weekdays = report.buckets().len(),
        "birthday window computed"
    );

    if session.json {
        return write_json(out, &report);
    }

    writeln!(out, "Birthdays this week:")?;
    if !report.is_empty() {
        writeln!(out, "{report}")?;
    }
    Ok(())
}
