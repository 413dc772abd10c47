use crate::commands::{write_json, Session};
use crate::error::{not_found_message, CliError};
use anyhow::Result;
use clap::Args;
use rolodex_core::domain::Record;
use rolodex_store::StoreError;
use serde_json::json;
use std::io::Write;
use tracing::debug;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(allow_hyphen_values = true)]
    pub phone: String,
    #[arg(allow_hyphen_values = true)]
    pub birthday: Option<String>,
}

#[derive(Debug, Args)]
pub struct ChangeArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
    #[arg(allow_hyphen_values = true)]
    pub phone: String,
}

#[derive(Debug, Args)]
pub struct NameArgs {
    #[arg(allow_hyphen_values = true)]
    pub name: String,
}

pub fn add_contact(session: &mut Session<'_>, out: &mut dyn Write, args: AddArgs) -> Result<()> {
    let replaced = session.store.get(&args.name).is_some();
    session
        .store
        .add(&args.name, &args.phone, args.birthday.as_deref())
        .map_err(CliError::NotAdded)?;
    debug!(name = %args.name, replaced, "contact added");
    writeln!(out, "Contact added.")?;
    Ok(())
}

pub fn change_phone(
    session: &mut Session<'_>,
    out: &mut dyn Write,
    args: ChangeArgs,
) -> Result<()> {
    match session.store.edit_phone(&args.name, &args.phone) {
        Ok(_) => writeln!(out, "Phone number updated for {}.", args.name)?,
        Err(StoreError::NotFound(_)) => writeln!(out, "{}", not_found_message(&args.name))?,
        Err(err) => return Err(CliError::Rejected(err).into()),
    }
    Ok(())
}

pub fn list_contacts(session: &Session<'_>, out: &mut dyn Write) -> Result<()> {
    if session.json {
        let records: Vec<&Record> = session.store.all().collect();
        return write_json(out, &records);
    }

    writeln!(out, "All contacts:")?;
    for record in session.store.all() {
        writeln!(out, "{record}")?;
    }
    Ok(())
}

pub fn show_phone(session: &Session<'_>, out: &mut dyn Write, args: NameArgs) -> Result<()> {
    let phone = session.store.find_phone(&args.name);
    if session.json {
        let value = match phone {
            Some(phone) => json!({ "name": args.name, "phone": phone }),
            None => json!({ "name": args.name, "found": false }),
        };
        return write_json(out, &value);
    }

    match phone {
        Some(phone) => writeln!(out, "Phone number for {}: {}", args.name, phone)?,
        None => writeln!(out, "{}", not_found_message(&args.name))?,
    }
    Ok(())
}
