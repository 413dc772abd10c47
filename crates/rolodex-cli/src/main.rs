mod commands;
mod error;
mod repl;

use anyhow::{Context as _, Result};
use clap::Parser;
use rolodex_config as config;
use rolodex_core::time::parse_reference_time;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::Session;
use crate::error::{exit_code_for, report_error, CliError};

#[derive(Debug, Parser)]
#[command(
    name = "rolodex",
    version,
    about = "Interactive contact book with weekly birthday reminders"
)]
struct Cli {
    #[arg(long)]
    config: Option<PathBuf>,
    /// Print query results as JSON
    #[arg(long)]
    json: bool,
    #[arg(long, short)]
    verbose: bool,
    /// Reference time for `birthdays` instead of the local clock
    #[arg(long, value_name = "DD.MM.YYYY[ HH:MM]")]
    now: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        now,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let now = now
        .as_deref()
        .map(parse_reference_time)
        .transpose()
        .map_err(CliError::InvalidNow)?;
    if let Some(now) = now {
        debug!(%now, "reference time pinned");
    }

    let mut session = Session::new(&app_config, json, now);
    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    repl::run(&mut session, stdin, &mut stdout)
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .try_init();
}
