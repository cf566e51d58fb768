//! Command line interface for the flashcards system.
//!
//! This crate provides a CLI tool for creating and studying flashcards using the
//! `flashcards` library. It supports:
//! - Database initialization
//! - Creating sets and adding cards to them
//! - Listing sets and cards
//! - Removing sets (after confirmation)
//! - Studying a set in learn mode
//!
//! # Usage
//!
//! ```bash
//! # Initialize a new database
//! flashcards init
//!
//! # Create a set and add cards
//! flashcards create Spanish
//! flashcards add Spanish hola hello
//! flashcards add Spanish adios goodbye
//!
//! # Study it
//! flashcards study Spanish
//!
//! # Remove it
//! flashcards remove Spanish
//! ```
//!
//! Output is colored and destructive operations ask for confirmation. Use `-v`
//! (repeatable) to see more log output.

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{path::PathBuf, process::ExitCode};

use clap::{builder::ArgAction, Parser};
use flashcards::{database::Database, session::Session, Config};
use tracing::trace;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod error;
pub mod interaction;
#[cfg(feature = "tui")] pub mod tui;

use crate::{commands::*, error::*, interaction::*};

/// Command line interface configuration and argument parsing
#[derive(Parser)]
#[command(author, version, about = "Create, manage and study flashcards")]
pub struct Cli {
  /// Verbose mode (-v, -vv, -vvv) for different levels of logging detail
  #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        help = "Increase logging verbosity"
    )]
  verbose: u8,

  /// Path to the database file. Overrides the configured location. If neither is
  /// set, uses the default platform-specific data directory.
  #[arg(long, short, global = true)]
  path: Option<PathBuf>,

  /// Path to the configuration file. Defaults to the platform config directory.
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// The subcommand to execute
  #[command(subcommand)]
  command: Commands,

  /// Skip all prompts and accept defaults (mostly for testing)
  #[arg(long, hide = true, global = true)]
  accept_defaults: bool,
}

impl Cli {
  /// Location of the configuration file in use.
  fn config_path(&self) -> PathBuf { self.config.clone().unwrap_or_else(Config::default_path) }

  /// Location of the database: `--path`, else the configuration file, else the
  /// default data directory.
  fn database_path(&self) -> Result<PathBuf> {
    if let Some(path) = &self.path {
      return Ok(path.clone());
    }
    Ok(Config::load_or_default(self.config_path())?.database_path)
  }
}

/// Configures the logging system based on the verbosity level
///
/// The verbosity levels are:
/// - 0: error (default)
/// - 1: warn
/// - 2: info
/// - 3: debug
/// - 4+: trace
fn setup_logging(verbosity: u8) {
  let filter = match verbosity {
    0 => "error",
    1 => "warn",
    2 => "info",
    3 => "debug",
    _ => "trace",
  };

  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_file(true)
    .with_line_number(true)
    .with_target(true)
    .init();
}

/// Opens the database the command line points at.
fn open_database(cli: &Cli) -> Result<Database> {
  let path = cli.database_path()?;
  trace!("Using database at: {}", path.display());
  Ok(Database::open(&path)?)
}

/// Runs the chosen command. Every command but `init` works on an opened database.
fn run(cli: &Cli) -> Result<()> {
  let mut session = Session::new();

  match cli.command.clone() {
    Commands::Init(mut init_options) => {
      // The global `--path` stands in for `--db-path` when only it is given.
      init_options.db_path = init_options.db_path.or_else(|| cli.path.clone());
      init(cli, &cli.config_path(), init_options)
    },
    Commands::Create(args) => create(cli, &mut open_database(cli)?, args),
    Commands::Add(args) => add(cli, &mut open_database(cli)?, args),
    Commands::Sets => sets(cli, &mut open_database(cli)?),
    Commands::Cards(args) => cards(cli, &mut open_database(cli)?, args),
    Commands::Remove(args) => remove(cli, &mut open_database(cli)?, &mut session, args),
    Commands::Study(args) => study(cli, &mut open_database(cli)?, &mut session, args),
    #[cfg(feature = "tui")]
    Commands::Tui(args) => tui::run(&mut open_database(cli)?, &mut session, args),
  }
}

/// Entry point for the flashcards CLI application
///
/// Parses arguments, sets up logging and runs the requested command. Any error
/// is reported to the user and turns into a failing exit code.
fn main() -> ExitCode {
  let cli = Cli::parse();
  setup_logging(cli.verbose);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      // Nothing sensible is left to do if even the error cannot be shown.
      let _ = cli.reply(ResponseContent::Error(error));
      ExitCode::FAILURE
    },
  }
}
