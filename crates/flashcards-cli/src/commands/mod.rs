use clap::{Args, Subcommand};
use flashcards::database::Database;

use super::*;

pub mod add;
pub mod cards;
pub mod create;
pub mod init;
pub mod remove;
pub mod sets;
pub mod study;

pub use add::add;
pub use cards::cards;
pub use create::create;
pub use init::init;
pub use remove::remove;
pub use sets::sets;
pub use study::study;

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Initialize the configuration and a new flashcards database
  Init(init::InitOptions),

  /// Create a new, empty set
  Create(create::CreateArgs),

  /// Add a card to a set, creating the set if no set has that name
  Add(add::AddArgs),

  /// List all sets
  Sets,

  /// Show every card in a set
  Cards(SetArgs),

  /// Remove a set after confirmation. Its cards are kept in the database.
  Remove(SetArgs),

  /// Study a set in learn mode
  Study(SetArgs),

  /// Study a set in a full-screen terminal interface
  #[cfg(feature = "tui")]
  Tui(SetArgs),
}

/// Arguments for commands that operate on one existing set
#[derive(Args, Clone)]
pub struct SetArgs {
  /// Name of the set
  pub set: String,
}

/// Resolves a set name to its identity.
///
/// Names are not unique; the lookup follows [`Database::list_sets`], so the set
/// read last wins.
pub fn resolve_set(db: &mut Database, name: &str) -> Result<i64> {
  db.find_set(name)?.ok_or_else(|| FlashcardsCliError::UnknownSet(name.to_string()))
}
