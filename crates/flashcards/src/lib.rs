//! Flashcard storage and study library.
//!
//! `flashcards` is a library for keeping flashcards organized into named sets and
//! stepping through them in a learn mode, providing:
//!
//! - SQLite-backed storage of sets and their cards
//! - A small navigation state machine for studying a set
//! - Persistent configuration for where the database lives
//!
//! # Getting Started
//!
//! ```no_run
//! use flashcards::{database::Database, prelude::*, session::Session};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Create or open a database
//!   let mut db = Database::open(Database::default_path())?;
//!
//!   // Build a set
//!   let spanish = db.create_set("Spanish")?;
//!   db.create_card(spanish, "hola", "hello")?;
//!   db.create_card(spanish, "adios", "goodbye")?;
//!
//!   // Study it
//!   let mut session = Session::new();
//!   session.load(db.list_cards(spanish)?);
//!   session.flip();
//!   if let Some(view) = session.current() {
//!     println!("{} -> {:?}", view.word, view.definition);
//!   }
//!   session.next();
//!
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`card`]: Set and card record types
//! - [`database`]: Schema management and the create/read/delete operations
//! - [`session`]: The learn-mode navigation state machine
//! - [`config`]: On-disk configuration
//! - [`error`]: The library error type
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::BTreeMap,
  fmt::Display,
  path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod card;
pub mod config;
pub mod database;
pub mod error;
pub mod session;

pub use crate::config::Config;
use crate::{card::*, error::*};

/// Common traits and types for ergonomic imports.
///
/// # Usage
///
/// ```no_run
/// use flashcards::{
///   database::{Add, Database},
///   prelude::*,
/// };
///
/// fn example() -> Result<(), FlashcardError> {
///   let mut db = Database::open(Database::default_path())?;
///   let id = Add::set("Biology").execute(&mut db)?;
///   Add::card(id, "mitosis", "cell division").execute(&mut db)?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{database::DatabaseInstruction, error::FlashcardError};
}
