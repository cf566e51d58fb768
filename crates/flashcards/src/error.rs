//! Error types for the flashcards library.
//!
//! Failures fall into two groups:
//! - Data-integrity violations reported by the store itself
//!   ([`FlashcardError::ConstraintViolation`], [`FlashcardError::ForeignKeyViolation`])
//! - Wrapped errors from SQLite, the filesystem and configuration parsing
//!
//! Operations on a set or card that does not exist are not errors: deleting a
//! missing set removes nothing and listing the cards of a missing set yields an
//! empty list.
//!
//! # Examples
//!
//! ```
//! use flashcards::{database::Database, error::FlashcardError};
//!
//! # fn example() -> Result<(), FlashcardError> {
//! # let dir = tempfile::tempdir()?;
//! let mut db = Database::open(dir.path().join("cards.db"))?;
//! match db.create_card(42, "mitosis", "cell division") {
//!   Err(FlashcardError::ForeignKeyViolation(id)) => println!("no set with id {id}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(_) => println!("Success!"),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`flashcards`](crate) crate.
pub type Result<T> = core::result::Result<T, FlashcardError>;

/// Errors that can occur when working with the flashcards library.
#[derive(Error, Debug)]
pub enum FlashcardError {
  /// An insert was rejected because a value violated a column constraint.
  ///
  /// This occurs when:
  /// - A set name is empty
  /// - A card word or definition is empty
  /// - SQLite itself reports a `NOT NULL` or `CHECK` failure
  ///
  /// The string names the offending constraint.
  #[error("Constraint violation: {0}")]
  ConstraintViolation(String),

  /// A card was created under a set identity that does not exist.
  ///
  /// The parameter is the set id the card tried to reference.
  #[error("No flashcard set with id {0} exists")]
  ForeignKeyViolation(i64),

  /// A SQLite operation failed.
  ///
  /// This wraps errors from the `rusqlite` crate, covering:
  /// - SQL syntax errors
  /// - Schema errors
  /// - Type conversion errors
  /// - Locked or unreadable database files
  #[error(transparent)]
  Sqlite(#[from] rusqlite::Error),

  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - Creating the database or configuration directory fails
  /// - Reading or writing the configuration file fails
  /// - Permission errors occur
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be serialized.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// The configuration is missing or unusable.
  #[error("{0}")]
  Config(String),
}
