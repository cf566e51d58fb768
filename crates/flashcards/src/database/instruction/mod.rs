//! Database instructions for flashcard storage.
//!
//! Each instruction is a small value describing one statement against the
//! database. Instructions borrow the [`Database`] mutably for the duration of
//! [`DatabaseInstruction::execute`] and never hold it afterwards.

use super::*;

pub mod add;
pub mod query;
pub mod remove;

use rusqlite::{params, OptionalExtension};

/// A single operation that can be run against a [`Database`].
pub trait DatabaseInstruction {
  /// What the instruction yields on success.
  type Output;

  /// Runs the instruction. Takes `&mut` so the same handle can run many
  /// instructions in sequence.
  fn execute(&self, db: &mut Database) -> Result<Self::Output>;
}

/// Turns a failed insert into a [`FlashcardError`], surfacing SQLite constraint
/// failures as [`FlashcardError::ConstraintViolation`].
pub(super) fn insert_error(error: rusqlite::Error) -> FlashcardError {
  match error {
    rusqlite::Error::SqliteFailure(
      rusqlite::ffi::Error { code: rusqlite::ErrorCode::ConstraintViolation, .. },
      message,
    ) => FlashcardError::ConstraintViolation(
      message.unwrap_or_else(|| "constraint failed".to_string()),
    ),
    other => FlashcardError::Sqlite(other),
  }
}

/// Rejects empty text before it reaches a `NOT NULL` text column.
fn require_text(column: &str, value: &str) -> Result<()> {
  if value.is_empty() {
    return Err(FlashcardError::ConstraintViolation(format!("{column} must not be empty")));
  }
  Ok(())
}
