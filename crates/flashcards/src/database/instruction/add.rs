//! Add instruction for inserting sets and cards.
//!
//! # Examples
//!
//! ```no_run
//! use flashcards::{database::*, prelude::*};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("cards.db")?;
//!
//! let spanish = Add::set("Spanish").execute(&mut db)?;
//! Add::card(spanish, "hola", "hello").execute(&mut db)?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Instruction for inserting a row. Both variants yield the new row's identity.
#[derive(Debug, Clone, Copy)]
pub enum Add<'a> {
  /// Insert into `flashcard_sets`.
  Set {
    /// Name of the new set
    name: &'a str,
  },
  /// Insert into `flashcard` under an existing set.
  Card {
    /// Owning set
    set_id:     i64,
    /// Prompt side
    word:       &'a str,
    /// Answer side
    definition: &'a str,
  },
}

impl<'a> Add<'a> {
  /// Creates an instruction that inserts a new set.
  pub fn set(name: &'a str) -> Self { Self::Set { name } }

  /// Creates an instruction that inserts a card under `set_id`.
  pub fn card(set_id: i64, word: &'a str, definition: &'a str) -> Self {
    Self::Card { set_id, word, definition }
  }
}

impl DatabaseInstruction for Add<'_> {
  type Output = i64;

  fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    match *self {
      Add::Set { name } => {
        require_text("flashcard_sets.name", name)?;

        let mut stmt =
          db.conn.prepare_cached("INSERT INTO flashcard_sets (name) VALUES (?1) RETURNING id")?;
        let id: i64 = stmt.query_row(params![name], |row| row.get(0)).map_err(insert_error)?;

        debug!("Created set {name:?} with id {id}");
        Ok(id)
      },
      Add::Card { set_id, word, definition } => {
        require_text("flashcard.word", word)?;
        require_text("flashcard.definition", definition)?;

        // The existence check and the insert are one statement, so no set can
        // disappear between them.
        let mut stmt = db.conn.prepare_cached(
          "INSERT INTO flashcard (set_id, word, definition)
                 SELECT ?1, ?2, ?3
                 WHERE EXISTS (SELECT 1 FROM flashcard_sets WHERE id = ?1)
                 RETURNING id",
        )?;
        let id: i64 = stmt
          .query_row(params![set_id, word, definition], |row| row.get(0))
          .optional()
          .map_err(insert_error)?
          .ok_or(FlashcardError::ForeignKeyViolation(set_id))?;

        debug!("Created card {word:?} with id {id} in set {set_id}");
        Ok(id)
      },
    }
  }
}
