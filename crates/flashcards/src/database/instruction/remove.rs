//! Remove instruction for deleting sets.
//!
//! Removal touches only the `flashcard_sets` row. Cards that belonged to the set
//! stay in `flashcard` and keep resolving by their old `set_id`; whether they
//! should go with the set is an open product decision, so nothing here cascades.
//!
//! # Examples
//!
//! ```no_run
//! use flashcards::{database::*, prelude::*};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("cards.db")?;
//! let removed = Remove::set(7).execute(&mut db)?;
//! println!("Removed {removed} set(s)");
//! # Ok(())
//! # }
//! ```

use super::*;

/// Instruction for removing a set row.
#[derive(Debug, Clone, Copy)]
pub struct Remove {
  /// The set to remove
  set_id: i64,
}

impl Remove {
  /// Creates an instruction removing the set with identity `set_id`.
  pub fn set(set_id: i64) -> Self { Self { set_id } }
}

impl DatabaseInstruction for Remove {
  /// Number of set rows removed: 1, or 0 when no such set existed.
  type Output = usize;

  fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let removed = db
      .conn
      .prepare_cached("DELETE FROM flashcard_sets WHERE id = ?1")?
      .execute(params![self.set_id])?;

    if removed == 0 {
      debug!("No set with id {} to remove", self.set_id);
      return Ok(0);
    }

    let orphaned: i64 = db
      .conn
      .prepare_cached("SELECT COUNT(*) FROM flashcard WHERE set_id = ?1")?
      .query_row(params![self.set_id], |row| row.get(0))?;
    if orphaned > 0 {
      warn!("Removed set {} but left its {orphaned} card(s) in place", self.set_id);
    } else {
      debug!("Removed set {}", self.set_id);
    }
    Ok(removed)
  }
}
