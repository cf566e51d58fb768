//! Read instructions for sets and cards.
//!
//! Neither query adds an `ORDER BY`: rows come back in whatever order SQLite
//! yields them, which in practice is insertion order.

use super::*;

/// Lists every row of `flashcard_sets`, duplicates included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListSets;

impl DatabaseInstruction for ListSets {
  type Output = Vec<FlashcardSet>;

  fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let mut stmt = db.conn.prepare_cached("SELECT id, name FROM flashcard_sets")?;
    let sets = stmt
      .query_map([], |row| Ok(FlashcardSet { id: row.get(0)?, name: row.get(1)? }))?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    trace!("Listed {} sets", sets.len());
    Ok(sets)
  }
}

/// Lists the cards belonging to one set.
#[derive(Debug, Clone, Copy)]
pub struct ListCards {
  /// Set whose cards are read
  set_id: i64,
}

impl ListCards {
  /// Creates a query for the cards of `set_id`.
  pub fn new(set_id: i64) -> Self { Self { set_id } }
}

impl DatabaseInstruction for ListCards {
  type Output = Vec<Card>;

  fn execute(&self, db: &mut Database) -> Result<Self::Output> {
    let mut stmt =
      db.conn.prepare_cached("SELECT word, definition FROM flashcard WHERE set_id = ?1")?;
    let cards = stmt
      .query_map(params![self.set_id], |row| {
        Ok(Card { word: row.get(0)?, definition: row.get(1)? })
      })?
      .collect::<rusqlite::Result<Vec<_>>>()?;

    trace!("Listed {} cards for set {}", cards.len(), self.set_id);
    Ok(cards)
  }
}
