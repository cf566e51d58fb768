//! Local SQLite storage for flashcard sets and cards.
//!
//! This module owns the persistent schema and exposes the create/read/delete
//! operations the rest of the application builds on. Each operation is a single
//! statement that SQLite commits on its own; nothing here spans a multi-statement
//! transaction, so callers must tolerate a set that exists with zero cards.
//!
//! Operations are available both as [`DatabaseInstruction`] values ([`Add`],
//! [`ListSets`], [`ListCards`], [`Remove`]) and as methods on [`Database`].
//!
//! # Examples
//!
//! ```no_run
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use flashcards::database::Database;
//!
//! let mut db = Database::open("cards.db")?;
//! let biology = db.create_set("Biology")?;
//! db.create_card(biology, "mitosis", "cell division")?;
//!
//! for card in db.list_cards(biology)? {
//!   println!("{card}");
//! }
//! # Ok(())
//! # }
//! ```

use rusqlite::Connection;

use super::*;

pub mod instruction;

pub use self::instruction::{add::*, query::*, remove::*, DatabaseInstruction};

/// Main database connection handler.
///
/// Wraps the single long-lived connection opened at startup. Every operation
/// takes `&mut self`, so calls are serialized by the borrow checker.
pub struct Database {
  /// SQLite connection handle
  conn: Connection,
}

impl Database {
  /// Opens an existing database or creates a new one at the specified path.
  ///
  /// This method will:
  /// 1. Create the parent directory if it doesn't exist
  /// 2. Create the database file if it doesn't exist
  /// 3. Initialize the schema
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use flashcards::database::Database;
  /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// // Open in a specific location
  /// let db = Database::open("cards.db")?;
  ///
  /// // Or use the default location
  /// let db = Database::open(Database::default_path())?;
  /// # Ok(())
  /// # }
  /// ```
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
      std::fs::create_dir_all(parent)?;
    }
    debug!("Opening database at {}", path.display());
    Self::from_connection(Connection::open(path)?)
  }

  /// Opens a throwaway database that lives only as long as the handle.
  pub fn open_in_memory() -> Result<Self> { Self::from_connection(Connection::open_in_memory()?) }

  /// Wraps a fresh connection and brings its schema up to date.
  fn from_connection(conn: Connection) -> Result<Self> {
    // Deleting a set must leave its cards in place, so the reference from
    // `flashcard.set_id` is checked by `Add::card` instead of by SQLite.
    conn.pragma_update(None, "foreign_keys", false)?;
    let db = Self { conn };
    db.initialize_schema()?;
    Ok(db)
  }

  /// Ensures the `flashcard_sets` and `flashcard` tables exist.
  ///
  /// Idempotent: running it against an initialized database changes nothing.
  pub fn initialize_schema(&self) -> Result<()> {
    self
      .conn
      .execute_batch(include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/migrations/init.sql")))?;
    trace!("Schema initialized");
    Ok(())
  }

  /// Returns the default path for the database file.
  ///
  /// The path is constructed as follows:
  /// - On Unix: `~/.local/share/flashcards/flashcards.db`
  /// - On macOS: `~/Library/Application Support/flashcards/flashcards.db`
  /// - On Windows: `%APPDATA%\flashcards\flashcards.db`
  /// - Fallback: `./flashcards/flashcards.db`
  pub fn default_path() -> PathBuf {
    dirs::data_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("flashcards")
      .join("flashcards.db")
  }

  /// Inserts a new set and returns its identity.
  ///
  /// Fails with [`FlashcardError::ConstraintViolation`] if `name` is empty.
  pub fn create_set(&mut self, name: &str) -> Result<i64> { Add::set(name).execute(self) }

  /// Inserts a card under `set_id` and returns its identity.
  ///
  /// Fails with [`FlashcardError::ForeignKeyViolation`] if no set has that id.
  pub fn create_card(&mut self, set_id: i64, word: &str, definition: &str) -> Result<i64> {
    Add::card(set_id, word, definition).execute(self)
  }

  /// Returns every set keyed by name.
  ///
  /// Set names are not unique. When several sets share a name, the one read last
  /// (in database order) wins and the others are absent from the map. Use
  /// [`Database::list_set_records`] to see every row.
  pub fn list_sets(&mut self) -> Result<BTreeMap<String, i64>> {
    Ok(ListSets.execute(self)?.into_iter().map(|set| (set.name, set.id)).collect())
  }

  /// Returns every set row in database order, duplicates included.
  pub fn list_set_records(&mut self) -> Result<Vec<FlashcardSet>> { ListSets.execute(self) }

  /// Resolves a set name the same way [`Database::list_sets`] does.
  pub fn find_set(&mut self, name: &str) -> Result<Option<i64>> {
    Ok(self.list_sets()?.get(name).copied())
  }

  /// Returns the cards of a set in database order.
  ///
  /// A set with no cards, or a set id that does not exist, yields an empty list.
  pub fn list_cards(&mut self, set_id: i64) -> Result<Vec<Card>> {
    ListCards::new(set_id).execute(self)
  }

  /// Removes a set row and returns how many rows were removed (0 or 1).
  ///
  /// The set's cards are left in place and still resolve through
  /// [`Database::list_cards`] with the old id.
  pub fn delete_set(&mut self, set_id: i64) -> Result<usize> { Remove::set(set_id).execute(self) }
}
