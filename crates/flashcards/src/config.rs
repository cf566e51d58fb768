//! On-disk configuration for locating the flashcard database.
//!
//! The configuration is a small TOML file, by default at
//! `<config dir>/flashcards/config.toml`:
//!
//! ```toml
//! database_path = "/home/me/.local/share/flashcards/flashcards.db"
//! ```

use super::*;
use crate::database::Database;

/// Persistent settings shared by every front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// Where the SQLite database file lives.
  pub database_path: PathBuf,
}

impl Default for Config {
  fn default() -> Self { Self { database_path: Database::default_path() } }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// - On Unix: `~/.config/flashcards/config.toml`
  /// - On macOS: `~/Library/Application Support/flashcards/config.toml`
  /// - On Windows: `%APPDATA%\flashcards\config.toml`
  /// - Fallback: `./flashcards/config.toml`
  pub fn default_path() -> PathBuf {
    dirs::config_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("flashcards")
      .join("config.toml")
  }

  /// Replaces the database location.
  pub fn with_database_path(mut self, database_path: &Path) -> Self {
    self.database_path = database_path.to_path_buf();
    self
  }

  /// Reads a configuration file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    trace!("Loading configuration from {}", path.display());
    let content = std::fs::read_to_string(path)?;
    let config: Self = toml::from_str(&content)?;
    if config.database_path.as_os_str().is_empty() {
      return Err(FlashcardError::Config(format!(
        "Configuration at {} has an empty `database_path`",
        path.display()
      )));
    }
    Ok(config)
  }

  /// Reads a configuration file, falling back to [`Config::default`] if the file
  /// does not exist yet.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if path.exists() {
      Self::load(path)
    } else {
      debug!("No configuration at {}, using defaults", path.display());
      Ok(Self::default())
    }
  }

  /// Writes the configuration, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    debug!("Saved configuration to {}", path.display());
    Ok(())
  }
}
