//! Module for setting up a [`flashcards`] environment

use std::path::Path;

use super::*;

/// Options for [`Commands::Init`]
#[derive(Args, Clone)]
pub struct InitOptions {
  /// Where to create the database. Prompts for the default location otherwise.
  #[arg(long)]
  pub db_path: Option<PathBuf>,
}

/// Function for the [`Commands::Init`] in the CLI.
///
/// Writes the configuration file and creates the database with its schema.
pub fn init<I: UserInteraction>(
  interaction: &I,
  config_path: &Path,
  init_options: InitOptions,
) -> Result<()> {
  let InitOptions { db_path } = init_options;

  let config = if let Some(db_path) = db_path {
    Config::default().with_database_path(&db_path)
  } else if !interaction.confirm(&format!(
    "Would you like to use the default path {:?} for storing the flashcards database?",
    Database::default_path(),
  ))? {
    interaction.reply(ResponseContent::Info(
      "Please pass in your intended database path using --db-path",
    ))?;
    return Ok(());
  } else {
    Config::default()
  };

  if config.database_path.exists() {
    interaction.reply(ResponseContent::Info(&format!(
      "Using the existing database at {}",
      config.database_path.display()
    )))?;
  }

  Database::open(&config.database_path)?;
  config.save(config_path)?;

  interaction.reply(ResponseContent::Success(&format!(
    "Flashcards initialized successfully\nConfig path: {}\nDatabase path: {}",
    config_path.display(),
    config.database_path.display(),
  )))?;
  Ok(())
}
