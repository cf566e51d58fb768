//! Error types for the `flashcards` command line interface.

use flashcards::error::FlashcardError;
use thiserror::Error;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, FlashcardsCliError>;

/// Errors that can occur while running a CLI command.
#[derive(Error, Debug)]
pub enum FlashcardsCliError {
  /// An error bubbled up from the flashcards library.
  #[error(transparent)]
  Flashcards(#[from] FlashcardError),

  /// A prompt or confirmation could not be shown or read.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Terminal or file system I/O failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// No set with the given name exists.
  #[error("No flashcard set named \"{0}\"")]
  UnknownSet(String),
}
