//! Record types for flashcard sets and the cards they own.

use super::*;

/// A named collection of flashcards as stored in `flashcard_sets`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashcardSet {
  /// Database-assigned identity, never reused.
  pub id:   i64,
  /// Display name. Not required to be unique.
  pub name: String,
}

/// A single word/definition pair.
///
/// Cards are read back from a set in database order and are never edited after
/// creation, so the pair carries no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
  /// The prompt side of the card.
  pub word:       String,
  /// The answer side of the card; may be long-form text.
  pub definition: String,
}

impl Card {
  /// Creates a card from anything string-like.
  ///
  /// # Examples
  ///
  /// ```
  /// use flashcards::card::Card;
  ///
  /// let card = Card::new("hola", "hello");
  /// assert_eq!(card.word, "hola");
  /// ```
  pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
    Self { word: word.into(), definition: definition.into() }
  }
}

impl<W: Into<String>, D: Into<String>> From<(W, D)> for Card {
  fn from((word, definition): (W, D)) -> Self { Self::new(word, definition) }
}

impl Display for Card {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}: {}", self.word, self.definition)
  }
}

impl Display for FlashcardSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} (#{})", self.name, self.id)
  }
}
