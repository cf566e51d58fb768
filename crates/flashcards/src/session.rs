//! Learn-mode navigation over the cards of one set.
//!
//! A [`Session`] holds the cards of the set being studied and a cursor into
//! them. It is either [`SessionState::Empty`] (nothing loaded, or the loaded set
//! had no cards) or [`SessionState::Viewing`] a card by index. The definition of
//! the current card stays hidden until [`Session::flip`] and hides again as soon
//! as the cursor moves.
//!
//! No operation here can fail. Navigating an empty session is a no-op.
//!
//! # Examples
//!
//! ```
//! use flashcards::{
//!   card::Card,
//!   session::{Session, SessionState},
//! };
//!
//! let mut session = Session::new();
//! session.load(vec![Card::new("hola", "hello"), Card::new("adios", "goodbye")]);
//! assert_eq!(session.state(), SessionState::Viewing(0));
//!
//! session.flip();
//! assert_eq!(session.current().unwrap().definition, Some("hello"));
//!
//! session.next();
//! session.next();
//! assert_eq!(session.state(), SessionState::Viewing(1));
//! assert_eq!(session.current().unwrap().definition, None);
//! ```

use super::*;

/// Where a [`Session`] currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
  /// No cards are loaded.
  Empty,
  /// The card at this index is on display.
  Viewing(usize),
}

/// One user action in learn mode.
///
/// Every button or key in a front end maps to exactly one of these, applied
/// with [`Session::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
  /// Move to the following card, stopping at the last one.
  Next,
  /// Move to the preceding card, stopping at the first one.
  Previous,
  /// Reveal the current card's definition.
  Flip,
  /// Drop the loaded cards.
  Reset,
}

/// What a front end should show for the current card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
  /// The word, always visible.
  pub word:       &'a str,
  /// The definition, present only once the card has been flipped.
  pub definition: Option<&'a str>,
}

/// In-memory study state for the currently loaded set.
#[derive(Debug, Clone, Default)]
pub struct Session {
  /// Cards of the loaded set, in the order they were read.
  cards:    Vec<Card>,
  /// Cursor into `cards`; 0 whenever `cards` is empty.
  index:    usize,
  /// Whether the current card's definition is showing.
  revealed: bool,
}

impl Session {
  /// Creates an empty session.
  pub fn new() -> Self { Self::default() }

  /// Replaces the loaded cards and shows the first one, definition hidden.
  pub fn load(&mut self, cards: Vec<Card>) {
    debug!("Loading {} card(s) into session", cards.len());
    self.cards = cards;
    self.index = 0;
    self.revealed = false;
  }

  /// Moves to the next card, staying on the last card at the end.
  ///
  /// The definition is hidden afterwards even when the cursor could not move.
  pub fn next(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    self.index = (self.index + 1).min(self.cards.len() - 1);
    self.revealed = false;
    trace!("Session moved to card {}", self.index);
  }

  /// Moves to the previous card, staying on the first card at the start.
  ///
  /// The definition is hidden afterwards even when the cursor could not move.
  pub fn previous(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    self.index = self.index.saturating_sub(1);
    self.revealed = false;
    trace!("Session moved to card {}", self.index);
  }

  /// Reveals the current card's definition without moving.
  pub fn flip(&mut self) {
    if self.cards.is_empty() {
      return;
    }
    self.revealed = true;
  }

  /// Drops all loaded cards.
  pub fn reset(&mut self) {
    debug!("Resetting session");
    self.cards.clear();
    self.index = 0;
    self.revealed = false;
  }

  /// Applies one user action.
  pub fn apply(&mut self, step: Step) {
    match step {
      Step::Next => self.next(),
      Step::Previous => self.previous(),
      Step::Flip => self.flip(),
      Step::Reset => self.reset(),
    }
  }

  /// Returns the state of the state machine.
  pub fn state(&self) -> SessionState {
    if self.cards.is_empty() {
      SessionState::Empty
    } else {
      SessionState::Viewing(self.index)
    }
  }

  /// Returns what should be on display, or `None` in [`SessionState::Empty`].
  pub fn current(&self) -> Option<CardView<'_>> {
    self.cards.get(self.index).map(|card| CardView {
      word:       &card.word,
      definition: self.revealed.then_some(card.definition.as_str()),
    })
  }

  /// Whether the current card's definition is showing.
  pub fn is_revealed(&self) -> bool { self.revealed && !self.cards.is_empty() }

  /// Number of loaded cards.
  pub fn len(&self) -> usize { self.cards.len() }

  /// Whether no cards are loaded.
  pub fn is_empty(&self) -> bool { self.cards.is_empty() }

  /// One-based position of the current card and the total, for progress display.
  pub fn position(&self) -> Option<(usize, usize)> {
    match self.state() {
      SessionState::Empty => None,
      SessionState::Viewing(index) => Some((index + 1, self.cards.len())),
    }
  }
}
