//! How commands talk to the person at the terminal.
//!
//! Commands never print or prompt directly. They go through [`UserInteraction`],
//! which the [`Cli`] implements with `console` styling and `dialoguer` prompts,
//! and which tests implement with scripted answers.

use console::style;
use dialoguer::{Confirm, Input};
use flashcards::{
  card::{Card, FlashcardSet},
  session::CardView,
};

use super::*;

pub static INFO_PREFIX: &str = "ℹ ";
pub static SUCCESS_PREFIX: &str = "✓ ";
pub static ERROR_PREFIX: &str = "✗ ";
pub static WARNING_PREFIX: &str = "! ";
pub static PROMPT_PREFIX: &str = "❯ ";
pub static ITEM_PREFIX: &str = "├─";
pub static LAST_ITEM_PREFIX: &str = "└─";
pub static CONTINUE_PREFIX: &str = "│  ";

/// Something a command wants shown to the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// All sets with their card counts.
  Sets(&'a [(FlashcardSet, usize)]),
  /// The cards of one named set.
  Cards {
    /// Name of the set
    set:   &'a str,
    /// Its cards in database order
    cards: &'a [Card],
  },
  /// The card on display in learn mode, with its one-based position and the total.
  Study {
    /// The visible sides of the card
    view:     CardView<'a>,
    /// `(position, total)`
    position: (usize, usize),
  },
  /// An operation completed.
  Success(&'a str),
  /// An operation failed.
  Error(FlashcardsCliError),
  /// Neutral information.
  Info(&'a str),
  /// Something the user should notice but that is not a failure.
  Warning(&'a str),
}

/// The channel between commands and the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;
  /// Asks for a line of text.
  fn prompt(&self, message: &str) -> Result<String>;
  /// Shows a response.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    Ok(
      Confirm::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).yellow()))
        .default(false)
        .wait_for_newline(true)
        .interact()?,
    )
  }

  fn prompt(&self, message: &str) -> Result<String> {
    Ok(
      Input::<String>::new()
        .with_prompt(format!("{} {message}", style(PROMPT_PREFIX).yellow()))
        .interact_text()?,
    )
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Sets(sets) => {
        if sets.is_empty() {
          println!("{} No flashcard sets yet", style(INFO_PREFIX).blue());
          return Ok(());
        }
        println!("{} {} set(s)", style(SUCCESS_PREFIX).green(), style(sets.len()).yellow());
        for (i, (set, count)) in sets.iter().enumerate() {
          let prefix = if i + 1 == sets.len() { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          println!(
            "{} {} {} {}",
            style(prefix).dim(),
            style(&set.name).white().bold(),
            style(format!("#{}", set.id)).dim(),
            style(format!("({count} card{})", if *count == 1 { "" } else { "s" })).cyan()
          );
        }
      },
      ResponseContent::Cards { set, cards } => {
        if cards.is_empty() {
          println!("{} No cards available in {}", style(INFO_PREFIX).blue(), style(set).yellow());
          return Ok(());
        }
        println!("{} {}", style(SUCCESS_PREFIX).green(), style(set).white().bold());
        for (i, card) in cards.iter().enumerate() {
          let last = i + 1 == cards.len();
          let prefix = if last { LAST_ITEM_PREFIX } else { ITEM_PREFIX };
          let continuation = if last { "   " } else { CONTINUE_PREFIX };
          println!("{} {}", style(prefix).dim(), style(&card.word).cyan());
          for line in card.definition.lines() {
            println!("{}   {}", style(continuation).dim(), line);
          }
        }
      },
      ResponseContent::Study { view, position: (position, total) } => {
        println!();
        println!(
          "{} {}",
          style(format!("[{position}/{total}]")).dim(),
          style(view.word).white().bold()
        );
        match view.definition {
          Some(definition) => println!("{}  {}", style(CONTINUE_PREFIX).dim(), definition),
          None => println!("{}  {}", style(CONTINUE_PREFIX).dim(), style("(hidden)").dim()),
        }
      },
      ResponseContent::Success(message) => {
        println!("{} {}", style(SUCCESS_PREFIX).green(), message)
      },
      ResponseContent::Error(error) => {
        eprintln!("{} {}", style(ERROR_PREFIX).red(), style(error).red())
      },
      ResponseContent::Info(message) => println!("{} {}", style(INFO_PREFIX).blue(), message),
      ResponseContent::Warning(message) => {
        println!("{} {}", style(WARNING_PREFIX).yellow(), style(message).yellow())
      },
    }
    Ok(())
  }
}

#[cfg(test)]
pub(crate) mod testing {
  use std::{cell::RefCell, collections::VecDeque};

  use super::*;

  /// Answers prompts from a script and records everything shown.
  #[derive(Default)]
  pub struct ScriptedInteraction {
    /// Lines handed out by `prompt`, in order; `q` once exhausted
    pub inputs:  RefCell<VecDeque<&'static str>>,
    /// `Debug` rendering of every reply
    pub replies: RefCell<Vec<String>>,
    /// Answer to every confirmation
    pub decline: bool,
  }

  impl ScriptedInteraction {
    pub fn new(inputs: &[&'static str]) -> Self {
      Self { inputs: RefCell::new(inputs.iter().copied().collect()), ..Default::default() }
    }

    pub fn declining() -> Self { Self { decline: true, ..Default::default() } }
  }

  impl UserInteraction for ScriptedInteraction {
    fn confirm(&self, _message: &str) -> Result<bool> { Ok(!self.decline) }

    fn prompt(&self, _message: &str) -> Result<String> {
      Ok(self.inputs.borrow_mut().pop_front().unwrap_or("q").to_string())
    }

    fn reply(&self, content: ResponseContent) -> Result<()> {
      self.replies.borrow_mut().push(format!("{content:?}"));
      Ok(())
    }
  }
}
