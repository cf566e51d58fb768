//! Module for the line-based learn mode.
//!
//! The chosen set is loaded into a [`Session`] and each line the user enters maps
//! to one navigation step:
//!
//! | input | action |
//! |---|---|
//! | `f`, `flip` | show the definition |
//! | `n`, `next`, empty line | next card |
//! | `p`, `prev`, `previous` | previous card |
//! | `q`, `quit` | leave learn mode |

use std::str::FromStr;

use flashcards::session::{Session, Step};

use super::*;

/// Prompt shown before every command.
const LEARN_PROMPT: &str = "[f]lip, [n]ext, [p]revious, [q]uit";

/// One line of input in learn mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearnCommand {
  /// Apply a navigation step to the session.
  Step(Step),
  /// Leave learn mode.
  Quit,
}

impl FromStr for LearnCommand {
  type Err = String;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "f" | "flip" => Ok(Self::Step(Step::Flip)),
      "" | "n" | "next" => Ok(Self::Step(Step::Next)),
      "p" | "prev" | "previous" => Ok(Self::Step(Step::Previous)),
      "q" | "quit" | "exit" => Ok(Self::Quit),
      other => Err(format!("Unknown command \"{other}\", expected one of {LEARN_PROMPT}")),
    }
  }
}

/// Function for the [`Commands::Study`] in the CLI.
pub fn study<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  session: &mut Session,
  args: SetArgs,
) -> Result<()> {
  let set_id = resolve_set(db, &args.set)?;
  session.load(db.list_cards(set_id)?);

  loop {
    let (Some(view), Some(position)) = (session.current(), session.position()) else {
      interaction.reply(ResponseContent::Info("No cards available"))?;
      return Ok(());
    };
    interaction.reply(ResponseContent::Study { view, position })?;

    match interaction.prompt(LEARN_PROMPT)?.parse::<LearnCommand>() {
      Ok(LearnCommand::Step(step)) => session.apply(step),
      Ok(LearnCommand::Quit) => break,
      Err(message) => interaction.reply(ResponseContent::Warning(&message))?,
    }
  }

  session.reset();
  Ok(())
}
