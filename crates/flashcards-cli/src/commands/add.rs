//! Module for the "add" functionality of the [`flashcards`] database.

use super::*;

/// Arguments for [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// Name of the set to add to. Created if no set has this name.
  pub set: String,

  /// The word on the front of the card
  pub word: String,

  /// The definition on the back of the card
  pub definition: String,
}

/// Function for the [`Commands::Add`] in the CLI.
///
/// Creating the set and inserting the card are separate statements. If the card
/// is rejected the new set stays behind, empty.
pub fn add<I: UserInteraction>(interaction: &I, db: &mut Database, add_args: AddArgs) -> Result<()> {
  let AddArgs { set, word, definition } = add_args;

  let set_id = match db.find_set(&set)? {
    Some(id) => id,
    None => {
      let id = db.create_set(&set)?;
      interaction.reply(ResponseContent::Info(&format!("Created set \"{set}\" (#{id})")))?;
      id
    },
  };

  db.create_card(set_id, &word, &definition)?;
  interaction.reply(ResponseContent::Success(&format!("Added \"{word}\" to \"{set}\"")))
}
