//! Module for removing a set from the [`flashcards`] database.

use flashcards::session::Session;

use super::*;

/// Function for the [`Commands::Remove`] in the CLI.
///
/// Asks for confirmation first. The set's cards are not removed with it.
pub fn remove<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  session: &mut Session,
  args: SetArgs,
) -> Result<()> {
  let SetArgs { set } = args;
  let set_id = resolve_set(db, &set)?;

  if !interaction.confirm(&format!("Are you sure you want to delete the \"{set}\" set?"))? {
    interaction.reply(ResponseContent::Info("Operation cancelled"))?;
    return Ok(());
  }

  db.delete_set(set_id)?;
  session.reset();
  interaction.reply(ResponseContent::Success(&format!("Removed set \"{set}\"")))
}
