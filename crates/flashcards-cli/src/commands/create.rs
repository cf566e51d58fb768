//! Module for the "create" functionality of the [`flashcards`] database.

use super::*;

/// Arguments for [`Commands::Create`]
#[derive(Args, Clone)]
pub struct CreateArgs {
  /// Name of the new set
  pub name: String,
}

/// Function for the [`Commands::Create`] in the CLI.
pub fn create<I: UserInteraction>(
  interaction: &I,
  db: &mut Database,
  create_args: CreateArgs,
) -> Result<()> {
  let CreateArgs { name } = create_args;

  if db.find_set(&name)?.is_some() {
    interaction.reply(ResponseContent::Warning(&format!(
      "A set named \"{name}\" already exists; lookups by name will now find the new one"
    )))?;
  }

  let id = db.create_set(&name)?;
  interaction.reply(ResponseContent::Success(&format!("Created set \"{name}\" (#{id})")))
}
