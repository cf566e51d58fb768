//! Module for showing the cards of one set.

use super::*;

/// Function for the [`Commands::Cards`] in the CLI.
pub fn cards<I: UserInteraction>(interaction: &I, db: &mut Database, args: SetArgs) -> Result<()> {
  let set_id = resolve_set(db, &args.set)?;
  let cards = db.list_cards(set_id)?;
  interaction.reply(ResponseContent::Cards { set: &args.set, cards: &cards })
}
