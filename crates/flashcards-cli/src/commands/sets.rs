//! Module for listing the sets in the [`flashcards`] database.

use super::*;

/// Function for the [`Commands::Sets`] in the CLI.
///
/// Every set row is listed, including sets that share a name.
pub fn sets<I: UserInteraction>(interaction: &I, db: &mut Database) -> Result<()> {
  let summaries = db
    .list_set_records()?
    .into_iter()
    .map(|set| {
      let count = db.list_cards(set.id)?.len();
      Ok((set, count))
    })
    .collect::<Result<Vec<_>>>()?;

  interaction.reply(ResponseContent::Sets(&summaries))
}
