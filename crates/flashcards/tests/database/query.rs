use super::*;

#[traced_test]
#[test]
fn test_list_sets_empty_database() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  assert!(db.list_sets()?.is_empty());
  assert!(ListSets.execute(&mut db)?.is_empty());
  Ok(())
}

#[traced_test]
#[test]
fn test_list_sets_maps_names_to_ids() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let biology = db.create_set("Biology")?;
  let spanish = db.create_set("Spanish")?;

  let sets = db.list_sets()?;

  assert_eq!(sets.len(), 2);
  assert_eq!(sets["Biology"], biology);
  assert_eq!(sets["Spanish"], spanish);
  Ok(())
}

#[traced_test]
#[test]
fn test_duplicate_names_last_write_wins() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let first = db.create_set("Spanish")?;
  let second = db.create_set("Spanish")?;

  let sets = db.list_sets()?;
  assert_eq!(sets.len(), 1);
  assert_eq!(sets["Spanish"], second);
  assert_eq!(db.find_set("Spanish")?, Some(second));

  // Both rows still exist.
  let records = db.list_set_records()?;
  assert_eq!(records.len(), 2);
  assert!(records.iter().any(|set| set.id == first));
  Ok(())
}

#[traced_test]
#[test]
fn test_find_missing_set() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  db.create_set("Biology")?;

  assert_eq!(db.find_set("Chemistry")?, None);
  Ok(())
}

#[traced_test]
#[test]
fn test_list_cards_only_from_one_set() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let biology = db.create_set("Biology")?;
  let spanish = db.create_set("Spanish")?;
  db.create_card(biology, "mitosis", "cell division")?;
  db.create_card(spanish, "hola", "hello")?;
  db.create_card(biology, "osmosis", "diffusion of water")?;

  let cards = ListCards::new(biology).execute(&mut db)?;

  assert_eq!(cards, vec![
    Card::new("mitosis", "cell division"),
    Card::new("osmosis", "diffusion of water"),
  ]);
  Ok(())
}

#[traced_test]
#[test]
fn test_list_cards_of_empty_and_missing_sets() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let empty = db.create_set("Empty")?;

  assert!(db.list_cards(empty)?.is_empty());
  assert!(db.list_cards(empty + 100)?.is_empty());
  Ok(())
}
