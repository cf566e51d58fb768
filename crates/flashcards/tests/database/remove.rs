use super::*;

#[traced_test]
#[test]
fn test_remove_existing_set() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;

  assert_eq!(Remove::set(id).execute(&mut db)?, 1);

  assert_eq!(db.find_set("Biology")?, None);
  Ok(())
}

#[traced_test]
#[test]
fn test_remove_missing_set_is_noop() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;

  assert_eq!(db.delete_set(id + 1)?, 0);

  assert_eq!(db.find_set("Biology")?, Some(id));
  Ok(())
}

#[traced_test]
#[test]
fn test_remove_twice() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;

  assert_eq!(db.delete_set(id)?, 1);
  assert_eq!(db.delete_set(id)?, 0);
  Ok(())
}

#[traced_test]
#[test]
fn test_remove_leaves_cards_in_place() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;
  db.create_card(id, "mitosis", "cell division")?;
  db.create_card(id, "osmosis", "diffusion of water")?;

  db.delete_set(id)?;

  assert!(db.list_sets()?.is_empty());
  assert_eq!(db.list_cards(id)?, vec![
    Card::new("mitosis", "cell division"),
    Card::new("osmosis", "diffusion of water"),
  ]);
  Ok(())
}

#[traced_test]
#[test]
fn test_ids_not_reused_after_remove() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let old = db.create_set("Biology")?;
  db.create_card(old, "mitosis", "cell division")?;
  db.delete_set(old)?;

  let new = db.create_set("Chemistry")?;

  assert_ne!(old, new);
  assert!(db.list_cards(new)?.is_empty());
  Ok(())
}
