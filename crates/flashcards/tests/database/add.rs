use super::*;

#[traced_test]
#[test]
fn test_create_set_round_trip() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  let id = db.create_set("Biology")?;

  assert_eq!(db.list_sets()?.get("Biology"), Some(&id));
  Ok(())
}

#[traced_test]
#[test]
fn test_create_card_round_trip() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  let id = db.create_set("Biology")?;
  db.create_card(id, "mitosis", "cell division")?;

  assert!(db.list_cards(id)?.contains(&Card::new("mitosis", "cell division")));
  Ok(())
}

#[traced_test]
#[test]
fn test_ids_are_distinct() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  let set = Add::set("Biology").execute(&mut db)?;
  let first = Add::card(set, "mitosis", "cell division").execute(&mut db)?;
  let second = Add::card(set, "meiosis", "reductive cell division").execute(&mut db)?;

  assert_ne!(first, second);
  Ok(())
}

#[traced_test]
#[test]
fn test_card_for_missing_set() {
  let (mut db, _dir) = setup_test_db();

  let result = db.create_card(404, "mitosis", "cell division");

  assert!(matches!(result, Err(FlashcardError::ForeignKeyViolation(404))));
}

#[traced_test]
#[test]
fn test_card_for_missing_set_inserts_nothing() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  assert!(db.create_card(404, "mitosis", "cell division").is_err());

  assert!(db.list_cards(404)?.is_empty());
  Ok(())
}

#[traced_test]
#[test]
fn test_card_for_deleted_set() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;
  db.delete_set(id)?;

  let result = db.create_card(id, "mitosis", "cell division");

  assert!(matches!(result, Err(FlashcardError::ForeignKeyViolation(missing)) if missing == id));
  Ok(())
}

#[traced_test]
#[test]
fn test_empty_name_is_constraint_violation() {
  let (mut db, _dir) = setup_test_db();

  assert!(matches!(db.create_set(""), Err(FlashcardError::ConstraintViolation(_))));
}

#[traced_test]
#[test]
fn test_empty_card_text_is_constraint_violation() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;

  assert!(matches!(
    db.create_card(id, "", "cell division"),
    Err(FlashcardError::ConstraintViolation(_))
  ));
  assert!(matches!(db.create_card(id, "mitosis", ""), Err(FlashcardError::ConstraintViolation(_))));
  assert!(db.list_cards(id)?.is_empty());
  Ok(())
}

#[traced_test]
#[test]
fn test_long_definition() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let id = db.create_set("Biology")?;
  let definition = "The process by which a single cell divides into two. ".repeat(200);

  db.create_card(id, "mitosis", &definition)?;

  assert_eq!(db.list_cards(id)?[0].definition, definition);
  Ok(())
}
