//! End-to-end study workflows: data goes into the store, comes back out and is
//! walked through a session.

use super::*;

#[traced_test]
#[test]
fn test_study_spanish() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let spanish = db.create_set("Spanish")?;
  db.create_card(spanish, "hola", "hello")?;
  db.create_card(spanish, "adios", "goodbye")?;

  let mut session = Session::new();
  session.load(db.list_cards(spanish)?);
  assert_eq!(session.state(), SessionState::Viewing(0));
  let view = session.current().unwrap();
  assert_eq!(view.word, "hola");
  assert_eq!(view.definition, None);

  session.flip();
  assert_eq!(session.current().unwrap().definition, Some("hello"));

  session.next();
  assert_eq!(session.state(), SessionState::Viewing(1));
  let view = session.current().unwrap();
  assert_eq!(view.word, "adios");
  assert_eq!(view.definition, None);

  session.next();
  assert_eq!(session.state(), SessionState::Viewing(1));
  Ok(())
}

#[traced_test]
#[test]
fn test_select_empty_set() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let empty = db.create_set("Empty")?;

  let mut session = Session::new();
  session.load(db.list_cards(empty)?);

  assert_eq!(session.state(), SessionState::Empty);
  session.next();
  session.previous();
  session.flip();
  assert_eq!(session.state(), SessionState::Empty);
  Ok(())
}

#[traced_test]
#[test]
fn test_delete_studied_set_resets_session() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();
  let biology = db.create_set("Biology")?;
  db.create_card(biology, "mitosis", "cell division")?;

  let mut session = Session::new();
  session.load(db.list_cards(biology)?);
  session.flip();

  db.delete_set(biology)?;
  session.reset();

  assert_eq!(session.state(), SessionState::Empty);
  assert!(db.find_set("Biology")?.is_none());
  Ok(())
}

#[traced_test]
#[test]
fn test_add_word_to_new_set_by_name() -> TestResult<()> {
  let (mut db, _dir) = setup_test_db();

  // A word added under an unknown set name creates the set first.
  let set_id = match db.find_set("Biology")? {
    Some(id) => id,
    None => db.create_set("Biology")?,
  };
  db.create_card(set_id, "mitosis", "cell division")?;

  assert_eq!(db.find_set("Biology")?, Some(set_id));
  assert_eq!(db.list_cards(set_id)?.len(), 1);
  Ok(())
}
