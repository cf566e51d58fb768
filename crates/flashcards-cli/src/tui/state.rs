//! State management for the learn-mode interface.
//!
//! Key presses are translated into exactly one [`Step`] on the session, or into
//! dialog handling. Nothing here touches the terminal, so every transition can be
//! exercised directly.

use crossterm::event::KeyCode;
use flashcards::session::{Session, Step};

/// Represents the current active dialog in the UI.
#[derive(Debug, PartialEq, Eq)]
pub enum DialogType {
  /// No dialog is currently active
  None,
  /// Showing the exit confirmation dialog
  ExitConfirm,
}

/// Maintains the complete state of the learn-mode interface.
pub struct UIState<'a> {
  /// Name of the set being studied
  pub set_name:     String,
  /// Navigation state over the set's cards
  pub session:      &'a mut Session,
  /// Current active dialog (if any)
  pub dialog:       DialogType,
  /// Whether the UI needs to be redrawn
  pub needs_redraw: bool,
}

impl<'a> UIState<'a> {
  /// Creates the interface state over an already loaded session.
  pub fn new(set_name: String, session: &'a mut Session) -> Self {
    Self { set_name, session, dialog: DialogType::None, needs_redraw: true }
  }

  /// Handles a key press. Returns true only when the user confirmed quitting.
  pub fn handle_input(&mut self, key: KeyCode) -> bool {
    match self.dialog {
      DialogType::ExitConfirm => self.handle_exit_dialog(key),
      DialogType::None => self.handle_normal_input(key),
    }
  }

  /// Handles input while the exit confirmation dialog is active.
  fn handle_exit_dialog(&mut self, key: KeyCode) -> bool {
    match key {
      KeyCode::Char('y') | KeyCode::Enter => true,
      KeyCode::Char('n') | KeyCode::Esc => {
        self.dialog = DialogType::None;
        self.needs_redraw = true;
        false
      },
      _ => false,
    }
  }

  /// Handles input during normal operation (no dialog active).
  ///
  /// Supports:
  /// - Vim-style navigation (h, l)
  /// - Arrow key navigation
  /// - Flipping with space, `f` or Enter
  /// - Quit command
  fn handle_normal_input(&mut self, key: KeyCode) -> bool {
    let step = match key {
      KeyCode::Char('q') | KeyCode::Esc => {
        self.dialog = DialogType::ExitConfirm;
        self.needs_redraw = true;
        return false;
      },
      KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Enter => Step::Flip,
      KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => Step::Next,
      KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => Step::Previous,
      _ => return false,
    };
    self.session.apply(step);
    self.needs_redraw = true;
    false
  }
}

#[cfg(test)]
mod tests {
  use flashcards::{card::Card, session::SessionState};

  use super::*;

  fn loaded() -> Session {
    let mut session = Session::new();
    session.load(vec![Card::new("hola", "hello"), Card::new("adios", "goodbye")]);
    session
  }

  #[test]
  fn test_keys_drive_session() {
    let mut session = loaded();
    let mut state = UIState::new("Spanish".to_string(), &mut session);

    assert!(!state.handle_input(KeyCode::Char(' ')));
    assert!(state.session.is_revealed());

    state.handle_input(KeyCode::Right);
    assert_eq!(state.session.state(), SessionState::Viewing(1));
    assert!(!state.session.is_revealed());

    state.handle_input(KeyCode::Char('l'));
    assert_eq!(state.session.state(), SessionState::Viewing(1));

    state.handle_input(KeyCode::Char('h'));
    assert_eq!(state.session.state(), SessionState::Viewing(0));
  }

  #[test]
  fn test_quit_requires_confirmation() {
    let mut session = loaded();
    let mut state = UIState::new("Spanish".to_string(), &mut session);

    assert!(!state.handle_input(KeyCode::Char('q')));
    assert_eq!(state.dialog, DialogType::ExitConfirm);

    // Navigation keys are ignored while the dialog is open.
    assert!(!state.handle_input(KeyCode::Right));
    assert_eq!(state.session.state(), SessionState::Viewing(0));

    assert!(!state.handle_input(KeyCode::Char('n')));
    assert_eq!(state.dialog, DialogType::None);

    state.handle_input(KeyCode::Esc);
    assert!(state.handle_input(KeyCode::Char('y')));
  }

  #[test]
  fn test_empty_session_ignores_navigation() {
    let mut session = Session::new();
    let mut state = UIState::new("Empty".to_string(), &mut session);

    state.handle_input(KeyCode::Char('f'));
    state.handle_input(KeyCode::Right);
    state.handle_input(KeyCode::Left);
    assert_eq!(state.session.state(), SessionState::Empty);
  }
}
