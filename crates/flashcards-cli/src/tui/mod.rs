//! Full-screen learn mode.
//!
//! This module provides a terminal interface for studying one set. It uses
//! `ratatui` for rendering and `crossterm` for terminal manipulation and input.
//! The screen shows the current word, its definition once flipped, the position
//! within the set, and a help bar.
//!
//! # Navigation
//!
//! - Space/f/Enter: flip the card
//! - Right/l/n: next card
//! - Left/h/p: previous card
//! - q/Esc: quit (with confirmation)
//!
//! # Notes
//! The TUI is enabled through the "tui" feature flag.

use std::{io, time::Duration};

use crossterm::{
  event::{self, Event},
  execute,
  terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use flashcards::{database::Database, session::Session};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::{
  commands::{resolve_set, SetArgs},
  error::Result,
};

mod state;
mod styles;
mod ui;

use self::{state::UIState, ui::draw_ui};

/// Runs the full-screen learn mode for one set.
///
/// The terminal is restored to its original state when the function returns,
/// including when drawing or input handling fails.
///
/// # Errors
///
/// Returns an error if:
/// - The set does not exist
/// - Database operations fail
/// - Terminal initialization, drawing or event handling fails
pub fn run(db: &mut Database, session: &mut Session, args: SetArgs) -> Result<()> {
  let set_id = resolve_set(db, &args.set)?;
  session.load(db.list_cards(set_id)?);
  let mut state = UIState::new(args.set, session);

  // Setup terminal
  enable_raw_mode()?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;
  let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

  let result = event_loop(&mut terminal, &mut state);

  // Cleanup
  disable_raw_mode()?;
  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
  terminal.show_cursor()?;

  state.session.reset();
  result
}

/// Draws and handles input until the user confirms quitting.
fn event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  state: &mut UIState,
) -> Result<()> {
  loop {
    if state.needs_redraw {
      terminal.draw(|f| draw_ui(state, f))?;
      state.needs_redraw = false;
    }

    if event::poll(Duration::from_millis(250))? {
      match event::read()? {
        Event::Key(key) if key.kind == event::KeyEventKind::Press =>
          if state.handle_input(key.code) {
            return Ok(());
          },
        Event::Resize(..) => state.needs_redraw = true,
        _ => {},
      }
    }
  }
}
