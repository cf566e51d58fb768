//! UI styling constants and helper functions for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Style for help text and secondary information.
pub const HELP: Style = Style::new().fg(Color::DarkGray);

/// Style for keyboard shortcuts in the help bar.
pub const KEY_HIGHLIGHT: Style = Style::new().fg(Color::Yellow);

/// Style for the word on the front of the card.
pub const WORD: Style = Style::new().fg(Color::LightCyan).add_modifier(Modifier::BOLD);

/// Style for regular text content, including revealed definitions.
pub const NORMAL: Style = Style::new().fg(Color::Gray);

/// Style for section titles and headers.
pub const TITLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Returns the border style for the card, brighter once it has been flipped.
pub fn card_border(revealed: bool) -> Style {
  if revealed {
    Style::default().fg(Color::LightBlue)
  } else {
    Style::default().fg(Color::Blue)
  }
}
