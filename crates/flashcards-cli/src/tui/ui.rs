//! Drawing and layout for the learn-mode interface.
//!
//! The screen is a title line, the card itself (word on top, definition or a
//! hint below), and a one-line help bar. The exit confirmation is drawn as a
//! centered popup over everything else.

use ratatui::{
  layout::{Alignment, Constraint, Direction, Layout, Rect},
  text::{Line, Span, Text},
  widgets::{Block, Borders, Clear, Paragraph, Wrap},
  Frame,
};

use super::{
  state::{DialogType, UIState},
  styles,
};

/// Main drawing entry point, handles the entire UI render.
pub fn draw_ui(state: &UIState, frame: &mut Frame) {
  let chunks = Layout::default()
    .direction(Direction::Vertical)
    .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
    .split(frame.area());

  draw_title(state, frame, chunks[0]);
  draw_card(state, frame, chunks[1]);
  draw_help(frame, chunks[2]);

  if state.dialog == DialogType::ExitConfirm {
    draw_exit_dialog(frame);
  }
}

/// Draws the set name and progress.
fn draw_title(state: &UIState, frame: &mut Frame, area: Rect) {
  let progress = match state.session.position() {
    Some((position, total)) => format!(" card {position} of {total}"),
    None => String::new(),
  };
  let title = Line::from(vec![
    Span::styled(state.set_name.clone(), styles::TITLE),
    Span::styled(progress, styles::HELP),
  ]);
  frame.render_widget(Paragraph::new(title), area);
}

/// Draws the current card, or a notice when the set has no cards.
fn draw_card(state: &UIState, frame: &mut Frame, area: Rect) {
  let block = Block::default()
    .borders(Borders::ALL)
    .border_style(styles::card_border(state.session.is_revealed()));

  let text = match state.session.current() {
    None => Text::from(Line::styled("No cards available", styles::HELP)),
    Some(view) => {
      let mut lines = vec![Line::default(), Line::styled(view.word.to_string(), styles::WORD)];
      lines.push(Line::default());
      match view.definition {
        Some(definition) =>
          lines.extend(definition.lines().map(|l| Line::styled(l.to_string(), styles::NORMAL))),
        None => lines.push(Line::styled("press space to flip", styles::HELP)),
      }
      Text::from(lines)
    },
  };

  let card =
    Paragraph::new(text).block(block).alignment(Alignment::Center).wrap(Wrap { trim: true });
  frame.render_widget(card, area);
}

/// Draws the key bindings.
fn draw_help(frame: &mut Frame, area: Rect) {
  let mut spans = Vec::new();
  for (key, action) in [("space", "flip"), ("←/h", "previous"), ("→/l", "next"), ("q", "quit")] {
    spans.push(Span::styled(key, styles::KEY_HIGHLIGHT));
    spans.push(Span::styled(format!(" {action}  "), styles::HELP));
  }
  frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draws the exit confirmation popup.
fn draw_exit_dialog(frame: &mut Frame) {
  let area = centered_rect(40, 5, frame.area());
  let dialog = Paragraph::new(vec![
    Line::styled("Stop studying?", styles::TITLE),
    Line::from(vec![
      Span::styled("y", styles::KEY_HIGHLIGHT),
      Span::styled(" yes  ", styles::HELP),
      Span::styled("n", styles::KEY_HIGHLIGHT),
      Span::styled(" no", styles::HELP),
    ]),
  ])
  .alignment(Alignment::Center)
  .block(Block::default().borders(Borders::ALL));

  frame.render_widget(Clear, area);
  frame.render_widget(dialog, area);
}

/// Returns a rectangle of at most `width` x `height` centered in `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
  let width = width.min(area.width);
  let height = height.min(area.height);
  Rect {
    x: area.x + (area.width - width) / 2,
    y: area.y + (area.height - height) / 2,
    width,
    height,
  }
}
