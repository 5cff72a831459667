//! # ProblemInput Component
//!
//! Single-line field bound to the problem description.
//!
//! The buffer and cursor are internal state; every edit emits
//! `ProblemEvent::Changed` with the full text so the parent can forward it
//! to `Action::SetProblem`. Long text scrolls horizontally to keep the
//! cursor visible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const PLACEHOLDER: &str = "Describe Your Problem or Purpose";

/// Border (2) + padding (2) consumed horizontally by the block
const HORIZONTAL_OVERHEAD: u16 = 4;

/// High-level events emitted by the ProblemInput
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemEvent {
    /// Text changed; carries the full new content
    Changed(String),
    /// Enter pressed
    Submit,
}

pub struct ProblemInput {
    /// Text buffer (Internal State)
    pub buffer: String,
    /// Cursor position as byte offset in buffer
    cursor: usize,
    /// Whether the field has keyboard focus (Prop)
    pub focused: bool,
    /// Colors (Prop)
    pub palette: Palette,
}

impl ProblemInput {
    pub fn new(palette: Palette) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            focused: false,
            palette,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the slice to draw and the cursor column within it.
    ///
    /// Drops leading characters until the text before the cursor fits.
    fn visible_window(&self, inner_width: u16) -> (&str, u16) {
        let width = inner_width.saturating_sub(1) as usize; // keep a cell for the cursor
        let mut start = 0;
        while start < self.cursor && self.buffer[start..self.cursor].width() > width {
            start = next_char_boundary(&self.buffer, start);
        }
        let column = self.buffer[start..self.cursor].width() as u16;
        (&self.buffer[start..], column)
    }

    fn changed(&self) -> Option<ProblemEvent> {
        Some(ProblemEvent::Changed(self.buffer.clone()))
    }
}

impl Component for ProblemInput {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border(self.focused))
            .title(" Problem ")
            .padding(ratatui::widgets::Padding::horizontal(1));

        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD);
        let (visible, column) = self.visible_window(inner_width);

        let line = if self.buffer.is_empty() {
            Line::from(Span::styled(PLACEHOLDER, Style::default().fg(self.palette.muted)))
        } else {
            Line::from(Span::styled(
                visible.to_string(),
                Style::default().fg(self.palette.text),
            ))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);

        if self.focused {
            frame.set_cursor_position((area.x + 2 + column, area.y + 1));
        }
    }
}

impl EventHandler for ProblemInput {
    type Event = ProblemEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => {
                self.buffer.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                self.changed()
            }
            TuiEvent::Paste(text) => {
                // Single-line field: fold newlines into spaces
                let text = text.replace(['\r', '\n'], " ");
                self.buffer.insert_str(self.cursor, &text);
                self.cursor += text.len();
                self.changed()
            }
            TuiEvent::Backspace => {
                if self.cursor == 0 {
                    return None;
                }
                let prev = prev_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(prev..self.cursor);
                self.cursor = prev;
                self.changed()
            }
            TuiEvent::Delete => {
                if self.cursor >= self.buffer.len() {
                    return None;
                }
                let next = next_char_boundary(&self.buffer, self.cursor);
                self.buffer.drain(self.cursor..next);
                self.changed()
            }
            TuiEvent::CursorLeft => {
                self.cursor = prev_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorRight => {
                self.cursor = next_char_boundary(&self.buffer, self.cursor);
                None
            }
            TuiEvent::CursorHome => {
                self.cursor = 0;
                None
            }
            TuiEvent::CursorEnd => {
                self.cursor = self.buffer.len();
                None
            }
            TuiEvent::Submit => Some(ProblemEvent::Submit),
            _ => None,
        }
    }
}

/// Find the byte offset of the previous character boundary before `pos` in `text`.
fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}
