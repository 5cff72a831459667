//! # IdeaCard Component
//!
//! Renders one idea as a bordered card: name as the title line, then
//! "Concept:" and "Features:" sections with their text wrapped to the card.
//!
//! Implements `Widget` so the grid can draw it into a `ScrollView`.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget};

use crate::service::Idea;
use crate::tui::palette::Palette;

/// Border (2) + padding (2)
const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom border
const VERTICAL_OVERHEAD: u16 = 2;

pub struct IdeaCard<'a> {
    pub idea: &'a Idea,
    pub palette: Palette,
}

impl<'a> IdeaCard<'a> {
    pub fn new(idea: &'a Idea, palette: Palette) -> Self {
        Self { idea, palette }
    }

    /// Height the card needs at the given outer width, saturating at `u16::MAX`.
    pub fn height(idea: &Idea, width: u16) -> u16 {
        let inner = width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let name = wrapped(&idea.name, inner).len();
        let concept = wrapped(&idea.concept, inner).len();
        let features = wrapped(&idea.features, inner).len();
        // name, blank, heading + concept, blank, heading + features
        let lines = name + 1 + 1 + concept + 1 + 1 + features;
        u16::try_from(lines)
            .unwrap_or(u16::MAX)
            .saturating_add(VERTICAL_OVERHEAD)
    }

    fn lines(&self, inner: usize) -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(self.palette.card_heading)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(self.palette.text);

        let mut lines: Vec<Line> = wrapped(&self.idea.name, inner)
            .into_iter()
            .map(|l| {
                Line::from(Span::styled(
                    l,
                    Style::default()
                        .fg(self.palette.text)
                        .add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        for (title, text) in [
            ("Concept:", &self.idea.concept),
            ("Features:", &self.idea.features),
        ] {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(title, heading)));
            lines.extend(
                wrapped(text, inner)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, body))),
            );
        }
        lines
    }
}

impl Widget for IdeaCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = area.width.saturating_sub(HORIZONTAL_OVERHEAD).max(1) as usize;
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.palette.card_border))
            .padding(Padding::horizontal(1));

        Paragraph::new(self.lines(inner))
            .block(block)
            .render(area, buf);
    }
}

/// Wraps text to `width`, always yielding at least one (possibly empty) line.
fn wrapped(text: &str, width: usize) -> Vec<String> {
    let lines: Vec<String> = textwrap::wrap(text, width)
        .into_iter()
        .map(|l| l.into_owned())
        .collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}
