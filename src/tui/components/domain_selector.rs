//! # Domain Selector Component
//!
//! A button showing the current domain and, when open, a list of the whole
//! catalog drawn beneath it as an overlay.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DomainSelectorState` lives in `TuiState` (highlight, list scroll)
//! - `DomainSelector` is created each frame with borrowed state
//!
//! Whether the list is open is owned by `App`; the parent copies it into
//! `DomainSelectorState::open` before routing events.

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, List, ListItem, ListState, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::domain::{Domain, catalog};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

pub const PLACEHOLDER: &str = "Select Your Domain or Field";

/// Rows the open list occupies: every entry plus the border.
pub const LIST_HEIGHT: u16 = Domain::ALL.len() as u16 + 2;

/// Events emitted by the domain selector.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectorEvent {
    Toggle,
    Select(Domain),
    Dismiss,
}

/// Persistent state for the selector.
pub struct DomainSelectorState {
    /// Mirrors `App::dropdown_open` (prop)
    pub open: bool,
    pub highlighted: usize,
    pub list_state: ListState,
}

impl Default for DomainSelectorState {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainSelectorState {
    pub fn new() -> Self {
        Self {
            open: false,
            highlighted: 0,
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    /// Moves the highlight to the current selection (or the first entry).
    pub fn highlight(&mut self, current: Option<Domain>) {
        self.highlighted = current.map(Domain::index).unwrap_or(0);
        self.list_state.select(Some(self.highlighted));
    }

    /// Moves the highlight, clamped to the catalog. The list scrolls to keep it visible.
    fn move_highlight(&mut self, index: usize) {
        self.highlighted = index.min(Domain::ALL.len() - 1);
        self.list_state.select(Some(self.highlighted));
    }

    /// Maps a click inside the open list to the domain on that row.
    pub fn row_at(&self, list_area: Rect, column: u16, row: u16) -> Option<Domain> {
        let inner = Block::default().borders(Borders::ALL).inner(list_area);
        if !inner.contains(Position::new(column, row)) {
            return None;
        }
        let index = self.list_state.offset() + (row - inner.y) as usize;
        Domain::ALL.get(index).copied()
    }
}

impl EventHandler for DomainSelectorState {
    type Event = SelectorEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        if !self.open {
            return match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') | TuiEvent::CursorDown => {
                    Some(SelectorEvent::Toggle)
                }
                _ => None,
            };
        }

        match event {
            TuiEvent::Escape => Some(SelectorEvent::Dismiss),
            TuiEvent::CursorUp | TuiEvent::ScrollUp => {
                self.move_highlight(self.highlighted.saturating_sub(1));
                None
            }
            TuiEvent::CursorDown | TuiEvent::ScrollDown => {
                self.move_highlight(self.highlighted + 1);
                None
            }
            TuiEvent::ScrollPageUp => {
                self.move_highlight(0);
                None
            }
            TuiEvent::ScrollPageDown => {
                self.move_highlight(Domain::ALL.len() - 1);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                Domain::ALL.get(self.highlighted).copied().map(SelectorEvent::Select)
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the selector.
pub struct DomainSelector<'a> {
    state: &'a mut DomainSelectorState,
    selected: Option<Domain>,
    focused: bool,
    palette: Palette,
}

impl<'a> DomainSelector<'a> {
    pub fn new(
        state: &'a mut DomainSelectorState,
        selected: Option<Domain>,
        focused: bool,
        palette: Palette,
    ) -> Self {
        Self {
            state,
            selected,
            focused,
            palette,
        }
    }

    /// Where the open list goes: directly under the button, clipped to `bounds`.
    pub fn list_area(button: Rect, bounds: Rect) -> Rect {
        let top = button.y + button.height;
        let available = (bounds.y + bounds.height).saturating_sub(top);
        Rect::new(button.x, top, button.width, LIST_HEIGHT.min(available))
    }

    /// Draws the open list. Call after everything else so it overlays.
    pub fn render_list(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Clear, area);

        let items: Vec<ListItem> = catalog()
            .map(|entry| {
                let marker = if Some(entry.domain) == self.selected { " ✓" } else { "" };
                ListItem::new(Line::from(vec![
                    Span::styled(
                        pad_icon(entry.icon),
                        Style::default().fg(self.palette.highlight),
                    ),
                    Span::raw(entry.label),
                    Span::styled(marker, Style::default().fg(self.palette.accent)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(self.palette.border(true)),
            )
            .style(self.palette.base())
            .highlight_style(
                Style::default()
                    .bg(self.palette.accent)
                    .fg(self.palette.text)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for DomainSelector<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chevron = if self.state.open { "▲" } else { "▼" };

        let label = match self.selected {
            Some(domain) => Line::from(vec![
                Span::styled(
                    pad_icon(domain.icon()),
                    Style::default().fg(self.palette.highlight),
                ),
                Span::styled(
                    domain.label(),
                    Style::default().fg(self.palette.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            None => Line::from(Span::styled(
                PLACEHOLDER,
                Style::default().fg(self.palette.muted),
            )),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.palette.border(self.focused))
            .title(" Domain ")
            .title(Line::from(format!(" {chevron} ")).right_aligned());

        frame.render_widget(Paragraph::new(label).block(block), area);
    }
}

/// Icon followed by spacing so labels line up whether the glyph is 1 or 2 cells wide.
fn pad_icon(icon: &str) -> String {
    let width = UnicodeWidthStr::width(icon);
    format!("{}{}", icon, " ".repeat(4usize.saturating_sub(width)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_closed_selector_toggles_on_enter() {
        let mut state = DomainSelectorState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(SelectorEvent::Toggle));
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar(' ')),
            Some(SelectorEvent::Toggle)
        );
        assert_eq!(state.handle_event(&TuiEvent::InputChar('x')), None);
    }

    #[test]
    fn test_open_selector_navigates_and_selects() {
        let mut state = DomainSelectorState::new();
        state.open = true;
        state.highlight(None);

        state.handle_event(&TuiEvent::CursorDown);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit),
            Some(SelectorEvent::Select(Domain::Education))
        );

        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_highlight_clamps_at_end() {
        let mut state = DomainSelectorState::new();
        state.open = true;
        state.highlight(Some(Domain::Security));
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.highlighted, Domain::ALL.len() - 1);
    }

    #[test]
    fn test_wheel_moves_highlight_in_open_list() {
        let mut state = DomainSelectorState::new();
        state.open = true;
        state.highlight(None);

        state.handle_event(&TuiEvent::ScrollDown);
        state.handle_event(&TuiEvent::ScrollDown);
        assert_eq!(state.highlighted, 2);
        state.handle_event(&TuiEvent::ScrollUp);
        assert_eq!(state.highlighted, 1);
        state.handle_event(&TuiEvent::ScrollPageDown);
        assert_eq!(state.list_state.selected(), Some(Domain::ALL.len() - 1));
    }

    #[test]
    fn test_closed_selector_ignores_wheel() {
        let mut state = DomainSelectorState::new();
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn test_escape_dismisses_open_list() {
        let mut state = DomainSelectorState::new();
        state.open = true;
        assert_eq!(state.handle_event(&TuiEvent::Escape), Some(SelectorEvent::Dismiss));
    }

    #[test]
    fn test_row_at_maps_rows_to_domains() {
        let state = DomainSelectorState::new();
        let area = Rect::new(0, 3, 30, LIST_HEIGHT);

        // First inner row sits one below the top border
        assert_eq!(state.row_at(area, 5, 4), Some(Domain::Tech));
        assert_eq!(state.row_at(area, 5, 7), Some(Domain::Finance));
        assert_eq!(state.row_at(area, 5, 15), Some(Domain::Security));
        // Borders are not rows
        assert_eq!(state.row_at(area, 5, 3), None);
        assert_eq!(state.row_at(area, 0, 5), None);
    }

    #[test]
    fn test_list_area_is_clipped() {
        let button = Rect::new(2, 4, 40, 3);
        let bounds = Rect::new(0, 0, 80, 12);
        assert_eq!(
            DomainSelector::list_area(button, bounds),
            Rect::new(2, 7, 40, 5)
        );
    }

    #[test]
    fn test_render_placeholder_when_unset() {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        let mut state = DomainSelectorState::new();
        terminal
            .draw(|f| {
                DomainSelector::new(&mut state, None, false, Palette::for_theme(Default::default()))
                    .render(f, f.area());
            })
            .unwrap();
        assert!(buffer_text(&terminal).contains("Select Your Domain or Field"));
    }

    #[test]
    fn test_render_shows_selected_label_and_icon() {
        let mut terminal = Terminal::new(TestBackend::new(50, 3)).unwrap();
        let mut state = DomainSelectorState::new();
        terminal
            .draw(|f| {
                DomainSelector::new(
                    &mut state,
                    Some(Domain::Finance),
                    true,
                    Palette::for_theme(Default::default()),
                )
                .render(f, f.area());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Finance"));
        assert!(text.contains(Domain::Finance.icon()));
        assert!(!text.contains("Select Your Domain"));
    }

    #[test]
    fn test_render_list_shows_catalog() {
        let mut terminal = Terminal::new(TestBackend::new(40, LIST_HEIGHT)).unwrap();
        let mut state = DomainSelectorState::new();
        state.open = true;
        terminal
            .draw(|f| {
                DomainSelector::new(&mut state, None, true, Palette::for_theme(Default::default()))
                    .render_list(f, f.area());
            })
            .unwrap();
        let text = buffer_text(&terminal);
        for domain in Domain::ALL {
            assert!(text.contains(domain.label()), "missing {}", domain.label());
        }
    }
}
