//! # IdeaGrid Component
//!
//! Scrollable grid of idea cards. Column count follows the terminal width,
//! each row is as tall as its tallest card.
//!
//! `IdeaGrid` is a transient component (created each frame) wrapping
//! `&'a mut IdeaGridState` (persistent scroll state) and the idea slice
//! (props). The grid is replaced as a whole whenever the idea list changes.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::service::Idea;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::idea_card::IdeaCard;
use crate::tui::event::TuiEvent;
use crate::tui::palette::Palette;

/// Horizontal gap between cards
const GUTTER: u16 = 1;

/// Scroll state for the grid. Must be persisted in the parent TuiState.
#[derive(Default)]
pub struct IdeaGridState {
    pub scroll_state: ScrollViewState,
    /// Content height from the last render (for scroll clamping)
    pub content_height: u16,
    /// Viewport height from the last render
    pub viewport_height: u16,
}

impl IdeaGridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep the offset inside the content so scrolling never runs past the last row.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for IdeaGridState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}

/// Number of card columns for a given width.
pub fn columns_for_width(width: u16) -> u16 {
    match width {
        w if w >= 120 => 3,
        w if w >= 80 => 2,
        _ => 1,
    }
}

/// Card rects laid out row by row inside a canvas of `content_width`.
///
/// Returns the rects (in canvas coordinates) and the total canvas height.
pub fn layout_cards(ideas: &[Idea], content_width: u16) -> (Vec<Rect>, u16) {
    let columns = columns_for_width(content_width);
    let gutters = GUTTER * columns.saturating_sub(1);
    let card_width = (content_width.saturating_sub(gutters) / columns).max(1);

    let mut rects = Vec::with_capacity(ideas.len());
    let mut y = 0u16;
    for row in ideas.chunks(columns as usize) {
        let row_height = row
            .iter()
            .map(|idea| IdeaCard::height(idea, card_width))
            .max()
            .unwrap_or(0);
        for (col, _) in row.iter().enumerate() {
            let x = col as u16 * (card_width + GUTTER);
            rects.push(Rect::new(x, y, card_width, row_height));
        }
        y = y.saturating_add(row_height);
    }
    (rects, y)
}

pub struct IdeaGrid<'a> {
    state: &'a mut IdeaGridState,
    ideas: &'a [Idea],
    palette: Palette,
}

impl<'a> IdeaGrid<'a> {
    pub fn new(state: &'a mut IdeaGridState, ideas: &'a [Idea], palette: Palette) -> Self {
        Self {
            state,
            ideas,
            palette,
        }
    }
}

impl Component for IdeaGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);
        let (rects, total_height) = layout_cards(self.ideas, content_width);

        self.state.content_height = total_height;
        self.state.viewport_height = area.height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (idea, rect) in self.ideas.iter().zip(rects) {
            scroll_view.render_widget(IdeaCard::new(idea, self.palette), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
