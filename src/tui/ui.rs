use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{
    DomainSelector, GenerateButton, Header, IdeaGrid, StatusBar,
};
use crate::tui::palette::Palette;
use crate::tui::{Focus, TuiState};

/// Widest the form column gets on large terminals
const FORM_MAX_WIDTH: u16 = 72;

/// Screen rects from the last frame, used to hit-test mouse clicks.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct HitRegions {
    pub selector: Rect,
    /// Open dropdown list (None when closed)
    pub dropdown: Option<Rect>,
    /// Problem field (None until a domain is chosen)
    pub problem: Option<Rect>,
    pub generate: Rect,
    pub results: Rect,
}

impl HitRegions {
    /// The selector's full footprint: button plus the open list.
    pub fn selector_bounds(&self) -> Rect {
        match self.dropdown {
            Some(list) => self.selector.union(list),
            None => self.selector,
        }
    }

    pub fn in_selector(&self, column: u16, row: u16) -> bool {
        self.selector.contains(Position::new(column, row))
    }

    pub fn in_problem(&self, column: u16, row: u16) -> bool {
        self.problem
            .is_some_and(|r| r.contains(Position::new(column, row)))
    }

    pub fn in_generate(&self, column: u16, row: u16) -> bool {
        self.generate.contains(Position::new(column, row))
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let palette = Palette::for_theme(app.theme);
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let [header_area, body, status_area] =
        Layout::vertical([Length(2), Min(0), Length(1)]).areas(area);

    Header::new(app.theme).render(frame, header_area);

    // Form: selector, problem (once a domain is set), button, error line
    let problem_height = if app.domain.is_some() { 3 } else { 0 };
    let error_height = if app.error.is_some() { 1 } else { 0 };
    let form_height = 1 + 3 + problem_height + 3 + error_height + 1;

    let [form_area, results_area] = Layout::vertical([Length(form_height), Min(0)]).areas(body);
    let [form_col] = Layout::horizontal([Constraint::Max(FORM_MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(form_area);
    let [_, selector_area, problem_area, button_area, error_area, _] = Layout::vertical([
        Length(1),
        Length(3),
        Length(problem_height),
        Length(3),
        Length(error_height),
        Length(1),
    ])
    .areas(form_col);

    DomainSelector::new(
        &mut tui.selector,
        app.domain,
        tui.focus == Focus::Selector,
        palette,
    )
    .render(frame, selector_area);

    if app.domain.is_some() {
        tui.problem_input.focused = tui.focus == Focus::Problem;
        tui.problem_input.palette = palette;
        tui.problem_input.render(frame, problem_area);
    }

    GenerateButton {
        enabled: app.can_generate(),
        loading: app.is_loading,
        focused: tui.focus == Focus::Generate,
        spinner_frame,
        palette,
    }
    .render(frame, button_area);

    if let Some(ref message) = app.error {
        let error = Paragraph::new(message.as_str())
            .style(Style::default().fg(palette.error).add_modifier(Modifier::BOLD))
            .centered();
        frame.render_widget(error, error_area);
    }

    let grid_area = results_area.inner(ratatui::layout::Margin::new(1, 0));
    if !app.ideas.is_empty() {
        IdeaGrid::new(&mut tui.idea_grid, &app.ideas, palette).render(frame, grid_area);
    }

    StatusBar {
        status_message: app.status_message.clone(),
        palette,
    }
    .render(frame, status_area);

    // Dropdown last so it overlays the form and results
    let dropdown = if app.dropdown_open {
        let list_area = DomainSelector::list_area(selector_area, body);
        DomainSelector::new(&mut tui.selector, app.domain, true, palette)
            .render_list(frame, list_area);
        Some(list_area)
    } else {
        None
    };

    tui.regions = HitRegions {
        selector: selector_area,
        dropdown,
        problem: app.domain.is_some().then_some(problem_area),
        generate: button_area,
        results: grid_area,
    };

    if let Some(ref mut subscription) = tui.dismiss_subscription {
        subscription.set_region(tui.regions.selector_bounds());
    }
}
