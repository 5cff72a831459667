//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the button spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Outside-click dismissal
//!
//! While the domain list is open, `TuiState` holds a `PointerSubscription`
//! over the selector's footprint. A pointer-down outside it dispatches
//! `Action::CloseDropdown`. The subscription is dropped as soon as the list
//! closes, and with `TuiState` on exit.

mod component;
pub mod components;
pub mod event;
pub mod palette;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::service::{HttpIdeaService, IdeaRequest, IdeaService};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DomainSelectorState, IdeaGridState, ProblemEvent, ProblemInput, SelectorEvent,
};
use crate::tui::event::{PointerSubscription, TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::palette::Palette;
use crate::tui::ui::HitRegions;

/// Which control receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Selector,
    Problem,
    Generate,
}

impl Focus {
    /// Next focus stop. The problem field is skipped until a domain is chosen.
    fn cycle(self, forward: bool, has_domain: bool) -> Focus {
        let order: &[Focus] = if has_domain {
            &[Focus::Selector, Focus::Problem, Focus::Generate]
        } else {
            &[Focus::Selector, Focus::Generate]
        };
        let current = order.iter().position(|f| *f == self).unwrap_or(0);
        let next = if forward {
            (current + 1) % order.len()
        } else {
            (current + order.len() - 1) % order.len()
        };
        order[next]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub selector: DomainSelectorState,
    pub problem_input: ProblemInput,
    pub idea_grid: IdeaGridState,
    /// Rects from the last frame for mouse hit testing
    pub regions: HitRegions,
    /// Live only while the dropdown is open
    pub dismiss_subscription: Option<PointerSubscription>,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        Self {
            focus: Focus::Selector,
            selector: DomainSelectorState::new(),
            problem_input: ProblemInput::new(Palette::for_theme(app.theme)),
            idea_grid: IdeaGridState::new(),
            regions: HitRegions::default(),
            dismiss_subscription: None,
        }
    }

    /// Opens or closes the outside-click subscription to match `App::dropdown_open`.
    pub fn sync_subscription(&mut self, app: &App) {
        self.selector.open = app.dropdown_open;
        match (app.dropdown_open, self.dismiss_subscription.is_some()) {
            (true, false) => {
                self.selector.highlight(app.domain);
                self.dismiss_subscription =
                    Some(PointerSubscription::subscribe(self.regions.selector_bounds()));
            }
            (false, true) => {
                self.dismiss_subscription = None;
            }
            _ => {}
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Build the idea service from the resolved config.
pub fn build_service(config: &ResolvedConfig) -> Arc<dyn IdeaService> {
    Arc::new(HttpIdeaService::new(
        config.base_url.clone(),
        config.endpoint.clone(),
    ))
}

/// Applies one terminal event to the app and TUI state.
///
/// Returns the effect the event loop must carry out.
pub fn route_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Effect {
    tui.selector.open = app.dropdown_open;

    let effect = match event {
        TuiEvent::Quit => update(app, Action::Quit),
        TuiEvent::Resize => Effect::None,
        TuiEvent::ToggleTheme => update(app, Action::ToggleTheme),
        TuiEvent::MouseDown(column, row) => handle_pointer_down(app, tui, column, row),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown => {
            if app.dropdown_open {
                tui.selector.handle_event(&event);
            } else {
                tui.idea_grid.handle_event(&event);
            }
            Effect::None
        }
        // Open list captures the keyboard
        _ if app.dropdown_open => match tui.selector.handle_event(&event) {
            Some(selector_event) => apply_selector_event(app, tui, selector_event),
            None => Effect::None,
        },
        TuiEvent::Escape => update(app, Action::Quit),
        TuiEvent::FocusNext | TuiEvent::FocusPrev => {
            let forward = matches!(event, TuiEvent::FocusNext);
            tui.focus = tui.focus.cycle(forward, app.domain.is_some());
            Effect::None
        }
        _ => match tui.focus {
            Focus::Selector => match tui.selector.handle_event(&event) {
                Some(selector_event) => apply_selector_event(app, tui, selector_event),
                None => Effect::None,
            },
            Focus::Problem => match tui.problem_input.handle_event(&event) {
                Some(ProblemEvent::Changed(text)) => update(app, Action::SetProblem(text)),
                Some(ProblemEvent::Submit) => update(app, Action::Generate),
                None => Effect::None,
            },
            Focus::Generate => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => update(app, Action::Generate),
                _ => Effect::None,
            },
        },
    };

    tui.sync_subscription(app);
    effect
}

fn apply_selector_event(app: &mut App, tui: &mut TuiState, event: SelectorEvent) -> Effect {
    match event {
        SelectorEvent::Toggle => update(app, Action::ToggleDropdown),
        SelectorEvent::Dismiss => update(app, Action::CloseDropdown),
        SelectorEvent::Select(domain) => {
            let effect = update(app, Action::SelectDomain(domain));
            tui.focus = Focus::Problem;
            effect
        }
    }
}

fn handle_pointer_down(app: &mut App, tui: &mut TuiState, column: u16, row: u16) -> Effect {
    // The outside-click subscription sees the event first
    if let Some(ref subscription) = tui.dismiss_subscription
        && subscription.is_outside(column, row)
    {
        debug!("Pointer down outside selector at ({}, {})", column, row);
        update(app, Action::CloseDropdown);
        tui.sync_subscription(app);
    }

    if app.dropdown_open {
        if let Some(list) = tui.regions.dropdown
            && let Some(domain) = tui.selector.row_at(list, column, row)
        {
            return apply_selector_event(app, tui, SelectorEvent::Select(domain));
        }
        if tui.regions.in_selector(column, row) {
            return update(app, Action::ToggleDropdown);
        }
        return Effect::None;
    }

    if tui.regions.in_selector(column, row) {
        tui.focus = Focus::Selector;
        update(app, Action::ToggleDropdown)
    } else if tui.regions.in_problem(column, row) {
        tui.focus = Focus::Problem;
        Effect::None
    } else if tui.regions.in_generate(column, row) {
        tui.focus = Focus::Generate;
        update(app, Action::Generate)
    } else {
        Effect::None
    }
}

/// Applies an action coming back from a background task.
pub fn apply_background_action(app: &mut App, tui: &mut TuiState, action: Action) -> Effect {
    let replaces_grid = matches!(action, Action::IdeasReceived(_));
    let effect = update(app, action);
    if replaces_grid && !app.ideas.is_empty() {
        tui.idea_grid = IdeaGridState::new();
    }
    effect
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let service = build_service(&config);
    info!("Using idea service '{}'", service.name());
    let mut app = App::from_config(service, &config);
    let mut tui = TuiState::new(&app);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.is_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match route_event(&mut app, &mut tui, event) {
                Effect::Quit => {
                    should_quit = true;
                    break;
                }
                Effect::SpawnRequest(request) => {
                    spawn_request(app.service.clone(), request, tx.clone());
                }
                Effect::None => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle completions from background tasks
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply_background_action(&mut app, &mut tui, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    // Ends any open pointer subscription before the terminal is handed back
    drop(tui);
    ratatui::restore();
    Ok(())
}

/// Runs one generation on the tokio runtime and reports exactly one completion action.
fn spawn_request(service: Arc<dyn IdeaService>, request: IdeaRequest, tx: mpsc::Sender<Action>) {
    info!("Spawning idea request via '{}'", service.name());
    tokio::spawn(async move {
        let result = service.generate(&request).await;
        if let Err(ref e) = result {
            warn!("Idea request failed: {}", e);
        }
        if tx.send(Action::from(result)).is_err() {
            warn!("Failed to send idea result: receiver dropped");
        }
    });
}
