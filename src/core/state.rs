//! # Application State
//!
//! Everything the idea generator knows during a session. This module holds
//! domain state only; presentation state (focus, scroll, hit regions) lives
//! in the `tui` module.
//!
//! ```text
//! App
//! ├── service: Arc<dyn IdeaService>  // idea backend
//! ├── domain: Option<Domain>         // selected category
//! ├── problem: String                // problem description, verbatim
//! ├── ideas: Vec<Idea>               // last successful result
//! ├── is_loading: bool               // request in flight
//! ├── error: Option<String>          // user-facing error
//! ├── dropdown_open: bool            // domain list visible
//! ├── theme: Theme                   // color scheme
//! └── status_message: String         // footer text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Nothing here is persisted.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::domain::Domain;
use crate::core::theme::Theme;
use crate::service::{Idea, IdeaService};

/// Lifecycle phase of idea generation, derived from the `App` fields.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<'a> {
    Idle,
    Loading,
    Success(&'a [Idea]),
    Error(&'a str),
}

pub struct App {
    pub service: Arc<dyn IdeaService>,
    pub domain: Option<Domain>,
    pub problem: String,
    pub ideas: Vec<Idea>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub dropdown_open: bool,
    pub theme: Theme,
    pub status_message: String,
}

impl App {
    pub fn new(service: Arc<dyn IdeaService>) -> Self {
        Self {
            service,
            domain: None,
            problem: String::new(),
            ideas: Vec::new(),
            is_loading: false,
            error: None,
            dropdown_open: false,
            theme: Theme::default(),
            status_message: String::from("Pick a domain to get started"),
        }
    }

    pub fn from_config(service: Arc<dyn IdeaService>, config: &ResolvedConfig) -> Self {
        Self {
            theme: config.theme,
            ..Self::new(service)
        }
    }

    /// The guard for `Generate`: a domain, a non-empty problem, and nothing in flight.
    pub fn can_generate(&self) -> bool {
        self.domain.is_some() && !self.problem.is_empty() && !self.is_loading
    }

    pub fn request_state(&self) -> RequestState<'_> {
        if self.is_loading {
            RequestState::Loading
        } else if let Some(ref message) = self.error {
            RequestState::Error(message)
        } else if !self.ideas.is_empty() {
            RequestState::Success(&self.ideas)
        } else {
            RequestState::Idle
        }
    }
}
