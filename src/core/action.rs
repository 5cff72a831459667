//! # Actions
//!
//! Everything that can happen in the idea generator becomes an `Action`.
//! User picks a domain? That's `Action::SelectDomain(domain)`.
//! Service responds? That's `Action::IdeasReceived(ideas)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to perform. No side effects happen here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::core::domain::Domain;
use crate::core::state::App;
use crate::service::{Idea, IdeaRequest, MSG_INVALID_FORMAT, ServiceError};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SelectDomain(Domain),
    SetProblem(String),
    ToggleDropdown,
    CloseDropdown,
    Generate,
    /// Service call succeeded.
    IdeasReceived(Vec<Idea>),
    /// Service call failed; carries the user-facing message.
    GenerationFailed(String),
    ToggleTheme,
    Quit,
}

impl From<Result<Vec<Idea>, ServiceError>> for Action {
    fn from(result: Result<Vec<Idea>, ServiceError>) -> Self {
        match result {
            Ok(ideas) => Action::IdeasReceived(ideas),
            Err(e) => Action::GenerationFailed(e.user_message().to_string()),
        }
    }
}

/// Work the adapter must do after an `update`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Send exactly one request to the idea service.
    SpawnRequest(IdeaRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::SelectDomain(domain) => {
            debug!("Domain selected: {:?}", domain);
            app.domain = Some(domain);
            app.dropdown_open = false;
            app.status_message = format!("Domain: {}", domain.label());
            Effect::None
        }
        Action::SetProblem(text) => {
            app.problem = text;
            Effect::None
        }
        Action::ToggleDropdown => {
            app.dropdown_open = !app.dropdown_open;
            Effect::None
        }
        Action::CloseDropdown => {
            app.dropdown_open = false;
            Effect::None
        }
        Action::Generate => {
            let Some(domain) = app.domain.filter(|_| app.can_generate()) else {
                debug!(
                    "Generate ignored: domain={:?}, problem_empty={}, loading={}",
                    app.domain,
                    app.problem.is_empty(),
                    app.is_loading
                );
                return Effect::None;
            };
            app.is_loading = true;
            app.error = None;
            app.status_message = String::from("Generating ideas...");
            info!("Generate accepted for domain {:?}", domain);
            Effect::SpawnRequest(IdeaRequest {
                domain: Some(domain),
                description: app.problem.clone(),
            })
        }
        Action::IdeasReceived(ideas) => {
            if !app.is_loading {
                warn!("Dropping {} ideas received with no request in flight", ideas.len());
                return Effect::None;
            }
            if ideas.is_empty() {
                fail(app, MSG_INVALID_FORMAT.to_string());
            } else {
                info!("Received {} ideas", ideas.len());
                app.status_message = format!("{} ideas generated", ideas.len());
                app.ideas = ideas;
                app.error = None;
            }
            app.is_loading = false;
            Effect::None
        }
        Action::GenerationFailed(message) => {
            if !app.is_loading {
                warn!("Dropping failure with no request in flight: {}", message);
                return Effect::None;
            }
            fail(app, message);
            app.is_loading = false;
            Effect::None
        }
        Action::ToggleTheme => {
            app.theme = app.theme.toggle();
            app.status_message = format!("Theme: {}", app.theme.label());
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn fail(app: &mut App, message: String) {
    warn!("Idea generation failed: {}", message);
    app.status_message = String::from("Generation failed");
    app.error = Some(message);
    app.ideas.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::RequestState;
    use crate::service::MSG_GENERATION_FAILED;
    use crate::test_support::test_app;

    fn ready_app(domain: Domain, problem: &str) -> App {
        let mut app = test_app();
        update(&mut app, Action::SelectDomain(domain));
        update(&mut app, Action::SetProblem(problem.to_string()));
        app
    }

    fn inbox_zero() -> Idea {
        Idea::new("InboxZero", "AI triage", "auto-sort, summarize")
    }

    #[test]
    fn test_select_domain_closes_dropdown() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDropdown);
        assert!(app.dropdown_open);

        update(&mut app, Action::SelectDomain(Domain::Health));
        assert_eq!(app.domain, Some(Domain::Health));
        assert!(!app.dropdown_open);
    }

    #[test]
    fn test_toggle_and_close_dropdown() {
        let mut app = test_app();
        update(&mut app, Action::ToggleDropdown);
        assert!(app.dropdown_open);
        update(&mut app, Action::ToggleDropdown);
        assert!(!app.dropdown_open);

        update(&mut app, Action::CloseDropdown);
        assert!(!app.dropdown_open);
        update(&mut app, Action::ToggleDropdown);
        update(&mut app, Action::CloseDropdown);
        assert!(!app.dropdown_open);
    }

    #[test]
    fn test_set_problem_is_verbatim() {
        let mut app = test_app();
        update(&mut app, Action::SetProblem("  padded  ".to_string()));
        assert_eq!(app.problem, "  padded  ");
    }

    #[test]
    fn test_generate_without_domain_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::SetProblem("something".to_string()));
        assert_eq!(update(&mut app, Action::Generate), Effect::None);
        assert!(!app.is_loading);
        assert_eq!(app.request_state(), RequestState::Idle);
    }

    #[test]
    fn test_generate_with_empty_problem_is_noop() {
        // Health with an empty problem stays idle and spawns nothing
        let mut app = ready_app(Domain::Health, "");
        assert_eq!(update(&mut app, Action::Generate), Effect::None);
        assert_eq!(app.request_state(), RequestState::Idle);
    }

    #[test]
    fn test_generate_while_loading_is_noop() {
        let mut app = ready_app(Domain::Tech, "too many emails");
        assert!(matches!(
            update(&mut app, Action::Generate),
            Effect::SpawnRequest(_)
        ));
        assert_eq!(update(&mut app, Action::Generate), Effect::None);
        assert!(app.is_loading);
    }

    #[test]
    fn test_generate_spawns_request_and_clears_error() {
        let mut app = ready_app(Domain::Tech, "too many emails");
        app.error = Some("old".to_string());

        let effect = update(&mut app, Action::Generate);
        assert_eq!(
            effect,
            Effect::SpawnRequest(IdeaRequest {
                domain: Some(Domain::Tech),
                description: "too many emails".to_string(),
            })
        );
        assert!(app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(app.request_state(), RequestState::Loading);
    }

    #[test]
    fn test_previous_ideas_stay_visible_while_loading() {
        let mut app = ready_app(Domain::Tech, "too many emails");
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(vec![inbox_zero()]));

        update(&mut app, Action::Generate);
        assert!(app.is_loading);
        assert_eq!(app.ideas, vec![inbox_zero()]);
    }

    #[test]
    fn test_success_sets_ideas() {
        let mut app = ready_app(Domain::Tech, "too many emails");
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(vec![inbox_zero()]));

        assert!(!app.is_loading);
        assert!(app.error.is_none());
        assert_eq!(
            app.request_state(),
            RequestState::Success(&[inbox_zero()])
        );
    }

    #[test]
    fn test_success_replaces_not_appends() {
        let mut app = ready_app(Domain::Tech, "too many emails");
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(vec![inbox_zero(), inbox_zero()]));
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(vec![Idea::new("B", "c", "f")]));

        assert_eq!(app.ideas, vec![Idea::new("B", "c", "f")]);
    }

    #[test]
    fn test_failure_sets_error_and_clears_ideas() {
        let mut app = ready_app(Domain::Finance, "budgeting");
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(vec![inbox_zero()]));

        update(&mut app, Action::Generate);
        update(
            &mut app,
            Action::GenerationFailed(MSG_GENERATION_FAILED.to_string()),
        );

        assert!(!app.is_loading);
        assert!(app.ideas.is_empty());
        assert_eq!(
            app.request_state(),
            RequestState::Error("Failed to generate ideas")
        );
    }

    #[test]
    fn test_empty_success_is_invalid_format() {
        let mut app = ready_app(Domain::Science, "lab scheduling");
        update(&mut app, Action::Generate);
        update(&mut app, Action::IdeasReceived(Vec::new()));

        assert!(!app.is_loading);
        assert_eq!(
            app.request_state(),
            RequestState::Error("Invalid response format from API")
        );
    }

    #[test]
    fn test_completion_without_request_is_ignored() {
        let mut app = ready_app(Domain::Tech, "x");
        update(&mut app, Action::IdeasReceived(vec![inbox_zero()]));
        assert!(app.ideas.is_empty());

        update(&mut app, Action::GenerationFailed("late".to_string()));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_retry_after_error() {
        let mut app = ready_app(Domain::Finance, "budgeting");
        update(&mut app, Action::Generate);
        update(&mut app, Action::GenerationFailed("nope".to_string()));

        assert!(matches!(
            update(&mut app, Action::Generate),
            Effect::SpawnRequest(_)
        ));
        assert!(app.error.is_none());
        update(&mut app, Action::IdeasReceived(vec![inbox_zero()]));
        assert_eq!(app.ideas.len(), 1);
    }

    #[test]
    fn test_action_from_service_result() {
        assert_eq!(
            Action::from(Err(ServiceError::Status(500))),
            Action::GenerationFailed("Failed to generate ideas".to_string())
        );
        assert_eq!(
            Action::from(Err(ServiceError::InvalidFormat("empty".into()))),
            Action::GenerationFailed("Invalid response format from API".to_string())
        );
        assert_eq!(
            Action::from(Ok(vec![inbox_zero()])),
            Action::IdeasReceived(vec![inbox_zero()])
        );
    }

    #[test]
    fn test_toggle_theme_and_quit() {
        let mut app = test_app();
        update(&mut app, Action::ToggleTheme);
        assert_eq!(app.theme, crate::core::theme::Theme::Light);
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
