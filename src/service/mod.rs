//! # Idea Service
//!
//! Wire contract with the idea-generation backend. The rest of the crate
//! talks to the [`IdeaService`] trait; [`HttpIdeaService`] is the real one.

pub mod http;
pub mod provider;
pub mod types;

pub use http::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT, HttpIdeaService};
pub use provider::{IdeaService, MSG_GENERATION_FAILED, MSG_INVALID_FORMAT, ServiceError};
pub use types::{Idea, IdeaRequest};
