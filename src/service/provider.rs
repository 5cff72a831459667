use std::fmt;

use async_trait::async_trait;

use super::types::{Idea, IdeaRequest};

/// Shown when the request could not be completed (transport or HTTP status).
pub const MSG_GENERATION_FAILED: &str = "Failed to generate ideas";
/// Shown when the service answered but the body had no usable idea list.
pub const MSG_INVALID_FORMAT: &str = "Invalid response format from API";

/// Errors that can occur while requesting ideas.
///
/// Variants keep diagnostic detail for the log. The UI only ever sees
/// [`ServiceError::user_message`], which collapses them to two strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Network-level failure (DNS, connection refused, reset).
    Network(String),
    /// Service answered with a non-success status.
    Status(u16),
    /// Body was not JSON, or `ideas` was absent, not an array, empty,
    /// or held something other than idea objects.
    InvalidFormat(String),
}

impl ServiceError {
    /// The normalized message surfaced to the user.
    pub fn user_message(&self) -> &'static str {
        match self {
            ServiceError::Network(_) | ServiceError::Status(_) => MSG_GENERATION_FAILED,
            ServiceError::InvalidFormat(_) => MSG_INVALID_FORMAT,
        }
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Network(msg) => write!(f, "network error: {msg}"),
            ServiceError::Status(status) => write!(f, "idea service returned HTTP {status}"),
            ServiceError::InvalidFormat(msg) => write!(f, "invalid response format: {msg}"),
        }
    }
}

impl std::error::Error for ServiceError {}

#[async_trait]
pub trait IdeaService: Send + Sync {
    /// Returns the name of the service implementation (for logs).
    fn name(&self) -> &str;

    /// Performs one generation request. Never retries.
    ///
    /// On `Ok` the list is guaranteed non-empty.
    async fn generate(&self, request: &IdeaRequest) -> Result<Vec<Idea>, ServiceError>;
}
