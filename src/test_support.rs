//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::service::{Idea, IdeaRequest, IdeaService, ServiceError};

/// A canned service that records every request it receives.
pub struct StubService {
    response: Result<Vec<Idea>, ServiceError>,
    pub requests: Mutex<Vec<IdeaRequest>>,
}

impl StubService {
    pub fn new(response: Result<Vec<Idea>, ServiceError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or_default()
    }
}

#[async_trait]
impl IdeaService for StubService {
    fn name(&self) -> &str {
        "stub"
    }

    async fn generate(&self, request: &IdeaRequest) -> Result<Vec<Idea>, ServiceError> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        self.response.clone()
    }
}

/// Creates a test App backed by a StubService that returns no ideas.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(Arc::new(StubService::new(Ok(Vec::new()))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_records_requests() {
        let stub = StubService::new(Err(ServiceError::Status(500)));
        let request = IdeaRequest {
            domain: None,
            description: "x".to_string(),
        };
        let result = tokio_test::block_on(stub.generate(&request));
        assert_eq!(result, Err(ServiceError::Status(500)));
        assert_eq!(stub.request_count(), 1);
    }
}
