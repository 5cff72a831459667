//! HTTP implementation of the idea service.
//!
//! One `POST` per call with a JSON body of `{domain, description}`. The
//! response body must carry a non-empty `ideas` array; anything else is an
//! [`ServiceError::InvalidFormat`].

use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;

use super::provider::{IdeaService, ServiceError};
use super::types::{Idea, IdeaRequest};

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_ENDPOINT: &str = "/api/generate-ideas";

pub struct HttpIdeaService {
    base_url: String,
    endpoint: String,
    client: reqwest::Client,
}

impl HttpIdeaService {
    pub fn new(base_url: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint: endpoint.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Full URL requests are posted to.
    pub fn url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if self.endpoint.starts_with('/') {
            format!("{}{}", base, self.endpoint)
        } else {
            format!("{}/{}", base, self.endpoint)
        }
    }
}

#[async_trait]
impl IdeaService for HttpIdeaService {
    fn name(&self) -> &str {
        "http"
    }

    async fn generate(&self, request: &IdeaRequest) -> Result<Vec<Idea>, ServiceError> {
        let url = self.url();
        info!(
            "Idea request: url={}, domain={:?}, description_len={}",
            url,
            request.domain,
            request.description.len()
        );

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Idea service response status: {}", status);

        if !status.is_success() {
            warn!("Idea service error status: {}", status);
            return Err(ServiceError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;

        let ideas = parse_ideas(&body)?;
        info!("Idea service returned {} ideas", ideas.len());
        Ok(ideas)
    }
}

/// Validates a success body and extracts the idea list.
///
/// Absent `ideas`, a non-array value and an empty array all fail the same
/// way, as does a non-JSON body or a non-object element.
pub fn parse_ideas(body: &str) -> Result<Vec<Idea>, ServiceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ServiceError::InvalidFormat(format!("body is not JSON: {e}")))?;

    let items = match value.get("ideas") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ServiceError::InvalidFormat(format!(
                "`ideas` is not an array: {other}"
            )));
        }
        None => return Err(ServiceError::InvalidFormat("missing `ideas`".to_string())),
    };

    if items.is_empty() {
        return Err(ServiceError::InvalidFormat("`ideas` is empty".to_string()));
    }

    items
        .iter()
        .map(|item| {
            if !item.is_object() {
                return Err(ServiceError::InvalidFormat(format!(
                    "idea is not an object: {item}"
                )));
            }
            serde_json::from_value::<Idea>(item.clone())
                .map_err(|e| ServiceError::InvalidFormat(e.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Generates one test per malformed body, each expecting InvalidFormat.
    macro_rules! test_invalid_bodies {
        ( $($name:ident: $body:expr,)+ ) => {
            $(
                #[test]
                fn $name() {
                    match parse_ideas($body) {
                        Err(ServiceError::InvalidFormat(_)) => {}
                        other => panic!("Expected InvalidFormat, got {:?}", other),
                    }
                }
            )+
        };
    }

    test_invalid_bodies! {
        test_parse_rejects_missing_field: r#"{"results": []}"#,
        test_parse_rejects_empty_array: r#"{"ideas": []}"#,
        test_parse_rejects_object_value: r#"{"ideas": {"name": "x"}}"#,
        test_parse_rejects_string_value: r#"{"ideas": "lots"}"#,
        test_parse_rejects_null_value: r#"{"ideas": null}"#,
        test_parse_rejects_non_json: "<html>oops</html>",
        test_parse_rejects_scalar_elements: r#"{"ideas": [1, 2]}"#,
        test_parse_rejects_top_level_array: r#"[{"name": "x"}]"#,
    }

    #[test]
    fn test_parse_accepts_ideas() {
        let body = r#"{"ideas":[{"name":"InboxZero","concept":"AI triage","features":"auto-sort, summarize"}]}"#;
        let ideas = parse_ideas(body).unwrap();
        assert_eq!(
            ideas,
            vec![Idea::new("InboxZero", "AI triage", "auto-sort, summarize")]
        );
    }

    #[test]
    fn test_parse_preserves_order() {
        let body = r#"{"ideas":[{"name":"A"},{"name":"B"},{"name":"C"}]}"#;
        let names: Vec<String> = parse_ideas(body)
            .unwrap()
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_url_joins_base_and_endpoint() {
        let svc = HttpIdeaService::new("http://localhost:3000/", "/api/generate-ideas");
        assert_eq!(svc.url(), "http://localhost:3000/api/generate-ideas");

        let svc = HttpIdeaService::new("http://host", "ideas");
        assert_eq!(svc.url(), "http://host/ideas");
    }
}
