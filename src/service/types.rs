use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;

/// One generated idea. Immutable once parsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub concept: String,
    #[serde(default)]
    pub features: String,
}

impl Idea {
    pub fn new(
        name: impl Into<String>,
        concept: impl Into<String>,
        features: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            concept: concept.into(),
            features: features.into(),
        }
    }
}

/// Request body sent to the idea endpoint.
///
/// `domain` is nullable on the wire even though the controller's guard
/// never dispatches without one.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct IdeaRequest {
    pub domain: Option<Domain>,
    pub description: String,
}
