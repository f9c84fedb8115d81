//! Loader types
//!
//! Declarative endpoint definitions for YAML parsing.

use crate::pagination::CursorExtractor;
use crate::types::Parameters;
use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Catalog
// ============================================================================

/// A named set of endpoints sharing one API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointCatalog {
    /// Catalog name
    pub name: String,
    /// Default base URL for requests
    #[serde(default)]
    pub base_url: Option<String>,
    /// Endpoint definitions
    pub endpoints: Vec<EndpointDefinition>,
}

impl EndpointCatalog {
    /// Look up an endpoint by name
    pub fn get(&self, name: &str) -> Option<&EndpointDefinition> {
        self.endpoints.iter().find(|e| e.name == name)
    }

    /// Names of all endpoints, in definition order
    pub fn names(&self) -> Vec<&str> {
        self.endpoints.iter().map(|e| e.name.as_str()).collect()
    }
}

// ============================================================================
// Endpoint Definition
// ============================================================================

/// How to paginate one endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct EndpointDefinition {
    /// Endpoint name, used as the last URL path segment
    pub name: String,
    /// Cursor extraction strategy
    pub pagination: CursorExtractor,
    /// Default query parameters
    #[serde(default)]
    pub params: Parameters,
}
