//! Common types used throughout graph-paginate
//!
//! This module contains shared type definitions, type aliases,
//! and the request parameter map threaded through pagination.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// An opaque access token authorizing a request
pub type Credential = String;

/// Query parameter carrying the access token
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Query parameter carrying the page size
pub const LIMIT_PARAM: &str = "limit";

// ============================================================================
// Request Parameters
// ============================================================================

/// Query parameters for a paginated request
///
/// Values are JSON scalars so that snapshots serialize with their natural
/// types (`"limit": 50` rather than `"limit": "50"`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, JsonValue>);

impl Parameters {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter, replacing any previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Builder-style variant of [`Parameters::set`]
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Get the raw value of a parameter
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.0.get(key)
    }

    /// Get a parameter rendered the way it is sent on the wire
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(scalar_to_string)
    }

    /// Get a parameter as an unsigned integer, accepting numeric strings
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        match self.0.get(key)? {
            JsonValue::Number(n) => n.as_u64(),
            JsonValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Check whether a parameter is present
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encode as query pairs; null values are skipped
    pub fn to_query(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter_map(|(k, v)| scalar_to_string(v).map(|s| (k.clone(), s)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Render a JSON scalar as a query string value
fn scalar_to_string(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        JsonValue::Null => None,
        // Arrays and objects are sent as their JSON text
        _ => serde_json::to_string(value).ok(),
    }
}
