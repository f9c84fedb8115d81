//! Pagination types
//!
//! Defines the page envelope emitted once per request and the helpers used
//! to inspect a decoded response body.

use crate::types::{JsonValue, Parameters};
use serde::{Deserialize, Serialize};

/// One page of results together with the request that produced it
///
/// Envelopes are produced once per request and never mutated afterwards.
/// `parameters` is a snapshot: later cursor or limit updates made by the
/// engine do not show up in an envelope that was already emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageEnvelope {
    /// Decoded response body, or `{"error": <raw body>}` if it was not JSON
    pub content: JsonValue,
    /// HTTP status code of the response
    pub status: u16,
    /// Endpoint URL the request was sent to
    pub endpoint: String,
    /// Query parameters used for this request
    pub parameters: Parameters,
}

impl PageEnvelope {
    /// Number of records in the page's `data` list (zero if absent)
    pub fn record_count(&self) -> usize {
        data_len(&self.content)
    }

    /// Whether the page's `data` list is non-empty
    pub fn has_data(&self) -> bool {
        has_data(&self.content)
    }

    /// Whether the response carried a 2xx status
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Length of `content.data` when it is a list, zero otherwise
pub fn data_len(content: &JsonValue) -> usize {
    content
        .get("data")
        .and_then(JsonValue::as_array)
        .map_or(0, Vec::len)
}

/// Whether `content.data` is a non-empty list
pub fn has_data(content: &JsonValue) -> bool {
    data_len(content) > 0
}

/// Walk a dotted path through nested objects
pub(crate) fn lookup<'a>(value: &'a JsonValue, path: &[&str]) -> Option<&'a JsonValue> {
    let mut current = value;
    for part in path {
        match current {
            JsonValue::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
