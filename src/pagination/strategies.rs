//! Cursor extraction strategies
//!
//! Each strategy maps a decoded response body to the cursor that resumes
//! pagination on the next request.

use super::types::lookup;
use crate::types::JsonValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Cursor Extractor
// ============================================================================

/// How the next cursor is found in a response body
///
/// Graph-style APIs paginate edges (likes, comments) with opaque cursors and
/// time-ordered collections (feed, posts) with `until` timestamps carried in
/// the `paging.next` URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorExtractor {
    /// `content.paging.cursors.after`, sent back as `after`
    #[serde(alias = "cursor", alias = "after")]
    CursorAfter,
    /// `until` from the query string of `content.paging.next`, sent back as `until`
    #[serde(alias = "date", alias = "until")]
    DateUntil,
}

impl CursorExtractor {
    /// Query parameter that carries the extracted cursor
    pub fn cursor_param(&self) -> &'static str {
        match self {
            Self::CursorAfter => "after",
            Self::DateUntil => "until",
        }
    }

    /// Extract the next cursor, or `None` when the response has none
    ///
    /// Empty strings are treated as no cursor.
    pub fn extract(&self, content: &JsonValue) -> Option<String> {
        let cursor = match self {
            Self::CursorAfter => {
                lookup(content, &["paging", "cursors", "after"]).and_then(scalar_cursor)
            }
            Self::DateUntil => lookup(content, &["paging", "next"])
                .and_then(JsonValue::as_str)
                .and_then(|next| parse_query(next).remove("until")),
        };
        cursor.filter(|c| !c.is_empty())
    }
}

impl fmt::Display for CursorExtractor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CursorAfter => write!(f, "cursor"),
            Self::DateUntil => write!(f, "date"),
        }
    }
}

fn scalar_cursor(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ============================================================================
// Query String Parsing
// ============================================================================

/// Parse the query string of a URL into a map
///
/// Splits on the first `?`, then on `&`, then each pair on the first `=`.
/// Later duplicates overwrite earlier ones. Values are kept exactly as they
/// appear: no percent-decoding is done. A pair without `=` maps to an empty
/// value and empty pairs are ignored.
pub fn parse_query(url: &str) -> BTreeMap<String, String> {
    let Some((_, query)) = url.split_once('?') else {
        return BTreeMap::new();
    };

    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) => (key.to_string(), value.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}
