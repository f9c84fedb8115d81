//! File name templates
//!
//! Handles `{field}` placeholders in output file names. Supported fields are
//! `endpoint`, `object`, `i` (1-based page index) and `type` (file
//! extension). A width may follow a colon: `{i:04}` zero-pads to four
//! digits, `{i:4}` pads with spaces.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Default file name: `feed-12345-0001.json`
pub const DEFAULT_FILENAME_TEMPLATE: &str = "{endpoint}-{object}-{i:04}.{type}";

/// Regex for matching placeholders: {field} or {field:04}
static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([a-z]+)(?::(0)?([0-9]+))?\}").expect("placeholder regex is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Endpoint,
    Object,
    Index,
    Type,
}

impl Field {
    fn parse(name: &str) -> Option<Self> {
        match name {
            "endpoint" => Some(Self::Endpoint),
            "object" => Some(Self::Object),
            "i" => Some(Self::Index),
            "type" => Some(Self::Type),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field {
        field: Field,
        width: usize,
        zero_pad: bool,
    },
}

/// A parsed file name template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl FilenameTemplate {
    /// Parse a template, rejecting unknown placeholders
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut last = 0;

        for cap in PLACEHOLDER_REGEX.captures_iter(template) {
            let Some(whole) = cap.get(0) else { continue };
            let name = &cap[1];
            let field = Field::parse(name).ok_or_else(|| {
                Error::template(format!(
                    "Unknown placeholder '{{{name}}}' in '{template}' \
                     (expected endpoint, object, i or type)"
                ))
            })?;
            let width = match cap.get(3) {
                Some(w) => w
                    .as_str()
                    .parse()
                    .map_err(|_| Error::template(format!("Invalid width in '{template}'")))?,
                None => 0,
            };

            if whole.start() > last {
                segments.push(Segment::Literal(template[last..whole.start()].to_string()));
            }
            segments.push(Segment::Field {
                field,
                width,
                zero_pad: cap.get(2).is_some(),
            });
            last = whole.end();
        }

        if last < template.len() {
            segments.push(Segment::Literal(template[last..].to_string()));
        }

        if !segments.iter().any(|s| matches!(s, Segment::Field { field: Field::Index, .. })) {
            return Err(Error::template(format!(
                "Template '{template}' must contain {{i}} so pages get distinct names; \
                 placeholders are written {{field}} or {{field:width}}, \
                 e.g. '{DEFAULT_FILENAME_TEMPLATE}'"
            )));
        }

        Ok(Self {
            source: template.to_string(),
            segments,
        })
    }

    /// The template text this was parsed from
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Render a file name for one page
    pub fn render(&self, endpoint: &str, object: &str, index: usize, extension: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field {
                    field,
                    width,
                    zero_pad,
                } => {
                    let value = match field {
                        Field::Endpoint => endpoint.to_string(),
                        Field::Object => object.to_string(),
                        Field::Index => index.to_string(),
                        Field::Type => extension.to_string(),
                    };
                    if *zero_pad {
                        out.push_str(&format!("{value:0>width$}", width = *width));
                    } else {
                        out.push_str(&format!("{value:>width$}", width = *width));
                    }
                }
            }
        }
        out
    }
}

impl Default for FilenameTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_FILENAME_TEMPLATE).expect("default template is valid")
    }
}

impl std::str::FromStr for FilenameTemplate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
