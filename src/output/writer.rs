//! Page file writer
//!
//! Serializes page envelopes and writes one file per page.

use crate::error::{Error, Result};
use crate::pagination::PageEnvelope;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Serialization format for page files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputType {
    /// Compact JSON
    #[default]
    #[value(name = "json")]
    Json,
    /// JSON indented with two spaces
    #[value(name = "json_pretty")]
    JsonPretty,
    /// YAML in block style
    #[value(name = "yaml")]
    Yaml,
}

impl OutputType {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json | Self::JsonPretty => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json_pretty"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

/// Serialize a whole page envelope
pub fn serialize_page(page: &PageEnvelope, output: OutputType) -> Result<String> {
    let text = match output {
        OutputType::Json => serde_json::to_string(page)?,
        OutputType::JsonPretty => serde_json::to_string_pretty(page)?,
        OutputType::Yaml => serde_yaml::to_string(page)?,
    };
    Ok(text)
}

/// Write `contents` to `path`
///
/// Fails with [`Error::OutputExists`] when the file already exists and
/// `overwrite` is false. The existence check and the write are separate
/// steps, so another process could still create the file in between.
pub fn write_page(path: impl AsRef<Path>, contents: &str, overwrite: bool) -> Result<()> {
    let path = path.as_ref();
    if !overwrite && path.exists() {
        return Err(Error::output_exists(path.display().to_string()));
    }

    fs::write(path, contents)?;
    debug!(path = %path.display(), bytes = contents.len(), "Wrote page");
    Ok(())
}

/// Create the output directory and its parents if missing
pub fn ensure_dir(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if !path.is_dir() {
        fs::create_dir_all(path)?;
        debug!(path = %path.display(), "Created output directory");
    }
    Ok(())
}
