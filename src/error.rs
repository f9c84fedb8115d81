//! Error types for graph-paginate
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for graph-paginate
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid or missing configuration
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A single configuration value is out of range
    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue {
        /// Name of the offending setting
        field: String,
        /// What is wrong with it
        message: String,
    },

    /// A command-line value that only turns out invalid once the catalog is loaded
    #[error("invalid value '{value}' for '{arg}': {message}")]
    Usage {
        /// Argument as written on the command line
        arg: String,
        /// Value given
        value: String,
        /// What is wrong with it
        message: String,
    },

    /// Malformed YAML
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Malformed JSON
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    /// Transport-level failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL that cannot be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    /// No access token left to send
    #[error("Credential queue exhausted: at least one access token is required")]
    CredentialsExhausted,

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// Bad file name template
    #[error("Template error: {message}")]
    Template {
        /// What is wrong
        message: String,
    },

    /// Output file already exists and overwriting is off
    #[error("Refusing to overwrite existing file: {path}")]
    OutputExists {
        /// Path of the existing file
        path: String,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    /// Filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Anything else, usually an error with added context
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create an output-exists error
    pub fn output_exists(path: impl Into<String>) -> Self {
        Self::OutputExists { path: path.into() }
    }

    /// Create a usage error for a command-line value
    pub fn usage(
        arg: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Usage {
            arg: arg.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Check if this error should be reported like an argument parsing error
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::Usage { .. })
    }
}

/// Result type alias for graph-paginate
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
