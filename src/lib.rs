//! # graph-paginate
//!
//! Fetches every page of a cursor- or date-paginated JSON API (the Facebook
//! Graph API by default), rotating requests over a pool of access tokens,
//! and writes each page to its own file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use futures::StreamExt;
//! use graph_paginate::engine::Pagination;
//! use graph_paginate::http::HttpClient;
//! use graph_paginate::pagination::{CursorExtractor, RampUp};
//! use graph_paginate::{Parameters, Result};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<()> {
//!     let client = HttpClient::new()?;
//!     let params = Parameters::new().with("limit", 25).with("summary", 1);
//!
//!     let run = Pagination::new(
//!         &client,
//!         "https://graph.facebook.com/v2.2/12345/likes",
//!         params,
//!         ["TOKEN_A", "TOKEN_B"],
//!         CursorExtractor::CursorAfter,
//!     )?
//!     .with_ramp_up(RampUp::geometric(2, 3000));
//!
//!     let mut pages = std::pin::pin!(run.into_stream());
//!     while let Some(page) = pages.next().await {
//!         let page = page?;
//!         println!("{} records (HTTP {})", page.record_count(), page.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  cli::Runner   objects × pages → serialize → write files     │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │ Stream<PageEnvelope>
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │  engine::Pagination   one GET per pull, cursor threading     │
//! ├─────────────────┬──────────────────┬─────────────────────────┤
//! │ CursorExtractor │ CredentialRotator│ RampUp                  │
//! │ after / until   │ FIFO round-robin │ limit × factor ≤ max    │
//! └─────────────────┴──────────────────┴─────────────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// HTTP transport
pub mod http;

/// Cursor extraction, ramp-up and token rotation
pub mod pagination;

/// The pagination request loop
pub mod engine;

/// Page serialization and file output
pub mod output;

/// YAML loader for endpoint catalogs
pub mod loader;

/// Built-in endpoint catalogs
pub mod connectors;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use engine::Pagination;
pub use pagination::{CredentialRotator, CursorExtractor, PageEnvelope, RampUp};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
