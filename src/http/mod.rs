//! HTTP client module
//!
//! Provides the transport used by the pagination engine.
//!
//! # Features
//!
//! - **Transport trait**: the engine only needs "GET this URL with these
//!   query pairs", so tests and alternative clients plug in behind it
//! - **Raw responses**: status and body text are returned as-is; non-2xx
//!   statuses are not errors, the caller decides what to do with them

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RawResponse, Transport};
