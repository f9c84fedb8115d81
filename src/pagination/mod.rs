//! Pagination module
//!
//! Supports: opaque `after` cursors and `until` dates embedded in next-page URLs
//!
//! # Overview
//!
//! The pagination module provides the pure building blocks of a pagination
//! run: extracting the next cursor from a response body, ramping up the page
//! size, and rotating access tokens across requests. The request loop that
//! ties them together lives in [`crate::engine`].

mod ramp;
mod rotator;
mod strategies;
mod types;

pub use ramp::RampUp;
pub use rotator::CredentialRotator;
pub use strategies::{parse_query, CursorExtractor};
pub use types::{data_len, has_data, PageEnvelope};
