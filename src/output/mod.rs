//! Output module
//!
//! Handles serializing page envelopes and writing them to disk.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Serializing pages as compact JSON, indented JSON or YAML
//! - Rendering per-page file names from a template
//! - Writing files without clobbering existing ones

mod naming;
mod writer;

pub use naming::{FilenameTemplate, DEFAULT_FILENAME_TEMPLATE};
pub use writer::{ensure_dir, serialize_page, write_page, OutputType};
