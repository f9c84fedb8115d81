//! CLI module
//!
//! Command-line interface for fetching pages.
//!
//! One invocation paginates a single endpoint for every object id given,
//! writing one file per page into the destination directory.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::{read_entries, Runner};
