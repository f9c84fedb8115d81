//! Endpoint catalog loader
//!
//! Parses YAML endpoint catalogs into typed definitions.
//!
//! # Example YAML
//!
//! ```yaml
//! name: facebook-graph
//! base_url: https://graph.facebook.com/v2.2
//! endpoints:
//!   - name: feed
//!     pagination: date
//!     params:
//!       since: -1day
//!   - name: likes
//!     pagination: cursor
//!     params:
//!       summary: 1
//! ```

mod parser;
mod types;

pub use parser::{load_catalog, load_catalog_from_str};
pub use types::{EndpointCatalog, EndpointDefinition};
