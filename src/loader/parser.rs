//! YAML parser for endpoint catalogs
//!
//! Parses and validates endpoint catalogs.
//! Supports both built-in catalogs (by name) and custom YAML files (by path).

use crate::connectors;
use crate::error::{Error, Result};
use crate::loader::types::EndpointCatalog;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use url::Url;

/// Load an endpoint catalog from a name or file path
///
/// Built-in catalog names (e.g. `facebook-graph`) are checked first, then
/// the argument is read as a YAML file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<EndpointCatalog> {
    let path = path.as_ref();
    let path_str = path.to_string_lossy();

    if !path_str.contains('/')
        && !path_str.contains('\\')
        && !path_str.ends_with(".yaml")
        && !path_str.ends_with(".yml")
    {
        if let Some(yaml) = connectors::get_builtin(&path_str) {
            return load_catalog_from_str(yaml);
        }
    }

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::config(format!(
                "Endpoint catalog '{}' not found. Built-in catalogs: {}. Or provide a path to a YAML file.",
                path.display(),
                connectors::list_builtin().join(", ")
            ))
        } else {
            Error::config(format!(
                "Failed to read endpoint catalog '{}': {e}",
                path.display()
            ))
        }
    })?;
    load_catalog_from_str(&content)
}

/// Load an endpoint catalog from a YAML string
pub fn load_catalog_from_str(yaml: &str) -> Result<EndpointCatalog> {
    let catalog: EndpointCatalog = serde_yaml::from_str(yaml)
        .map_err(|e| Error::config(format!("Failed to parse endpoint catalog YAML: {e}")))?;

    validate_catalog(&catalog)?;
    Ok(catalog)
}

/// Validate an endpoint catalog
fn validate_catalog(catalog: &EndpointCatalog) -> Result<()> {
    if catalog.name.is_empty() {
        return Err(Error::config("Catalog name cannot be empty"));
    }

    if let Some(base_url) = &catalog.base_url {
        Url::parse(base_url)?;
    }

    if catalog.endpoints.is_empty() {
        return Err(Error::config(format!(
            "Catalog '{}' must define at least one endpoint",
            catalog.name
        )));
    }

    let mut seen = HashSet::new();
    for endpoint in &catalog.endpoints {
        if endpoint.name.is_empty() {
            return Err(Error::config("Endpoint name cannot be empty"));
        }
        if endpoint.name.contains('/') {
            return Err(Error::invalid_value(
                "endpoints.name",
                format!("'{}' must be a single path segment", endpoint.name),
            ));
        }
        if !seen.insert(endpoint.name.as_str()) {
            return Err(Error::config(format!(
                "Duplicate endpoint name: {}",
                endpoint.name
            )));
        }
    }

    Ok(())
}
