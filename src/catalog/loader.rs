// src/catalog/loader.rs
use crate::catalog::listing::ShoeListing;
use crate::errors::ServerError;
use std::fs;
use std::path::Path;

const BUNDLED_CATALOG: &str = include_str!("../../data/shoes.json");

/// Read a JSON array of listings from disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<ShoeListing>, ServerError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| ServerError::CatalogError(format!("read {} failed: {e}", path.display())))?;

    let listings = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), count = listings.len(), "loaded catalog");
    Ok(listings)
}

/// The sample catalog compiled into the binary.
pub fn default_catalog() -> Result<Vec<ShoeListing>, ServerError> {
    parse_catalog(BUNDLED_CATALOG)
}

pub fn parse_catalog(raw: &str) -> Result<Vec<ShoeListing>, ServerError> {
    serde_json::from_str(raw)
        .map_err(|e| ServerError::CatalogError(format!("invalid catalog JSON: {e}")))
}
