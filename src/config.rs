// src/config.rs
use crate::errors::ServerError;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Address the HTTP server binds to.
    pub addr: SocketAddr,
    /// Worker threads handed to astra.
    pub max_workers: usize,
    /// JSON catalog to serve. The bundled sample catalog is used when unset.
    pub catalog_path: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            catalog_path: None,
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_ADDR`, `STOREFRONT_WORKERS`
    /// and `STOREFRONT_CATALOG`.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let mut cfg = Self::default();

        if let Some(addr) = lookup("STOREFRONT_ADDR") {
            cfg.addr = addr.parse().map_err(|e| {
                ServerError::ConfigError(format!("STOREFRONT_ADDR {addr:?}: {e}"))
            })?;
        }

        if let Some(workers) = lookup("STOREFRONT_WORKERS") {
            cfg.max_workers = match workers.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ServerError::ConfigError(format!(
                        "STOREFRONT_WORKERS must be a positive integer, got {workers:?}"
                    )))
                }
            };
        }

        cfg.catalog_path = lookup("STOREFRONT_CATALOG")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(cfg)
    }
}
