use crate::catalog::{default_catalog, load_catalog};
use crate::config::StorefrontConfig;
use crate::router::handle;
use astra::Server;
use chrono::Utc;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

mod catalog;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // 1️⃣ Read configuration
    let cfg = match StorefrontConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    // 2️⃣ Load the catalog once; it is read-only afterwards
    let listings = match &cfg.catalog_path {
        Some(path) => load_catalog(path),
        None => default_catalog(),
    };
    let listings = match listings {
        Ok(listings) => listings,
        Err(e) => {
            tracing::error!(error = %e, "catalog load failed");
            std::process::exit(1);
        }
    };

    // 3️⃣ Start the server
    tracing::info!(addr = %cfg.addr, shoes = listings.len(), "starting storefront");

    let server = Server::bind(&cfg.addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &listings, Utc::now()) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down cleanly");
}
