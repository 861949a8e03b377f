use crate::catalog::ShoeListing;
use crate::errors::ServerError;
use crate::responses::{html_response, ResultResp};
use crate::templates;
use astra::Request;
use chrono::{DateTime, Utc};

/// Serves the storefront page; `now` decides which shoes count as new.
pub fn handle(req: Request, listings: &[ShoeListing], now: DateTime<Utc>) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();

    tracing::debug!(%method, %path, "request");

    match (method, path) {
        ("GET", "/") => html_response(templates::storefront_page(listings, now)),
        _ => Err(ServerError::NotFound),
    }
}
