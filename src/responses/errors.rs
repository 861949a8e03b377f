use crate::errors::ServerError;
use crate::templates::error_page;
use astra::{Body, Response, ResponseBuilder};

pub use crate::errors::ResultResp;

/// Convert a ServerError into a proper HTML response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => html_error_response(404, "Not Found"),
        ServerError::Domain(e) => html_error_response(400, &e.to_string()),
        ServerError::CatalogError(msg) => {
            tracing::error!(error = %msg, "catalog error while serving request");
            html_error_response(500, "Catalog unavailable")
        }
        ServerError::ConfigError(_) | ServerError::InternalError => {
            html_error_response(500, "Internal Server Error")
        }
    }
}

/// Build an HTML error page
pub fn html_error_response(status: u16, message: &str) -> Response {
    let body = error_page(status, message).into_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(body))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
