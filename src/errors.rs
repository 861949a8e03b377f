// errors.rs
use astra::Response;
use thiserror::Error;

/// The only failure the pricing/variant core can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl DomainError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        DomainError::InvalidInput(msg.into())
    }
}

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (catalog, domain).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Config Error: {0}")]
    ConfigError(String),

    #[error("Catalog Error: {0}")]
    CatalogError(String),

    #[error("Internal Server Error")]
    InternalError,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
