//! Error type shared by the calculator, the request adapter and the renderers

use thiserror::Error;

/// Errors raised while computing or rendering pagination links
#[derive(Error, Debug)]
pub enum PaginateError {
    /// Page size, window size or request data that can never paginate
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A route parameter needed to build a page URL is empty
    #[error("Missing route parameter: {0}")]
    MissingRouteParam(&'static str),

    /// Malformed JSON configuration or overrides
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PaginateError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        PaginateError::InvalidConfiguration(msg.into())
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, PaginateError>;
