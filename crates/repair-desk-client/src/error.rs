//! Client construction errors.
//!
//! Call failures never use this type; they surface as
//! [`ApiError`](repair_desk_core::ApiError).

use thiserror::Error;

/// Errors that can occur while setting up the client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// The configured `User-Agent` is not a valid header value.
    #[error("invalid user agent: {0}")]
    InvalidUserAgent(String),
}
