//! Client configuration types.

use serde::Deserialize;

/// Path under the origin where every backend endpoint lives.
pub const API_ROOT: &str = "/api";

/// Configuration for the backend client.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend (e.g. "http://localhost:5000").
    #[serde(default = "ClientConfig::default_origin")]
    pub origin: String,

    /// `User-Agent` header sent with every call.
    #[serde(default = "ClientConfig::default_user_agent")]
    pub user_agent: String,
}

impl ClientConfig {
    fn default_origin() -> String {
        "http://localhost:5000".to_string()
    }

    fn default_user_agent() -> String {
        concat!("repair-desk/", env!("CARGO_PKG_VERSION")).to_string()
    }

    /// Create a configuration for the given origin.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            ..Self::default()
        }
    }

    /// Get the absolute URL of the API root.
    #[must_use]
    pub fn api_root(&self) -> String {
        format!("{}{API_ROOT}", self.origin.trim_end_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: Self::default_origin(),
            user_agent: Self::default_user_agent(),
        }
    }
}
