//! User gateway: the platform's user directory.

use async_trait::async_trait;

use repair_desk_core::{Operation, Result, UserRecord};

use crate::http::ApiClient;

/// Trait for the backend's user endpoints.
#[async_trait]
pub trait UserGateway: Send + Sync {
    /// List platform users.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn list_users(&self) -> Result<Vec<UserRecord>>;
}

/// HTTP implementation of [`UserGateway`].
#[derive(Debug, Clone)]
pub struct HttpUserGateway {
    api: ApiClient,
}

impl HttpUserGateway {
    /// Create a gateway on top of the given adapter.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl UserGateway for HttpUserGateway {
    async fn list_users(&self) -> Result<Vec<UserRecord>> {
        self.api.get(Operation::ListUsers, "/users").await
    }
}
