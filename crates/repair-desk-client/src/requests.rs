//! Request gateway: CRUD over service requests.
//!
//! Each method maps to exactly one backend endpoint. No validation and no
//! business logic happen here; both belong to the views and the backend.

use async_trait::async_trait;

use repair_desk_core::{
    NewServiceRequest, Operation, RequestId, RequestPatch, Result, ServiceRequest,
};

use crate::http::ApiClient;

/// Trait for the backend's service request endpoints.
#[async_trait]
pub trait RequestGateway: Send + Sync {
    /// List every service request visible to the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn list_requests(&self) -> Result<Vec<ServiceRequest>>;

    /// Fetch one service request. Unknown ids are reported by the backend and
    /// surface as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn get_request(&self, id: &RequestId) -> Result<ServiceRequest>;

    /// Create a service request. The backend assigns `id` and `status`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn create_request(&self, request: &NewServiceRequest) -> Result<ServiceRequest>;

    /// Apply a partial update to a service request.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn update_request(&self, id: &RequestId, patch: &RequestPatch) -> Result<ServiceRequest>;

    /// Delete a service request.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn delete_request(&self, id: &RequestId) -> Result<()>;
}

/// HTTP implementation of [`RequestGateway`].
#[derive(Debug, Clone)]
pub struct HttpRequestGateway {
    api: ApiClient,
}

impl HttpRequestGateway {
    /// Create a gateway on top of the given adapter.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

fn request_path(id: &RequestId) -> String {
    format!("/requests/{id}")
}

#[async_trait]
impl RequestGateway for HttpRequestGateway {
    async fn list_requests(&self) -> Result<Vec<ServiceRequest>> {
        self.api.get(Operation::ListRequests, "/requests").await
    }

    async fn get_request(&self, id: &RequestId) -> Result<ServiceRequest> {
        self.api.get(Operation::GetRequest, &request_path(id)).await
    }

    async fn create_request(&self, request: &NewServiceRequest) -> Result<ServiceRequest> {
        self.api
            .post(Operation::CreateRequest, "/requests", Some(request))
            .await
    }

    async fn update_request(&self, id: &RequestId, patch: &RequestPatch) -> Result<ServiceRequest> {
        self.api
            .put(Operation::UpdateRequest, &request_path(id), patch)
            .await
    }

    async fn delete_request(&self, id: &RequestId) -> Result<()> {
        self.api
            .delete(Operation::DeleteRequest, &request_path(id))
            .await
    }
}
