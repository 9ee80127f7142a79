//! HTTP client adapter for the backend REST API.
//!
//! Every outbound call goes through [`ApiClient`]. It fixes the API root,
//! declares a JSON content type, and carries credentials through a cookie jar
//! it owns but never inspects: the backend sets the session cookie on login
//! and the jar replays it on every later call. Tokens are never attached by
//! the adapter itself.
//!
//! One attempt is made per call. There is no retry, no timeout, and no
//! caching. Any failure collapses into [`ApiError::NetworkOrServer`].

use std::sync::Arc;

use reqwest::cookie::Jar;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use repair_desk_core::{ApiError, Operation, Result};

use crate::config::ClientConfig;
use crate::error::ClientError;

/// Adapter that issues every backend call.
///
/// Cloning is cheap; clones share the connection pool and the cookie jar.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_root: String,
}

impl ApiClient {
    /// Create a new adapter with its own cookie jar.
    ///
    /// # Errors
    ///
    /// Returns an error if the user agent is not a valid header value or the
    /// HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> std::result::Result<Self, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| ClientError::InvalidUserAgent(config.user_agent.clone()))?;

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .cookie_provider(Arc::new(Jar::default()))
            .build()?;

        Ok(Self::with_client(client, config))
    }

    /// Create an adapter around a preconfigured reqwest client.
    ///
    /// The caller is responsible for giving `client` a cookie store and the
    /// JSON content type, otherwise the credential policy does not hold.
    #[must_use]
    pub fn with_client(client: Client, config: &ClientConfig) -> Self {
        Self {
            client,
            api_root: config.api_root(),
        }
    }

    /// Get the absolute URL of the API root.
    #[must_use]
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Resolve a path relative to the API root.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    /// Issue a single call and parse the response body.
    ///
    /// An empty success body parses as JSON `null`, so operations without a
    /// meaningful response should ask for [`serde::de::IgnoredAny`].
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NetworkOrServer`] on a transport failure, a
    /// non-success status, or a body that does not decode as `T`.
    pub async fn request<T, B>(
        &self,
        operation: Operation,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let failed = || ApiError::network_or_server(operation);

        let mut builder = self.client.request(method, self.url(path));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|_| failed())?;
        if !response.status().is_success() {
            return Err(failed());
        }

        let bytes = response.bytes().await.map_err(|_| failed())?;
        let value = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).map_err(|_| failed())?
        };

        serde_json::from_value(value).map_err(|_| failed())
    }

    /// Issue a `GET`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get<T: DeserializeOwned>(&self, operation: Operation, path: &str) -> Result<T> {
        self.request::<T, ()>(operation, Method::GET, path, None).await
    }

    /// Issue a `POST`, with or without a body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post<T, B>(&self, operation: Operation, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(operation, Method::POST, path, body).await
    }

    /// Issue a `PUT` with a body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn put<T, B>(&self, operation: Operation, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(operation, Method::PUT, path, Some(body)).await
    }

    /// Issue a `DELETE`, discarding any response body.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn delete(&self, operation: Operation, path: &str) -> Result<()> {
        self.request::<serde::de::IgnoredAny, ()>(operation, Method::DELETE, path, None)
            .await
            .map(|_| ())
    }
}
