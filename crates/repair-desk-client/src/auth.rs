//! Auth gateway: login, logout and registration.
//!
//! The gateway performs the round trip only. Feeding a login result into
//! [`SessionState`](crate::session::SessionState) is the caller's job, see
//! [`Authenticator`](crate::authenticator::Authenticator).

#[cfg(any(test, feature = "test-utils"))]
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::de::IgnoredAny;

#[cfg(any(test, feature = "test-utils"))]
use repair_desk_core::ApiError;
use repair_desk_core::{
    Credentials, LoginResponse, Operation, RegistrationProfile, Result, SessionToken,
};

use crate::http::ApiClient;

/// Trait for the backend's authentication endpoints.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Exchange credentials for a session token.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails for any reason, including rejected
    /// credentials.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken>;

    /// End the server-side session.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails. Callers must still clear local
    /// session state.
    async fn logout(&self) -> Result<()>;

    /// Create a new account. Does not log in.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn register(&self, profile: &RegistrationProfile) -> Result<()>;
}

/// HTTP implementation of [`AuthGateway`].
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    api: ApiClient,
}

impl HttpAuthGateway {
    /// Create a gateway on top of the given adapter.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken> {
        let response: LoginResponse = self
            .api
            .post(Operation::Login, "/auth/login", Some(credentials))
            .await?;
        Ok(response.token)
    }

    async fn logout(&self) -> Result<()> {
        self.api
            .post::<IgnoredAny, ()>(Operation::Logout, "/auth/logout", None)
            .await
            .map(|_| ())
    }

    async fn register(&self, profile: &RegistrationProfile) -> Result<()> {
        self.api
            .post::<IgnoredAny, _>(Operation::Register, "/auth/register", Some(profile))
            .await
            .map(|_| ())
    }
}

/// A scripted auth gateway for testing.
///
/// Every call succeeds unless the matching `fail_*` flag is set. Logins
/// return `token`.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug)]
pub struct MockAuthGateway {
    /// Token returned by successful logins.
    pub token: String,
    /// Make `login` fail.
    pub fail_login: bool,
    /// Make `logout` fail.
    pub fail_logout: bool,
    /// Make `register` fail.
    pub fail_register: bool,
    pub(crate) logout_calls: AtomicUsize,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockAuthGateway {
    /// Number of times `logout` has been called.
    #[must_use]
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "test-utils"))]
impl Default for MockAuthGateway {
    fn default() -> Self {
        Self {
            token: "test-session".to_string(),
            fail_login: false,
            fail_logout: false,
            fail_register: false,
            logout_calls: AtomicUsize::new(0),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, _credentials: &Credentials) -> Result<SessionToken> {
        if self.fail_login {
            return Err(ApiError::network_or_server(Operation::Login));
        }
        Ok(SessionToken::new(self.token.clone()))
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_logout {
            return Err(ApiError::network_or_server(Operation::Logout));
        }
        Ok(())
    }

    async fn register(&self, _profile: &RegistrationProfile) -> Result<()> {
        if self.fail_register {
            return Err(ApiError::network_or_server(Operation::Register));
        }
        Ok(())
    }
}
