//! Login and logout flows.
//!
//! [`Authenticator`] connects an [`AuthGateway`] to the shared
//! [`SessionState`]. A successful login stores the returned token. Logout
//! always clears the local session, even when the server call fails, so the
//! client can never be left authenticated by a broken backend.

use std::sync::Arc;

use repair_desk_core::{Credentials, RegistrationProfile, Result};

use crate::auth::AuthGateway;
use crate::session::{AuthStatus, SessionState};

/// Drives session transitions from auth gateway results.
pub struct Authenticator<G>
where
    G: AuthGateway,
{
    gateway: Arc<G>,
    session: Arc<SessionState>,
}

impl<G> Authenticator<G>
where
    G: AuthGateway,
{
    /// Create an authenticator over a gateway and a shared session.
    #[must_use]
    pub fn new(gateway: Arc<G>, session: Arc<SessionState>) -> Self {
        Self { gateway, session }
    }

    /// The session this authenticator writes to.
    #[must_use]
    pub const fn session(&self) -> &Arc<SessionState> {
        &self.session
    }

    /// Log in and store the returned token.
    ///
    /// A failed login leaves the session untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the login call fails.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<AuthStatus> {
        let token = self.gateway.login(credentials).await?;
        let status = self.session.set_token(token);

        if status.is_authenticated() {
            tracing::info!(identifier = %credentials.identifier, "Signed in");
        } else {
            tracing::warn!(
                identifier = %credentials.identifier,
                "Login succeeded but the backend returned an empty token"
            );
        }

        Ok(status)
    }

    /// Log out on the server and clear the local session.
    ///
    /// The local session is cleared before the server call is issued, so it
    /// ends up anonymous even if the call fails or the future is dropped.
    ///
    /// # Errors
    ///
    /// Returns the logout call's error so the caller can report it. The local
    /// session is anonymous either way.
    pub async fn sign_out(&self) -> Result<()> {
        self.session.logout();

        let result = self.gateway.logout().await;
        if let Err(err) = &result {
            tracing::warn!(
                operation = %err.operation(),
                "Server logout failed; local session cleared"
            );
        } else {
            tracing::info!("Signed out");
        }
        result
    }

    /// Register a new account. Does not sign in.
    ///
    /// # Errors
    ///
    /// Returns an error if the register call fails.
    pub async fn register(&self, profile: &RegistrationProfile) -> Result<()> {
        self.gateway.register(profile).await
    }
}

impl<G> Clone for Authenticator<G>
where
    G: AuthGateway,
{
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            session: Arc::clone(&self.session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MockAuthGateway;
    use repair_desk_core::{ApiError, Operation, UserRole};

    fn authenticator(gateway: MockAuthGateway) -> Authenticator<MockAuthGateway> {
        Authenticator::new(Arc::new(gateway), Arc::new(SessionState::new()))
    }

    fn creds() -> Credentials {
        Credentials::new("ada@example.com", "hunter2")
    }

    #[tokio::test]
    async fn sign_in_authenticates() {
        let auth = authenticator(MockAuthGateway::default());

        let status = auth.sign_in(&creds()).await.unwrap();

        assert_eq!(status, AuthStatus::Authenticated);
        assert!(auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn failed_sign_in_leaves_session_anonymous() {
        let auth = authenticator(MockAuthGateway {
            fail_login: true,
            ..MockAuthGateway::default()
        });

        let err = auth.sign_in(&creds()).await.unwrap_err();

        assert_eq!(err, ApiError::network_or_server(Operation::Login));
        assert!(!auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn empty_token_does_not_authenticate() {
        let auth = authenticator(MockAuthGateway {
            token: String::new(),
            ..MockAuthGateway::default()
        });

        let status = auth.sign_in(&creds()).await.unwrap();
        assert_eq!(status, AuthStatus::Anonymous);
    }

    #[tokio::test]
    async fn sign_out_clears_session() {
        let auth = authenticator(MockAuthGateway::default());
        auth.sign_in(&creds()).await.unwrap();

        auth.sign_out().await.unwrap();

        assert!(!auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn failed_server_logout_still_clears_session() {
        let gateway = Arc::new(MockAuthGateway {
            fail_logout: true,
            ..MockAuthGateway::default()
        });
        let auth = Authenticator::new(Arc::clone(&gateway), Arc::new(SessionState::new()));
        auth.sign_in(&creds()).await.unwrap();

        let result = auth.sign_out().await;

        assert_eq!(
            result,
            Err(ApiError::network_or_server(Operation::Logout))
        );
        assert!(!auth.session().is_authenticated());
        assert_eq!(gateway.logout_calls(), 1);
    }

    #[tokio::test]
    async fn register_does_not_sign_in() {
        let auth = authenticator(MockAuthGateway::default());
        let profile = RegistrationProfile {
            name: "Ada".to_string(),
            contact: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            role: UserRole::Resident,
            password: "hunter2".to_string(),
        };

        auth.register(&profile).await.unwrap();
        assert!(!auth.session().is_authenticated());
    }

    #[tokio::test]
    async fn clones_share_the_session() {
        let auth = authenticator(MockAuthGateway::default());
        let other = auth.clone();

        auth.sign_in(&creds()).await.unwrap();
        assert!(other.session().is_authenticated());

        other.sign_out().await.unwrap();
        assert!(!auth.session().is_authenticated());
    }
}
