//! Client-held authentication state.
//!
//! [`SessionState`] is the only shared mutable value in the client. It is a
//! single cell guarded by a lock and handed to every consumer behind an
//! `Arc`. Reads are synchronous and always observe the most recent
//! transition. Nothing is persisted: a new process starts anonymous.
//!
//! ```text
//!              set_token(non-empty)
//!   Anonymous ──────────────────────▶ Authenticated
//!       ▲                                  │
//!       └──────────────────────────────────┘
//!        logout() / clear_token() / set_token("")
//! ```

use parking_lot::RwLock;
use tokio::sync::watch;

use repair_desk_core::SessionToken;

/// Whether the client currently holds a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AuthStatus {
    /// No token is held. The initial state.
    #[default]
    Anonymous,
    /// A non-empty token is held.
    Authenticated,
}

impl AuthStatus {
    /// Returns `true` for [`AuthStatus::Authenticated`].
    #[must_use]
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// A point-in-time copy of the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<SessionToken>,
}

impl Session {
    /// Returns `true` if a non-empty token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.as_ref().is_some_and(|t| !t.is_empty())
    }

    /// The held token, if any.
    #[must_use]
    pub const fn token(&self) -> Option<&SessionToken> {
        self.token.as_ref()
    }

    /// The state-machine state of this session.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        if self.is_authenticated() {
            AuthStatus::Authenticated
        } else {
            AuthStatus::Anonymous
        }
    }
}

/// Shared, lock-guarded session cell.
#[derive(Debug)]
pub struct SessionState {
    session: RwLock<Session>,
    status_tx: watch::Sender<AuthStatus>,
}

impl SessionState {
    /// Create an anonymous session.
    #[must_use]
    pub fn new() -> Self {
        let (status_tx, _) = watch::channel(AuthStatus::Anonymous);
        Self {
            session: RwLock::new(Session::default()),
            status_tx,
        }
    }

    /// Store a token. A non-empty token authenticates the session; an empty
    /// one resets it to anonymous.
    pub fn set_token(&self, token: SessionToken) -> AuthStatus {
        let mut session = self.session.write();
        session.token = (!token.is_empty()).then_some(token);
        let status = session.status();
        self.status_tx.send_replace(status);
        tracing::debug!(status = ?status, "Session token set");
        status
    }

    /// End the local session. Always succeeds, whatever happened on the
    /// server.
    pub fn logout(&self) {
        self.reset();
        tracing::debug!("Session logged out");
    }

    /// Drop the held token without a logout.
    pub fn clear_token(&self) {
        self.reset();
        tracing::debug!("Session token cleared");
    }

    fn reset(&self) {
        let mut session = self.session.write();
        session.token = None;
        self.status_tx.send_replace(AuthStatus::Anonymous);
    }

    /// Returns `true` if the session is authenticated.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    /// The current state-machine state.
    #[must_use]
    pub fn status(&self) -> AuthStatus {
        self.session.read().status()
    }

    /// A copy of the held token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SessionToken> {
        self.session.read().token.clone()
    }

    /// A copy of the whole session.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.session.read().clone()
    }

    /// Subscribe to status transitions.
    ///
    /// The receiver starts out holding the current status.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AuthStatus> {
        self.status_tx.subscribe()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn starts_anonymous() {
        let state = SessionState::new();
        assert!(!state.is_authenticated());
        assert_eq!(state.status(), AuthStatus::Anonymous);
        assert!(state.token().is_none());
    }

    #[test]
    fn set_token_authenticates() {
        let state = SessionState::new();
        let status = state.set_token(SessionToken::new("abc"));

        assert_eq!(status, AuthStatus::Authenticated);
        assert!(state.is_authenticated());
        assert_eq!(state.token().unwrap().expose(), "abc");
    }

    #[test]
    fn empty_token_stays_anonymous() {
        let state = SessionState::new();
        assert_eq!(state.set_token(SessionToken::new("")), AuthStatus::Anonymous);
        assert!(!state.is_authenticated());
        assert!(state.snapshot().token().is_none());
    }

    #[test]
    fn empty_token_resets_authenticated_session() {
        let state = SessionState::new();
        state.set_token(SessionToken::new("abc"));
        state.set_token(SessionToken::new(""));
        assert!(!state.is_authenticated());
    }

    #[test]
    fn logout_clears_token() {
        let state = SessionState::new();
        state.set_token(SessionToken::new("abc"));
        state.logout();

        assert!(!state.is_authenticated());
        assert!(state.token().is_none());
    }

    #[test]
    fn logout_when_anonymous_is_harmless() {
        let state = SessionState::new();
        state.logout();
        state.clear_token();
        assert_eq!(state.status(), AuthStatus::Anonymous);
    }

    #[test]
    fn snapshot_matches_invariant() {
        let state = SessionState::new();
        state.set_token(SessionToken::new("abc"));
        let snapshot = state.snapshot();
        assert_eq!(
            snapshot.is_authenticated(),
            snapshot.token().is_some_and(|t| !t.is_empty())
        );
    }

    #[tokio::test]
    async fn subscribers_see_transitions() {
        let state = SessionState::new();
        let mut rx = state.subscribe();
        assert_eq!(*rx.borrow(), AuthStatus::Anonymous);

        state.set_token(SessionToken::new("abc"));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), AuthStatus::Authenticated);

        state.logout();
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow_and_update(), AuthStatus::Anonymous);
    }

    #[test]
    fn shared_across_threads() {
        let state = Arc::new(SessionState::new());

        let writer = {
            let state = Arc::clone(&state);
            std::thread::spawn(move || {
                for i in 0..100 {
                    state.set_token(SessionToken::new(format!("t{i}")));
                }
            })
        };
        writer.join().unwrap();

        assert!(state.is_authenticated());
        assert_eq!(state.token().unwrap().expose(), "t99");
    }
}
