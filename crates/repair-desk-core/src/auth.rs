//! Authentication payloads.
//!
//! Secrets and tokens are redacted from `Debug` output so they cannot leak
//! through logs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::UserRole;

/// Login credentials.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account identifier (e-mail, phone or user name).
    pub identifier: String,
    /// Account password.
    pub secret: String,
}

impl Credentials {
    /// Create a new credential pair.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Profile submitted when registering a new account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationProfile {
    /// Display name.
    pub name: String,
    /// Phone number or e-mail.
    pub contact: String,
    /// Street address.
    pub address: String,
    /// Platform role.
    pub role: UserRole,
    /// Account password.
    pub password: String,
}

impl fmt::Debug for RegistrationProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationProfile")
            .field("name", &self.name)
            .field("contact", &self.contact)
            .field("address", &self.address)
            .field("role", &self.role)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque session token returned by a successful login.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    /// Wrap a raw token.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the token carries no value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("SessionToken(<empty>)")
        } else {
            f.write_str("SessionToken(<redacted>)")
        }
    }
}

/// Body of a successful login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// The issued session token.
    pub token: SessionToken,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn credentials_serialize_with_wire_names() {
        let creds = Credentials::new("ada@example.com", "hunter2");
        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({ "identifier": "ada@example.com", "secret": "hunter2" })
        );
    }

    #[test]
    fn debug_redacts_secrets() {
        let creds = Credentials::new("ada@example.com", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ada@example.com"));
        assert!(!rendered.contains("hunter2"));

        let token = SessionToken::new("abc123");
        assert!(!format!("{token:?}").contains("abc123"));
    }

    #[test]
    fn registration_profile_wire_shape() {
        let profile = RegistrationProfile {
            name: "Ada".to_string(),
            contact: "555-0100".to_string(),
            address: "1 Main St".to_string(),
            role: UserRole::Resident,
            password: "hunter2".to_string(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["role"], "resident");
        assert_eq!(value["password"], "hunter2");
        assert!(!format!("{profile:?}").contains("hunter2"));
    }

    #[test]
    fn login_response_parses_token() {
        let response: LoginResponse = serde_json::from_value(json!({ "token": "t-1" })).unwrap();
        assert_eq!(response.token.expose(), "t-1");
        assert!(!response.token.is_empty());
    }
}
