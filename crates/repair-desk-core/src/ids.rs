//! Server-assigned identifier types.
//!
//! The backend keys its records with integers, but nothing in the client
//! depends on that: identifiers are opaque and only ever echoed back into
//! request paths. Each identifier accepts either a JSON number or a JSON
//! string when deserializing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The identifier was empty or whitespace.
    #[error("identifier must not be empty")]
    Empty,

    /// The identifier contains a character that cannot appear in a path segment.
    #[error("identifier contains invalid character {0:?}")]
    InvalidChar(char),

    /// The identifier is `.` or `..`, which URL normalization would collapse.
    #[error("identifier must not be a dot segment")]
    DotSegment,
}

/// Identifier as it appears on the wire, before normalization.
#[doc(hidden)]
#[derive(Deserialize)]
#[serde(untagged)]
pub enum WireId {
    /// Integer primary key.
    Number(u64),
    /// Already-textual key.
    Text(String),
}

impl From<WireId> for String {
    fn from(raw: WireId) -> Self {
        match raw {
            WireId::Number(n) => n.to_string(),
            WireId::Text(s) => s,
        }
    }
}

fn validate(value: &str) -> Result<(), IdError> {
    if value.trim().is_empty() {
        return Err(IdError::Empty);
    }
    if let Some(c) = value
        .chars()
        .find(|c| matches!(c, '/' | '?' | '#') || c.is_whitespace())
    {
        return Err(IdError::InvalidChar(c));
    }
    if value.chars().all(|c| c == '.') {
        return Err(IdError::DotSegment);
    }
    Ok(())
}

macro_rules! wire_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "WireId", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Return the identifier as it is written into request paths.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl From<u64> for $name {
            fn from(n: u64) -> Self {
                Self(n.to_string())
            }
        }

        impl TryFrom<WireId> for $name {
            type Error = IdError;

            fn try_from(raw: WireId) -> Result<Self, Self::Error> {
                String::from(raw).parse()
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

wire_id!(
    /// Identifier of a service request, assigned by the backend on create.
    RequestId
);

wire_id!(
    /// Identifier of a schedule entry.
    ScheduleId
);

wire_id!(
    /// Identifier of a platform user.
    UserId
);
