//! Resource types exchanged with the backend.
//!
//! These are value copies of what the server last returned. Nothing here is
//! cached or shared: every fetch produces fresh instances.

use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ids::{RequestId, ScheduleId, UserId};

// =============================================================================
// Service Requests
// =============================================================================

/// Lifecycle status of a service request, as reported by the backend.
///
/// The set of statuses is server-defined; values the client does not know
/// about are preserved verbatim in [`RequestStatus::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RequestStatus {
    /// Submitted and awaiting a serviceman.
    Pending,
    /// An appointment has been booked.
    Scheduled,
    /// The repair is done.
    Completed,
    /// Any status this client does not recognise.
    Other(String),
}

impl RequestStatus {
    /// The wire representation of this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Scheduled => "scheduled",
            Self::Completed => "completed",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RequestStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "scheduled" => Self::Scheduled,
            "completed" => Self::Completed,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for RequestStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RequestStatus> for String {
    fn from(status: RequestStatus) -> Self {
        match status {
            RequestStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or `null` text reads as an empty string.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A service request as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    /// Server-assigned identifier.
    pub id: RequestId,
    /// Short summary of the problem.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Free-form description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
    /// Current status.
    pub status: RequestStatus,
}

/// Body for creating a service request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewServiceRequest {
    /// Short summary of the problem.
    pub title: String,
    /// Free-form description.
    pub description: String,
}

impl NewServiceRequest {
    /// Create a new request body.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Partial update for a service request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestPatch {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<RequestStatus>,
}

impl RequestPatch {
    /// Returns `true` if the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }
}

// =============================================================================
// Schedules
// =============================================================================

/// Times travel as `HH:MM`, the format of a browser time input. Seconds are
/// kept when the backend reports them.
mod clock_time {
    use chrono::{NaiveTime, Timelike};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        let format = if time.second() == 0 { "%H:%M" } else { "%H:%M:%S" };
        serializer.collect_str(&time.format(format))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&raw, "%H:%M:%S"))
            .map_err(de::Error::custom)
    }
}

/// An appointment slot as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Server-assigned identifier, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ScheduleId>,
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Time of day of the appointment.
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
    /// Server-defined status (e.g. `scheduled`), when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body for booking an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewScheduleEntry {
    /// Calendar date of the appointment.
    pub date: NaiveDate,
    /// Time of day of the appointment.
    #[serde(with = "clock_time")]
    pub time: NaiveTime,
}

impl NewScheduleEntry {
    /// Create a new schedule body.
    #[must_use]
    pub const fn new(date: NaiveDate, time: NaiveTime) -> Self {
        Self { date, time }
    }

    /// Parse user-entered `YYYY-MM-DD` and `HH:MM` values.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not in the expected format.
    pub fn parse(date: &str, time: &str) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")?;
        let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")?;
        Ok(Self { date, time })
    }
}

// =============================================================================
// Users
// =============================================================================

/// Role of a platform user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    /// Someone who files service requests.
    Resident,
    /// Someone who carries out repairs.
    Serviceman,
    /// Any role this client does not recognise.
    Other(String),
}

impl UserRole {
    /// The wire representation of this role.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Resident => "resident",
            Self::Serviceman => "serviceman",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for UserRole {
    fn from(value: String) -> Self {
        match value.as_str() {
            "resident" => Self::Resident,
            "serviceman" => Self::Serviceman,
            _ => Self::Other(value),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user as listed by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Server-assigned identifier.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Phone number or e-mail.
    #[serde(default)]
    pub contact: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// Platform role.
    #[serde(default)]
    pub role: Option<UserRole>,
}
