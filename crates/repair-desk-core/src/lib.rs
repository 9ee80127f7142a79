//! Core types for the repair-desk client.
//!
//! This crate provides the values exchanged with the repair-service backend:
//!
//! - **Identifiers**: opaque, server-assigned IDs for requests, schedules and users
//! - **Resources**: service requests, schedule entries and user records
//! - **Auth payloads**: credentials, registration profiles and session tokens
//! - **Errors**: the single `ApiError` kind every gateway call can fail with
//!
//! # Example
//!
//! ```
//! use repair_desk_core::{NewScheduleEntry, RequestId};
//!
//! let id: RequestId = "42".parse().unwrap();
//! assert_eq!(id.as_str(), "42");
//!
//! let slot = NewScheduleEntry::parse("2024-06-01", "14:30").unwrap();
//! assert_eq!(slot.date.to_string(), "2024-06-01");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod auth;
pub mod error;
pub mod ids;
pub mod types;

pub use auth::{Credentials, LoginResponse, RegistrationProfile, SessionToken};
pub use error::{ApiError, Operation, Result};
pub use ids::{IdError, RequestId, ScheduleId, UserId};
pub use types::{
    NewScheduleEntry, NewServiceRequest, RequestPatch, RequestStatus, ScheduleEntry,
    ServiceRequest, UserRecord, UserRole,
};
