//! Error taxonomy surfaced to the view layer.
//!
//! Every failed backend call collapses into a single kind. The HTTP status,
//! transport cause and any error payload are dropped at the adapter boundary;
//! what survives is which operation failed, which is enough to pick the fixed
//! message a view shows to the user.

use std::fmt;

use thiserror::Error;

/// A result type using `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// The backend operations a client can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `POST /auth/login`
    Login,
    /// `POST /auth/logout`
    Logout,
    /// `POST /auth/register`
    Register,
    /// `GET /requests`
    ListRequests,
    /// `GET /requests/{id}`
    GetRequest,
    /// `POST /requests`
    CreateRequest,
    /// `PUT /requests/{id}`
    UpdateRequest,
    /// `DELETE /requests/{id}`
    DeleteRequest,
    /// `GET /schedule`
    ListSchedules,
    /// `POST /schedule`
    CreateSchedule,
    /// `GET /users`
    ListUsers,
}

impl Operation {
    /// Fixed, user-facing message shown when this operation fails.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::Login => "Failed to log in",
            Self::Logout => "Failed to log out",
            Self::Register => "Failed to register",
            Self::ListRequests => "Failed to fetch service requests",
            Self::GetRequest => "Failed to fetch service request",
            Self::CreateRequest => "Failed to create service request",
            Self::UpdateRequest => "Failed to update service request",
            Self::DeleteRequest => "Failed to delete service request",
            Self::ListSchedules => "Failed to fetch schedules",
            Self::CreateSchedule => "Failed to schedule appointment",
            Self::ListUsers => "Failed to fetch users",
        }
    }

    /// Short machine-friendly name, used in log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::Logout => "logout",
            Self::Register => "register",
            Self::ListRequests => "list_requests",
            Self::GetRequest => "get_request",
            Self::CreateRequest => "create_request",
            Self::UpdateRequest => "update_request",
            Self::DeleteRequest => "delete_request",
            Self::ListSchedules => "list_schedules",
            Self::CreateSchedule => "create_schedule",
            Self::ListUsers => "list_users",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors returned by every gateway call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The call failed: transport error, non-success status, or an
    /// undecodable body. No finer classification is made.
    #[error("{}", .operation.failure_message())]
    NetworkOrServer {
        /// The operation that failed.
        operation: Operation,
    },
}

impl ApiError {
    /// Create an error for a failed call.
    #[must_use]
    pub const fn network_or_server(operation: Operation) -> Self {
        Self::NetworkOrServer { operation }
    }

    /// The operation whose call failed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::NetworkOrServer { operation } => *operation,
        }
    }

    /// The fixed message a view renders for this failure.
    #[must_use]
    pub const fn human_message(&self) -> &'static str {
        self.operation().failure_message()
    }
}
