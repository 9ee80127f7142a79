//! Session and data-synchronization layer for the repair-desk client.
//!
//! This crate owns every conversation with the repair-service backend:
//!
//! - [`ApiClient`]: the single HTTP adapter (API root, JSON, cookie jar)
//! - Gateways: [`AuthGateway`], [`RequestGateway`], [`ScheduleGateway`],
//!   [`UserGateway`], each with an HTTP implementation
//! - [`SessionState`]: the shared authentication state machine
//! - [`Authenticator`]: login/logout flows that keep the two in step
//! - [`views`]: headless view models applying the user-facing error contract
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐     ┌──────────────────┐
//! │   View / CLI     │────▶│  Authenticator   │──────┐
//! └────────┬─────────┘     └────────┬─────────┘      │
//!          │                        │                │
//!          │               ┌────────▼─────────┐  ┌───▼──────────┐
//!          └──────────────▶│ *Gateway (trait) │  │ SessionState │
//!                          └────────┬─────────┘  └──────────────┘
//!                                   │
//!                          ┌────────▼─────────┐
//!                          │    ApiClient     │
//!                          │  (cookie jar)    │
//!                          └────────┬─────────┘
//!                                   │ HTTP /api
//!                          ┌────────▼─────────┐
//!                          │     Backend      │
//!                          └──────────────────┘
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use repair_desk_client::{Authenticator, ClientConfig, RepairApi, RequestGateway, SessionState};
//! use repair_desk_core::Credentials;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let api = RepairApi::new(&ClientConfig::new("http://localhost:5000"))?;
//! let session = Arc::new(SessionState::new());
//! let auth = Authenticator::new(Arc::new(api.auth().clone()), Arc::clone(&session));
//!
//! auth.sign_in(&Credentials::new("ada@example.com", "hunter2")).await?;
//! for request in api.requests().list_requests().await? {
//!     println!("{} - {}", request.title, request.status);
//! }
//!
//! // Local state is cleared even if the server call fails.
//! let _ = auth.sign_out().await;
//! assert!(!session.is_authenticated());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod api;
pub mod auth;
pub mod authenticator;
pub mod config;
pub mod error;
pub mod http;
pub mod requests;
pub mod schedule;
pub mod session;
pub mod users;
pub mod views;

pub use api::RepairApi;
pub use auth::{AuthGateway, HttpAuthGateway};
pub use authenticator::Authenticator;
pub use config::{ClientConfig, API_ROOT};
pub use error::ClientError;
pub use http::ApiClient;
pub use requests::{HttpRequestGateway, RequestGateway};
pub use schedule::{HttpScheduleGateway, ScheduleGateway};
pub use session::{AuthStatus, Session, SessionState};
pub use users::{HttpUserGateway, UserGateway};
pub use views::{FormError, RequestDetailView, RequestForm, RequestListView, ScheduleForm};

#[cfg(any(test, feature = "test-utils"))]
pub use auth::MockAuthGateway;
