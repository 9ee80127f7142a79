//! Bundle of every HTTP gateway over one adapter.

use crate::auth::HttpAuthGateway;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::http::ApiClient;
use crate::requests::HttpRequestGateway;
use crate::schedule::HttpScheduleGateway;
use crate::users::HttpUserGateway;

/// All backend gateways, sharing one adapter and therefore one cookie jar.
///
/// A login through [`RepairApi::auth`] authenticates every other gateway in
/// the bundle, because the backend's session cookie lands in the shared jar.
#[derive(Debug, Clone)]
pub struct RepairApi {
    auth: HttpAuthGateway,
    requests: HttpRequestGateway,
    schedules: HttpScheduleGateway,
    users: HttpUserGateway,
}

impl RepairApi {
    /// Build a fresh adapter from `config` and the gateways on top of it.
    ///
    /// # Errors
    ///
    /// Returns an error if the adapter cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Ok(Self::from_client(ApiClient::new(config)?))
    }

    /// Build the gateways over an existing adapter.
    #[must_use]
    pub fn from_client(api: ApiClient) -> Self {
        Self {
            auth: HttpAuthGateway::new(api.clone()),
            requests: HttpRequestGateway::new(api.clone()),
            schedules: HttpScheduleGateway::new(api.clone()),
            users: HttpUserGateway::new(api),
        }
    }

    /// The auth gateway.
    #[must_use]
    pub const fn auth(&self) -> &HttpAuthGateway {
        &self.auth
    }

    /// The service request gateway.
    #[must_use]
    pub const fn requests(&self) -> &HttpRequestGateway {
        &self.requests
    }

    /// The schedule gateway.
    #[must_use]
    pub const fn schedules(&self) -> &HttpScheduleGateway {
        &self.schedules
    }

    /// The user gateway.
    #[must_use]
    pub const fn users(&self) -> &HttpUserGateway {
        &self.users
    }
}
