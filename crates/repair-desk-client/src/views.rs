//! Headless view models.
//!
//! These hold the state a screen renders and apply the user-visible error
//! contract: a failed read shows a fixed message next to the previous data,
//! and a failed write shows a fixed message while keeping the form filled
//! in for resubmission. Field checks that the browser would do on `required`
//! inputs live here too; gateways never validate.

use repair_desk_core::{
    ApiError, NewScheduleEntry, NewServiceRequest, RequestId, ScheduleEntry, ServiceRequest,
};
use thiserror::Error;

use crate::requests::RequestGateway;
use crate::schedule::ScheduleGateway;

/// Errors a form submission can end with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A field is missing or malformed. Nothing was sent.
    #[error("{0}")]
    Invalid(&'static str),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// The message rendered next to the form.
    #[must_use]
    pub fn human_message(&self) -> &'static str {
        match self {
            Self::Invalid(message) => *message,
            Self::Api(err) => err.human_message(),
        }
    }
}

// =============================================================================
// Service Requests
// =============================================================================

/// The service request list screen.
#[derive(Debug, Default)]
pub struct RequestListView {
    requests: Vec<ServiceRequest>,
    error: Option<&'static str>,
}

impl RequestListView {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the list. On failure the previous list stays visible.
    ///
    /// # Errors
    ///
    /// Returns the gateway error, which is also recorded for rendering.
    pub async fn refresh<G>(&mut self, gateway: &G) -> Result<(), ApiError>
    where
        G: RequestGateway + ?Sized,
    {
        self.error = None;
        match gateway.list_requests().await {
            Ok(requests) => {
                self.requests = requests;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.human_message());
                Err(err)
            }
        }
    }

    /// The most recently fetched requests.
    #[must_use]
    pub fn requests(&self) -> &[ServiceRequest] {
        &self.requests
    }

    /// The message to render, if the last refresh failed.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }
}

/// The single service request screen.
#[derive(Debug, Default)]
pub struct RequestDetailView {
    request: Option<ServiceRequest>,
    error: Option<&'static str>,
}

impl RequestDetailView {
    /// Create an empty detail view.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch one request.
    ///
    /// On failure the previously shown request stays only if it has the same
    /// id; a different request is never shown under the wrong id.
    ///
    /// # Errors
    ///
    /// Returns the gateway error, which is also recorded for rendering.
    pub async fn load<G>(&mut self, gateway: &G, id: &RequestId) -> Result<(), ApiError>
    where
        G: RequestGateway + ?Sized,
    {
        self.error = None;
        match gateway.get_request(id).await {
            Ok(request) => {
                self.request = Some(request);
                Ok(())
            }
            Err(err) => {
                if self.request.as_ref().is_some_and(|r| &r.id != id) {
                    self.request = None;
                }
                self.error = Some(err.human_message());
                Err(err)
            }
        }
    }

    /// The loaded request, if any.
    #[must_use]
    pub const fn request(&self) -> Option<&ServiceRequest> {
        self.request.as_ref()
    }

    /// The message to render, if the last load failed.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }
}

/// The "create service request" form.
#[derive(Debug, Default)]
pub struct RequestForm {
    /// Title as typed by the user.
    pub title: String,
    /// Description as typed by the user.
    pub description: String,
    error: Option<&'static str>,
}

impl RequestForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. Fields are cleared only on success.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] if a field is blank, or
    /// [`FormError::Api`] if the create call fails.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<ServiceRequest, FormError>
    where
        G: RequestGateway + ?Sized,
    {
        self.error = None;
        let result = self.try_submit(gateway).await;
        match &result {
            Ok(_) => {
                self.title.clear();
                self.description.clear();
            }
            Err(err) => self.error = Some(err.human_message()),
        }
        result
    }

    async fn try_submit<G>(&self, gateway: &G) -> Result<ServiceRequest, FormError>
    where
        G: RequestGateway + ?Sized,
    {
        if self.title.trim().is_empty() {
            return Err(FormError::Invalid("Title is required"));
        }
        if self.description.trim().is_empty() {
            return Err(FormError::Invalid("Description is required"));
        }

        let body = NewServiceRequest::new(self.title.clone(), self.description.clone());
        Ok(gateway.create_request(&body).await?)
    }

    /// The message to render, if the last submit failed.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }
}

// =============================================================================
// Schedules
// =============================================================================

/// The "schedule appointment" form.
#[derive(Debug, Default)]
pub struct ScheduleForm {
    /// Date as typed by the user (`YYYY-MM-DD`).
    pub date: String,
    /// Time as typed by the user (`HH:MM`).
    pub time: String,
    error: Option<&'static str>,
}

impl ScheduleForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. Fields are cleared only on success.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Invalid`] if a field is blank or malformed, or
    /// [`FormError::Api`] if the create call fails.
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<ScheduleEntry, FormError>
    where
        G: ScheduleGateway + ?Sized,
    {
        self.error = None;
        let result = self.try_submit(gateway).await;
        match &result {
            Ok(_) => {
                self.date.clear();
                self.time.clear();
            }
            Err(err) => self.error = Some(err.human_message()),
        }
        result
    }

    async fn try_submit<G>(&self, gateway: &G) -> Result<ScheduleEntry, FormError>
    where
        G: ScheduleGateway + ?Sized,
    {
        if self.date.trim().is_empty() {
            return Err(FormError::Invalid("Date is required"));
        }
        if self.time.trim().is_empty() {
            return Err(FormError::Invalid("Time is required"));
        }

        let entry = NewScheduleEntry::parse(&self.date, &self.time)
            .map_err(|_| FormError::Invalid("Enter the date as YYYY-MM-DD and the time as HH:MM"))?;
        Ok(gateway.create_schedule(&entry).await?)
    }

    /// The message to render, if the last submit failed.
    #[must_use]
    pub const fn error(&self) -> Option<&'static str> {
        self.error
    }
}
