//! Schedule gateway: appointment booking.
//!
//! The backend is authoritative for conflicts; nothing is checked here.

use async_trait::async_trait;

use repair_desk_core::{NewScheduleEntry, Operation, Result, ScheduleEntry};

use crate::http::ApiClient;

/// Trait for the backend's schedule endpoints.
#[async_trait]
pub trait ScheduleGateway: Send + Sync {
    /// List booked appointments.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    async fn list_schedules(&self) -> Result<Vec<ScheduleEntry>>;

    /// Book an appointment.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails, including when the backend rejects
    /// the slot.
    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry>;
}

/// HTTP implementation of [`ScheduleGateway`].
#[derive(Debug, Clone)]
pub struct HttpScheduleGateway {
    api: ApiClient,
}

impl HttpScheduleGateway {
    /// Create a gateway on top of the given adapter.
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl ScheduleGateway for HttpScheduleGateway {
    async fn list_schedules(&self) -> Result<Vec<ScheduleEntry>> {
        self.api.get(Operation::ListSchedules, "/schedule").await
    }

    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        self.api
            .post(Operation::CreateSchedule, "/schedule", Some(entry))
            .await
    }
}
