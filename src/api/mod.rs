use crate::api::error::ApiError;
use crate::models::{EventRecord, SaveEventRequest};
use std::path::Path;

pub(crate) mod client;
pub use client::SalesApiClient;
pub mod error;

#[cfg(test)]
use mockall::{automock, predicate::*};

/// The backend surface consumed by the dashboard. A trait so controller
/// logic can be tested against a mock.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SalesApi: Send + Sync {
    /// Fetch all event records.
    async fn get_events(&self) -> Result<Vec<EventRecord>, ApiError>;

    /// Persist a new event record. Returns the server's success message.
    async fn save_event(&self, request: &SaveEventRequest) -> Result<String, ApiError>;

    /// Upload a csv/xlsx/xls file of event rows. Returns the server's
    /// import summary message.
    async fn import_events(&self, path: &Path) -> Result<String, ApiError>;

    /// Fetch the generated PDF report.
    async fn export_pdf(&self) -> Result<Vec<u8>, ApiError>;

    /// Fetch the generated Excel report.
    async fn export_excel(&self) -> Result<Vec<u8>, ApiError>;

    /// Fetch the raw CSV dump of all events.
    async fn export_csv(&self) -> Result<Vec<u8>, ApiError>;
}
