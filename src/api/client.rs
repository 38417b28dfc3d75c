//! Sales backend client
//!
//! A reqwest client for the sales REST API: event listing and creation,
//! bulk import, and report downloads.

use crate::api::SalesApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts::http;
use crate::models::{EventRecord, MessageResponse, SaveEventRequest};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, ClientBuilder, Response};
use std::path::Path;

// User-Agent string with CLI version
const USER_AGENT: &str = concat!("salesdash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct SalesApiClient {
    client: Client,
    base_url: String,
}

impl SalesApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        Ok(Self {
            client: ClientBuilder::new()
                .connect_timeout(http::connect_timeout())
                .timeout(http::request_timeout())
                .user_agent(USER_AGENT)
                .build()?,
            base_url: base_url.into(),
        })
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_binary(&self, endpoint: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.build_url(endpoint);
        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl SalesApi for SalesApiClient {
    async fn get_events(&self) -> Result<Vec<EventRecord>, ApiError> {
        let url = self.build_url("/api/get-events");
        let response = self.client.get(&url).send().await?;
        let response = Self::handle_response_status(response).await?;
        Ok(response.json().await?)
    }

    async fn save_event(&self, request: &SaveEventRequest) -> Result<String, ApiError> {
        let url = self.build_url("/api/save-event");
        let response = self.client.post(&url).json(request).send().await?;
        let response = Self::handle_response_status(response).await?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    async fn import_events(&self, path: &Path) -> Result<String, ApiError> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "import.csv".to_string());
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let url = self.build_url("/api/import-events");
        let response = self.client.post(&url).multipart(form).send().await?;
        let response = Self::handle_response_status(response).await?;
        let body: MessageResponse = response.json().await?;
        Ok(body.message)
    }

    async fn export_pdf(&self) -> Result<Vec<u8>, ApiError> {
        self.get_binary("/api/export-pdf").await
    }

    async fn export_excel(&self) -> Result<Vec<u8>, ApiError> {
        self.get_binary("/api/export-excel").await
    }

    async fn export_csv(&self) -> Result<Vec<u8>, ApiError> {
        self.get_binary("/api/export-csv").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_without_duplicate_slashes() {
        let client = SalesApiClient::new("http://localhost:5000/").unwrap();
        assert_eq!(
            client.build_url("/api/get-events"),
            "http://localhost:5000/api/get-events"
        );
        assert_eq!(
            client.build_url("api/get-events"),
            "http://localhost:5000/api/get-events"
        );
    }
}
