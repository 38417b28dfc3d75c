//! Error handling for the API module

use crate::models::MessageResponse;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Reqwest error, typically related to network issues or request failures.
    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("HTTP error with status {status}: {message}")]
    Http { status: u16, message: String },

    /// Local file problem while reading an import or writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Builds an `Http` error from a failed response. The backend reports
    /// failures as `{"message": ...}` JSON; fall back to the raw body text
    /// when it doesn't.
    pub async fn from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Failed to read response text".to_string());

        ApiError::Http {
            status,
            message: extract_message(body),
        }
    }

    /// The human-readable text to surface in the activity log: the
    /// server's own message when there is one, otherwise the error text.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Http { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn extract_message(body: String) -> String {
    serde_json::from_str::<MessageResponse>(&body)
        .map(|parsed| parsed.message)
        .unwrap_or(body)
}
