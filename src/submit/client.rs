//! HTTP client for delivering form submissions

use super::payload::ContactPayload;
use super::traits::SubmitClient;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use thiserror::Error;

/// Why a submission attempt did not go through.
///
/// A rejected response and a transport failure are handled identically by
/// the caller; the `Display` strings are the user-facing notice texts.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The endpoint answered with a non-success HTTP status
    #[error("Failed to send message. Please try again.")]
    Status(u16),
    /// The request never completed (DNS, connect, timeout)
    #[error("Error sending message. Please try again.")]
    Transport(String),
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

/// Client that POSTs form submissions to a Formspark-style endpoint
pub struct FormsparkClient {
    client: reqwest::Client,
    endpoint: String,
}

impl FormsparkClient {
    /// Create a new client for a fixed endpoint URL
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    #[allow(dead_code)]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SubmitClient for FormsparkClient {
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
        tracing::info!("Submitting contact form to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!("Submission accepted ({status})");
            Ok(())
        } else {
            tracing::warn!("Submission rejected ({status})");
            Err(SubmitError::Status(status.as_u16()))
        }
    }
}
