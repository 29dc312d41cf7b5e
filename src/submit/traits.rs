//! Trait abstraction for the submission client to enable mocking in tests

use super::client::SubmitError;
use super::payload::ContactPayload;
use async_trait::async_trait;

/// Trait for delivering a form submission, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitClient: Send + Sync {
    /// POST the payload to the configured endpoint.
    ///
    /// Returns `Ok(())` only for a success (2xx) response.
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}
