//! Submission client module for endpoint delivery

mod client;
mod payload;
mod traits;

pub use client::{FormsparkClient, SubmitError};
pub use payload::ContactPayload;
pub use traits::SubmitClient;

#[cfg(test)]
pub use traits::MockSubmitClient;
