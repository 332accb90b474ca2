//! Driving port for the user registration use-case.
//!
//! Inbound adapters hand a decoded [`UserSubmission`] to this port and get
//! back either the stored [`CreationRecord`] or a domain [`Error`]. Handler
//! tests substitute a mock instead of wiring storage.

use async_trait::async_trait;

use crate::domain::{CreationRecord, Error, UserSubmission};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRegistration: Send + Sync {
    /// Validate, persist and audit one submission.
    async fn register(&self, submission: UserSubmission) -> Result<CreationRecord, Error>;
}
