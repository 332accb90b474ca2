//! Port for the relational store holding user rows.
use async_trait::async_trait;

use crate::domain::{UserRecordId, ValidSubmission};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// No usable connection: unreachable, refused, or failed liveness check.
        Connection { message: String } => "user repository connection failed: {message}",
        /// The insert reached the store and failed there.
        Write { message: String } => "user repository write failed: {message}",
    }
}

/// Relational store for user submissions.
///
/// Implementations decide how a connection is obtained (fresh per call or
/// leased from a pool); callers only see one logical connection use per
/// [`insert`](Self::insert).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert all six submission fields and return the assigned identifier.
    async fn insert(&self, submission: &ValidSubmission)
    -> Result<UserRecordId, UserPersistenceError>;
}
