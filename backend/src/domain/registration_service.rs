//! User registration use-case.
//!
//! Straight-line sequence: validate the date of birth, insert the row, build
//! the [`CreationRecord`], append it to the audit log. Each step that fails
//! ends the request; nothing is retried or compensated.
//!
//! The insert and the audit append are not atomic. When the append fails the
//! row stays committed; the error names the stored id and is logged so the
//! gap can be reconciled from the audit trail and the logs.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info, warn};

use crate::domain::ports::{
    AuditSink, AuditSinkError, UserPersistenceError, UserRegistration, UserRepository,
};
use crate::domain::{CreationRecord, Error, SubmissionValidationError, UserRecordId, UserSubmission};

/// Client-facing message for any date-of-birth rejection.
pub const INVALID_DATE_MESSAGE: &str = "Invalid Date of Birth format. Use YYYY-MM-DD";

/// [`UserRegistration`] backed by a [`UserRepository`] and an [`AuditSink`].
#[derive(Clone)]
pub struct UserRegistrationService {
    users: Arc<dyn UserRepository>,
    audit: Arc<dyn AuditSink>,
}

impl UserRegistrationService {
    /// Wire the service to its collaborators.
    pub fn new(users: Arc<dyn UserRepository>, audit: Arc<dyn AuditSink>) -> Self {
        Self { users, audit }
    }
}

fn map_validation_error(err: SubmissionValidationError) -> Error {
    warn!(error = %err, "rejected date of birth");
    Error::invalid_date(INVALID_DATE_MESSAGE)
}

fn map_persistence_error(err: UserPersistenceError) -> Error {
    error!(error = %err, "user insert failed");
    match err {
        UserPersistenceError::Connection { message } => {
            Error::storage_unavailable(format!("Database connection failed: {message}"))
        }
        UserPersistenceError::Write { message } => {
            Error::storage_write_failed(format!("Failed to insert user: {message}"))
        }
    }
}

fn map_audit_error(err: AuditSinkError, id: UserRecordId) -> Error {
    error!(
        error = %err,
        user_id = %id,
        "audit append failed after insert; row is committed without an audit entry"
    );
    let detail = match err {
        AuditSinkError::Encode { message } | AuditSinkError::Write { message } => message,
    };
    Error::audit_write_failed(format!("Error saving data: {detail} (user {id} was stored)"))
}

#[async_trait]
impl UserRegistration for UserRegistrationService {
    async fn register(&self, submission: UserSubmission) -> Result<CreationRecord, Error> {
        let valid = submission.validate().map_err(map_validation_error)?;

        let id = self
            .users
            .insert(&valid)
            .await
            .map_err(map_persistence_error)?;

        let record = CreationRecord::new(id, &valid);

        self.audit
            .append(&record)
            .await
            .map_err(|err| map_audit_error(err, id))?;

        info!(user_id = %id, "user registered");
        Ok(record)
    }
}
