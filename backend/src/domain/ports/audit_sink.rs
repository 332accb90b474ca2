//! Port for the append-only audit log mirroring created users.
use async_trait::async_trait;

use crate::domain::CreationRecord;

use super::define_port_error;

define_port_error! {
    /// Failures raised while appending to the audit log.
    pub enum AuditSinkError {
        /// The record could not be encoded.
        Encode { message: String } => "audit record encoding failed: {message}",
        /// The encoded record could not be written.
        Write { message: String } => "audit log write failed: {message}",
    }
}

/// Append-only sink for [`CreationRecord`]s.
///
/// Each call writes one self-delimited document. Concurrent calls must never
/// interleave bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSink: Send + Sync {
    /// Append `record` as a single document.
    async fn append(&self, record: &CreationRecord) -> Result<(), AuditSinkError>;
}
