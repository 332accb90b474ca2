//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters decide how each
//! [`ErrorCode`] is rendered (status code, body, headers).

use std::fmt;

use crate::domain::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// The request body is not a well-formed submission document.
    MalformedInput,
    /// The date of birth is not an exact `YYYY-MM-DD` calendar date.
    InvalidDate,
    /// The relational store could not be reached or failed its liveness check.
    StorageUnavailable,
    /// The insert was attempted and rejected by the store.
    StorageWriteFailed,
    /// The record was stored but the audit log append failed.
    AuditWriteFailed,
}

impl ErrorCode {
    /// Snake-case identifier used in structured logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MalformedInput => "malformed_input",
            Self::InvalidDate => "invalid_date",
            Self::StorageUnavailable => "storage_unavailable",
            Self::StorageWriteFailed => "storage_write_failed",
            Self::AuditWriteFailed => "audit_write_failed",
        }
    }

    /// Whether the caller caused the failure. Client errors are never worth
    /// resubmitting unchanged.
    pub fn is_client_error(self) -> bool {
        matches!(self, Self::MalformedInput | Self::InvalidDate)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// Construction captures the [`TraceId`] in scope, if any, so adapters can
/// correlate the failure with request logs without threading the id around.
///
/// # Examples
/// ```
/// use user_intake::domain::{Error, ErrorCode};
///
/// let err = Error::invalid_date("Invalid Date of Birth format. Use YYYY-MM-DD");
/// assert_eq!(err.code(), ErrorCode::InvalidDate);
/// assert!(err.code().is_client_error());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create a new error, attaching the current trace identifier.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable diagnostic message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Trace identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Override the trace identifier.
    ///
    /// # Examples
    /// ```
    /// use user_intake::domain::Error;
    ///
    /// let err = Error::malformed_input("Invalid input").with_trace_id("abc");
    /// assert_eq!(err.trace_id(), Some("abc"));
    /// ```
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::MalformedInput`].
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedInput, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidDate`].
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidDate, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageUnavailable`].
    pub fn storage_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageWriteFailed`].
    pub fn storage_write_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageWriteFailed, message)
    }

    /// Convenience constructor for [`ErrorCode::AuditWriteFailed`].
    pub fn audit_write_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuditWriteFailed, message)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
