//! Domain primitives and the registration use-case.
//!
//! Purpose: keep the registration rules (date validation, full-name
//! derivation, error taxonomy, ordering of insert and audit) free of HTTP,
//! Diesel and filesystem types. Adapters reach the domain only through
//! [`ports`].
//!
//! Public surface:
//! - [`UserSubmission`] / [`ValidSubmission`] / [`DateOfBirth`]: input and its
//!   validated form.
//! - [`CreationRecord`] / [`UserRecordId`]: what a successful registration
//!   returns and audits.
//! - [`Error`] / [`ErrorCode`]: transport-agnostic failures.
//! - [`UserRegistrationService`]: the use-case behind the HTTP endpoint.
//! - [`TraceId`]: request correlation identifier.

pub mod creation_record;
pub mod error;
pub mod ports;
pub mod registration_service;
pub mod submission;
pub mod trace_id;

pub use self::creation_record::{CreationRecord, UserRecordId};
pub use self::error::{Error, ErrorCode};
pub use self::registration_service::{INVALID_DATE_MESSAGE, UserRegistrationService};
pub use self::submission::{
    DATE_OF_BIRTH_FORMAT, DateOfBirth, SubmissionValidationError, UserSubmission, ValidSubmission,
};
pub use self::trace_id::TraceId;

/// HTTP header carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
