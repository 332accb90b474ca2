//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape for documentation only.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::CreationRecord`].
///
/// Acknowledgement returned by `POST /api/users` and mirrored into the audit
/// log.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct CreationRecordSchema {
    /// Identifier assigned by the database.
    #[schema(example = 1)]
    id: i64,
    /// First and last name joined by one space.
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    /// Email address as submitted.
    #[schema(example = "ada@x.com")]
    email: String,
}
