//! User registration handler.
//!
//! ```text
//! POST /api/users
//! {"firstName":"Ada","lastName":"Lovelace","email":"ada@x.com",
//!  "phone":"555-0100","dob":"1815-12-10","address":"London"}
//! ```
//!
//! The body is read as raw bytes and decoded here, so the `Content-Type`
//! header is never consulted and every decoding failure maps to the same
//! `400 Invalid input` response. Bodies are buffered up to
//! [`MAX_BODY_BYTES`]; anything larger is treated as malformed input.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::{Error, UserSubmission};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::CreationRecordSchema;
use crate::inbound::http::state::HttpState;

/// Message returned for undecodable bodies.
pub const MALFORMED_INPUT_MESSAGE: &str = "Invalid input";

/// Largest request body buffered for decoding.
pub const MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

/// Request body for `POST /api/users`.
///
/// All six keys are required; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "ada@x.com")]
    pub email: String,
    #[serde(rename = "phone")]
    #[schema(example = "555-0100")]
    pub phone_number: String,
    /// Date of birth as `YYYY-MM-DD`.
    #[schema(example = "1815-12-10")]
    pub dob: String,
    #[schema(example = "London")]
    pub address: String,
}

impl From<CreateUserRequest> for UserSubmission {
    fn from(value: CreateUserRequest) -> Self {
        Self {
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            phone_number: value.phone_number,
            dob: value.dob,
            address: value.address,
        }
    }
}

async fn read_body(payload: web::Payload) -> Result<web::Bytes, Error> {
    match payload.to_bytes_limited(MAX_BODY_BYTES).await {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(err)) => {
            warn!(error = %err, "failed to read user submission body");
            Err(Error::malformed_input(MALFORMED_INPUT_MESSAGE))
        }
        Err(_) => {
            warn!(limit = MAX_BODY_BYTES, "rejected oversized user submission");
            Err(Error::malformed_input(MALFORMED_INPUT_MESSAGE))
        }
    }
}

fn decode_request(body: &[u8]) -> Result<CreateUserRequest, Error> {
    serde_json::from_slice(body).map_err(|err| {
        warn!(error = %err, "rejected undecodable user submission");
        Error::malformed_input(MALFORMED_INPUT_MESSAGE)
    })
}

/// Register a user, store it and append it to the audit log.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User stored and audited", body = CreationRecordSchema),
        (status = 400, description = "Malformed body or invalid date of birth",
            body = String, content_type = "text/plain"),
        (status = 500, description = "Database or audit log failure",
            body = String, content_type = "text/plain")
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let body = read_body(payload).await?;
    let request = decode_request(&body)?;
    let record = state.registration.register(request.into()).await?;
    Ok(HttpResponse::Created().json(record))
}
