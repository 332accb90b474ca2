//! OpenAPI documentation.
//!
//! [`ApiDoc`] registers the user registration endpoint, the health probes and
//! the schema wrappers from [`crate::inbound::http::schemas`]. Swagger UI
//! serves it in debug builds and `openapi-dump` prints it for tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::CreationRecordSchema;
use crate::inbound::http::users::CreateUserRequest;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User intake API",
        description = "Create user records and probe service health."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(CreateUserRequest, CreationRecordSchema)),
    tags(
        (name = "users", description = "User registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
