//! Cross-origin policy applied to every route.

use actix_cors::Cors;
use actix_web::http::header::{self, HeaderName};

/// Methods advertised to browsers.
pub const ALLOWED_METHODS: [&str; 5] = ["GET", "POST", "PUT", "DELETE", "OPTIONS"];

/// Permissive policy: any origin, a fixed method and header list.
///
/// `Access-Control-Allow-Origin` is always `*`; no credentials are involved.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(ALLOWED_METHODS)
        .allowed_headers([
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
        ])
}
