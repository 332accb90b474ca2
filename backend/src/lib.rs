//! User intake service.
//!
//! Accepts `POST /api/users`, validates the date of birth, stores the user in
//! PostgreSQL and mirrors a summary into a JSON-lines audit log.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;
#[cfg(feature = "test-support")]
pub mod test_support;

pub use doc::ApiDoc;
pub use middleware::Trace;
