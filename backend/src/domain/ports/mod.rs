//! Domain ports for the hexagonal boundary.
//!
//! - [`UserRegistration`] is the driving port the HTTP adapter calls.
//! - [`UserRepository`] and [`AuditSink`] are driven ports implemented by
//!   outbound adapters (PostgreSQL and the audit log).

mod macros;
pub(crate) use macros::define_port_error;

mod audit_sink;
mod user_registration;
mod user_repository;

#[cfg(test)]
pub use audit_sink::MockAuditSink;
pub use audit_sink::{AuditSink, AuditSinkError};
#[cfg(test)]
pub use user_registration::MockUserRegistration;
pub use user_registration::UserRegistration;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
