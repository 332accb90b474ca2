//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel rows and domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Explicit connection policy**: [`ConnectionSource`] decides whether a
//!   call opens its own connection or leases one from a `bb8` pool.
//! - **Typed errors**: Diesel and connection failures are mapped onto
//!   [`crate::domain::ports::UserPersistenceError`].
//!
//! # Example
//!
//! ```ignore
//! use user_intake::outbound::persistence::{ConnectionSource, DieselUserRepository};
//!
//! let repo = DieselUserRepository::new(ConnectionSource::per_request(
//!     "postgres://localhost/user_intake",
//! ));
//! ```

mod connection;
mod diesel_user_repository;
mod models;
mod schema;

pub use connection::{
    AcquireError, ConnectionPolicy, ConnectionSource, Lease, PoolSettings,
    UnknownConnectionPolicy,
};
pub use diesel_user_repository::DieselUserRepository;
