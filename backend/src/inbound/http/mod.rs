//! HTTP inbound adapter exposing the REST endpoints.

pub mod cors;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod users;

pub use error::ApiResult;
