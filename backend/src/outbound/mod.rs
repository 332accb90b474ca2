//! Outbound adapters implementing domain ports.

pub mod audit;
pub mod persistence;
