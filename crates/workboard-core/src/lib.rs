//! Plumbing shared by the workboard binaries: configuration loading,
//! tracing setup, HTTP middleware and serde helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
