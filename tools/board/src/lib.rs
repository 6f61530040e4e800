//! Work-order board client.
//!
//! Holds a cached copy of every work order, groups it into stage columns and
//! keeps the cache in step with the API through per-card round trips.

pub mod api;
pub mod board;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod policy;
pub mod render;
