//! Domain types shared by the API service and the board client.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod stage;
