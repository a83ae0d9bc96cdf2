//! Shared contracts between the catalog screens and the production REST API.
//!
//! Everything here is plain Rust with no browser dependencies, so the
//! validation rules, the delete gate and the response handling can be
//! exercised with `cargo test` on the host.

pub mod domain;
pub mod shared;
