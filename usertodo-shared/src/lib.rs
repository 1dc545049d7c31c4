//! # usertodo Shared Library
//!
//! Database access shared by the usertodo API server: connection pooling,
//! schema bootstrap, and the `users` / `todos` row types with their queries.
//!
//! ## Module Organization
//!
//! - `db`: Connection pool and schema initialization
//! - `models`: Row types and single-statement queries
//! - `test_utils`: Isolated-schema databases for integration tests

pub mod db;
pub mod models;

// Shared by this crate's and the API crate's integration tests
pub mod test_utils;

/// Current version of the usertodo shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
