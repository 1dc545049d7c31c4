//! # usertodo API Server Library
//!
//! HTTP CRUD service for `users` and `todos` stored in PostgreSQL.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error kinds and HTTP response mapping
//! - `middleware`: Request logging
//! - `response`: The JSON envelope
//! - `routes`: API route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod response;
pub mod routes;
