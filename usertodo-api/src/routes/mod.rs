/// API route handlers
///
/// Organized by resource:
///
/// - `root`: Greeting and echo on `/`
/// - `health`: Health check endpoint
/// - `users`: User CRUD
/// - `todos`: Todo CRUD
/// - `fallback`: 404 envelope for unmatched routes

pub mod fallback;
pub mod health;
pub mod root;
pub mod todos;
pub mod users;
