/// Middleware modules for the API server
///
/// - `logger`: One timestamped line per request

pub mod logger;
