use axum::response::Response;
use std::error::Error;

pub mod http;

pub use http::HttpExceptionFilter;

/// The ExceptionFilter trait
///
/// Filters translate errors escaping the dispatch layer into client-facing
/// responses. They must return a valid Response.
pub trait ExceptionFilter: Send + Sync + 'static {
    /// Catch an error and return a response
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response;
}
