use axum::http::{Method, StatusCode};
use thiserror::Error;

/// Result type produced by method handlers and the dispatcher.
pub type DispatchResult = std::result::Result<crate::resource::Payload, HttpError>;

/// Client errors raised by the dispatch layer or by controller operations.
///
/// `MethodNotAllowed` is the only error the dispatch layer produces on its
/// own; everything else originates inside controller operations and passes
/// through the handlers unchanged.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Method {method} is not allowed on this resource")]
    MethodNotAllowed { method: Method },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),
}

impl HttpError {
    /// Shorthand for the dispatch layer's capability-check failure
    pub fn method_not_allowed(method: Method) -> Self {
        HttpError::MethodNotAllowed { method }
    }

    /// The HTTP status code this error translates to
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            HttpError::Forbidden(_) => StatusCode::FORBIDDEN,
            HttpError::NotFound(_) => StatusCode::NOT_FOUND,
            HttpError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            HttpError::Conflict(_) => StatusCode::CONFLICT,
            HttpError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl axum::response::IntoResponse for HttpError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = crate::exception::http::ErrorBody::new(status, self.to_string());
        (status, axum::Json(body)).into_response()
    }
}
