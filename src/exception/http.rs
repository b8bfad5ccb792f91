use crate::error::HttpError;
use crate::exception::ExceptionFilter;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::error::Error;

/// JSON body produced for translated errors
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
    pub timestamp: String,
}

impl ErrorBody {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// The default exception filter for the dispatch layer.
///
/// [`HttpError`] values keep their status code, so a
/// `MethodNotAllowed` raised by a capability check becomes a 405 response.
/// Anything else is a 500.
#[derive(Default)]
pub struct HttpExceptionFilter;

impl ExceptionFilter for HttpExceptionFilter {
    fn catch(&self, error: Box<dyn Error + Send + Sync>) -> Response {
        let (status, message) = match error.downcast_ref::<HttpError>() {
            Some(http_error) => (http_error.status(), http_error.to_string()),
            None => {
                tracing::error!("Unhandled error reached the exception filter: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody::new(status, message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::Method;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn method_not_allowed_becomes_a_405() {
        let filter = HttpExceptionFilter;
        let error = HttpError::method_not_allowed(Method::GET);

        let response = filter.catch(Box::new(error));
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let body = body_json(response).await;
        assert_eq!(body["statusCode"], 405);
        assert_eq!(body["message"], "Method GET is not allowed on this resource");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn unknown_errors_become_a_500() {
        let filter = HttpExceptionFilter;
        let error: Box<dyn Error + Send + Sync> = "boom".into();

        let response = filter.catch(error);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal Server Error");
    }
}
