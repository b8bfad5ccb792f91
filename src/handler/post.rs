use super::MethodHandler;
use crate::controller::RestController;
use crate::error::{DispatchResult, HttpError};
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;

/// Handles `POST` by passing the incoming representation to the controller's
/// `post` operation. The target resource itself is not read.
#[derive(Debug, Default)]
pub struct PostHandler;

#[async_trait]
impl MethodHandler for PostHandler {
    fn method(&self) -> Method {
        Method::POST
    }

    async fn handle(
        &self,
        controller: &dyn RestController,
        _resource: &dyn Resource,
        body: Option<Payload>,
    ) -> DispatchResult {
        let Some(operation) = controller.as_post() else {
            return Err(HttpError::method_not_allowed(Method::POST));
        };

        let Some(data) = body else {
            return Err(HttpError::BadRequest(
                "POST requires a request body".to_string(),
            ));
        };

        operation.post(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PostCapable;
    use crate::resource::ValueResource;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct PostController {
        created: Mutex<Option<Payload>>,
    }

    #[async_trait]
    impl PostCapable for PostController {
        async fn post(&self, data: Payload) -> DispatchResult {
            *self.created.lock().unwrap() = Some(data.clone());
            Ok(data)
        }
    }

    impl RestController for PostController {
        fn as_post(&self) -> Option<&dyn PostCapable> {
            Some(self)
        }
    }

    struct IncapableController;

    impl RestController for IncapableController {}

    #[tokio::test]
    async fn fails_with_method_not_allowed_when_post_is_missing() {
        let resource = ValueResource::default();

        let result = PostHandler
            .handle(&IncapableController, &resource, Some(json!({})))
            .await;

        assert!(matches!(
            result,
            Err(HttpError::MethodNotAllowed { method }) if method == Method::POST
        ));
    }

    #[tokio::test]
    async fn rejects_a_missing_body_with_bad_request() {
        let controller = PostController::default();
        let resource = ValueResource::default();

        let result = PostHandler.handle(&controller, &resource, None).await;

        assert!(matches!(result, Err(HttpError::BadRequest(_))));
        assert!(controller.created.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn hands_the_body_to_the_post_operation() {
        let controller = PostController::default();
        let resource = ValueResource::default();
        let body = json!({"name": "Rex"});

        let result = PostHandler
            .handle(&controller, &resource, Some(body.clone()))
            .await
            .unwrap();

        assert_eq!(result, body);
        assert_eq!(*controller.created.lock().unwrap(), Some(body));
    }
}
