use super::MethodHandler;
use crate::controller::RestController;
use crate::error::{DispatchResult, HttpError};
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;

/// Handles `PUT` by passing the incoming representation to the controller's
/// `put` operation.
#[derive(Debug, Default)]
pub struct PutHandler;

#[async_trait]
impl MethodHandler for PutHandler {
    fn method(&self) -> Method {
        Method::PUT
    }

    async fn handle(
        &self,
        controller: &dyn RestController,
        _resource: &dyn Resource,
        body: Option<Payload>,
    ) -> DispatchResult {
        let Some(operation) = controller.as_put() else {
            return Err(HttpError::method_not_allowed(Method::PUT));
        };

        let Some(data) = body else {
            return Err(HttpError::BadRequest(
                "PUT requires a request body".to_string(),
            ));
        };

        operation.put(data).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::PutCapable;
    use crate::resource::ValueResource;
    use serde_json::json;

    struct PutController;

    #[async_trait]
    impl PutCapable for PutController {
        async fn put(&self, data: Payload) -> DispatchResult {
            Ok(data)
        }
    }

    impl RestController for PutController {
        fn as_put(&self) -> Option<&dyn PutCapable> {
            Some(self)
        }
    }

    struct IncapableController;

    impl RestController for IncapableController {}

    #[tokio::test]
    async fn fails_with_method_not_allowed_when_put_is_missing() {
        let resource = ValueResource::default();

        let result = PutHandler
            .handle(&IncapableController, &resource, Some(json!({})))
            .await;

        assert!(matches!(
            result,
            Err(HttpError::MethodNotAllowed { method }) if method == Method::PUT
        ));
    }

    #[tokio::test]
    async fn rejects_a_missing_body_with_bad_request() {
        let result = PutHandler
            .handle(&PutController, &ValueResource::default(), None)
            .await;

        assert!(matches!(result, Err(HttpError::BadRequest(_))));
    }

    #[tokio::test]
    async fn hands_the_body_to_the_put_operation() {
        let body = json!({"name": "Rex", "age": 4});

        let result = PutHandler
            .handle(&PutController, &ValueResource::default(), Some(body.clone()))
            .await
            .unwrap();

        assert_eq!(result, body);
    }
}
