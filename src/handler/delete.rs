use super::MethodHandler;
use crate::controller::RestController;
use crate::error::{DispatchResult, HttpError};
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;

/// Handles `DELETE` by passing the resource's data to the controller's
/// `delete` operation.
#[derive(Debug, Default)]
pub struct DeleteHandler;

#[async_trait]
impl MethodHandler for DeleteHandler {
    fn method(&self) -> Method {
        Method::DELETE
    }

    async fn handle(
        &self,
        controller: &dyn RestController,
        resource: &dyn Resource,
        _body: Option<Payload>,
    ) -> DispatchResult {
        let Some(operation) = controller.as_delete() else {
            return Err(HttpError::method_not_allowed(Method::DELETE));
        };

        operation.delete(resource.data()).await
    }
}
