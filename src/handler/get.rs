use super::MethodHandler;
use crate::controller::RestController;
use crate::error::{DispatchResult, HttpError};
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;

/// Handles `GET` by delegating the resource's data to the controller's `get`
/// operation. The operation's result is returned unchanged.
#[derive(Debug, Default)]
pub struct GetHandler;

#[async_trait]
impl MethodHandler for GetHandler {
    fn method(&self) -> Method {
        Method::GET
    }

    async fn handle(
        &self,
        controller: &dyn RestController,
        resource: &dyn Resource,
        _body: Option<Payload>,
    ) -> DispatchResult {
        // The capability check comes first: an incapable controller must not
        // trigger a data read.
        let Some(operation) = controller.as_get() else {
            return Err(HttpError::method_not_allowed(Method::GET));
        };

        operation.get(resource.data()).await
    }
}
