use super::MethodHandler;
use crate::controller::RestController;
use crate::error::DispatchResult;
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;
use serde_json::json;

/// Handles `OPTIONS`. Delegates to the controller's `options` operation when
/// one exists, otherwise derives the allow list from the controller's
/// capability accessors. Never fails with `MethodNotAllowed`: `OPTIONS` is
/// answerable for every controller.
#[derive(Debug, Default)]
pub struct OptionsHandler;

#[async_trait]
impl MethodHandler for OptionsHandler {
    fn method(&self) -> Method {
        Method::OPTIONS
    }

    async fn handle(
        &self,
        controller: &dyn RestController,
        _resource: &dyn Resource,
        _body: Option<Payload>,
    ) -> DispatchResult {
        if let Some(operation) = controller.as_options() {
            return operation.options().await;
        }

        let mut allowed = Vec::new();
        if controller.as_get().is_some() {
            allowed.push(Method::GET);
        }
        if controller.as_post().is_some() {
            allowed.push(Method::POST);
        }
        if controller.as_put().is_some() {
            allowed.push(Method::PUT);
        }
        if controller.as_delete().is_some() {
            allowed.push(Method::DELETE);
        }
        allowed.push(Method::OPTIONS);

        let names: Vec<String> = allowed
            .iter()
            .map(|method| method.as_str().to_string())
            .collect();
        Ok(json!(names))
    }
}
