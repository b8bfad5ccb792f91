//! Verb-to-handler dispatch.

use crate::controller::RestController;
use crate::error::{DispatchResult, HttpError};
use crate::handler::{
    DeleteHandler, GetHandler, MethodHandler, OptionsHandler, PostHandler, PutHandler,
};
use crate::resource::{Payload, Resource};
use axum::http::Method;
use dashmap::DashMap;
use std::sync::Arc;

/// Thread-safe registry routing HTTP methods to their handlers.
///
/// An unregistered method fails with
/// [`HttpError::MethodNotAllowed`](crate::error::HttpError), the same signal
/// a handler raises when the controller lacks the verb's capability.
pub struct Dispatcher {
    handlers: DashMap<Method, Arc<dyn MethodHandler>>,
}

impl Dispatcher {
    /// Create a dispatcher with the built-in method handlers registered
    pub fn new() -> Self {
        let dispatcher = Self::empty();
        dispatcher
            .register(Arc::new(GetHandler))
            .register(Arc::new(PostHandler))
            .register(Arc::new(PutHandler))
            .register(Arc::new(DeleteHandler))
            .register(Arc::new(OptionsHandler));
        dispatcher
    }

    /// Create a dispatcher with no handlers registered
    pub fn empty() -> Self {
        Self {
            handlers: DashMap::new(),
        }
    }

    /// Install or replace the handler for its method
    pub fn register(&self, handler: Arc<dyn MethodHandler>) -> &Self {
        self.handlers.insert(handler.method(), handler);
        self
    }

    pub fn supports(&self, method: &Method) -> bool {
        self.handlers.contains_key(method)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route one request to the controller operation for `method`.
    ///
    /// `body` carries the incoming representation for verbs that take one.
    pub async fn dispatch(
        &self,
        method: &Method,
        controller: &dyn RestController,
        resource: &dyn Resource,
        body: Option<Payload>,
    ) -> DispatchResult {
        // Clone the handler out so no map guard is held across the await.
        let handler = self
            .handlers
            .get(method)
            .map(|entry| entry.value().clone());

        let Some(handler) = handler else {
            // Expected client-side outcome, not a framework fault.
            tracing::debug!("No handler registered for method: {}", method);
            return Err(HttpError::method_not_allowed(method.clone()));
        };

        tracing::debug!("Dispatching: {}", method);
        handler.handle(controller, resource, body).await
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
