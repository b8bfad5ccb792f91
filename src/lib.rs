//! # Restra
//!
//! A REST method-dispatch layer with typed controller capabilities for Rust.
//!
//! Restra routes an HTTP verb to the controller operation implementing it,
//! passing the resource's underlying data, and fails with a typed
//! `MethodNotAllowed` error when the controller does not implement the verb.
//! Response construction stays with the caller: the dispatch layer returns
//! data or an error, never a response.
//!
//! ## Features
//!
//! - **Typed capabilities**: controllers opt into verbs through narrow traits
//!   (`GetCapable`, `PostCapable`, ...) instead of runtime reflection
//! - **Per-verb handlers**: stateless handlers perform the capability check
//!   and a single delegated call
//! - **Concurrent registry**: the `Dispatcher` maps verbs to handlers and is
//!   safe to share across requests
//! - **Typed client errors**: `HttpError` maps onto HTTP status codes and
//!   converts into Axum responses
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use restra::prelude::*;
//! use serde_json::json;
//!
//! // 1. Define your controller and the verbs it implements
//! struct PetController;
//!
//! #[async_trait]
//! impl GetCapable for PetController {
//!     async fn get(&self, data: Payload) -> DispatchResult {
//!         Ok(data)
//!     }
//! }
//!
//! impl RestController for PetController {
//!     fn as_get(&self) -> Option<&dyn GetCapable> {
//!         Some(self)
//!     }
//! }
//!
//! // 2. Dispatch requests against a resource
//! #[tokio::main]
//! async fn main() {
//!     let dispatcher = Dispatcher::new();
//!     let resource = ValueResource::new(json!({"name": "Rex"}));
//!
//!     let result = dispatcher
//!         .dispatch(&Method::GET, &PetController, &resource, None)
//!         .await;
//!     assert_eq!(result.unwrap(), json!({"name": "Rex"}));
//!
//!     // No DELETE capability: the dispatch layer signals a 405
//!     let result = dispatcher
//!         .dispatch(&Method::DELETE, &PetController, &resource, None)
//!         .await;
//!     assert!(matches!(result, Err(HttpError::MethodNotAllowed { .. })));
//! }
//! ```

pub mod controller;
pub mod dispatch;
pub mod error;
pub mod exception;
pub mod handler;
pub mod resource;

// Re-export core types
pub use controller::{
    DeleteCapable, GetCapable, OptionsCapable, PostCapable, PutCapable, RestController,
};
pub use dispatch::Dispatcher;
pub use error::{DispatchResult, HttpError};
pub use handler::{
    DeleteHandler, GetHandler, MethodHandler, OptionsHandler, PostHandler, PutHandler,
};
pub use resource::{Payload, Resource, ValueResource};

// Re-export commonly used types from dependencies
pub use async_trait::async_trait;
pub use axum;

/// Prelude module for convenient imports
///
/// ```
/// use restra::prelude::*;
/// ```
pub mod prelude {
    pub use crate::controller::{
        DeleteCapable, GetCapable, OptionsCapable, PostCapable, PutCapable, RestController,
    };
    pub use crate::dispatch::Dispatcher;
    pub use crate::error::{DispatchResult, HttpError};
    pub use crate::exception::{ExceptionFilter, HttpExceptionFilter};
    pub use crate::handler::{
        DeleteHandler, GetHandler, MethodHandler, OptionsHandler, PostHandler, PutHandler,
    };
    pub use crate::resource::{Payload, Resource, ValueResource};
    pub use async_trait::async_trait;
    pub use axum::{
        http::{Method, StatusCode},
        response::{IntoResponse, Response},
    };
    pub use std::sync::Arc;
}
