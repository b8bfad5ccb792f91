//! Per-verb method handlers.
//!
//! Each handler performs the capability check for its verb and either
//! delegates to the controller operation or fails with
//! [`HttpError::MethodNotAllowed`](crate::error::HttpError). Handlers are
//! stateless and hold no instance data, so a single instance is safe to share
//! across concurrent dispatches.

use crate::controller::RestController;
use crate::error::DispatchResult;
use crate::resource::{Payload, Resource};
use async_trait::async_trait;
use axum::http::Method;

mod delete;
mod get;
mod options;
mod post;
mod put;

pub use delete::DeleteHandler;
pub use get::GetHandler;
pub use options::OptionsHandler;
pub use post::PostHandler;
pub use put::PutHandler;

/// A handler for a single HTTP method.
///
/// `body` carries the incoming representation for verbs that take one
/// (`POST`, `PUT`); the other handlers ignore it.
#[async_trait]
pub trait MethodHandler: Send + Sync + 'static {
    /// The HTTP method this handler serves
    fn method(&self) -> Method;

    /// Dispatch one call to the controller operation for this verb
    async fn handle(
        &self,
        controller: &dyn RestController,
        resource: &dyn Resource,
        body: Option<Payload>,
    ) -> DispatchResult;
}
