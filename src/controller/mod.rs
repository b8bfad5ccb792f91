//! Controller contracts for the dispatch layer.
//!
//! A controller opts into an HTTP verb by implementing the verb's capability
//! trait and overriding the matching accessor on [`RestController`]. An
//! accessor left at its default (`None`) is the "method not allowed"
//! condition: the dispatch layer discovers it at call time, but the check is
//! a typed `Option` rather than reflection.
//!
//! `RestController` exposes no response-building operation on purpose:
//! response construction belongs to the caller of the dispatch layer, and a
//! method handler is unable to reach for it.

use crate::error::DispatchResult;
use crate::resource::Payload;
use async_trait::async_trait;

/// Capability for serving `GET`: read the resource's data
#[async_trait]
pub trait GetCapable: Send + Sync {
    async fn get(&self, data: Payload) -> DispatchResult;
}

/// Capability for serving `POST`: create from an incoming representation
#[async_trait]
pub trait PostCapable: Send + Sync {
    async fn post(&self, data: Payload) -> DispatchResult;
}

/// Capability for serving `PUT`: replace with an incoming representation
#[async_trait]
pub trait PutCapable: Send + Sync {
    async fn put(&self, data: Payload) -> DispatchResult;
}

/// Capability for serving `DELETE`: remove the resource's data
#[async_trait]
pub trait DeleteCapable: Send + Sync {
    async fn delete(&self, data: Payload) -> DispatchResult;
}

/// Capability for serving `OPTIONS` with a custom allow list
#[async_trait]
pub trait OptionsCapable: Send + Sync {
    async fn options(&self) -> DispatchResult;
}

/// A REST controller, polymorphic over the verbs it implements.
///
/// # Example
/// ```
/// use restra::controller::{GetCapable, RestController};
/// use restra::{DispatchResult, Payload, async_trait};
///
/// struct PetController;
///
/// #[async_trait]
/// impl GetCapable for PetController {
///     async fn get(&self, data: Payload) -> DispatchResult {
///         Ok(data)
///     }
/// }
///
/// impl RestController for PetController {
///     fn as_get(&self) -> Option<&dyn GetCapable> {
///         Some(self)
///     }
/// }
/// ```
pub trait RestController: Send + Sync {
    fn as_get(&self) -> Option<&dyn GetCapable> {
        None
    }

    fn as_post(&self) -> Option<&dyn PostCapable> {
        None
    }

    fn as_put(&self) -> Option<&dyn PutCapable> {
        None
    }

    fn as_delete(&self) -> Option<&dyn DeleteCapable> {
        None
    }

    fn as_options(&self) -> Option<&dyn OptionsCapable> {
        None
    }
}
