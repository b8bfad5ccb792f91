use serde_json::Value;

/// Opaque payload exchanged between resources, controller operations and the
/// dispatch layer. The dispatch layer never inspects it.
pub type Payload = Value;

/// The data-accessor contract for REST resources.
///
/// A resource's lifecycle is managed by the caller; a method handler borrows
/// it for the duration of a single dispatch and reads `data()` at most once,
/// and only after the capability check has passed.
pub trait Resource: Send + Sync {
    /// Return the resource's underlying data
    fn data(&self) -> Payload;
}

/// A resource backed by a plain payload.
///
/// # Example
/// ```
/// use restra::resource::{Resource, ValueResource};
/// use serde_json::json;
///
/// let resource = ValueResource::new(json!({"name": "Rex"}));
/// assert_eq!(resource.data(), json!({"name": "Rex"}));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValueResource {
    data: Payload,
}

impl ValueResource {
    pub fn new(data: Payload) -> Self {
        Self { data }
    }
}

impl Resource for ValueResource {
    fn data(&self) -> Payload {
        self.data.clone()
    }
}
