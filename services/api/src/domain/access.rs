use std::sync::Arc;

use crate::domain::types::{Capability, Resource};
use crate::error::ApiError;

/// Access decision taken before any storage operation.
pub trait AccessPolicy: Send + Sync {
    fn check(&self, resource: Resource, capability: Capability) -> Result<(), ApiError>;
}

/// Grants every operation. There is no caller identity to decide on.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl AccessPolicy for AllowAll {
    fn check(&self, _resource: Resource, _capability: Capability) -> Result<(), ApiError> {
        Ok(())
    }
}

impl<T: AccessPolicy + ?Sized> AccessPolicy for Arc<T> {
    fn check(&self, resource: Resource, capability: Capability) -> Result<(), ApiError> {
        (**self).check(resource, capability)
    }
}
