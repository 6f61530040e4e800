#![allow(async_fn_in_trait)]

use crate::domain::types::{NewUser, NewWorkOrder, User, WorkOrder, WorkOrderView};
use crate::error::ApiError;

/// Repository for users.
pub trait UserRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<User>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, ApiError>;
    async fn exists(&self, id: i32) -> Result<bool, ApiError>;
    async fn create(&self, user: &NewUser) -> Result<User, ApiError>;

    /// Overwrite every column of the row with `user.id`.
    /// Returns `ApiError::WriteConflict` when no row was updated.
    async fn replace(&self, user: &User) -> Result<(), ApiError>;

    /// Delete a user. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}

/// Repository for work orders. Reads resolve creator and assignee.
pub trait WorkOrderRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<WorkOrderView>, ApiError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<WorkOrderView>, ApiError>;
    async fn exists(&self, id: i32) -> Result<bool, ApiError>;
    async fn create(&self, work_order: &NewWorkOrder) -> Result<WorkOrder, ApiError>;

    /// Overwrite every column of the row with `work_order.id`.
    /// Returns `ApiError::WriteConflict` when no row was updated.
    async fn replace(&self, work_order: &WorkOrder) -> Result<(), ApiError>;

    /// Delete a work order. Returns `true` if a row was deleted.
    async fn delete(&self, id: i32) -> Result<bool, ApiError>;
}
