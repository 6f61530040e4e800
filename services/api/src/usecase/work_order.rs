use workboard_domain::stage::Stage;

use crate::domain::access::AccessPolicy;
use crate::domain::repository::WorkOrderRepository;
use crate::domain::types::{Capability, NewWorkOrder, Resource, WorkOrder, WorkOrderView};
use crate::error::ApiError;

// ── ListWorkOrders ───────────────────────────────────────────────────────────

pub struct ListWorkOrdersUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> ListWorkOrdersUseCase<R, P> {
    pub async fn execute(&self) -> Result<Vec<WorkOrderView>, ApiError> {
        self.access.check(Resource::WorkOrder, Capability::List)?;
        self.repo.list().await
    }
}

// ── GetWorkOrder ─────────────────────────────────────────────────────────────

pub struct GetWorkOrderUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> GetWorkOrderUseCase<R, P> {
    pub async fn execute(&self, id: i32) -> Result<WorkOrderView, ApiError> {
        self.access.check(Resource::WorkOrder, Capability::Read)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::WorkOrderNotFound)
    }
}

// ── CreateWorkOrder ──────────────────────────────────────────────────────────

pub struct CreateWorkOrderUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> CreateWorkOrderUseCase<R, P> {
    /// Stores the work order and returns it as read back, users resolved.
    pub async fn execute(&self, input: NewWorkOrder) -> Result<WorkOrderView, ApiError> {
        self.access.check(Resource::WorkOrder, Capability::Create)?;
        let created = self.repo.create(&input).await?;
        self.repo
            .find_by_id(created.id)
            .await?
            .ok_or(ApiError::WorkOrderNotFound)
    }
}

// ── ReplaceWorkOrder ─────────────────────────────────────────────────────────

/// Full-entity replacement. No flag/stage consistency is checked here: the
/// caller owns the derivation.
pub struct ReplaceWorkOrderUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> ReplaceWorkOrderUseCase<R, P> {
    pub async fn execute(
        &self,
        id: i32,
        body_id: Option<i32>,
        work_order: NewWorkOrder,
    ) -> Result<(), ApiError> {
        self.access
            .check(Resource::WorkOrder, Capability::Replace)?;
        if body_id != Some(id) {
            return Err(ApiError::IdMismatch);
        }
        let NewWorkOrder {
            created_by_id,
            created_at_time,
            completed_at_time,
            assigned_to_id,
            canceled,
            active,
            complete,
            description,
            stage,
        } = work_order;
        let row = WorkOrder {
            id,
            created_by_id,
            created_at_time,
            completed_at_time,
            assigned_to_id,
            canceled,
            active,
            complete,
            description,
            stage,
        };
        replace_or_not_found(&self.repo, &row).await
    }
}

// ── MoveWorkOrderStage ───────────────────────────────────────────────────────

/// Server-side stage transition: the stage-coupled flags are derived here and
/// persisted together with the new stage.
pub struct MoveWorkOrderStageUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> MoveWorkOrderStageUseCase<R, P> {
    /// `stage` is taken as sent; anything outside the board's stages is
    /// `UnknownStage`.
    pub async fn execute(&self, id: i32, stage: i64) -> Result<WorkOrderView, ApiError> {
        self.access
            .check(Resource::WorkOrder, Capability::MoveStage)?;
        let stage = u8::try_from(stage)
            .ok()
            .and_then(Stage::from_u8)
            .ok_or(ApiError::UnknownStage)?;
        let view = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiError::WorkOrderNotFound)?;
        let moved = view.work_order.moved_to(stage);
        replace_or_not_found(&self.repo, &moved).await?;
        tracing::info!(work_order_id = id, stage = %stage, "work order moved");
        Ok(WorkOrderView {
            work_order: moved,
            ..view
        })
    }
}

// ── DeleteWorkOrder ──────────────────────────────────────────────────────────

pub struct DeleteWorkOrderUseCase<R: WorkOrderRepository, P: AccessPolicy> {
    pub repo: R,
    pub access: P,
}

impl<R: WorkOrderRepository, P: AccessPolicy> DeleteWorkOrderUseCase<R, P> {
    pub async fn execute(&self, id: i32) -> Result<(), ApiError> {
        self.access.check(Resource::WorkOrder, Capability::Delete)?;
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(ApiError::WorkOrderNotFound)
        }
    }
}

/// A conflicting write on a row that is gone is reported as not found; any
/// other conflict is returned unchanged.
async fn replace_or_not_found<R: WorkOrderRepository>(
    repo: &R,
    row: &WorkOrder,
) -> Result<(), ApiError> {
    match repo.replace(row).await {
        Err(ApiError::WriteConflict) => {
            if repo.exists(row.id).await? {
                Err(ApiError::WriteConflict)
            } else {
                Err(ApiError::WorkOrderNotFound)
            }
        }
        other => other,
    }
}
