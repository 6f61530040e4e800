use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NewWorkOrder, WorkOrderView};
use crate::error::ApiError;
use crate::handlers::user::UserResponse;
use crate::state::AppState;
use crate::usecase::work_order::{
    CreateWorkOrderUseCase, DeleteWorkOrderUseCase, GetWorkOrderUseCase, ListWorkOrdersUseCase,
    MoveWorkOrderStageUseCase, ReplaceWorkOrderUseCase,
};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderResponse {
    pub id: i32,
    pub created_by_id: i32,
    #[serde(serialize_with = "workboard_core::serde::to_rfc3339_ms")]
    pub created_at_time: DateTime<Utc>,
    #[serde(serialize_with = "workboard_core::serde::to_rfc3339_ms_opt")]
    pub completed_at_time: Option<DateTime<Utc>>,
    pub assigned_to_id: Option<i32>,
    pub canceled: bool,
    pub active: bool,
    pub complete: bool,
    pub description: String,
    pub stage: u8,
    pub assigned_to: Option<UserResponse>,
    pub created_by: Option<UserResponse>,
}

impl From<WorkOrderView> for WorkOrderResponse {
    fn from(view: WorkOrderView) -> Self {
        let w = view.work_order;
        Self {
            id: w.id,
            created_by_id: w.created_by_id,
            created_at_time: w.created_at_time,
            completed_at_time: w.completed_at_time,
            assigned_to_id: w.assigned_to_id,
            canceled: w.canceled,
            active: w.active,
            complete: w.complete,
            description: w.description,
            stage: w.stage,
            assigned_to: view.assigned_to.map(UserResponse::from),
            created_by: view.created_by.map(UserResponse::from),
        }
    }
}

/// POST body. Nested `assignedTo`/`createdBy` objects are accepted and ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkOrderRequest {
    pub created_by_id: i32,
    pub created_at_time: Option<DateTime<Utc>>,
    pub completed_at_time: Option<DateTime<Utc>>,
    pub assigned_to_id: Option<i32>,
    #[serde(default)]
    pub canceled: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub complete: bool,
    pub description: String,
    #[serde(default)]
    pub stage: u8,
}

/// PUT body: the full entity, including its id.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceWorkOrderRequest {
    pub id: Option<i32>,
    pub created_by_id: i32,
    pub created_at_time: DateTime<Utc>,
    pub completed_at_time: Option<DateTime<Utc>>,
    pub assigned_to_id: Option<i32>,
    pub canceled: bool,
    pub active: bool,
    pub complete: bool,
    pub description: String,
    pub stage: u8,
}

/// Range-checked by the use case, so any integer answers `UNKNOWN_STAGE`
/// rather than a body rejection.
#[derive(Deserialize)]
pub struct MoveStageRequest {
    pub stage: i64,
}

// ── GET /api/WorkOrder ───────────────────────────────────────────────────────

pub async fn list_work_orders(
    State(state): State<AppState>,
) -> Result<Json<Vec<WorkOrderResponse>>, ApiError> {
    let usecase = ListWorkOrdersUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    let views = usecase.execute().await?;
    Ok(Json(views.into_iter().map(WorkOrderResponse::from).collect()))
}

// ── GET /api/WorkOrder/{id} ──────────────────────────────────────────────────

pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<WorkOrderResponse>, ApiError> {
    let usecase = GetWorkOrderUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/WorkOrder ──────────────────────────────────────────────────────

pub async fn create_work_order(
    State(state): State<AppState>,
    Json(body): Json<CreateWorkOrderRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateWorkOrderUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    let view = usecase
        .execute(NewWorkOrder {
            created_by_id: body.created_by_id,
            created_at_time: body.created_at_time.unwrap_or_else(Utc::now),
            completed_at_time: body.completed_at_time,
            assigned_to_id: body.assigned_to_id,
            canceled: body.canceled,
            active: body.active,
            complete: body.complete,
            description: body.description,
            stage: body.stage,
        })
        .await?;
    let location = format!("/api/WorkOrder/{}", view.work_order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(WorkOrderResponse::from(view)),
    ))
}

// ── PUT /api/WorkOrder/{id} ──────────────────────────────────────────────────

pub async fn replace_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<ReplaceWorkOrderRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = ReplaceWorkOrderUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    usecase
        .execute(
            id,
            body.id,
            NewWorkOrder {
                created_by_id: body.created_by_id,
                created_at_time: body.created_at_time,
                completed_at_time: body.completed_at_time,
                assigned_to_id: body.assigned_to_id,
                canceled: body.canceled,
                active: body.active,
                complete: body.complete,
                description: body.description,
                stage: body.stage,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── PUT /api/WorkOrder/{id}/stage ────────────────────────────────────────────

pub async fn move_work_order_stage(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<MoveStageRequest>,
) -> Result<Json<WorkOrderResponse>, ApiError> {
    let usecase = MoveWorkOrderStageUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    Ok(Json(usecase.execute(id, body.stage).await?.into()))
}

// ── DELETE /api/WorkOrder/{id} ───────────────────────────────────────────────

pub async fn delete_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteWorkOrderUseCase {
        repo: state.work_order_repo(),
        access: state.access(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
