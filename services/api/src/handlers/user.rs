use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::{NewUser, User};
use crate::error::ApiError;
use crate::state::AppState;
use crate::usecase::user::{
    CreateUserUseCase, DeleteUserUseCase, GetUserUseCase, ListUsersUseCase, ReplaceUserInput,
    ReplaceUserUseCase,
};

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Body for both POST and PUT. `id` is ignored on POST.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
}

// ── GET /api/User ────────────────────────────────────────────────────────────

pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let usecase = ListUsersUseCase {
        repo: state.user_repo(),
        access: state.access(),
    };
    let users = usecase.execute().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

// ── GET /api/User/{id} ───────────────────────────────────────────────────────

pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let usecase = GetUserUseCase {
        repo: state.user_repo(),
        access: state.access(),
    };
    Ok(Json(usecase.execute(id).await?.into()))
}

// ── POST /api/User ───────────────────────────────────────────────────────────

pub async fn create_user(
    State(state): State<AppState>,
    Json(body): Json<UserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let usecase = CreateUserUseCase {
        repo: state.user_repo(),
        access: state.access(),
    };
    let user = usecase
        .execute(NewUser {
            first_name: body.first_name,
            last_name: body.last_name,
        })
        .await?;
    let location = format!("/api/User/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(user)),
    ))
}

// ── PUT /api/User/{id} ───────────────────────────────────────────────────────

pub async fn replace_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(body): Json<UserRequest>,
) -> Result<StatusCode, ApiError> {
    let usecase = ReplaceUserUseCase {
        repo: state.user_repo(),
        access: state.access(),
    };
    usecase
        .execute(
            id,
            ReplaceUserInput {
                id: body.id,
                first_name: body.first_name,
                last_name: body.last_name,
            },
        )
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /api/User/{id} ────────────────────────────────────────────────────

pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let usecase = DeleteUserUseCase {
        repo: state.user_repo(),
        access: state.access(),
    };
    usecase.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
