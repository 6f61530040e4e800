use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// API service error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("user not found")]
    UserNotFound,
    #[error("work order not found")]
    WorkOrderNotFound,
    #[error("id in path does not match id in body")]
    IdMismatch,
    #[error("unknown stage")]
    UnknownStage,
    #[error("forbidden")]
    Forbidden,
    /// A full-row update touched no row although the row still exists.
    #[error("write conflict")]
    WriteConflict,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::WorkOrderNotFound => "WORK_ORDER_NOT_FOUND",
            Self::IdMismatch => "ID_MISMATCH",
            Self::UnknownStage => "UNKNOWN_STAGE",
            Self::Forbidden => "FORBIDDEN",
            Self::WriteConflict => "WRITE_CONFLICT",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound | Self::WorkOrderNotFound => StatusCode::NOT_FOUND,
            Self::IdMismatch | Self::UnknownStage => StatusCode::BAD_REQUEST,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::WriteConflict | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // 4xx are expected client errors and already visible in the request trace.
        match &self {
            Self::Internal(e) => tracing::error!(error = %format!("{e:#}"), kind = "INTERNAL", "internal error"),
            Self::WriteConflict => tracing::error!(kind = "WRITE_CONFLICT", "write conflict"),
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
