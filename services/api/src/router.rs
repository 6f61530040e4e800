use axum::{
    Router,
    http::HeaderValue,
    routing::{get, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use workboard_core::health::healthz;
use workboard_core::middleware::{propagate_request_id_layer, request_id_layer};

use crate::handlers::{
    health::readyz,
    user::{create_user, delete_user, get_user, list_users, replace_user},
    work_order::{
        create_work_order, delete_work_order, get_work_order, list_work_orders,
        move_work_order_stage, replace_work_order,
    },
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let users = Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{id}", get(get_user).put(replace_user).delete(delete_user));

    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users (`UserInternal` is the legacy collection name)
        .nest("/api/User", users.clone())
        .nest("/api/UserInternal", users)
        // Work orders
        .route(
            "/api/WorkOrder",
            get(list_work_orders).post(create_work_order),
        )
        .route(
            "/api/WorkOrder/{id}",
            get(get_work_order)
                .put(replace_work_order)
                .delete(delete_work_order),
        )
        .route("/api/WorkOrder/{id}/stage", put(move_work_order_stage))
        .with_state(state)
}

/// Wraps the router with request tracing, request ids and CORS.
pub fn with_middleware(router: Router, allowed_origins: &[String]) -> Router {
    router
        .layer(cors_layer(allowed_origins))
        .layer(propagate_request_id_layer())
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
