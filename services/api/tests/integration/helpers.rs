use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait as _;
use serde_json::{Value, json};

use workboard_api::domain::access::AccessPolicy;
use workboard_api::domain::types::{Capability, Resource};
use workboard_api::error::ApiError;
use workboard_api::router::build_router;
use workboard_api::state::AppState;
use workboard_api_migration::Migrator;

// ── Database ─────────────────────────────────────────────────────────────────

/// Fresh in-memory SQLite database with all migrations applied.
///
/// A single pooled connection: every `:memory:` connection is its own database.
pub async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.expect("connect to sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    db
}

pub async fn test_server() -> TestServer {
    let state = AppState::new(test_db().await);
    TestServer::new(build_router(state)).expect("build test server")
}

pub async fn test_server_with_policy(policy: impl AccessPolicy + 'static) -> TestServer {
    let state = AppState {
        db: test_db().await,
        access: Arc::new(policy),
    };
    TestServer::new(build_router(state)).expect("build test server")
}

// ── Policies ─────────────────────────────────────────────────────────────────

pub struct ReadOnly;

impl AccessPolicy for ReadOnly {
    fn check(&self, _resource: Resource, capability: Capability) -> Result<(), ApiError> {
        match capability {
            Capability::List | Capability::Read => Ok(()),
            _ => Err(ApiError::Forbidden),
        }
    }
}

// ── Fixtures ─────────────────────────────────────────────────────────────────

pub async fn seed_user(server: &TestServer, first_name: &str, last_name: &str) -> i64 {
    let response = server
        .post("/api/User")
        .json(&json!({ "firstName": first_name, "lastName": last_name }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()["id"]
        .as_i64()
        .expect("created user id")
}

pub async fn seed_work_order(server: &TestServer, body: Value) -> Value {
    let response = server.post("/api/WorkOrder").json(&body).await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    response.json::<Value>()
}

/// The work order body the board sends when a card is added.
pub fn new_card(created_by_id: i64, description: &str, stage: u8) -> Value {
    json!({
        "description": description,
        "stage": stage,
        "complete": false,
        "active": false,
        "canceled": false,
        "createdById": created_by_id,
        "assignedTo": null,
        "assignedToId": null,
        "createdAtTime": "2025-06-01T08:30:00.000Z",
        "completedAtTime": null
    })
}
