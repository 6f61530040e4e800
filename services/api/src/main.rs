use sea_orm::Database;
use tracing::info;

use workboard_api::config::ApiConfig;
use workboard_api::router::{build_router, with_middleware};
use workboard_api::state::AppState;
use workboard_core::config::Config;
use workboard_core::tracing::init_tracing;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = ApiConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let state = AppState::new(db);
    let router = with_middleware(build_router(state), &config.allowed_origins());

    let addr = format!("0.0.0.0:{}", config.api_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("workboard api listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
