use serde::Deserialize;

use workboard_core::config::Config;

/// Board client configuration, read once at start from `WORKBOARD_*` env vars.
#[derive(Debug, Deserialize)]
pub struct BoardConfig {
    /// Base URL of the API, e.g. `http://localhost:5144`. Env var: `WORKBOARD_API_URL`.
    pub api_url: String,
    /// User recorded as creator of cards added from this client (default 1).
    /// Env var: `WORKBOARD_CREATED_BY_ID`.
    #[serde(default = "default_created_by_id")]
    pub created_by_id: i32,
}

fn default_created_by_id() -> i32 {
    1
}

impl Config for BoardConfig {
    const PREFIX: &'static str = "WORKBOARD_";
}
