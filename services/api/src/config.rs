use serde::Deserialize;

use workboard_core::config::Config;

/// API service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 5144). Env var: `API_PORT`.
    #[serde(default = "default_api_port")]
    pub api_port: u16,
    /// Comma-separated origins allowed by CORS. Any origin when unset.
    /// Env var: `CORS_ALLOW_ORIGINS`.
    #[serde(default)]
    pub cors_allow_origins: Option<String>,
}

fn default_api_port() -> u16 {
    5144
}

impl Config for ApiConfig {}

impl ApiConfig {
    /// Parsed `cors_allow_origins`, empty entries dropped.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allow_origins
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default()
    }
}
