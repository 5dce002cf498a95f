use std::sync::Arc;

use axum::{extract::State, Json};

use contracts::system::config::AppConfig;

/// GET /api/config
///
/// Data source URLs, admin email and fetch policy for the browser app.
pub async fn get_app_config(State(app_config): State<Arc<AppConfig>>) -> Json<AppConfig> {
    Json(app_config.as_ref().clone())
}

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
