use std::path::Path;
use std::sync::Arc;

use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use contracts::system::config::AppConfig;

use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// Everything that is not an API route is served from `dist_dir`
/// (the compiled frontend).
pub fn configure_routes(app_config: AppConfig, dist_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(handlers::config::health))
        .route("/api/config", get(handlers::config::get_app_config))
        .with_state(Arc::new(app_config))
        .fallback_service(ServeDir::new(dist_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn test_router() -> Router {
        let config = AppConfig {
            admin_email: "boss@lumi.vn".to_string(),
            ..AppConfig::default()
        };
        configure_routes(config, Path::new("does-not-exist-dist"))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap_or_else(|err| panic!("request build failed: {err}")),
            )
            .await
            .unwrap_or_else(|err| panic!("request failed: {err}"));
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_else(|err| panic!("body read failed: {err}"));
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get(test_router(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"ok");
    }

    #[tokio::test]
    async fn test_config_endpoint_returns_app_config() {
        let (status, body) = get(test_router(), "/api/config").await;
        assert_eq!(status, StatusCode::OK);
        let config: AppConfig = serde_json::from_slice(&body)
            .unwrap_or_else(|err| panic!("invalid json: {err}"));
        assert_eq!(config.admin_email, "boss@lumi.vn");
        assert_eq!(config.fetch.retry_attempts, 3);
        assert!(config.hr_url.ends_with("/hr.json"));
    }

    #[tokio::test]
    async fn test_unknown_static_path_is_not_found() {
        let (status, _) = get(test_router(), "/missing.js").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
