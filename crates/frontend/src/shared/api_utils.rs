//! API utilities for frontend-backend communication

use contracts::system::config::AppConfig;
use gloo_net::http::Request;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET /api/config
pub async fn fetch_app_config() -> Result<AppConfig, String> {
    let response = Request::get(&api_url("/api/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Config request failed: {}", response.status()));
    }

    response
        .json::<AppConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Runtime config, or the built-in defaults when the backend is unreachable.
pub async fn load_app_config() -> AppConfig {
    match fetch_app_config().await {
        Ok(config) => {
            log::info!("Runtime config loaded (admin: {})", config.admin_email);
            config
        }
        Err(e) => {
            log::warn!("Using default config: {}", e);
            AppConfig::default()
        }
    }
}
