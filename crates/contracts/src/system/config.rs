//! Runtime configuration handed from the backend to the browser app.

use serde::{Deserialize, Serialize};

pub const DEFAULT_DATABASE_URL: &str = "https://lumi-6dff7-default-rtdb.asia-southeast1.firebasedatabase.app";

/// Retry policy for remote reads: fixed attempt count, fixed delay, no
/// backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchPolicy {
    pub retry_attempts: u32,
    pub retry_delay_ms: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            retry_attempts: 3,
            retry_delay_ms: 500,
        }
    }
}

impl FetchPolicy {
    /// Whether another attempt follows a failure of attempt `attempt`
    /// (0-based).
    pub fn should_retry(&self, attempt: u32) -> bool {
        attempt + 1 < self.retry_attempts.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Roster (HR sheet) endpoint.
    pub hr_url: String,
    /// Orders (F3 sheet) endpoint.
    pub orders_url: String,
    /// Employees collection, without the `.json` suffix.
    pub employees_base_url: String,
    pub admin_email: String,
    #[serde(default)]
    pub fetch: FetchPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            hr_url: format!("{}/hr.json", DEFAULT_DATABASE_URL),
            orders_url: format!("{}/f3.json", DEFAULT_DATABASE_URL),
            employees_base_url: format!("{}/employees", DEFAULT_DATABASE_URL),
            admin_email: "admin@lumi.vn".to_string(),
            fetch: FetchPolicy::default(),
        }
    }
}

impl AppConfig {
    pub fn employees_url(&self) -> String {
        format!("{}.json", self.employees_base_url.trim_end_matches('/'))
    }

    pub fn employee_url(&self, id: &str) -> String {
        format!("{}/{}.json", self.employees_base_url.trim_end_matches('/'), id)
    }
}
