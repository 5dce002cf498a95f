//! HTTP access to the Realtime Database REST endpoints.
//!
//! Reads are retried per [`FetchPolicy`]; writes are sent once.

use contracts::shared::collection::{normalize_collection, normalize_collection_with_ids};
use contracts::shared::record::Record;
use contracts::system::config::FetchPolicy;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;

async fn get_once(url: &str) -> Result<Value, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// GET with a fixed number of attempts and a fixed pause between them.
pub async fn get_json(url: &str, policy: FetchPolicy) -> Result<Value, String> {
    let mut attempt = 0;
    loop {
        match get_once(url).await {
            Ok(value) => return Ok(value),
            Err(e) if policy.should_retry(attempt) => {
                log::warn!(
                    "GET {} failed (attempt {}/{}): {}",
                    url,
                    attempt + 1,
                    policy.retry_attempts,
                    e
                );
                TimeoutFuture::new(policy.retry_delay_ms).await;
                attempt += 1;
            }
            Err(e) => {
                log::error!("GET {} failed after {} attempt(s): {}", url, attempt + 1, e);
                return Err(format!("Không thể tải dữ liệu: {}", e));
            }
        }
    }
}

/// Array or object-of-objects, as a list of records.
pub async fn fetch_collection(url: &str, policy: FetchPolicy) -> Result<Vec<Record>, String> {
    let value = get_json(url, policy).await?;
    let records = normalize_collection(&value);
    log::debug!("{} record(s) from {}", records.len(), url);
    Ok(records)
}

/// Like [`fetch_collection`], keeping each record's key as its `id`.
pub async fn fetch_collection_with_ids(
    url: &str,
    policy: FetchPolicy,
) -> Result<Vec<Record>, String> {
    let value = get_json(url, policy).await?;
    Ok(normalize_collection_with_ids(&value))
}

/// One document; `Ok(None)` when the store answers `null`.
pub async fn fetch_record(url: &str, policy: FetchPolicy) -> Result<Option<Record>, String> {
    match get_json(url, policy).await? {
        Value::Object(record) => Ok(Some(record)),
        _ => Ok(None),
    }
}

/// Merge-PATCH of the given fields.
pub async fn patch_record(url: &str, changes: &Record) -> Result<(), String> {
    let response = Request::patch(url)
        .json(changes)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    log::info!("PATCH {}: {} field(s)", url, changes.len());
    Ok(())
}
