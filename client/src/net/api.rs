//! REST API helpers for the topic-modeling backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): the fetch is a stub returning an error, since the
//! dataset is only loaded in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The single fetch returns a `Result` with a classified `FetchError` so the
//! dashboard can pick its message without inspecting transport details.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::FetchError;
use super::types::TopicModelingData;

/// Backend origin used when no build-time override is given.
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

pub const DISTRIBUTION_CHART_FILE: &str = "distribucion_temas.png";
pub const TSNE_CHART_FILE: &str = "tsne_visualization.png";

/// Backend origin, taken from `TOPICVIEW_API_BASE` at compile time.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("TOPICVIEW_API_BASE").unwrap_or(DEFAULT_API_BASE))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE } else { trimmed }
}

pub fn topic_modeling_endpoint(base: &str) -> String {
    format!("{base}/api/topic_modeling")
}

pub fn static_asset_url(base: &str, file: &str) -> String {
    format!("{base}/static/{file}")
}

pub fn distribution_chart_url(base: &str) -> String {
    static_asset_url(base, DISTRIBUTION_CHART_FILE)
}

pub fn tsne_chart_url(base: &str) -> String {
    static_asset_url(base, TSNE_CHART_FILE)
}

/// Word-cloud image for one topic index, e.g. `nube_tema_3.png`.
pub fn word_cloud_url(base: &str, topic_index: usize) -> String {
    static_asset_url(base, &format!("nube_tema_{topic_index}.png"))
}

/// Decode a response body into the dataset.
///
/// # Errors
///
/// Returns `FetchError::Decode` if the body is not valid JSON or lacks a
/// required field.
pub fn decode_payload(body: &str) -> Result<TopicModelingData, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the combined `{ topics, documents }` dataset.
///
/// # Errors
///
/// Returns `FetchError::Network` when no response arrives,
/// `FetchError::Status` for a non-2xx response, and `FetchError::Decode`
/// when the body is not a valid dataset.
pub async fn fetch_topic_modeling() -> Result<TopicModelingData, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let url = topic_modeling_endpoint(api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
        decode_payload(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Network("not available on server".to_owned()))
    }
}
