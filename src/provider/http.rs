//! HTTP client construction and response error mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::error::AgentError;

/// Build the reqwest client used by a provider.
pub fn build_client() -> Result<reqwest::Client, AgentError> {
    Ok(reqwest::Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_max_idle_per_host(10)
        .build()?)
}

/// Build default headers for a Bearer-token API.
pub fn bearer_headers(api_key: &str) -> Result<HeaderMap, AgentError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    let mut auth = HeaderValue::from_str(&format!("Bearer {api_key}"))
        .map_err(|_| AgentError::Configuration("API key contains invalid header characters".into()))?;
    auth.set_sensitive(true);
    headers.insert(AUTHORIZATION, auth);
    Ok(headers)
}

/// Turn a non-success HTTP response into a `Service` error.
///
/// Prefers the `error.message` field of an OpenAI-style JSON body and falls
/// back to the raw body text.
pub fn status_to_error(status: u16, body: &str) -> AgentError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.trim().to_string());
    AgentError::service(status, message)
}
