//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and reading
//! error responses.

use super::backend_error::BackendError;
use super::config::ApiConfig;
use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using the configured port for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base(port: u16) -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, port)
}

/// Build a full API URL below the configured prefix
///
/// Path segments are percent-encoded.
///
/// # Example
/// ```rust,ignore
/// let url = api_url(&config.api, &base, &["006AbC", "line-items"]);
/// ```
pub fn api_url(api: &ApiConfig, base: &str, segments: &[&str]) -> String {
    let mut url = format!("{}{}", base, api.prefix.trim_end_matches('/'));
    for segment in segments {
        url.push('/');
        url.push_str(&urlencoding::encode(segment));
    }
    url
}

/// Turn a non-2xx response into a `BackendError`, keeping the structured
/// message when the body has one
pub async fn rejection(response: Response) -> BackendError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    BackendError::Rejected {
        status,
        message: parse_error_message(&body),
        body,
    }
}

/// Extract the message from an `ApiErrorBody` JSON document
pub fn parse_error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.best_message())
}
