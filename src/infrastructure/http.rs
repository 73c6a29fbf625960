use crate::domain::errors::{AppError, NetworkResult};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_error};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

pub mod tracker_client;

pub use tracker_client::TrackerApiClient;

/// Thin GET/JSON client over `gloo-net`.
#[derive(Debug, Clone)]
pub struct GlooHttpClient {
    base_url: String,
    default_headers: Vec<(String, String)>,
}

impl Default for GlooHttpClient {
    /// Relative URLs, resolved against the page origin.
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl GlooHttpClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    pub fn url_for(&self, endpoint: &str) -> String {
        HttpUtils::join_url(&self.base_url, endpoint)
    }

    /// GET `url` (see [`Self::url_for`]) and decode the JSON body. Non-2xx
    /// statuses are errors.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> NetworkResult<T> {
        log_debug!(LogComponent::Infrastructure("HTTP"), "GET {}", url);

        let mut request = Request::get(url);
        for (key, value) in &self.default_headers {
            request = request.header(key, value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::NetworkError(format!("Request failed: {e}")))?;

        if !response.ok() {
            let error_msg = format!("HTTP error: {} - {}", response.status(), response.status_text());
            log_error!(LogComponent::Infrastructure("HTTP"), "{} ({})", error_msg, url);
            return Err(AppError::NetworkError(error_msg));
        }

        let data = response
            .json::<T>()
            .await
            .map_err(|e| AppError::DecodeError(format!("Failed to parse JSON from {url}: {e}")))?;

        log_debug!(LogComponent::Infrastructure("HTTP"), "GET {} parsed", url);
        Ok(data)
    }
}

pub struct HttpUtils;

impl HttpUtils {
    /// `base` + `endpoint` with exactly one slash between them. An empty
    /// base leaves the endpoint relative to the page.
    pub fn join_url(base: &str, endpoint: &str) -> String {
        if base.is_empty() || endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        format!("{}/{}", base.trim_end_matches('/'), endpoint.trim_start_matches('/'))
    }

    /// Append query parameters in the given order, values percent-encoded.
    pub fn build_url_with_params(base_url: &str, params: &[(&str, &str)]) -> String {
        if params.is_empty() {
            return base_url.to_string();
        }

        let query_string = params
            .iter()
            .map(|(key, value)| format!("{}={}", Self::url_encode(key), Self::url_encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// Percent-encode everything outside the RFC 3986 unreserved set.
    pub fn url_encode(input: &str) -> String {
        let mut encoded = String::with_capacity(input.len());
        for byte in input.bytes() {
            match byte {
                b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                    encoded.push(byte as char)
                }
                _ => encoded.push_str(&format!("%{:02X}", byte)),
            }
        }
        encoded
    }
}
