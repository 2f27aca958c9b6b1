use std::time::Duration;

/// Base URL for the Context7 API.
pub const CONTEXT7_BASE_URL: &str = "https://context7.com/api";

/// Timeout for a single outbound documentation request (60 seconds).
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Server configuration, read once at startup and passed explicitly into
/// the request helper.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upstream API base URL. Defaults to [`CONTEXT7_BASE_URL`]; tests
    /// point this at a local mock.
    pub base_url: String,
    /// Optional Context7 API key, forwarded as `X-Context7-Api-Key`.
    pub api_key: Option<String>,
    /// Deadline for each outbound request.
    pub request_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: CONTEXT7_BASE_URL.to_string(),
            api_key: None,
            request_timeout: Duration::from_secs(REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment.
    ///
    /// - `CONTEXT7_API_KEY` (optional) — Context7 API key for higher rate
    ///   limits. An empty value is treated as unset.
    pub fn from_env() -> Self {
        let api_key = std::env::var("CONTEXT7_API_KEY")
            .ok()
            .filter(|key| !key.is_empty());

        Self {
            api_key,
            ..Self::default()
        }
    }
}
