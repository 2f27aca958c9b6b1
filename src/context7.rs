use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ServerConfig;

/// Header carrying the optional Context7 API key.
const API_KEY_HEADER: &str = "X-Context7-Api-Key";

/// Flat error taxonomy for Context7 calls.
///
/// Display strings are the exact messages surfaced in the result envelope;
/// callers never see these as thrown errors, only as `ApiResult::error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Context7Error {
    #[error("Rate limited. Please try again later.")]
    RateLimited,
    #[error("Unauthorized. Please check your API key.")]
    Unauthorized,
    #[error("Library not found.")]
    LibraryNotFound,
    #[error(
        "Documentation not found. This might happen because you used an invalid \
         library ID. Use 'resolve_library_id' to get a valid ID."
    )]
    NoDocumentation,
    /// Transport-level failure (DNS, connection refused, timeout) or any
    /// other non-2xx status; the message comes from the underlying error.
    #[error("{0}")]
    Transport(String),
}

/// Uniform result envelope returned by every tool call.
///
/// Exactly one of `data`/`error` is meaningful depending on `success`;
/// `data` may legitimately be absent even on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResult {
    pub fn success(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

impl From<Context7Error> for ApiResult {
    fn from(err: Context7Error) -> Self {
        Self::failure(err.to_string())
    }
}

/// HTTP client for the Context7 API.
///
/// Holds the shared connection pool, the base URL, and the API key read
/// once at startup. Cheap to clone; safe to share across concurrent tool
/// invocations.
#[derive(Debug, Clone)]
pub struct Context7Client {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Context7Client {
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Issue a GET request against `base_url + path` and normalize the
    /// outcome into an [`ApiResult`].
    ///
    /// Status handling, first match wins: 429 → rate limited, 401 →
    /// unauthorized, 404 → library not found, other non-2xx → transport
    /// failure. On 2xx the body parses as JSON when the content-type says
    /// so, otherwise the raw text becomes `data`. Transport-level errors
    /// are converted, never propagated.
    pub async fn request(&self, path: &str, query: &[(&str, String)]) -> ApiResult {
        let url = format!("{}{path}", self.base_url);
        tracing::debug!(%url, "context7 request");

        let mut req = self
            .http
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .query(query);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }

        let response = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%url, error = %e, "context7 request failed");
                return Context7Error::Transport(e.to_string()).into();
            }
        };

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Context7Error::RateLimited.into(),
            StatusCode::UNAUTHORIZED => return Context7Error::Unauthorized.into(),
            StatusCode::NOT_FOUND => return Context7Error::LibraryNotFound.into(),
            _ => {}
        }

        let response = match response.error_for_status() {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(%url, error = %e, "context7 returned error status");
                return Context7Error::Transport(e.to_string()).into();
            }
        };

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("application/json"));

        if is_json {
            match response.json::<Value>().await {
                Ok(body) => ApiResult::success(body),
                Err(e) => Context7Error::Transport(e.to_string()).into(),
            }
        } else {
            match response.text().await {
                Ok(body) => ApiResult::success(Value::String(body)),
                Err(e) => Context7Error::Transport(e.to_string()).into(),
            }
        }
    }
}
