use serde::Serialize;
use serde_json::Value;

use crate::context7::{ApiResult, Context7Client, Context7Error};

use super::GetLibraryDocsParams;

/// Default and minimum token budget for a documentation request.
///
/// Caller values below the floor are raised to it without diagnostic; the
/// upstream API rejects smaller budgets.
pub const MIN_TOKENS: u32 = 10_000;

/// Upstream bodies that mean "no documentation" despite the 2xx status.
const NO_CONTENT_SENTINELS: [&str; 2] = ["No content available", "No context data available"];

/// Documentation payload returned to the caller. `topic` serializes as
/// `null` when absent.
#[derive(Debug, Clone, Serialize)]
pub struct DocsPayload {
    pub library_id: String,
    pub topic: Option<String>,
    pub documentation: Value,
}

/// Handle a `get_library_docs` tool call.
///
/// One leading `/` is stripped from the library ID before building the
/// request path and restored on the returned payload. The query always
/// carries `tokens` and `type=txt`; `topic` only when provided.
pub async fn handle(params: GetLibraryDocsParams, client: &Context7Client) -> ApiResult {
    let library_path = params
        .library_id
        .strip_prefix('/')
        .unwrap_or(&params.library_id)
        .to_string();

    let tokens = params.tokens.unwrap_or(MIN_TOKENS).max(MIN_TOKENS);
    let mut query = vec![("tokens", tokens.to_string()), ("type", "txt".to_string())];
    if let Some(topic) = &params.topic {
        query.push(("topic", topic.clone()));
    }

    let result = client.request(&format!("/v1/{library_path}"), &query).await;
    if !result.success {
        return result;
    }

    let documentation = match result.data {
        None | Some(Value::Null) => return Context7Error::NoDocumentation.into(),
        Some(Value::String(body))
            if body.is_empty() || NO_CONTENT_SENTINELS.contains(&body.as_str()) =>
        {
            return Context7Error::NoDocumentation.into();
        }
        Some(data) => data,
    };

    let payload = DocsPayload {
        library_id: format!("/{library_path}"),
        topic: params.topic,
        documentation,
    };
    ApiResult::success(
        serde_json::to_value(payload).expect("DocsPayload must serialize to JSON Value"),
    )
}
