use serde::{Deserialize, Serialize};

use crate::context7::{ApiResult, Context7Client};

use super::ResolveLibraryIdParams;

/// At most this many search hits are surfaced to the caller.
const MAX_RESULTS: usize = 10;

/// One hit in the upstream search response.
///
/// Missing upstream fields default explicitly: strings to `""`, counts and
/// scores to `0`, versions to `[]`.
#[derive(Debug, Clone, Deserialize)]
struct SearchHit {
    #[serde(default)]
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default, rename = "codeSnippets")]
    code_snippets: i64,
    #[serde(default, rename = "trustScore")]
    trust_score: f64,
    #[serde(default)]
    versions: Vec<String>,
}

/// Upstream search response body.
#[derive(Debug, Clone, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchHit>,
}

/// Library descriptor returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct LibraryDescriptor {
    pub library_id: String,
    pub name: String,
    pub description: String,
    pub code_snippets: i64,
    pub trust_score: f64,
    pub versions: Vec<String>,
}

impl From<SearchHit> for LibraryDescriptor {
    fn from(hit: SearchHit) -> Self {
        Self {
            library_id: hit.id,
            name: hit.name,
            description: hit.description,
            code_snippets: hit.code_snippets,
            trust_score: hit.trust_score,
            versions: hit.versions,
        }
    }
}

/// Payload for a resolve call that reached the upstream search endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvePayload {
    pub message: String,
    pub results: Vec<LibraryDescriptor>,
}

/// Handle a `resolve_library_id` tool call.
///
/// Failures pass through unchanged. Zero search results is a success with
/// an explicit message, not an error. Otherwise the first [`MAX_RESULTS`]
/// hits are reshaped into [`LibraryDescriptor`]s, preserving source order.
pub async fn handle(params: ResolveLibraryIdParams, client: &Context7Client) -> ApiResult {
    let result = client
        .request("/v1/search", &[("query", params.library_name)])
        .await;

    if !result.success {
        return result;
    }
    let data = match &result.data {
        Some(v) if !v.is_null() => v.clone(),
        _ => return result,
    };

    let parsed: SearchResponse = match serde_json::from_value(data) {
        Ok(p) => p,
        Err(e) => return ApiResult::failure(e.to_string()),
    };

    let payload = if parsed.results.is_empty() {
        ResolvePayload {
            message: "No libraries found matching your query.".to_string(),
            results: Vec::new(),
        }
    } else {
        let results: Vec<LibraryDescriptor> = parsed
            .results
            .into_iter()
            .take(MAX_RESULTS)
            .map(LibraryDescriptor::from)
            .collect();
        ResolvePayload {
            message: format!("Found {} matching libraries.", results.len()),
            results,
        }
    };

    ApiResult::success(
        serde_json::to_value(payload).expect("ResolvePayload must serialize to JSON Value"),
    )
}
