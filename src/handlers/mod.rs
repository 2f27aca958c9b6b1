pub mod library_docs;
pub mod resolve_library;

use rmcp::schemars;
use serde::Deserialize;

/// Arguments for the `resolve_library_id` tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct ResolveLibraryIdParams {
    /// Library name to search for (e.g. 'react', 'nextjs', 'langchain').
    pub library_name: String,
}

/// Arguments for the `get_library_docs` tool.
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
#[schemars(crate = "rmcp::schemars")]
pub struct GetLibraryDocsParams {
    /// Context7-compatible library ID (e.g. '/mongodb/docs', '/vercel/next.js').
    pub library_id: String,
    /// Optional topic to focus documentation on (e.g. 'hooks', 'routing').
    pub topic: Option<String>,
    /// Maximum tokens of documentation to retrieve (default 10000).
    pub tokens: Option<u32>,
}
