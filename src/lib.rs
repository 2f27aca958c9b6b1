//! MCP server for Context7 library documentation lookup.
//!
//! Exposes `resolve_library_id` and `get_library_docs` tools over the MCP
//! streamable HTTP transport, compatible with any MCP-aware AI agent.
//!
//! Optional environment variables:
//! - `CONTEXT7_API_KEY` — Context7 API key (optional, for higher rate limits)
//!
//! API documentation: <https://context7.com>

pub mod config;
pub mod context7;
pub mod handlers;
pub mod server;

pub mod schema;
