use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::streamable_http_server::StreamableHttpService;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};

use crate::config::ServerConfig;
use crate::context7::{ApiResult, Context7Client};
use crate::handlers::{self, GetLibraryDocsParams, ResolveLibraryIdParams};

/// TCP address the MCP listener binds.
pub const BIND_ADDR: &str = "0.0.0.0:3012";

/// Path the streamable HTTP transport is served under.
pub const MCP_PATH: &str = "/mcp";

/// Errors that abort server startup. Everything else is recovered into
/// result envelopes inside the tool handlers.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to construct HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// MCP server exposing the two Context7 tools.
///
/// The MCP protocol layer (framing, dispatch, sessions) is owned by rmcp;
/// this type only registers the tool functions and carries the shared
/// upstream client.
#[derive(Clone)]
pub struct Context7Server {
    client: Context7Client,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl Context7Server {
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Context7Client::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    /// Advertised tools with their generated argument schemas.
    pub fn tools(&self) -> Vec<rmcp::model::Tool> {
        self.tool_router.list_all()
    }

    #[tool(
        description = "Resolves a package/product name to a Context7-compatible library ID. \
        You MUST call this before 'get_library_docs' to obtain a valid library ID UNLESS \
        the user explicitly provides a library ID in the format '/org/project'. Returns \
        matching libraries with name, description, code snippet counts, and trust scores."
    )]
    async fn resolve_library_id(
        &self,
        Parameters(params): Parameters<ResolveLibraryIdParams>,
    ) -> Result<CallToolResult, McpError> {
        envelope_content(handlers::resolve_library::handle(params, &self.client).await)
    }

    #[tool(
        description = "Fetches up-to-date documentation for a library using its \
        Context7-compatible library ID. You must call 'resolve_library_id' first to obtain \
        the ID, UNLESS the user explicitly provides a library ID in the format \
        '/org/project' or '/org/project/version'."
    )]
    async fn get_library_docs(
        &self,
        Parameters(params): Parameters<GetLibraryDocsParams>,
    ) -> Result<CallToolResult, McpError> {
        envelope_content(handlers::library_docs::handle(params, &self.client).await)
    }
}

/// Wrap a result envelope as MCP text content.
///
/// A `success: false` envelope is still a normal tool return; errors are
/// values in this system, never MCP protocol faults.
fn envelope_content(result: ApiResult) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string(&result)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for Context7Server {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Use 'resolve_library_id' to find a Context7-compatible library ID, \
                 then 'get_library_docs' to fetch its documentation."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}

/// Run the MCP server on [`BIND_ADDR`] until the process is terminated.
///
/// The streamable HTTP transport performs no Host/Origin validation
/// (DNS-rebinding protection stays disabled, matching the upstream
/// deployment), so the service is reachable on every interface.
pub async fn serve(config: &ServerConfig) -> Result<(), ServeError> {
    let server = Context7Server::new(config)?;

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );

    let router = axum::Router::new().nest_service(MCP_PATH, service);
    let listener = tokio::net::TcpListener::bind(BIND_ADDR).await?;
    tracing::info!(addr = BIND_ADDR, path = MCP_PATH, "context7-mcp listening");
    axum::serve(listener, router).await?;

    Ok(())
}
