//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use crate::error::{error_result, into_tool_result};
use crate::tools::{ToolContext, WebSearchParams, clear_impl, search_impl, stats_impl};

use esearch_core::Error;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for efficient-search.
#[derive(Clone)]
pub struct EfficientSearchServer {
    tool_router: ToolRouter<Self>,
    ctx: ToolContext,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl EfficientSearchServer {
    /// Create a new server handler around an already-built tool context.
    pub fn new(ctx: ToolContext) -> Self {
        Self { tool_router: Self::tool_router(), ctx }
    }

    #[tool(
        description = "Search the web using Google. Returns LLM-optimized results with titles, URLs, snippets, and metadata. Results are cached for efficiency."
    )]
    async fn web_search(&self, params: Parameters<WebSearchParams>) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(search_impl(&self.ctx, params.0).await))
    }

    #[tool(description = "Clear the search results cache")]
    async fn clear_cache(&self) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(clear_impl(&self.ctx.cache).await))
    }

    #[tool(description = "Get cache statistics (size, TTL, max size)")]
    async fn get_cache_stats(&self) -> Result<CallToolResult, McpError> {
        Ok(into_tool_result(stats_impl(&self.ctx.cache).await))
    }

    /// Whether `name` is one of the registered tools.
    fn knows_tool(&self, name: &str) -> bool {
        self.tool_router.list_all().iter().any(|t| t.name == name)
    }

    /// Error result for a call to an unregistered tool, or `None` if `name` is known.
    fn reject_unknown(&self, name: &str) -> Option<CallToolResult> {
        (!self.knows_tool(name)).then(|| error_result(&Error::UnknownOperation(name.to_string())))
    }
}

impl ServerHandler for EfficientSearchServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "efficient-search".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        if let Some(rejected) = self.reject_unknown(&request.name) {
            return Ok(rejected);
        }

        tracing::debug!(tool = %request.name, "dispatching tool call");
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
