//! MCP Server implementation.
//!
//! This module contains the protocol handler. It advertises the tool
//! catalogue held by the registry and hands every tool call to the
//! dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool
//! and registered in `domains/tools/registry.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Result;
use super::filesystem::{FileSystem, TokioFileSystem};
use crate::domains::tools::{Invocation, ToolDispatcher, ToolOutcome, ToolRegistry};

/// The main MCP server handler.
///
/// Implements `ServerHandler` from rmcp. The registry behind the dispatcher
/// is built once in `new()` and never changes afterwards.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher for tool calls.
    dispatcher: ToolDispatcher,
}

impl McpServer {
    /// Create a new MCP server backed by the real filesystem.
    ///
    /// Fails if two tools share a name.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_filesystem(config, Arc::new(TokioFileSystem))
    }

    /// Create a new MCP server backed by the given filesystem driver.
    pub fn with_filesystem(config: Config, fs: Arc<dyn FileSystem>) -> Result<Self> {
        let registry = ToolRegistry::with_filesystem_tools(fs)?;
        info!("Registered tools: {}", registry.tool_names().join(", "));

        Ok(Self {
            config: Arc::new(config),
            dispatcher: ToolDispatcher::new(Arc::new(registry)),
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// The tool catalogue, in registration order.
    pub fn tools(&self) -> Vec<Tool> {
        self.dispatcher.registry().tools()
    }

    /// Run a tool by name.
    pub async fn invoke(&self, name: &str, arguments: Option<JsonObject>) -> ToolOutcome {
        let invocation = Invocation::new(name, arguments.map(serde_json::Value::Object));
        self.dispatcher.handle(invocation).await
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Filesystem server. Use list_files, read_file and write_file to work with files."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListToolsResult, McpError> {
        info!("Listing tools");
        Ok(ListToolsResult {
            tools: self.tools(),
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context), fields(tool = %request.name))]
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<CallToolResult, McpError> {
        info!("Calling tool: {}", request.name);
        Ok(self
            .invoke(&request.name, request.arguments)
            .await
            .into_call_result())
    }
}
