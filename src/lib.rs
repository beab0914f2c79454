//! Filesystem MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing three
//! filesystem tools (`list_files`, `read_file`, `write_file`) over stdio.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the filesystem driver, the MCP
//!   protocol handler and the stdio transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: Tool definitions, the registry and the dispatcher
//!
//! Every tool call produces a normal response. Failures (unknown tool,
//! invalid arguments, filesystem errors) are reported as text content.
//!
//! # Example
//!
//! ```rust,no_run
//! use fs_mcp_server::core::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     fs_mcp_server::run(config).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};

use crate::core::StdioTransport;

/// Build the server and serve it over stdin/stdout until the client disconnects.
///
/// Errors here are fatal: the tool catalogue is inconsistent or the
/// connection could not be established.
pub async fn run(config: Config) -> Result<()> {
    let server = McpServer::new(config)?;
    StdioTransport::run(server).await?;
    Ok(())
}
