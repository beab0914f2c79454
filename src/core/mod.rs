//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, the filesystem driver, the
//! protocol handler and the stdio transport.

pub mod config;
pub mod error;
pub mod filesystem;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use filesystem::{FileSystem, FsError, TokioFileSystem};
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError};
