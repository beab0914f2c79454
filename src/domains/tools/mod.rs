//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that can be called by MCP clients.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Tool descriptors and the catalogue built at startup
//! - `dispatcher.rs` - Lookup, validation and the failure boundary
//! - `validate.rs` - Argument validation against a tool's input shape
//! - `handlers.rs` - Invocation and outcome types
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Implement `ToolDefinition` (params, metadata, execute())
//! 3. Export in `definitions/mod.rs`
//! 4. Register in `registry.rs`
//!
//! **No need to modify `server.rs`!** The catalogue comes from the registry.

pub mod definitions;
mod dispatcher;
mod error;
mod handlers;
mod registry;
pub mod validate;

pub use definitions::ToolDefinition;
pub use dispatcher::ToolDispatcher;
pub use error::ToolError;
pub use handlers::{Invocation, ToolOutcome};
pub use registry::{PreparedCall, ToolDescriptor, ToolRegistry};
pub use validate::ValidationError;
