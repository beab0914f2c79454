//! Tool definitions module.
//!
//! Each tool is defined in its own file with:
//! - A parameters struct (the tool's input shape)
//! - Metadata (name, title, description, failure context)
//! - An `execute()` function holding the tool logic
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file (e.g., `my_tool.rs`)
//! 2. Implement the `ToolDefinition` trait
//! 3. Export it here
//! 4. Register it in `registry.rs`

pub mod fs;

use std::future::Future;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use super::{ToolError, ToolOutcome};
use crate::core::filesystem::FileSystem;

pub use fs::{ListFilesTool, ReadFileTool, WriteFileTool};

/// Trait for tool definitions.
pub trait ToolDefinition: 'static {
    /// The unique name of the tool.
    const NAME: &'static str;

    /// Human-readable title shown by clients.
    const TITLE: &'static str;

    /// A description of what the tool does.
    const DESCRIPTION: &'static str;

    /// Prefix used when reporting a failed execution, e.g. "Error reading file".
    const FAILURE_CONTEXT: &'static str;

    /// The input shape. Its JSON schema is what clients see.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Run the tool with validated parameters.
    fn execute(
        params: Self::Params,
        fs: Arc<dyn FileSystem>,
    ) -> impl Future<Output = Result<ToolOutcome, ToolError>> + Send;
}
