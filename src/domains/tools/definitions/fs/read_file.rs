//! Read file tool definition.

use std::path::Path;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::filesystem::FileSystem;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

/// Parameters for the read file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ReadFileParams {
    /// Path to the file to read
    pub path: String,
}

/// Read file tool - returns the complete contents of a text file.
pub struct ReadFileTool;

impl ToolDefinition for ReadFileTool {
    const NAME: &'static str = "read_file";
    const TITLE: &'static str = "Read File";
    const DESCRIPTION: &'static str = "Read the complete contents of a file as text";
    const FAILURE_CONTEXT: &'static str = "Error reading file";

    type Params = ReadFileParams;

    #[instrument(skip_all, fields(path = %params.path))]
    async fn execute(
        params: ReadFileParams,
        fs: Arc<dyn FileSystem>,
    ) -> Result<ToolOutcome, ToolError> {
        info!("Read file tool called for path: {}", params.path);

        let content = fs.read_to_string(Path::new(&params.path)).await?;

        info!("Read {} bytes from {}", content.len(), params.path);
        Ok(ToolOutcome::text(content))
    }
}
