//! Write file tool definition.

use std::path::Path;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::filesystem::FileSystem;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

/// Parameters for the write file tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WriteFileParams {
    /// Path to the file to write
    pub path: String,

    /// Text content to write to the file
    pub content: String,
}

/// Write file tool - creates a file or fully overwrites an existing one.
pub struct WriteFileTool;

impl ToolDefinition for WriteFileTool {
    const NAME: &'static str = "write_file";
    const TITLE: &'static str = "Write File";
    const DESCRIPTION: &'static str =
        "Create a new file or overwrite an existing file with the given text content";
    const FAILURE_CONTEXT: &'static str = "Error writing file";

    type Params = WriteFileParams;

    #[instrument(skip_all, fields(path = %params.path, bytes = params.content.len()))]
    async fn execute(
        params: WriteFileParams,
        fs: Arc<dyn FileSystem>,
    ) -> Result<ToolOutcome, ToolError> {
        info!("Write file tool called for path: {}", params.path);

        fs.write(Path::new(&params.path), &params.content).await?;

        Ok(ToolOutcome::text(format!(
            "Successfully wrote to {}",
            params.path
        )))
    }
}
