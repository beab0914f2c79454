//! List files tool definition.
//!
//! A tool that lists the entries of a directory with their type flags.

use std::path::Path;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, instrument};

use crate::core::filesystem::FileSystem;
use crate::domains::tools::definitions::ToolDefinition;
use crate::domains::tools::{ToolError, ToolOutcome};

/// Directory listed when no path is given.
pub const DEFAULT_PATH: &str = ".";

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the list files tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct ListFilesParams {
    /// Path to directory to list content of it (defaults to current directory)
    #[serde(default)]
    pub path: Option<String>,
}

impl ListFilesParams {
    /// The directory to list. Absent and empty paths both mean the current directory.
    pub fn resolved_path(&self) -> &str {
        match self.path.as_deref() {
            Some(path) if !path.is_empty() => path,
            _ => DEFAULT_PATH,
        }
    }
}

// ============================================================================
// Tool Definition
// ============================================================================

/// List files tool - lists files and directories at a given path.
pub struct ListFilesTool;

impl ToolDefinition for ListFilesTool {
    const NAME: &'static str = "list_files";
    const TITLE: &'static str = "List Files";
    const DESCRIPTION: &'static str = "List files and directories at a given path";
    const FAILURE_CONTEXT: &'static str = "Error listing files";

    type Params = ListFilesParams;

    #[instrument(skip_all, fields(path = %params.resolved_path()))]
    async fn execute(
        params: ListFilesParams,
        fs: Arc<dyn FileSystem>,
    ) -> Result<ToolOutcome, ToolError> {
        let path = params.resolved_path();
        info!("List files tool called for path: {}", path);

        let mut entries = fs.read_dir(Path::new(path)).await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        info!("Listed {} entries in {}", entries.len(), path);

        Ok(ToolOutcome::text(serde_json::to_string_pretty(&entries)?))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filesystem::mock::{Call, RecordingFileSystem};
    use crate::core::filesystem::{DirEntryInfo, TokioFileSystem};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn entry(name: &str, is_directory: bool) -> DirEntryInfo {
        DirEntryInfo {
            name: name.to_string(),
            is_directory,
            is_file: !is_directory,
            is_symbolic_link: false,
        }
    }

    #[test]
    fn test_resolved_path_defaults() {
        assert_eq!(ListFilesParams { path: None }.resolved_path(), ".");
        assert_eq!(
            ListFilesParams {
                path: Some(String::new())
            }
            .resolved_path(),
            "."
        );
        assert_eq!(
            ListFilesParams {
                path: Some("src".to_string())
            }
            .resolved_path(),
            "src"
        );
    }

    #[tokio::test]
    async fn test_list_files_without_path_uses_current_dir() {
        let fs = Arc::new(
            RecordingFileSystem::new().with_dir(".", vec![entry("Cargo.toml", false)]),
        );

        let outcome = ListFilesTool::execute(ListFilesParams::default(), fs.clone())
            .await
            .unwrap();

        assert_eq!(fs.calls(), vec![Call::ReadDir(PathBuf::from("."))]);
        assert!(outcome.text_content().contains("Cargo.toml"));
    }

    #[tokio::test]
    async fn test_list_files_output_is_sorted_json() {
        let fs = Arc::new(
            RecordingFileSystem::new()
                .with_dir("dir", vec![entry("zeta", true), entry("alpha", false)]),
        );
        let params = ListFilesParams {
            path: Some("dir".to_string()),
        };

        let outcome = ListFilesTool::execute(params, fs).await.unwrap();
        let listed: serde_json::Value = serde_json::from_str(&outcome.text_content()).unwrap();

        assert_eq!(
            listed,
            serde_json::json!([
                { "name": "alpha", "isDirectory": false, "isFile": true, "isSymbolicLink": false },
                { "name": "zeta", "isDirectory": true, "isFile": false, "isSymbolicLink": false }
            ])
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_list_files_flags_are_exclusive() {
        let temp_dir = TempDir::new().unwrap();
        let temp_path = temp_dir.path();

        fs::write(temp_path.join("a.txt"), "content").unwrap();
        fs::create_dir(temp_path.join("b")).unwrap();
        std::os::unix::fs::symlink(temp_path.join("a.txt"), temp_path.join("c")).unwrap();

        let params = ListFilesParams {
            path: Some(temp_path.to_string_lossy().to_string()),
        };
        let outcome = ListFilesTool::execute(params, Arc::new(TokioFileSystem))
            .await
            .unwrap();
        let listed: Vec<serde_json::Value> = serde_json::from_str(&outcome.text_content()).unwrap();

        let flags: Vec<_> = listed
            .iter()
            .map(|e| {
                (
                    e["name"].as_str().unwrap().to_string(),
                    e["isFile"].as_bool().unwrap(),
                    e["isDirectory"].as_bool().unwrap(),
                    e["isSymbolicLink"].as_bool().unwrap(),
                )
            })
            .collect();

        assert_eq!(
            flags,
            vec![
                ("a.txt".to_string(), true, false, false),
                ("b".to_string(), false, true, false),
                ("c".to_string(), false, false, true),
            ]
        );
    }

    #[tokio::test]
    async fn test_list_files_nonexistent() {
        let params = ListFilesParams {
            path: Some("/nonexistent/path/12345".to_string()),
        };

        let result = ListFilesTool::execute(params, Arc::new(TokioFileSystem)).await;
        assert!(matches!(result, Err(ToolError::Filesystem(_))));
    }
}
